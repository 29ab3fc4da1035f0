pub mod config;
pub mod cube;

pub use config::{
    AppConfig, ConfigError, CorsConfig, DetectorSettings, ScannerConfig, SolverConfig,
    StrategySetting,
};
pub use cube::{AssembleError, CubeDefinition, CubeDefinitionBuilder, Solution, FACELET_COUNT};
