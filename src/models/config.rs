use axum::http::{HeaderName, HeaderValue, Method};
use facelet_vision::{DetectorConfig, SamplerConfig, SamplingStrategy};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Wildcard entry in the CORS lists.
const ANY: &str = "*";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Cross-origin policy applied to every route
    pub cors: CorsConfig,

    /// Face scanning settings
    pub scanner: ScannerConfig,

    /// External solver settings
    pub solver: SolverConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),

    #[error("Invalid CORS method: {0}")]
    InvalidMethod(String),

    #[error("Invalid CORS header: {0}")]
    InvalidHeader(String),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Cross-origin resource sharing policy.
///
/// A `"*"` entry in any list allows everything for that list. Credentials
/// are never allowed.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![ANY.to_string()],
            allowed_methods: vec![ANY.to_string()],
            allowed_headers: vec![ANY.to_string()],
        }
    }
}

fn is_wildcard(list: &[String]) -> bool {
    list.iter().any(|entry| entry.trim() == ANY)
}

impl CorsConfig {
    /// Build the tower-http layer for this policy
    pub fn layer(&self) -> Result<CorsLayer, ConfigError> {
        let origins = if is_wildcard(&self.allowed_origins) {
            AllowOrigin::any()
        } else {
            let values = self
                .allowed_origins
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin.trim())
                        .map_err(|_| ConfigError::InvalidOrigin(origin.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            AllowOrigin::list(values)
        };

        let methods = if is_wildcard(&self.allowed_methods) {
            AllowMethods::any()
        } else {
            let values = self
                .allowed_methods
                .iter()
                .map(|method| {
                    Method::from_bytes(method.trim().to_ascii_uppercase().as_bytes())
                        .map_err(|_| ConfigError::InvalidMethod(method.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            AllowMethods::list(values)
        };

        let headers = if is_wildcard(&self.allowed_headers) {
            AllowHeaders::any()
        } else {
            let values = self
                .allowed_headers
                .iter()
                .map(|header| {
                    HeaderName::from_bytes(header.trim().as_bytes())
                        .map_err(|_| ConfigError::InvalidHeader(header.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            AllowHeaders::list(values)
        };

        Ok(CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers))
    }
}

/// Sampling policy as written in the config file
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StrategySetting {
    #[default]
    GeometricWithFallback,
    FixedGridOnly,
}

impl From<StrategySetting> for SamplingStrategy {
    fn from(setting: StrategySetting) -> Self {
        match setting {
            StrategySetting::GeometricWithFallback => SamplingStrategy::GeometricWithFallback,
            StrategySetting::FixedGridOnly => SamplingStrategy::FixedGridOnly,
        }
    }
}

/// Face scanning settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScannerConfig {
    /// How sticker sample windows are placed
    pub strategy: StrategySetting,

    /// Side length of the square sample window in pixels
    pub roi_size: u32,

    /// Square detector thresholds
    pub detector: DetectorSettings,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            strategy: StrategySetting::default(),
            roi_size: SamplerConfig::default().roi_size,
            detector: DetectorSettings::default(),
        }
    }
}

impl ScannerConfig {
    pub fn sampler_config(&self) -> SamplerConfig {
        SamplerConfig {
            strategy: self.strategy.into(),
            roi_size: self.roi_size,
            detector: DetectorConfig::from(&self.detector),
        }
    }
}

/// Square detector thresholds; any omitted field keeps its default
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DetectorSettings {
    pub canny_low: f32,
    pub canny_high: f32,
    pub epsilon_ratio: f64,
    pub min_area: u32,
    pub max_area: u32,
    pub min_aspect: f64,
    pub max_aspect: f64,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        let d = DetectorConfig::default();
        Self {
            canny_low: d.canny_low,
            canny_high: d.canny_high,
            epsilon_ratio: d.epsilon_ratio,
            min_area: d.min_area,
            max_area: d.max_area,
            min_aspect: d.min_aspect,
            max_aspect: d.max_aspect,
        }
    }
}

impl From<&DetectorSettings> for DetectorConfig {
    fn from(s: &DetectorSettings) -> Self {
        DetectorConfig {
            canny_low: s.canny_low,
            canny_high: s.canny_high,
            epsilon_ratio: s.epsilon_ratio,
            min_area: s.min_area,
            max_area: s.max_area,
            min_aspect: s.min_aspect,
            max_aspect: s.max_aspect,
        }
    }
}

/// External solver settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    /// Executable to run
    pub command: String,

    /// Arguments placed before the cube definition
    pub args: Vec<String>,

    /// Seconds to wait for the solver before giving up
    pub timeout_secs: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            command: "kociemba".to_string(),
            args: Vec::new(),
            timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty mapping
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load the config file if one is given, falling back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::info!("No config file set, using defaults");
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    strategy = ?config.scanner.strategy,
                    solver = %config.solver.command,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Check settings that deserialize fine but cannot work
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scanner = &self.scanner;
        let detector = &scanner.detector;

        if scanner.roi_size == 0 {
            return Err(ConfigError::Invalid("scanner.roi_size must be positive".into()));
        }
        if detector.canny_low > detector.canny_high {
            return Err(ConfigError::Invalid(
                "scanner.detector.canny_low exceeds canny_high".into(),
            ));
        }
        if detector.min_area > detector.max_area {
            return Err(ConfigError::Invalid(
                "scanner.detector.min_area exceeds max_area".into(),
            ));
        }
        if detector.min_aspect > detector.max_aspect {
            return Err(ConfigError::Invalid(
                "scanner.detector.min_aspect exceeds max_aspect".into(),
            ));
        }
        if detector.epsilon_ratio <= 0.0 {
            return Err(ConfigError::Invalid(
                "scanner.detector.epsilon_ratio must be positive".into(),
            ));
        }
        if self.solver.command.trim().is_empty() {
            return Err(ConfigError::Invalid("solver.command is empty".into()));
        }
        if self.solver.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "solver.timeout_secs must be positive".into(),
            ));
        }

        self.cors.layer().map(|_| ())
    }
}
