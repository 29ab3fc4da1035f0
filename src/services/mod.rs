pub mod face_scanner;
pub mod solver;

pub use face_scanner::{FaceScanner, ScanError};
pub use solver::{CubeSolver, ProcessSolver, SolveError};
