pub mod root;
pub mod scan;
pub mod solve;

pub use root::{handle_root, RootResponse, LIVENESS_MESSAGE, __path_handle_root};
pub use scan::{handle_scan_face, ScanFaceRequest, ScanFaceResponse, __path_handle_scan_face};
pub use solve::{handle_solve, SolveRequest, SolveResponse, __path_handle_solve};
