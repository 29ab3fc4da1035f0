//! cubescan - Rubik's Cube face scanning service
//!
//! Scans photographed cube faces into facelet codes, assembles the six faces
//! into a cube definition and hands it to an external solver.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
