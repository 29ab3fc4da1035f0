//! In-process stand-in for the external solver.

use async_trait::async_trait;
use std::sync::Mutex;

use cubescan::models::{Solution, FACELET_COUNT};
use cubescan::services::{CubeSolver, SolveError};

/// Message the reference solver prints for a bad definition.
pub const INVALID_MESSAGE: &str = "Error. Probably cubestring is invalid";

const CENTERS: [(usize, char); 6] = [
    (4, 'U'),
    (13, 'R'),
    (22, 'F'),
    (31, 'D'),
    (40, 'L'),
    (49, 'B'),
];

/// Accepts well-formed definitions and answers with a fixed move sequence.
///
/// Well-formed means 54 codes, nine of each, with the six centers in place.
/// Definitions registered as unsolvable are rejected even when well-formed.
pub struct StubSolver {
    moves: String,
    unsolvable: Vec<String>,
    received: Mutex<Vec<String>>,
}

impl StubSolver {
    pub fn new(moves: &str) -> Self {
        Self {
            moves: moves.to_string(),
            unsolvable: Vec::new(),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn with_unsolvable(mut self, definition: &str) -> Self {
        self.unsolvable.push(definition.to_string());
        self
    }

    /// Definitions passed to `solve`, in call order
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }

    fn is_well_formed(definition: &str) -> bool {
        let chars: Vec<char> = definition.chars().collect();
        if chars.len() != FACELET_COUNT {
            return false;
        }
        let counts_ok = "URFDLB"
            .chars()
            .all(|code| chars.iter().filter(|c| **c == code).count() == 9);
        let centers_ok = CENTERS.iter().all(|(i, code)| chars[*i] == *code);
        counts_ok && centers_ok
    }
}

impl Default for StubSolver {
    fn default() -> Self {
        Self::new("R U R' U'")
    }
}

#[async_trait]
impl CubeSolver for StubSolver {
    async fn solve(&self, definition: &str) -> Result<Solution, SolveError> {
        self.received.lock().unwrap().push(definition.to_string());

        if !Self::is_well_formed(definition) || self.unsolvable.iter().any(|d| d == definition) {
            return Err(SolveError::Rejected(INVALID_MESSAGE.to_string()));
        }
        Ok(Solution::from_moves(&self.moves))
    }
}
