use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

use crate::models::{Solution, SolverConfig};

#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver ran and refused the definition.
    #[error("{0}")]
    Rejected(String),

    #[error("solver unavailable: {0}")]
    Unavailable(String),

    #[error("solver timed out after {0}s")]
    TimedOut(u64),
}

/// Turns a 54-character facelet string into a move sequence
#[async_trait]
pub trait CubeSolver: Send + Sync {
    async fn solve(&self, definition: &str) -> Result<Solution, SolveError>;
}

/// Runs an external solver executable once per request.
///
/// The definition is passed as the last argument; moves are read from
/// stdout.
pub struct ProcessSolver {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ProcessSolver {
    pub fn new(command: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            args,
            timeout,
        }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(
            config.command.clone(),
            config.args.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

#[async_trait]
impl CubeSolver for ProcessSolver {
    async fn solve(&self, definition: &str) -> Result<Solution, SolveError> {
        let mut command = Command::new(&self.command);
        command
            .args(&self.args)
            .arg(definition)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        tracing::debug!(command = %self.command, args = ?self.args, "Running solver");

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| SolveError::TimedOut(self.timeout.as_secs()))?
            .map_err(|e| SolveError::Unavailable(format!("{}: {e}", self.command)))?;

        interpret_output(output.status.success(), &output.stdout, &output.stderr)
    }
}

/// Map a finished solver run to a solution or a rejection message
fn interpret_output(
    success: bool,
    stdout: &[u8],
    stderr: &[u8],
) -> Result<Solution, SolveError> {
    let stdout = String::from_utf8_lossy(stdout);
    let text = stdout.trim();

    if success && !text.starts_with("Error") {
        return Ok(Solution::from_moves(text));
    }

    let stderr = String::from_utf8_lossy(stderr);
    let message = last_line(&stderr)
        .or_else(|| last_line(text))
        .unwrap_or("solver failed without a message");
    Err(SolveError::Rejected(message.to_string()))
}

fn last_line(text: &str) -> Option<&str> {
    text.lines().rev().map(str::trim).find(|l| !l.is_empty())
}
