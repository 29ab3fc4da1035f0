use facelet_vision::{scan_base64, scan_bytes, DecodeError, GridSampler, SampleOutcome};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::models::ScannerConfig;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("scan task failed: {0}")]
    Task(String),
}

/// Service for turning face photos into sticker labels
pub struct FaceScanner {
    sampler: Arc<GridSampler>,
}

impl FaceScanner {
    pub fn new(sampler: GridSampler) -> Self {
        Self {
            sampler: Arc::new(sampler),
        }
    }

    pub fn from_config(config: &ScannerConfig) -> Self {
        Self::new(GridSampler::new(config.sampler_config()))
    }

    pub fn sampler(&self) -> &GridSampler {
        &self.sampler
    }

    /// Scan a base64 payload off the async runtime.
    ///
    /// Decoding and sampling are CPU-bound, so they run on the blocking pool.
    pub async fn scan_base64(&self, payload: String) -> Result<SampleOutcome, ScanError> {
        let sampler = self.sampler.clone();
        let payload_len = payload.len();

        let outcome = tokio::task::spawn_blocking(move || scan_base64(&sampler, &payload))
            .await
            .map_err(|e| ScanError::Task(e.to_string()))??;

        tracing::debug!(
            payload_len,
            source = ?outcome.source,
            colors = %outcome.scan,
            fallback_stickers = outcome.fallback_count(),
            "Scanned face"
        );

        Ok(outcome)
    }

    /// Scan an image file on the current thread
    pub fn scan_file(&self, path: &Path) -> Result<SampleOutcome, ScanError> {
        let bytes = std::fs::read(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let outcome = scan_bytes(&self.sampler, &bytes)?;

        tracing::debug!(
            path = %path.display(),
            source = ?outcome.source,
            colors = %outcome.scan,
            fallback_stickers = outcome.fallback_count(),
            "Scanned face"
        );

        Ok(outcome)
    }
}

impl Default for FaceScanner {
    fn default() -> Self {
        Self::from_config(&ScannerConfig::default())
    }
}
