//! Configuration management for wordhunt
//!
//! Settings come from, lowest priority first:
//! 1. the embedded `default-config.toml`
//! 2. `wordhunt.toml` in the working directory, or the file passed with `--config`
//! 3. `WORDHUNT_*` environment variables (`WORDHUNT_WORKERS=8`)
//! 4. command-line flags, applied by the CLI on top of the loaded value

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use crate::count::ReportFormat;
use crate::error::HuntError;
use crate::parallel::{ExecutionStrategy, PartitionStrategy};

mod core;

pub use self::core::DEFAULT_CONFIG;

/// Main configuration structure for wordhunt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuntConfig {
    /// Worker threads for the parallel run (unset = derive from CPU cores)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,

    /// Percentage of CPU cores to use when `workers` is unset
    pub thread_percentage: u8,

    /// How files are split between workers
    pub partition: PartitionStrategy,

    /// Longest token compared as a whole (0 = unlimited)
    pub max_token_bytes: usize,

    /// Report format
    pub format: ReportFormat,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            workers: None,
            thread_percentage: 100,
            partition: PartitionStrategy::Contiguous,
            max_token_bytes: crate::count::DEFAULT_MAX_TOKEN_BYTES,
            format: ReportFormat::Text,
        }
    }
}

impl HuntConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), HuntError> {
        if self.workers == Some(0) {
            return Err(HuntError::invalid_config("workers must be at least 1"));
        }

        if !(1..=100).contains(&self.thread_percentage) {
            return Err(HuntError::invalid_config(format!(
                "thread_percentage must be between 1 and 100, got {}",
                self.thread_percentage
            )));
        }

        Ok(())
    }

    /// Worker count for the parallel run
    ///
    /// An explicit `workers` value wins; otherwise the count is derived from
    /// the machine's cores and `thread_percentage`.
    pub fn worker_count(&self) -> Result<NonZeroUsize, HuntError> {
        match self.workers {
            Some(n) => NonZeroUsize::new(n)
                .ok_or_else(|| HuntError::invalid_config("workers must be at least 1")),
            None => Ok(ExecutionStrategy::calculate_optimal_workers(
                self.thread_percentage,
            )),
        }
    }
}
