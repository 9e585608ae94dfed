use anyhow::Result;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use super::directory::list_files;
use super::report::Comparison;
use super::tokenizer::WordCounter;
use crate::config::HuntConfig;
use crate::error::HuntError;
use crate::parallel::{ExecutionStrategy, PartitionStrategy, RunOutcome};

/// Counts one word over one file set, sequentially and in parallel
///
/// Each call to [`Hunt::run`] gets its own run context, so the two totals
/// are independent and can be compared directly.
#[derive(Debug, Clone)]
pub struct Hunt {
    counter: WordCounter,
    workers: NonZeroUsize,
    partition: PartitionStrategy,
}

impl Hunt {
    /// Validate `config` and prepare a hunt for `word`
    pub fn new(word: &str, config: &HuntConfig) -> Result<Self, HuntError> {
        config.validate()?;

        Ok(Self {
            counter: WordCounter::new(word, config.max_token_bytes)?,
            workers: config.worker_count()?,
            partition: config.partition,
        })
    }

    pub fn word(&self) -> &str {
        self.counter.target()
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    pub fn parallel_strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel {
            workers: self.workers,
            partition: self.partition,
        }
    }

    /// List `dir`, then count it sequentially followed by in parallel
    pub fn compare(&self, dir: &Path) -> Result<Comparison> {
        let files = list_files(dir)?;
        tracing::info!(
            "Counting '{}' in {} files with {} workers",
            self.word(),
            files.len(),
            self.workers
        );

        let sequential = self.run(ExecutionStrategy::Sequential, &files)?;
        tracing::debug!("Sequential run: {:?}", sequential);

        let parallel = self.run(self.parallel_strategy(), &files)?;
        tracing::debug!("Parallel run: {:?}", parallel);

        Ok(Comparison {
            word: self.word().to_string(),
            directory: dir.to_path_buf(),
            workers: self.workers(),
            partition: self.partition,
            sequential,
            parallel,
        })
    }

    /// Count the word across `files` with the given strategy
    pub fn run(&self, strategy: ExecutionStrategy, files: &[PathBuf]) -> Result<RunOutcome> {
        strategy.execute(files, |path| self.counter.count_file(path))
    }
}
