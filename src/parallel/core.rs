use anyhow::{Context, Result};
use serde::Serialize;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use super::partition::{PartitionStrategy, partition};
use crate::error::HuntError;

/// What one pass over the work list produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    /// Sum of all per-item counts
    pub total: u64,
    /// Items handed to the run
    pub files: usize,
    /// Items whose processor failed and contributed nothing
    pub skipped: usize,
    /// Wall-clock time of this pass only
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: serde::Serializer>(elapsed: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(elapsed.as_secs_f64())
}

/// State shared by the workers of a single run
///
/// Created fresh per run, so two runs never see each other's totals.
/// The mutex guards the merge of a worker's subtotal and nothing else.
#[derive(Debug, Default)]
pub struct RunContext {
    total: Mutex<u64>,
    skipped: AtomicUsize,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished worker's subtotal to the run total
    pub fn merge(&self, subtotal: u64) {
        let mut total = self.total.lock().unwrap_or_else(PoisonError::into_inner);
        *total += subtotal;
    }

    pub fn record_skip(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    fn finish(self, files: usize, elapsed: Duration) -> RunOutcome {
        RunOutcome {
            total: self.total.into_inner().unwrap_or_else(PoisonError::into_inner),
            files,
            skipped: self.skipped.into_inner(),
            elapsed,
        }
    }
}

/// Count one item, treating per-item failures as a zero contribution
fn tally<T, F>(item: &T, processor: &F, context: &RunContext, worker_id: usize) -> u64
where
    F: Fn(&T) -> Result<u64, HuntError>,
{
    match processor(item) {
        Ok(count) => count,
        Err(e) if e.is_recoverable() => {
            context.record_skip();
            tracing::warn!(worker = worker_id, "Skipping: {e}");
            0
        }
        Err(e) => {
            context.record_skip();
            tracing::error!(worker = worker_id, "Skipping after unexpected error: {e}");
            0
        }
    }
}

/// Processes every item in order on the calling thread
pub struct SequentialExecutor;

impl SequentialExecutor {
    pub fn execute<T, F>(items: &[T], processor: F) -> RunOutcome
    where
        F: Fn(&T) -> Result<u64, HuntError>,
    {
        let context = RunContext::new();
        let start = Instant::now();

        let total: u64 = items
            .iter()
            .map(|item| tally(item, &processor, &context, 0))
            .sum();
        context.merge(total);

        context.finish(items.len(), start.elapsed())
    }
}

/// Fixed set of worker threads, one per statically assigned chunk
///
/// Each worker walks its chunk alone, keeps a local subtotal and merges it
/// into the run total once, after its last item. Workers are scoped threads
/// spawned per call and joined before `execute` returns.
pub struct ParallelExecutor {
    workers: NonZeroUsize,
    strategy: PartitionStrategy,
    stack_size: Option<usize>,
}

impl ParallelExecutor {
    pub fn new(workers: NonZeroUsize, strategy: PartitionStrategy) -> Self {
        Self {
            workers,
            strategy,
            stack_size: None,
        }
    }

    /// Stack size of each worker thread, in bytes (platform default when unset)
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    pub fn execute<T, F>(&self, items: &[T], processor: F) -> Result<RunOutcome>
    where
        T: Sync,
        F: Fn(&T) -> Result<u64, HuntError> + Sync,
    {
        tracing::debug!(
            workers = self.workers(),
            items = items.len(),
            partition = %self.strategy,
            "Starting parallel run"
        );
        let chunks = partition(items, self.workers, self.strategy);
        let context = RunContext::new();
        let start = Instant::now();

        let joined = crossbeam::thread::scope(|s| -> Result<Vec<_>> {
            let mut handles = Vec::with_capacity(chunks.len());
            for (worker_id, chunk) in chunks.into_iter().enumerate() {
                let processor = &processor;
                let context = &context;
                let mut builder = s.builder().name(format!("wordhunt-worker-{worker_id}"));
                if let Some(bytes) = self.stack_size {
                    builder = builder.stack_size(bytes);
                }
                // Workers already running are joined when the scope ends
                let handle = builder
                    .spawn(move |_| Self::worker_thread(worker_id, chunk, processor, context))
                    .with_context(|| format!("Failed to spawn worker thread {worker_id}"))?;
                handles.push(handle);
            }

            Ok(handles.into_iter().map(|h| h.join()).collect())
        })
        .map_err(|_| anyhow::anyhow!("Worker thread panicked during parallel count"))??;

        if joined.iter().any(|result| result.is_err()) {
            anyhow::bail!("Worker thread panicked during parallel count");
        }

        Ok(context.finish(items.len(), start.elapsed()))
    }

    fn worker_thread<T, F>(worker_id: usize, chunk: &[T], processor: &F, context: &RunContext)
    where
        F: Fn(&T) -> Result<u64, HuntError>,
    {
        let subtotal: u64 = chunk
            .iter()
            .map(|item| tally(item, processor, context, worker_id))
            .sum();

        tracing::trace!(worker = worker_id, items = chunk.len(), subtotal, "worker done");
        context.merge(subtotal);
    }
}

/// Execution strategy enum for choosing between parallel and sequential
#[derive(Debug, Clone, Copy)]
pub enum ExecutionStrategy {
    Sequential,
    Parallel {
        workers: NonZeroUsize,
        partition: PartitionStrategy,
    },
}

impl ExecutionStrategy {
    pub fn execute<T, F>(&self, items: &[T], processor: F) -> Result<RunOutcome>
    where
        T: Sync,
        F: Fn(&T) -> Result<u64, HuntError> + Sync,
    {
        match self {
            ExecutionStrategy::Sequential => Ok(SequentialExecutor::execute(items, processor)),
            ExecutionStrategy::Parallel { workers, partition } => {
                ParallelExecutor::new(*workers, *partition).execute(items, processor)
            }
        }
    }

    /// Worker count derived from the machine when the user gives none
    ///
    /// ```text
    /// max(1, num_cpus::get() * thread_percentage / 100)
    /// ```
    ///
    /// ```rust
    /// use wordhunt::parallel::ExecutionStrategy;
    ///
    /// let workers = ExecutionStrategy::calculate_optimal_workers(75);
    /// assert!(workers.get() >= 1);
    /// ```
    pub fn calculate_optimal_workers(thread_percentage: u8) -> NonZeroUsize {
        let available_cores = num_cpus::get();
        let by_percentage = available_cores * thread_percentage as usize / 100;
        NonZeroUsize::new(by_percentage).unwrap_or(NonZeroUsize::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Barrier;

    fn workers(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn fail_on_zero(x: &u64) -> Result<u64, HuntError> {
        if *x == 0 {
            Err(HuntError::FileOpen {
                path: PathBuf::from("zero"),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        } else {
            Ok(*x)
        }
    }

    #[test]
    fn test_sequential_executor() {
        let outcome = SequentialExecutor::execute(&[1u64, 2, 3, 4, 5], |x| Ok(*x * 2));
        assert_eq!(outcome.total, 30);
        assert_eq!(outcome.files, 5);
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn test_parallel_executor() {
        let executor = ParallelExecutor::new(workers(2), PartitionStrategy::Contiguous);
        let outcome = executor.execute(&[1u64, 2, 3, 4, 5], |x| Ok(*x * 2)).unwrap();
        assert_eq!(outcome.total, 30);
        assert_eq!(outcome.files, 5);
    }

    #[test]
    fn test_failures_are_skipped_not_fatal() {
        let items = [3u64, 0, 4, 0];
        let seq = SequentialExecutor::execute(&items, fail_on_zero);
        let par = ParallelExecutor::new(workers(3), PartitionStrategy::Balanced)
            .execute(&items, fail_on_zero)
            .unwrap();

        assert_eq!(seq.total, 7);
        assert_eq!(seq.skipped, 2);
        assert_eq!(par.total, 7);
        assert_eq!(par.skipped, 2);
    }

    #[test]
    fn test_more_workers_than_items() {
        let executor = ParallelExecutor::new(workers(16), PartitionStrategy::Contiguous);
        let outcome = executor.execute(&[1u64, 1, 1], |x| Ok(*x)).unwrap();
        assert_eq!(outcome.total, 3);
    }

    #[test]
    fn test_empty_work_list() {
        let items: [u64; 0] = [];
        let seq = SequentialExecutor::execute(&items, |x| Ok(*x));
        let par = ParallelExecutor::new(workers(4), PartitionStrategy::Contiguous)
            .execute(&items, |x| Ok(*x))
            .unwrap();
        assert_eq!(seq.total, 0);
        assert_eq!(par.total, 0);
    }

    #[test]
    fn test_workers_run_concurrently() {
        // Every worker blocks until all of them have started, which only
        // completes if they really run at the same time.
        let n = 4;
        let barrier = Barrier::new(n);
        let items: Vec<u64> = vec![1; n];
        let outcome = ParallelExecutor::new(workers(n), PartitionStrategy::Balanced)
            .execute(&items, |x| {
                barrier.wait();
                Ok(*x)
            })
            .unwrap();
        assert_eq!(outcome.total, n as u64);
    }

    #[test]
    fn test_worker_panic_becomes_error() {
        let executor = ParallelExecutor::new(workers(2), PartitionStrategy::Contiguous);
        let result = executor.execute(&[1u64, 2], |x| {
            if *x == 2 {
                panic!("boom");
            }
            Ok(*x)
        });
        assert!(result.is_err());
    }

    #[cfg(all(target_os = "linux", target_pointer_width = "64"))]
    #[test]
    fn test_spawn_failure_becomes_error() {
        // No system can map a 1 EiB stack
        let executor = ParallelExecutor::new(workers(3), PartitionStrategy::Contiguous)
            .with_stack_size(1 << 60);
        let err = executor.execute(&[1u64, 2, 3], |x| Ok(*x)).unwrap_err();
        assert!(err.to_string().contains("Failed to spawn worker thread"));
    }

    #[test]
    fn test_execution_strategy() {
        let items = [1u64, 2, 3];

        let seq = ExecutionStrategy::Sequential
            .execute(&items, |x| Ok(*x * 3))
            .unwrap();
        assert_eq!(seq.total, 18);

        let parallel = ExecutionStrategy::Parallel {
            workers: workers(2),
            partition: PartitionStrategy::Contiguous,
        };
        let par = parallel.execute(&items, |x| Ok(*x * 3)).unwrap();
        assert_eq!(par.total, 18);
    }

    #[test]
    fn test_run_context_merges_subtotals() {
        let context = RunContext::new();
        context.merge(5);
        context.merge(7);
        context.record_skip();
        let outcome = context.finish(3, Duration::ZERO);
        assert_eq!(outcome.total, 12);
        assert_eq!(outcome.skipped, 1);
    }
}
