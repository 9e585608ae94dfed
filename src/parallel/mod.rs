//! Sequential and parallel execution over a list of work items
//!
//! This module knows nothing about words or files. It takes a slice of items
//! and a processor that turns one item into a count, and sums the counts
//! either on the calling thread or on a fixed set of worker threads.
//!
//! # Parallel model
//!
//! ```text
//!   items ──partition──▶ chunk 0 ──▶ worker 0 ──local subtotal──┐
//!                        chunk 1 ──▶ worker 1 ──local subtotal──┤ lock, add
//!                        ...                                     ├──────────▶ run total
//!                        chunk N ──▶ worker N ──local subtotal──┘
//! ```
//!
//! - One scoped thread per chunk, spawned for each run and joined before it returns.
//! - Chunks are contiguous borrowed slices assigned up front; there is no work stealing.
//! - The only shared mutable state is the run's [`RunContext`]. Its lock is held
//!   for the final merge only, never while a worker processes items.
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use wordhunt::parallel::{ExecutionStrategy, PartitionStrategy};
//!
//! let items = [1u64, 2, 3, 4];
//! let parallel = ExecutionStrategy::Parallel {
//!     workers: NonZeroUsize::new(2).unwrap(),
//!     partition: PartitionStrategy::Contiguous,
//! };
//!
//! let seq = ExecutionStrategy::Sequential.execute(&items, |x| Ok(*x))?;
//! let par = parallel.execute(&items, |x| Ok(*x))?;
//! assert_eq!(seq.total, par.total);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod core;
pub mod partition;

pub use self::core::{ExecutionStrategy, ParallelExecutor, RunContext, RunOutcome, SequentialExecutor};
pub use self::partition::{PartitionStrategy, partition};
