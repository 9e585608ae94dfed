//! # wordhunt - sequential vs. parallel word counting
//!
//! wordhunt counts how often a word appears across the files of a directory,
//! once on a single thread and once on a fixed set of worker threads, and
//! reports how the two timings compare.
//!
//! ## Quick Start
//!
//! ```bash
//! # Count "cat" in ./docs with 4 workers
//! wordhunt compare ./docs cat --workers 4
//!
//! # Machine-readable output
//! wordhunt compare ./docs cat --format json
//!
//! # Prompt for the directory, word and worker count
//! wordhunt compare
//! ```
//!
//! ## Matching rules
//!
//! Text is split on ASCII whitespace. Each token has its ASCII punctuation
//! removed and is lowercased before being compared with the (equally
//! normalized) target word, so `Cat,` `cat!` and `CAT.` all count as `cat`.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use wordhunt::config::HuntConfig;
//! use wordhunt::count::Hunt;
//!
//! let config = HuntConfig { workers: Some(4), ..HuntConfig::default() };
//! let hunt = Hunt::new("cat", &config)?;
//! let comparison = hunt.compare(Path::new("docs"))?;
//!
//! assert_eq!(comparison.sequential.total, comparison.parallel.total);
//! print!("{}", comparison.render_text());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod count;
pub mod error;
pub mod parallel;

pub use cli::{Cli, Output};
pub use config::HuntConfig;
pub use error::HuntError;

/// Result type alias for wordhunt operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
