//! Word counting over a directory
//!
//! - [`normalize`] strips ASCII punctuation and lowercases a token
//! - [`WordCounter`] tokenizes a byte stream and counts tokens equal to the target
//! - [`list_files`] enumerates the regular files directly inside a directory
//! - [`Hunt`] runs the counter over those files sequentially and in parallel
//! - [`Comparison`] holds both results and renders the report

pub mod directory;
pub mod hunt;
pub mod normalize;
pub mod report;
pub mod tokenizer;

pub use directory::list_files;
pub use hunt::Hunt;
pub use normalize::normalize;
pub use report::{Comparison, ReportFormat};
pub use tokenizer::{DEFAULT_MAX_TOKEN_BYTES, WordCounter};
