use std::path::PathBuf;
use thiserror::Error;

/// Failures a word hunt can run into
///
/// `Setup` and `InvalidConfig` abort a run before any counting starts.
/// `FileOpen` and `FileRead` are per-file: the runners log them, count the
/// file as skipped and carry on.
#[derive(Error, Debug)]
pub enum HuntError {
    #[error("cannot list directory {}: {source}", path.display())]
    Setup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl HuntError {
    pub fn setup(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Setup {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Whether the error only affects a single file
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::FileOpen { .. } | Self::FileRead { .. })
    }
}
