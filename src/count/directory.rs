use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::error::HuntError;

/// Collect the regular files directly inside `dir`
///
/// Not recursive. Symlinks and special files are left out, hidden files are
/// kept and no ignore files are consulted. The list is sorted by file name so
/// the same directory always partitions the same way.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, HuntError> {
    // The walker reports an unreadable root as just another entry error
    std::fs::read_dir(dir).map_err(|source| HuntError::setup(dir, source))?;

    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(false)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.depth() == 1 && entry.file_type().is_some_and(|ft| ft.is_file()) {
                    files.push(entry.into_path());
                }
            }
            Err(e) => {
                tracing::debug!("Error accessing path: {}", e);
            }
        }
    }

    tracing::debug!("Found {} files in {}", files.len(), dir.display());
    Ok(files)
}
