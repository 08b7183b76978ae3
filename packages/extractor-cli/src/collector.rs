//! Source Collector
//!
//! Resolves the CLI's input specification (an explicit comma-separated
//! file list, or a directory root) into an ordered sequence of file
//! paths to examine.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// File name suffixes recognized as TypeScript source.
const SOURCE_SUFFIXES: [&str; 2] = [".ts", ".tsx"];

/// Failure while resolving a directory tree. Traversal errors are fatal;
/// there is no skip-and-continue.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("invalid search pattern under {}: {}", root.display(), source)]
    Pattern {
        root: PathBuf,
        source: glob::PatternError,
    },
    #[error("error traversing {}: {}", root.display(), source)]
    Traversal {
        root: PathBuf,
        source: glob::GlobError,
    },
}

/// Split a comma-separated file list, preserving order. Existence is not
/// checked here; a missing file surfaces when it is read.
pub fn collect_file_list(list: &str) -> Vec<PathBuf> {
    list.split(',').map(PathBuf::from).collect()
}

/// Walk `root` recursively and return every `.ts`/`.tsx` file in the
/// traversal's natural order. Paths containing any of the `exclude`
/// substrings are skipped.
pub fn collect_directory(root: &Path, exclude: &[String]) -> Result<Vec<PathBuf>, CollectError> {
    let pattern = root.join("**").join("*");
    let walk = glob::glob(&pattern.to_string_lossy()).map_err(|source| CollectError::Pattern {
        root: root.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in walk {
        let path = entry.map_err(|source| CollectError::Traversal {
            root: root.to_path_buf(),
            source,
        })?;
        if !path.is_file() {
            continue;
        }
        let name = path.to_string_lossy();
        if !SOURCE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            continue;
        }
        if exclude.iter().any(|excluded| name.contains(excluded.as_str())) {
            continue;
        }
        files.push(path);
    }

    Ok(files)
}
