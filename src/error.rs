use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of a scan, all raised before any traversal begins.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("'{}' does not exist or is not a directory", .0.display())]
    InvalidDirectory(PathBuf),
    #[error("search term is empty")]
    EmptyTerm,
    #[error("failed to build matcher: {0}")]
    Pattern(#[from] grep_regex::Error),
}
