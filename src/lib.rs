//! Search for a literal string in text files under a folder.
//!
//! The pipeline is `scan` (recursive, case-insensitive, literal matching)
//! producing a [`SearchResult`], `render` turning it into a grouped report,
//! and `export` writing that report to disk. A [`SearchSession`] holds the
//! current result for callers that embed this crate behind a UI.

pub mod config;
pub mod error;
pub mod report;
pub mod result;
pub mod scan;
pub mod session;

pub use config::{Config, ScanOptions};
pub use error::ScanError;
pub use report::{export, render};
pub use result::{MatchRecord, SearchResult};
pub use scan::{scan, scan_with_options, SearchRequest};
pub use session::SearchSession;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_render_export_pipeline() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "see example.com\nplain line\n").unwrap();

        let result = scan(dir.path(), "EXAMPLE.com").unwrap();
        assert_eq!(result.total_matches(), 1);

        let mut session = SearchSession::new();
        session.replace(result);
        assert!(session.can_export());

        let rendered = render(session.result().unwrap(), "EXAMPLE.com", dir.path());
        assert!(rendered.contains("File: notes.txt"));
        assert!(rendered.contains("  Line 1: see example.com"));

        let dest = dir.path().join("report.txt");
        export(&rendered, &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), rendered);
    }
}
