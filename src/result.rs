use std::path::{Path, PathBuf};

/// One matching line in one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    pub file_path: PathBuf,
    /// 1-based line number within the source file.
    pub line_number: usize,
    /// Line text with trailing whitespace removed.
    pub line_content: String,
}

/// The full outcome of one scan.
///
/// Records are ordered: files appear in traversal order, and records for the
/// same file are contiguous with ascending line numbers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub records: Vec<MatchRecord>,
    /// Files that could not be read and were skipped.
    pub skipped: Vec<PathBuf>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_matches(&self) -> usize {
        self.records.len()
    }

    /// Number of distinct files with at least one match.
    ///
    /// Records for one file are contiguous, so counting file-path changes
    /// between neighbours is enough.
    pub fn distinct_file_count(&self) -> usize {
        let mut count = 0;
        let mut previous: Option<&Path> = None;
        for record in &self.records {
            if previous != Some(record.file_path.as_path()) {
                count += 1;
                previous = Some(record.file_path.as_path());
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(file: &str, line: usize) -> MatchRecord {
        MatchRecord {
            file_path: PathBuf::from(file),
            line_number: line,
            line_content: format!("line {}", line),
        }
    }

    #[test]
    fn test_empty_result_counts() {
        let result = SearchResult::default();
        assert!(result.is_empty());
        assert_eq!(result.total_matches(), 0);
        assert_eq!(result.distinct_file_count(), 0);
    }

    #[test]
    fn test_distinct_file_count_groups_contiguous_records() {
        let result = SearchResult {
            records: vec![
                record("a.txt", 2),
                record("a.txt", 5),
                record("b.txt", 1),
            ],
            skipped: Vec::new(),
        };
        assert_eq!(result.total_matches(), 3);
        assert_eq!(result.distinct_file_count(), 2);
    }
}
