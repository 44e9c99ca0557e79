use crate::result::SearchResult;

/// Holds the outcome of the most recent search.
///
/// Only one result is live at a time; a new search replaces the previous
/// one. Export availability is derived from the record count rather than
/// tracked separately.
#[derive(Debug, Default)]
pub struct SearchSession {
    result: Option<SearchResult>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held result with the outcome of a new search.
    pub fn replace(&mut self, result: SearchResult) {
        self.result = Some(result);
    }

    pub fn clear(&mut self) {
        self.result = None;
    }

    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    /// True only while the current result has at least one match.
    pub fn can_export(&self) -> bool {
        self.result.as_ref().map(|r| !r.is_empty()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::MatchRecord;
    use std::path::PathBuf;

    fn one_match() -> SearchResult {
        SearchResult {
            records: vec![MatchRecord {
                file_path: PathBuf::from("a.txt"),
                line_number: 1,
                line_content: "needle".to_string(),
            }],
            skipped: Vec::new(),
        }
    }

    #[test]
    fn test_new_session_cannot_export() {
        assert!(!SearchSession::new().can_export());
    }

    #[test]
    fn test_empty_result_cannot_export() {
        let mut session = SearchSession::new();
        session.replace(SearchResult::default());
        assert!(session.result().is_some());
        assert!(!session.can_export());
    }

    #[test]
    fn test_result_with_matches_can_export() {
        let mut session = SearchSession::new();
        session.replace(one_match());
        assert!(session.can_export());
    }

    #[test]
    fn test_replace_discards_previous_result() {
        let mut session = SearchSession::new();
        session.replace(one_match());
        session.replace(SearchResult::default());
        assert!(!session.can_export());

        session.clear();
        assert!(session.result().is_none());
    }
}
