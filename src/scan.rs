use crate::config::ScanOptions;
use crate::error::ScanError;
use crate::result::{MatchRecord, SearchResult};
use grep_matcher::Matcher;
use grep_regex::RegexMatcherBuilder;
use grep_searcher::{Searcher, Sink, SinkMatch};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// A validated scan request: an existing root directory and a trimmed,
/// non-empty search term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub root: PathBuf,
    pub term: String,
}

impl SearchRequest {
    pub fn new(root: impl Into<PathBuf>, term: &str) -> Result<Self, ScanError> {
        let root = root.into();
        let term = term.trim();
        if term.is_empty() {
            return Err(ScanError::EmptyTerm);
        }
        if !root.is_dir() {
            return Err(ScanError::InvalidDirectory(root));
        }
        Ok(Self {
            root,
            term: term.to_string(),
        })
    }
}

struct MatchSink {
    records: Vec<MatchRecord>,
    file_path: PathBuf,
    limit: usize,
}

impl Sink for MatchSink {
    type Error = std::io::Error;

    fn matched(&mut self, _searcher: &Searcher, mat: &SinkMatch) -> Result<bool, Self::Error> {
        if self.records.len() >= self.limit {
            return Ok(false);
        }

        let line_number = mat.line_number().unwrap_or(0) as usize;
        let line_content = String::from_utf8_lossy(mat.bytes()).trim_end().to_string();

        self.records.push(MatchRecord {
            file_path: self.file_path.clone(),
            line_number,
            line_content,
        });

        Ok(true)
    }
}

fn search_file(
    path: &Path,
    matcher: &impl Matcher,
    limit: usize,
) -> Result<Vec<MatchRecord>, std::io::Error> {
    let mut sink = MatchSink {
        records: Vec::new(),
        file_path: path.to_path_buf(),
        limit,
    };

    let mut searcher = Searcher::new();
    searcher.search_path(matcher, path, &mut sink)?;

    Ok(sink.records)
}

/// Scan with default options (`.txt` files only, hidden files included).
pub fn scan(root: &Path, term: &str) -> Result<SearchResult, ScanError> {
    scan_with_options(root, term, &ScanOptions::default())
}

/// Recursively search files under `root` for case-insensitive occurrences of
/// the literal `term`, one record per matching line.
///
/// Traversal is sorted by file path, so results for an unchanged directory
/// are identical between runs. Files that cannot be read are skipped and
/// listed in `SearchResult::skipped`; only an invalid request fails the scan.
pub fn scan_with_options(
    root: &Path,
    term: &str,
    options: &ScanOptions,
) -> Result<SearchResult, ScanError> {
    let request = SearchRequest::new(root, term)?;
    let limit = options.max_results.unwrap_or(usize::MAX);

    // fixed_strings makes the term a literal: metacharacters like '.' have
    // no pattern meaning.
    let matcher = RegexMatcherBuilder::new()
        .case_insensitive(true)
        .fixed_strings(true)
        .build(&request.term)?;

    let walker = WalkBuilder::new(&request.root)
        .standard_filters(false)
        .hidden(options.skip_hidden)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    let mut result = SearchResult::default();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("Error walking directory: {}", e);
                continue;
            }
        };

        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }

        let path = entry.path();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !options.extensions.iter().any(|e| e == &extension) {
            continue;
        }

        match search_file(path, &matcher, limit - result.records.len()) {
            Ok(mut records) => result.records.append(&mut records),
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                result.skipped.push(path.to_path_buf());
            }
        }

        if result.records.len() >= limit {
            break;
        }
    }

    Ok(result)
}
