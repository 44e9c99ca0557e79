use crate::result::SearchResult;
use std::fs;
use std::path::Path;

const RULE_WIDTH: usize = 80;

/// Render a scan outcome as a human-readable grouped listing.
///
/// Matches are grouped under one section per file, in the order files were
/// first encountered; file paths are shown relative to the searched root.
pub fn render(result: &SearchResult, term: &str, root: &Path) -> String {
    if result.is_empty() {
        return format!("No matches found for '{}' in {}\n", term, root.display());
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Found {} match(es) for '{}' in {} file(s)\n",
        result.total_matches(),
        term,
        result.distinct_file_count()
    ));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");

    let mut current_file: Option<&Path> = None;
    for record in &result.records {
        if current_file != Some(record.file_path.as_path()) {
            current_file = Some(record.file_path.as_path());
            let rel_path = record.file_path.strip_prefix(root).unwrap_or(&record.file_path);
            out.push('\n');
            out.push_str(&format!("File: {}\n", rel_path.display()));
            out.push_str(&"-".repeat(RULE_WIDTH));
            out.push('\n');
        }

        out.push_str(&format!(
            "  Line {}: {}\n",
            record.line_number, record.line_content
        ));
    }

    out
}

/// Write rendered report text verbatim to `destination`, creating or
/// truncating it.
pub fn export(text: &str, destination: &Path) -> Result<(), std::io::Error> {
    fs::write(destination, text)
}
