//! Requirement total recalculation

use std::path::Path;

use super::line::{line_ending, ParsedLine};
use crate::file_io::{self, FileError};

/// Result of recalculating a checklist document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recalculation {
    /// The rewritten document
    pub text: String,
    /// Number of checklist entries found
    pub entries: usize,
    /// Number of entries whose text changed
    pub changed: usize,
}

/// Recompute the total on every checklist entry in `text`
///
/// Entries are rewritten with their total derived from the stats; every other
/// line, blank lines included, is copied through unchanged. Line endings are
/// preserved.
pub fn recalculate(text: &str) -> Recalculation {
    let mut out = String::with_capacity(text.len());
    let mut entries = 0;
    let mut changed = 0;

    for raw in text.split_inclusive('\n') {
        let (content, ending) = line_ending(raw);

        match ParsedLine::parse(content) {
            ParsedLine::Entry(entry) => {
                entries += 1;
                let rewritten = entry.recomputed().to_string();
                if rewritten != content {
                    tracing::debug!("{} -> {}", content, rewritten);
                    changed += 1;
                }
                out.push_str(&rewritten);
                out.push_str(ending);
            }
            ParsedLine::Other(_) => out.push_str(raw),
        }
    }

    Recalculation {
        text: out,
        entries,
        changed,
    }
}

/// Recalculate the checklist at `path` and replace it atomically
pub fn recalculate_file(path: &Path) -> Result<Recalculation, FileError> {
    let text = file_io::read_to_string(path)?;
    let result = recalculate(&text);
    file_io::replace_atomically(path, result.text.as_bytes())?;
    Ok(result)
}
