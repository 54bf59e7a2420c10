//! Checklist ordering by trailing total

use std::path::Path;

use super::line::line_ending;
use crate::file_io::{self, FileError};

/// Result of sorting a checklist document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    /// The sorted document
    pub text: String,
    /// Number of lines written
    pub lines: usize,
    /// Number of blank lines removed
    pub blank_dropped: usize,
}

/// Sort key of a line: the number in a `(<digits>)` group ending the line
///
/// Lines without one have no key and sort before every keyed line. Numbers
/// too large for `u64` saturate.
pub fn sort_key(line: &str) -> Option<u64> {
    let (content, _) = line_ending(line);
    let inner = content.strip_suffix(')')?;
    let digit_count = inner
        .bytes()
        .rev()
        .take_while(u8::is_ascii_digit)
        .count();
    let digits_start = inner.len() - digit_count;
    if digit_count == 0 || !inner[..digits_start].ends_with('(') {
        return None;
    }
    Some(inner[digits_start..].parse().unwrap_or(u64::MAX))
}

/// Sort the lines of `text` by [`sort_key`], dropping blank lines
///
/// The sort is stable. Every line in the output is newline-terminated; lines
/// keep their own `\r\n` endings.
pub fn sort(text: &str) -> SortOutcome {
    let all: Vec<&str> = text.split_inclusive('\n').collect();
    let mut lines: Vec<&str> = all
        .iter()
        .copied()
        .filter(|l| !l.trim().is_empty())
        .collect();
    let blank_dropped = all.len() - lines.len();

    lines.sort_by_key(|l| sort_key(l));

    let mut out = String::with_capacity(text.len() + 1);
    for line in &lines {
        let (content, ending) = line_ending(line);
        out.push_str(content);
        out.push_str(if ending.is_empty() { "\n" } else { ending });
    }

    SortOutcome {
        text: out,
        lines: lines.len(),
        blank_dropped,
    }
}

/// Sort the checklist at `path` and replace it atomically
pub fn sort_file(path: &Path) -> Result<SortOutcome, FileError> {
    let text = file_io::read_to_string(path)?;
    let outcome = sort(&text);
    file_io::replace_atomically(path, outcome.text.as_bytes())?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_sort_key() {
        assert_eq!(sort_key("- [ ] Claymore (16/10/-/-/-) (6)"), Some(6));
        assert_eq!(sort_key("- [ ] Claymore (16/10/-/-/-) (6)\n"), Some(6));
        assert_eq!(sort_key("- [ ] Claymore (16/10/-/-/-) (6)\r\n"), Some(6));
        assert_eq!(sort_key("(0)"), Some(0));
        assert_eq!(sort_key("# Weapons"), None);
        assert_eq!(sort_key("- [ ] Claymore (16/10/-/-/-) (6) "), None);
        assert_eq!(sort_key("- [ ] Claymore (16/10/-/-/-) ()"), None);
        assert_eq!(sort_key("- [ ] Claymore (16/10/-/-/-) 6)"), None);
        assert_eq!(sort_key("- [ ] Claymore (-6)"), None);
        assert_eq!(sort_key("(99999999999999999999999)"), Some(u64::MAX));
    }

    #[test]
    fn test_sort_key_non_ascii() {
        assert_eq!(sort_key("- [ ] Épée de Marais (12/-/-/-/-) (2)"), Some(2));
        assert_eq!(sort_key("- [ ] Lame (Épée)"), None);
        assert_eq!(sort_key("- [ ] Lame é)"), None);
    }

    #[test]
    fn test_sort_orders_by_total() {
        let text = "\
- [ ] C (20/-/-/-/-) (10)
- [ ] A (11/-/-/-/-) (1)
- [ ] B (15/-/-/-/-) (5)
";
        let outcome = sort(text);
        assert_eq!(
            outcome.text,
            "\
- [ ] A (11/-/-/-/-) (1)
- [ ] B (15/-/-/-/-) (5)
- [ ] C (20/-/-/-/-) (10)
"
        );
    }

    #[test]
    fn test_sort_is_stable_and_keyless_first() {
        let text = "\
- [ ] First (12/-/-/-/-) (2)
# Weapons
- [ ] Second (-/12/-/-/-) (2)
notes
- [ ] Zero (-/-/-/-/-) (0)
";
        let outcome = sort(text);
        assert_eq!(
            outcome.text,
            "\
# Weapons
notes
- [ ] Zero (-/-/-/-/-) (0)
- [ ] First (12/-/-/-/-) (2)
- [ ] Second (-/12/-/-/-) (2)
"
        );

        let keys: Vec<Option<u64>> = outcome.text.lines().map(sort_key).collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sort_drops_blank_lines() {
        let text = "- [ ] B (15/-/-/-/-) (5)\n\n   \n- [ ] A (11/-/-/-/-) (1)\n\t\n";
        let outcome = sort(text);

        assert_eq!(outcome.text, "- [ ] A (11/-/-/-/-) (1)\n- [ ] B (15/-/-/-/-) (5)\n");
        assert_eq!(outcome.lines, 2);
        assert_eq!(outcome.blank_dropped, 3);
        assert!(outcome.text.lines().all(|l| !l.trim().is_empty()));
    }

    #[test]
    fn test_sort_terminates_last_line() {
        // An unterminated last line must not be glued to its new neighbour
        let outcome = sort("- [ ] B (15/-/-/-/-) (5)\n- [ ] A (11/-/-/-/-) (1)");
        assert_eq!(outcome.text, "- [ ] A (11/-/-/-/-) (1)\n- [ ] B (15/-/-/-/-) (5)\n");
    }

    #[test]
    fn test_sort_empty() {
        let outcome = sort("\n\n");
        assert_eq!(outcome.text, "");
        assert_eq!(outcome.lines, 0);
        assert_eq!(outcome.blank_dropped, 2);
    }

    #[test]
    fn test_sort_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("weapon_requirements.md");
        fs::write(&path, "- [ ] B (15/-/-/-/-) (5)\n\n- [ ] A (11/-/-/-/-) (1)\n").unwrap();

        sort_file(&path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "- [ ] A (11/-/-/-/-) (1)\n- [ ] B (15/-/-/-/-) (5)\n"
        );
    }

    #[test]
    fn test_sort_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("weapon_requirements.md");

        assert!(matches!(sort_file(&path), Err(FileError::NotFound(_))));
        assert!(!path.exists());
    }
}
