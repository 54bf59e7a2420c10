//! Checklist line grammar
//!
//! ```text
//! line   := indent "- [ ] " name "(" stat "/" stat "/" stat "/" stat "/" stat ") (" digits ")" suffix
//! name   := one or more characters other than "("
//! stat   := digits | "-"
//! ```

use std::fmt;

/// Number of stats on a checklist line (STR/DEX/INT/FAI/ARC)
pub const STAT_COUNT: usize = 5;

/// Stat value at or below which a requirement adds nothing to the total
const FREE_STAT_LEVEL: u64 = 10;

const CHECKBOX: &str = "- [ ] ";
const PLACEHOLDER: char = '-';

/// One stat requirement on a checklist line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Value(u64),
    /// Written as `-`: the weapon has no requirement for this stat
    Placeholder,
}

impl Stat {
    /// How much this stat adds to the line total
    pub fn contribution(self) -> u64 {
        match self {
            Stat::Value(v) => v.saturating_sub(FREE_STAT_LEVEL),
            Stat::Placeholder => 0,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Value(v) => write!(f, "{}", v),
            Stat::Placeholder => write!(f, "{}", PLACEHOLDER),
        }
    }
}

/// A checklist entry split into its parts
///
/// `prefix` runs from the start of the line up to the stats parenthetical
/// (indentation, checkbox, weapon name and the space before `(`). `suffix` is
/// whatever follows the total, usually empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistLine<'a> {
    pub prefix: &'a str,
    pub stats: [Stat; STAT_COUNT],
    pub total: u64,
    pub suffix: &'a str,
}

impl<'a> ChecklistLine<'a> {
    /// Parse a line (without its line ending)
    ///
    /// Returns `None` when the line does not have the checklist shape.
    pub fn parse(line: &'a str) -> Option<Self> {
        let indent = line.len() - line.trim_start().len();
        let name = line[indent..].strip_prefix(CHECKBOX)?;

        let open = name.find('(')?;
        if open == 0 {
            return None;
        }
        let prefix_len = indent + CHECKBOX.len() + open;
        let prefix = &line[..prefix_len];

        let mut rest = &line[prefix_len + 1..];
        let mut stats = [Stat::Placeholder; STAT_COUNT];
        for (i, slot) in stats.iter_mut().enumerate() {
            if i > 0 {
                rest = rest.strip_prefix('/')?;
            }
            let (stat, tail) = parse_stat(rest)?;
            *slot = stat;
            rest = tail;
        }

        let rest = rest.strip_prefix(") (")?;
        let (total, rest) = parse_digits(rest)?;
        let suffix = rest.strip_prefix(')')?;

        Some(ChecklistLine {
            prefix,
            stats,
            total,
            suffix,
        })
    }

    /// Total implied by the stats
    pub fn expected_total(&self) -> u64 {
        self.stats
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.contribution()))
    }

    /// Whether the written total matches the stats
    pub fn is_consistent(&self) -> bool {
        self.total == self.expected_total()
    }

    /// Same line with the total replaced by the one implied by the stats
    pub fn recomputed(&self) -> Self {
        ChecklistLine {
            total: self.expected_total(),
            ..self.clone()
        }
    }
}

impl fmt::Display for ChecklistLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [s1, s2, s3, s4, s5] = self.stats;
        write!(
            f,
            "{}({}/{}/{}/{}/{}) ({}){}",
            self.prefix, s1, s2, s3, s4, s5, self.total, self.suffix
        )
    }
}

/// A checklist file line: either an entry or anything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    Entry(ChecklistLine<'a>),
    Other(&'a str),
}

impl<'a> ParsedLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        match ChecklistLine::parse(line) {
            Some(entry) => ParsedLine::Entry(entry),
            None => ParsedLine::Other(line),
        }
    }
}

/// Split a raw line into its content and its line ending (`\n`, `\r\n` or empty)
pub fn line_ending(raw: &str) -> (&str, &str) {
    if let Some(content) = raw.strip_suffix("\r\n") {
        (content, &raw[content.len()..])
    } else if let Some(content) = raw.strip_suffix('\n') {
        (content, &raw[content.len()..])
    } else {
        (raw, "")
    }
}

fn parse_stat(s: &str) -> Option<(Stat, &str)> {
    if let Some(rest) = s.strip_prefix(PLACEHOLDER) {
        return Some((Stat::Placeholder, rest));
    }
    let (value, rest) = parse_digits(s)?;
    Some((Stat::Value(value), rest))
}

/// Leading ASCII digits as a number; `None` if there are none or they overflow
fn parse_digits(s: &str) -> Option<(u64, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}
