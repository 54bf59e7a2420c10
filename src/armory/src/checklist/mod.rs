//! Weapon requirement checklist maintenance.
//!
//! The checklist is a markdown file with one line per weapon:
//!
//! ```text
//! - [ ] Claymore (16/10/-/-/-) (6)
//! ```
//!
//! The five stats are the Strength, Dexterity, Intelligence, Faith and Arcane
//! requirements (`-` when a stat is not required), and the trailing number is
//! the total excess over 10 across all stats.

mod line;
mod recalc;
mod sort;

pub use line::{line_ending, ChecklistLine, ParsedLine, Stat, STAT_COUNT};
pub use recalc::{recalculate, recalculate_file, Recalculation};
pub use sort::{sort, sort_file, sort_key, SortOutcome};
