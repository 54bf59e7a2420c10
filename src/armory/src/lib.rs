//! # armory
//!
//! Weapon requirement checklist maintenance and weapon catalog conversion.
//!
//! This library provides functionality to:
//! - Parse weapon requirement checklist lines and recompute their totals
//! - Sort a checklist by its trailing totals
//! - Convert a spreadsheet export of weapon data into a nested JSON catalog
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Recompute totals, then order the checklist by them
//! let checklist = Path::new("weapon_requirements.md");
//! armory::recalculate_file(checklist)?;
//! armory::sort_file(checklist)?;
//!
//! // Convert the weapon spreadsheet into the JSON catalog
//! let report = armory::convert_file(Path::new("weapons.csv"), Path::new("weapons.json"))?;
//! println!("{} weapons written", report.weapons.len());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod checklist;
pub mod file_io;

// Re-export commonly used items
#[doc(inline)]
pub use catalog::{
    convert_file, convert_reader, write_catalog, CatalogError, Column, ColumnMap, CoercionWarning,
    Conversion, FpCost, SkippedRow, Weapon,
};
#[doc(inline)]
pub use checklist::{
    recalculate, recalculate_file, sort, sort_file, sort_key, ChecklistLine, ParsedLine,
    Recalculation, SortOutcome, Stat,
};
#[doc(inline)]
pub use file_io::FileError;
