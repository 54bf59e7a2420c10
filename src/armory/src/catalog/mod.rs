//! Weapon catalog conversion.
//!
//! Turns the weapon spreadsheet export (one row per weapon, one column per
//! stat) into a JSON array of nested [`Weapon`] records.

mod coerce;
mod columns;
mod convert;
mod weapon;

pub use columns::{Column, ColumnMap};
pub use convert::{
    convert_file, convert_reader, write_catalog, CoercionWarning, Conversion, SkippedRow,
};
pub use weapon::{Attack, FpCost, Guard, Requirements, Scaling, StatusBuildup, Weapon, WeaponSkill};

use crate::file_io::FileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error("CSV input is empty, expected a header row")]
    EmptyInput,

    #[error("Missing required column(s) in CSV header: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize catalog: {0}")]
    Json(#[from] serde_json::Error),
}
