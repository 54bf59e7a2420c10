//! Spreadsheet to catalog conversion

use csv::StringRecord;
use std::fmt;
use std::io::Read;
use std::path::Path;

use super::coerce::{self, Numeric};
use super::columns::{Column, ColumnMap};
use super::weapon::{Attack, Guard, Requirements, Scaling, StatusBuildup, Weapon, WeaponSkill};
use super::CatalogError;
use crate::file_io;

/// A data row dropped because its field count differs from the header's
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line in the CSV file
    pub line: u64,
    pub fields: usize,
    pub expected: usize,
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} fields, expected {}",
            self.line, self.fields, self.expected
        )
    }
}

/// A cell that could not be read as its target type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionWarning {
    /// 1-based line in the CSV file
    pub line: u64,
    pub column: Column,
    pub value: String,
    /// "integer" or "float"
    pub expected: &'static str,
    /// The value used instead, as written in the output
    pub default: String,
}

impl fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: could not convert '{}' in column {} to {}, using default {}",
            self.line, self.value, self.column, self.expected, self.default
        )
    }
}

/// Everything produced by a conversion run
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    /// Converted weapons in input order
    pub weapons: Vec<Weapon>,
    pub skipped: Vec<SkippedRow>,
    pub warnings: Vec<CoercionWarning>,
}

/// Typed access to the cells of one data row
struct RowReader<'a> {
    record: &'a StringRecord,
    columns: &'a ColumnMap,
    line: u64,
    warnings: &'a mut Vec<CoercionWarning>,
}

impl<'a> RowReader<'a> {
    fn raw(&self, column: Column) -> &'a str {
        self.columns.cell(self.record, column)
    }

    fn text(&self, column: Column) -> String {
        self.raw(column).to_string()
    }

    fn optional_text(&self, column: Column) -> Option<String> {
        coerce::optional_text(self.raw(column))
    }

    fn int(&mut self, column: Column) -> i64 {
        self.numeric(column, coerce::integer, 0, "integer")
    }

    fn float(&mut self, column: Column) -> f64 {
        self.numeric(column, coerce::float, 0.0, "float")
    }

    fn numeric<T: Copy + fmt::Debug>(
        &mut self,
        column: Column,
        parse: fn(&str) -> Numeric<T>,
        default: T,
        expected: &'static str,
    ) -> T {
        let value = self.raw(column);
        match parse(value) {
            Numeric::Blank => default,
            Numeric::Value(v) => v,
            Numeric::Invalid => {
                let warning = CoercionWarning {
                    line: self.line,
                    column,
                    value: value.to_string(),
                    expected,
                    default: format!("{:?}", default),
                };
                tracing::warn!("{}", warning);
                self.warnings.push(warning);
                default
            }
        }
    }

    fn weapon(&mut self) -> Weapon {
        Weapon {
            name: self.text(Column::Name),
            category: self.text(Column::Category),
            url: self.text(Column::Url),
            sote: coerce::flag(self.raw(Column::Sote)),
            attack: Attack {
                physical: self.float(Column::PhyAtk),
                magic: self.float(Column::MagAtk),
                fire: self.float(Column::FireAtk),
                lightning: self.float(Column::LigtAtk),
                holy: self.float(Column::HolyAtk),
                critical: self.int(Column::CritAtk),
            },
            sorcery_scaling: self.int(Column::SorAtk),
            incantation_scaling: self.int(Column::IncAtk),
            guard: Guard {
                physical: self.float(Column::PhyGuard),
                magic: self.float(Column::MagGuard),
                fire: self.float(Column::FireGuard),
                lightning: self.float(Column::LigtGuard),
                holy: self.float(Column::HolyGuard),
                boost: self.int(Column::BoostGuard),
            },
            scaling: Scaling {
                strength: self.optional_text(Column::StrScale),
                dexterity: self.optional_text(Column::DexScale),
                intelligence: self.optional_text(Column::IntScale),
                faith: self.optional_text(Column::FaiScale),
                arcane: self.optional_text(Column::ArcScale),
            },
            requirements: Requirements {
                strength: self.int(Column::StrReq),
                dexterity: self.int(Column::DexReq),
                intelligence: self.int(Column::IntReq),
                faith: self.int(Column::FaiReq),
                arcane: self.int(Column::ArcReq),
            },
            damage_types: coerce::damage_types(self.raw(Column::DamageTypes)),
            weapon_skill: WeaponSkill {
                name: self.optional_text(Column::WeaponSkill),
                fp_cost: coerce::fp_cost(self.raw(Column::FpCost)),
            },
            weight: self.float(Column::Weight),
            upgrade_type: self.text(Column::UpgradeType),
            passive_description: self.optional_text(Column::Passive),
            status_buildup: StatusBuildup {
                poison: self.int(Column::Poison),
                hemorrhage: self.int(Column::Hemorrhage),
                frostbite: self.int(Column::Frostbite),
                scarlet_rot: self.int(Column::ScarletRot),
                sleep: self.int(Column::Sleep),
                madness: self.int(Column::Madness),
                death_blight: self.int(Column::DeathBlight),
            },
        }
    }
}

/// Convert weapon CSV data into catalog records
///
/// The first record is the header. All required columns are resolved before
/// any data row is read; if one is missing nothing is converted. Rows with the
/// wrong number of fields are skipped, and unparseable numeric cells fall back
/// to 0. Both are recorded in the returned [`Conversion`].
pub fn convert_reader<R: Read>(input: R) -> Result<Conversion, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut records = reader.records();

    let header = records.next().ok_or(CatalogError::EmptyInput)??;
    let columns = ColumnMap::from_header(&header)?;

    let mut conversion = Conversion::default();
    for (i, record) in records.enumerate() {
        let record = record?;
        // Header is line 1; fall back to counting records if positions are absent
        let line = record.position().map_or(i as u64 + 2, |p| p.line());

        if record.len() != columns.width() {
            let skipped = SkippedRow {
                line,
                fields: record.len(),
                expected: columns.width(),
            };
            tracing::warn!("Skipping malformed row at {}", skipped);
            conversion.skipped.push(skipped);
            continue;
        }

        let weapon = RowReader {
            record: &record,
            columns: &columns,
            line,
            warnings: &mut conversion.warnings,
        }
        .weapon();
        conversion.weapons.push(weapon);
    }

    tracing::debug!(
        "Converted {} rows ({} skipped, {} warnings)",
        conversion.weapons.len(),
        conversion.skipped.len(),
        conversion.warnings.len()
    );

    Ok(conversion)
}

/// Write weapons as a 2-space indented JSON array, replacing `path` atomically
pub fn write_catalog(path: &Path, weapons: &[Weapon]) -> Result<(), CatalogError> {
    let json = serde_json::to_vec_pretty(weapons)?;
    file_io::replace_atomically(path, &json)?;
    Ok(())
}

/// Convert the CSV at `input` and write the catalog to `output`
///
/// `output` is left untouched if the input is missing, unreadable, or lacks
/// a required column.
pub fn convert_file(input: &Path, output: &Path) -> Result<Conversion, CatalogError> {
    let file = file_io::open(input)?;
    let conversion = convert_reader(file)?;
    write_catalog(output, &conversion.weapons)?;
    Ok(conversion)
}
