//! Required spreadsheet columns and header resolution

use csv::StringRecord;
use std::collections::HashMap;
use std::fmt;

use super::CatalogError;

/// Declares the required columns with their exact header names
macro_rules! columns {
    ($($variant:ident => $header:literal,)+) => {
        /// A required column of the weapon spreadsheet
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Column {
            $($variant,)+
        }

        impl Column {
            /// Every required column, in spreadsheet order
            pub const ALL: &'static [Column] = &[$(Column::$variant,)+];

            /// Header name as it appears in the CSV
            pub fn header(self) -> &'static str {
                match self {
                    $(Column::$variant => $header,)+
                }
            }
        }
    };
}

columns! {
    Name => "name",
    Category => "category",
    PhyAtk => "phyAtk",
    MagAtk => "magAtk",
    FireAtk => "fireAtk",
    LigtAtk => "ligtAtk",
    HolyAtk => "holyAtk",
    CritAtk => "critAtk",
    SorAtk => "sorAtk",
    IncAtk => "incAtk",
    PhyGuard => "phyGuard",
    MagGuard => "magGuard",
    FireGuard => "fireGuard",
    LigtGuard => "ligtGuard",
    HolyGuard => "holyGuard",
    BoostGuard => "boostGuard",
    StrScale => "strScale",
    DexScale => "dexScale",
    IntScale => "intScale",
    FaiScale => "faiScale",
    ArcScale => "arcScale",
    StrReq => "strReq",
    DexReq => "dexReq",
    IntReq => "intReq",
    FaiReq => "faiReq",
    ArcReq => "arcReq",
    DamageTypes => "damageTypes",
    WeaponSkill => "weaponSkill",
    FpCost => "fpCost",
    Weight => "weight",
    Passive => "passive",
    Poison => "poison",
    Hemorrhage => "hemorrhage",
    Frostbite => "frostbite",
    ScarletRot => "scarletRot",
    Sleep => "sleep",
    Madness => "madness",
    DeathBlight => "deathBlight",
    UpgradeType => "upgradeType",
    Url => "url",
    Sote => "sote",
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Position of every required column in a specific header row
#[derive(Debug, Clone)]
pub struct ColumnMap {
    indices: HashMap<Column, usize>,
    width: usize,
}

impl ColumnMap {
    /// Resolve all required columns against a header row
    ///
    /// A header name that appears more than once resolves to its last
    /// occurrence. Extra columns are ignored. Fails listing every missing
    /// column.
    pub fn from_header(header: &StringRecord) -> Result<Self, CatalogError> {
        let mut by_name: HashMap<&str, usize> = HashMap::new();
        for (i, name) in header.iter().enumerate() {
            let name = if i == 0 {
                name.strip_prefix('\u{feff}').unwrap_or(name)
            } else {
                name
            };
            by_name.insert(name, i);
        }

        let mut indices = HashMap::with_capacity(Column::ALL.len());
        let mut missing = Vec::new();
        for &column in Column::ALL {
            match by_name.get(column.header()) {
                Some(&i) => {
                    indices.insert(column, i);
                }
                None => missing.push(column.header().to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(CatalogError::MissingColumns(missing));
        }

        Ok(ColumnMap {
            indices,
            width: header.len(),
        })
    }

    /// Number of fields in the header row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Index of a column in the header row
    pub fn index(&self, column: Column) -> usize {
        self.indices[&column]
    }

    /// Raw cell of `column` in `record` (empty if the record is too short)
    pub fn cell<'r>(&self, record: &'r StringRecord, column: Column) -> &'r str {
        record.get(self.index(column)).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_header() -> Vec<&'static str> {
        Column::ALL.iter().map(|c| c.header()).collect()
    }

    #[test]
    fn test_all_columns_listed() {
        assert_eq!(Column::ALL.len(), 41);
        assert_eq!(Column::ALL[0], Column::Name);
        assert_eq!(Column::ALL[40], Column::Sote);
        assert_eq!(Column::UpgradeType.header(), "upgradeType");
        assert_eq!(Column::ScarletRot.to_string(), "scarletRot");
    }

    #[test]
    fn test_resolve_reordered_header_with_extras() {
        let mut names = full_header();
        names.reverse();
        names.insert(3, "notes");
        let header = StringRecord::from(names);

        let map = ColumnMap::from_header(&header).unwrap();

        assert_eq!(map.width(), 42);
        assert_eq!(map.index(Column::Sote), 0);
        assert_eq!(map.index(Column::Name), 41);
        assert_eq!(header.get(map.index(Column::FpCost)), Some("fpCost"));
    }

    #[test]
    fn test_missing_columns_reported_together() {
        let names: Vec<&str> = full_header()
            .into_iter()
            .filter(|&n| n != "upgradeType" && n != "poison")
            .collect();

        let err = ColumnMap::from_header(&StringRecord::from(names)).unwrap_err();

        match err {
            CatalogError::MissingColumns(missing) => {
                assert_eq!(missing, vec!["poison".to_string(), "upgradeType".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_header_uses_last() {
        let mut names = full_header();
        names.push("name");
        let map = ColumnMap::from_header(&StringRecord::from(names)).unwrap();

        assert_eq!(map.index(Column::Name), 41);
    }

    #[test]
    fn test_byte_order_mark_ignored() {
        let mut names: Vec<String> = full_header().into_iter().map(String::from).collect();
        names[0] = format!("\u{feff}{}", names[0]);
        let map = ColumnMap::from_header(&StringRecord::from(names)).unwrap();

        assert_eq!(map.index(Column::Name), 0);
    }

    #[test]
    fn test_cell_lookup() {
        let map = ColumnMap::from_header(&StringRecord::from(full_header())).unwrap();
        let mut row = vec![""; 41];
        row[map.index(Column::Category)] = "Greatsword";
        let record = StringRecord::from(row);

        assert_eq!(map.cell(&record, Column::Category), "Greatsword");
        assert_eq!(map.cell(&record, Column::Name), "");
    }
}
