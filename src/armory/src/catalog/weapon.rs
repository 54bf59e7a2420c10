//! Weapon catalog records
//!
//! Field order here is the key order of the generated JSON.

use serde::{Deserialize, Serialize};

/// One weapon in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub category: String,
    pub url: String,
    /// Added by the Shadow of the Erdtree expansion
    pub sote: bool,
    pub attack: Attack,
    pub sorcery_scaling: i64,
    pub incantation_scaling: i64,
    pub guard: Guard,
    pub scaling: Scaling,
    pub requirements: Requirements,
    pub damage_types: Vec<String>,
    pub weapon_skill: WeaponSkill,
    pub weight: f64,
    pub upgrade_type: String,
    pub passive_description: Option<String>,
    pub status_buildup: StatusBuildup,
}

/// Base attack power per damage type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    pub physical: f64,
    pub magic: f64,
    pub fire: f64,
    pub lightning: f64,
    pub holy: f64,
    pub critical: i64,
}

/// Damage negation while guarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guard {
    pub physical: f64,
    pub magic: f64,
    pub fire: f64,
    pub lightning: f64,
    pub holy: f64,
    pub boost: i64,
}

/// Scaling grade letter per attribute, `None` when the weapon doesn't scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scaling {
    pub strength: Option<String>,
    pub dexterity: Option<String>,
    pub intelligence: Option<String>,
    pub faith: Option<String>,
    pub arcane: Option<String>,
}

/// Minimum attribute values to wield the weapon without penalty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub strength: i64,
    pub dexterity: i64,
    pub intelligence: i64,
    pub faith: i64,
    pub arcane: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSkill {
    pub name: Option<String>,
    pub fp_cost: Option<FpCost>,
}

/// FP cost of a weapon skill
///
/// Usually a number, but some skills list a cost like `"10 (5)"` for charged
/// variants; those are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FpCost {
    Points(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBuildup {
    pub poison: i64,
    pub hemorrhage: i64,
    pub frostbite: i64,
    pub scarlet_rot: i64,
    pub sleep: i64,
    pub madness: i64,
    pub death_blight: i64,
}
