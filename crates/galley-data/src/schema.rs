//! Serde structs for the on-disk table formats.
//!
//! These mirror the source spreadsheets: scalar columns, optional columns
//! as `Option`, and name-based references in the join tables (numeric ids
//! are resolved during validation). They deserialize from RON, JSON, or
//! TOML; TOML files wrap their list under the table's key.

use serde::Deserialize;
use std::collections::BTreeMap;

// ===========================================================================
// Base entity rows
// ===========================================================================

/// A dish row as exported.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDish {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub source: Option<String>,
    pub final_price: i64,
    pub final_servings: i64,
    #[serde(default)]
    pub base_price: i64,
    #[serde(default = "default_servings")]
    pub base_servings: i64,
    #[serde(default)]
    pub unlock: Option<String>,
    #[serde(default)]
    pub chapter: Option<u32>,
    #[serde(default)]
    pub cooksta: Option<String>,
    #[serde(default)]
    pub dlc: Option<String>,
    #[serde(default)]
    pub staff: Option<String>,
    #[serde(default)]
    pub staff_level: Option<u32>,
}

fn default_servings() -> i64 {
    1
}

/// An ingredient row. Vendor columns arrive as a sparse map; a `null`
/// price means the vendor does not stock the ingredient.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIngredient {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub kg: Option<f64>,
    #[serde(default)]
    pub max_meats: Option<i64>,
    #[serde(default)]
    pub cost: Option<i64>,
    #[serde(default)]
    pub sell: Option<i64>,
    #[serde(default)]
    pub chapter: Option<u32>,
    #[serde(default)]
    pub day: bool,
    #[serde(default)]
    pub night: bool,
    #[serde(default)]
    pub vendors: BTreeMap<String, Option<i64>>,
}

/// A party row.
#[derive(Debug, Clone, Deserialize)]
pub struct RawParty {
    pub id: u32,
    pub name: String,
    pub bonus: f64,
    pub order: u32,
}

/// A staff row.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStaff {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub skill: Option<String>,
    pub order: u32,
}

/// A chapter row.
#[derive(Debug, Clone, Deserialize)]
pub struct RawChapter {
    pub id: u32,
    pub number: u32,
    pub name: String,
}

/// A DLC row.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDlc {
    pub id: u32,
    pub name: String,
    pub order: u32,
}

/// A cooksta tier row.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCookstaTier {
    pub id: u32,
    pub name: String,
    pub rank: u32,
}

// ===========================================================================
// Join rows (name references, resolved during validation)
// ===========================================================================

/// A dish-uses-ingredient join row.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDishIngredient {
    pub dish: String,
    pub ingredient: String,
    pub count: u32,
    #[serde(default)]
    pub upgrade_count: u32,
    #[serde(default)]
    pub levels: u32,
}

/// A dish-servable-at-party join row.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDishParty {
    pub dish: String,
    pub party: String,
}

// ===========================================================================
// Tests
// ===========================================================================
