//! Validated base rows, post-validation and pre-enrichment.
//!
//! Every row here has already passed schema validation in `galley-data`:
//! ids are positive and unique within their namespace, names are unique and
//! non-blank, and join rows have had their name references resolved to ids
//! (with unresolvable joins dropped upstream). Enrichers may still encounter
//! dangling ids defensively, but never malformed fields.

use crate::id::*;
use std::collections::BTreeMap;

// ===========================================================================
// Base entities
// ===========================================================================

/// A dish as served in the restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct DishRow {
    pub id: DishId,
    pub name: String,
    /// Free-text classification, e.g. "Starter" or "Party".
    pub source: Option<String>,
    /// Price and servings at maximum upgrade level.
    pub final_price: i64,
    pub final_servings: i64,
    /// Price and servings at level 1.
    pub base_price: i64,
    pub base_servings: i64,
    /// Human-readable unlock condition.
    pub unlock: Option<String>,
    /// Story chapter number in which the dish becomes available.
    pub chapter: Option<u32>,
    /// Cooksta tier name required to serve the dish.
    pub cooksta: Option<String>,
    pub dlc: Option<String>,
    /// Staff member whose hiring unlocks the dish, and the level required.
    pub staff: Option<String>,
    pub staff_level: Option<u32>,
}

/// An ingredient obtainable by diving or from vendors.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientRow {
    pub id: IngredientId,
    pub name: String,
    /// Free-text classification, e.g. "Fish" or "Seasoning".
    pub source: Option<String>,
    /// Weight per catch, in kilograms.
    pub kg: Option<f64>,
    /// Maximum pieces of meat per catch.
    pub max_meats: Option<i64>,
    /// Buy price, when purchasable.
    pub cost: Option<i64>,
    /// Sell price, when sellable.
    pub sell: Option<i64>,
    pub chapter: Option<u32>,
    pub day: bool,
    pub night: bool,
    /// Per-vendor buy prices; only vendors that actually stock the
    /// ingredient appear here.
    pub vendors: BTreeMap<String, i64>,
}

/// A themed party night. Dishes served during the party sell at
/// `final_price * bonus`.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyRow {
    pub id: PartyId,
    pub name: String,
    pub bonus: f64,
    pub order: u32,
}

/// A hireable staff member.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffRow {
    pub id: StaffId,
    pub name: String,
    pub skill: Option<String>,
    pub order: u32,
}

/// A story chapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterRow {
    pub id: ChapterId,
    pub number: u32,
    pub name: String,
}

/// A downloadable content pack.
#[derive(Debug, Clone, PartialEq)]
pub struct DlcRow {
    pub id: DlcId,
    pub name: String,
    pub order: u32,
}

/// A cooksta tier (restaurant rank). Rank 1 is the lowest tier.
#[derive(Debug, Clone, PartialEq)]
pub struct CookstaTierRow {
    pub id: CookstaTierId,
    pub name: String,
    pub rank: u32,
}

// ===========================================================================
// Join rows
// ===========================================================================

/// One recipe line: a dish uses `count` units of an ingredient, and
/// `upgrade_count` more per upgrade level. Duplicate (dish, ingredient)
/// pairs are legal and kept as distinct lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DishIngredientRow {
    pub dish_id: DishId,
    pub ingredient_id: IngredientId,
    pub count: u32,
    pub upgrade_count: u32,
    pub levels: u32,
}

/// Marks a dish as servable during a party.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DishPartyRow {
    pub dish_id: DishId,
    pub party_id: PartyId,
}
