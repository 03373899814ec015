//! Row validation: raw rows in, a frozen `Dataset` out.
//!
//! Two very different failure modes live here, on purpose:
//!
//! - **Schema violations** (bad ranges, blank or duplicate names, duplicate
//!   ids) are fatal. The error names the table, the 1-based row position
//!   (counting the header row of the source spreadsheet, so the first data
//!   row is row 2), and every violated field of that row.
//! - **Unresolvable join references** are recoverable: the join row is
//!   dropped with a warning and the build continues, so one bad reference
//!   never takes down the bundles for everything else.

use crate::loader::RawTables;
use galley_core::dataset::Dataset;
use galley_core::id::*;
use galley_core::row::*;
use std::collections::{BTreeMap, HashMap, HashSet};

/// A fatal schema violation.
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    #[error("{table} row {row}: {issues}")]
    Row {
        table: &'static str,
        row: usize,
        issues: String,
    },
}

/// First data row of a table is row 2: row 1 is the header.
fn row_error(table: &'static str, index: usize, issues: Vec<String>) -> ValidateError {
    ValidateError::Row {
        table,
        row: index + 2,
        issues: issues.join("; "),
    }
}

/// Common id/name checks shared by every base table.
fn check_identity(
    id: u32,
    name: &str,
    seen_ids: &mut HashSet<u32>,
    seen_names: &mut HashSet<String>,
    issues: &mut Vec<String>,
) {
    if id == 0 {
        issues.push("id: must be a positive integer".to_string());
    } else if !seen_ids.insert(id) {
        issues.push(format!("id: duplicate id {id}"));
    }
    if name.trim().is_empty() {
        issues.push("name: must not be blank".to_string());
    } else if !seen_names.insert(name.to_string()) {
        issues.push(format!("name: duplicate name '{name}'"));
    }
}

/// Validate every table and freeze the result.
pub fn validate_tables(raw: RawTables) -> Result<Dataset, ValidateError> {
    // ------------------------------------------------------------------
    // Base tables: fatal on the first bad row, all field issues reported.
    // ------------------------------------------------------------------

    let mut dishes = Vec::with_capacity(raw.dishes.len());
    let mut dish_ids_by_name: HashMap<String, DishId> = HashMap::new();
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();
    for (i, row) in raw.dishes.iter().enumerate() {
        let mut issues = Vec::new();
        check_identity(row.id, &row.name, &mut seen_ids, &mut seen_names, &mut issues);
        if row.final_price <= 0 {
            issues.push(format!("final_price: must be > 0, got {}", row.final_price));
        }
        if row.final_servings < 1 {
            issues.push(format!(
                "final_servings: must be >= 1, got {}",
                row.final_servings
            ));
        }
        if row.base_servings < 1 {
            issues.push(format!(
                "base_servings: must be >= 1, got {}",
                row.base_servings
            ));
        }
        if row.chapter == Some(0) {
            issues.push("chapter: must be >= 1".to_string());
        }
        if !issues.is_empty() {
            return Err(row_error("dishes", i, issues));
        }
        let id = DishId(row.id);
        dish_ids_by_name.insert(row.name.clone(), id);
        dishes.push(DishRow {
            id,
            name: row.name.clone(),
            source: row.source.clone(),
            final_price: row.final_price,
            final_servings: row.final_servings,
            base_price: row.base_price,
            base_servings: row.base_servings,
            unlock: row.unlock.clone(),
            chapter: row.chapter,
            cooksta: row.cooksta.clone(),
            dlc: row.dlc.clone(),
            staff: row.staff.clone(),
            staff_level: row.staff_level,
        });
    }

    let mut ingredients = Vec::with_capacity(raw.ingredients.len());
    let mut ingredient_ids_by_name: HashMap<String, IngredientId> = HashMap::new();
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();
    for (i, row) in raw.ingredients.iter().enumerate() {
        let mut issues = Vec::new();
        check_identity(row.id, &row.name, &mut seen_ids, &mut seen_names, &mut issues);
        if let Some(cost) = row.cost {
            if cost < 0 {
                issues.push(format!("cost: must be >= 0, got {cost}"));
            }
        }
        if let Some(sell) = row.sell {
            if sell < 0 {
                issues.push(format!("sell: must be >= 0, got {sell}"));
            }
        }
        if row.chapter == Some(0) {
            issues.push("chapter: must be >= 1".to_string());
        }
        if !issues.is_empty() {
            return Err(row_error("ingredients", i, issues));
        }
        let id = IngredientId(row.id);
        ingredient_ids_by_name.insert(row.name.clone(), id);
        // A null vendor price means "not stocked"; only real prices survive.
        let vendors: BTreeMap<String, i64> = row
            .vendors
            .iter()
            .filter_map(|(vendor, price)| price.map(|p| (vendor.clone(), p)))
            .collect();
        ingredients.push(IngredientRow {
            id,
            name: row.name.clone(),
            source: row.source.clone(),
            kg: row.kg,
            max_meats: row.max_meats,
            cost: row.cost,
            sell: row.sell,
            chapter: row.chapter,
            day: row.day,
            night: row.night,
            vendors,
        });
    }

    let mut parties = Vec::with_capacity(raw.parties.len());
    let mut party_ids_by_name: HashMap<String, PartyId> = HashMap::new();
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();
    for (i, row) in raw.parties.iter().enumerate() {
        let mut issues = Vec::new();
        check_identity(row.id, &row.name, &mut seen_ids, &mut seen_names, &mut issues);
        if !(row.bonus.is_finite() && row.bonus > 0.0) {
            issues.push(format!("bonus: must be a positive number, got {}", row.bonus));
        }
        if !issues.is_empty() {
            return Err(row_error("parties", i, issues));
        }
        let id = PartyId(row.id);
        party_ids_by_name.insert(row.name.clone(), id);
        parties.push(PartyRow {
            id,
            name: row.name.clone(),
            bonus: row.bonus,
            order: row.order,
        });
    }

    let mut staff = Vec::with_capacity(raw.staff.len());
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();
    for (i, row) in raw.staff.iter().enumerate() {
        let mut issues = Vec::new();
        check_identity(row.id, &row.name, &mut seen_ids, &mut seen_names, &mut issues);
        if !issues.is_empty() {
            return Err(row_error("staff", i, issues));
        }
        staff.push(StaffRow {
            id: StaffId(row.id),
            name: row.name.clone(),
            skill: row.skill.clone(),
            order: row.order,
        });
    }

    let mut chapters = Vec::with_capacity(raw.chapters.len());
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();
    let mut seen_numbers = HashSet::new();
    for (i, row) in raw.chapters.iter().enumerate() {
        let mut issues = Vec::new();
        check_identity(row.id, &row.name, &mut seen_ids, &mut seen_names, &mut issues);
        if row.number < 1 {
            issues.push("number: must be >= 1".to_string());
        } else if !seen_numbers.insert(row.number) {
            issues.push(format!("number: duplicate chapter number {}", row.number));
        }
        if !issues.is_empty() {
            return Err(row_error("chapters", i, issues));
        }
        chapters.push(ChapterRow {
            id: ChapterId(row.id),
            number: row.number,
            name: row.name.clone(),
        });
    }

    let mut dlcs = Vec::with_capacity(raw.dlcs.len());
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();
    for (i, row) in raw.dlcs.iter().enumerate() {
        let mut issues = Vec::new();
        check_identity(row.id, &row.name, &mut seen_ids, &mut seen_names, &mut issues);
        if !issues.is_empty() {
            return Err(row_error("dlcs", i, issues));
        }
        dlcs.push(DlcRow {
            id: DlcId(row.id),
            name: row.name.clone(),
            order: row.order,
        });
    }

    let mut cooksta = Vec::with_capacity(raw.cooksta.len());
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();
    let mut seen_ranks = HashSet::new();
    for (i, row) in raw.cooksta.iter().enumerate() {
        let mut issues = Vec::new();
        check_identity(row.id, &row.name, &mut seen_ids, &mut seen_names, &mut issues);
        if row.rank < 1 {
            issues.push("rank: must be >= 1".to_string());
        } else if !seen_ranks.insert(row.rank) {
            issues.push(format!("rank: duplicate rank {}", row.rank));
        }
        if !issues.is_empty() {
            return Err(row_error("cooksta", i, issues));
        }
        cooksta.push(CookstaTierRow {
            id: CookstaTierId(row.id),
            name: row.name.clone(),
            rank: row.rank,
        });
    }

    // ------------------------------------------------------------------
    // Join tables: bad ranges are fatal, unresolvable names are dropped.
    // ------------------------------------------------------------------

    let mut dish_ingredients = Vec::with_capacity(raw.dish_ingredients.len());
    for (i, row) in raw.dish_ingredients.iter().enumerate() {
        if row.count < 1 {
            return Err(row_error(
                "dish_ingredients",
                i,
                vec!["count: must be > 0".to_string()],
            ));
        }
        let Some(&dish_id) = dish_ids_by_name.get(&row.dish) else {
            log::warn!("dish_ingredients: unknown dish '{}', dropping join", row.dish);
            continue;
        };
        let Some(&ingredient_id) = ingredient_ids_by_name.get(&row.ingredient) else {
            log::warn!(
                "dish_ingredients: unknown ingredient '{}', dropping join",
                row.ingredient
            );
            continue;
        };
        dish_ingredients.push(DishIngredientRow {
            dish_id,
            ingredient_id,
            count: row.count,
            upgrade_count: row.upgrade_count,
            levels: row.levels,
        });
    }

    let mut dish_parties = Vec::with_capacity(raw.dish_parties.len());
    for row in &raw.dish_parties {
        let Some(&dish_id) = dish_ids_by_name.get(&row.dish) else {
            log::warn!("dish_parties: unknown dish '{}', dropping join", row.dish);
            continue;
        };
        let Some(&party_id) = party_ids_by_name.get(&row.party) else {
            log::warn!("dish_parties: unknown party '{}', dropping join", row.party);
            continue;
        };
        dish_parties.push(DishPartyRow { dish_id, party_id });
    }

    Ok(Dataset::new(
        dishes,
        ingredients,
        parties,
        staff,
        chapters,
        dlcs,
        cooksta,
        dish_ingredients,
        dish_parties,
    ))
}
