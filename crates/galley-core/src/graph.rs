//! Bidirectional indices over the many-to-many join tables.
//!
//! The graph owns no entity data: it holds ids and the per-edge
//! multiplicities (`count`, `upgrade_count`, `levels`) that travel with a
//! join line, and answers "ingredients of this dish" / "dishes using this
//! ingredient" / "parties of this dish" / "dishes of this party" in O(1)
//! amortized. Building is linear in the number of join rows.
//!
//! Duplicate edges are preserved as distinct lines: a dish that lists the
//! same ingredient twice contributes two lines, and cost formulas sum over
//! lines, so the contributions add up implicitly.
//!
//! A join row whose endpoint id does not resolve is logged as a warning and
//! excluded; it never aborts the build.

use crate::dataset::Dataset;
use crate::id::*;
use std::collections::HashMap;

/// One dish-side recipe line, as stored on the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientLineRef {
    pub ingredient_id: IngredientId,
    pub count: u32,
    pub upgrade_count: u32,
    pub levels: u32,
}

/// One ingredient-side usage line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DishUseRef {
    pub dish_id: DishId,
    pub count: u32,
    pub upgrade_count: u32,
}

/// Hash-map-backed lookup structure over the join tables. Rebuilt fresh
/// every run, never persisted.
#[derive(Debug, Default)]
pub struct RelationGraph {
    dish_ingredients: HashMap<DishId, Vec<IngredientLineRef>>,
    ingredient_dishes: HashMap<IngredientId, Vec<DishUseRef>>,
    dish_parties: HashMap<DishId, Vec<PartyId>>,
    party_dishes: HashMap<PartyId, Vec<DishId>>,
}

impl RelationGraph {
    /// Index every join row in the dataset. Rows with a dangling endpoint
    /// are skipped with a warning.
    pub fn build(dataset: &Dataset) -> Self {
        let mut graph = Self::default();

        for join in &dataset.dish_ingredients {
            if dataset.dish(join.dish_id).is_none() {
                log::warn!(
                    "dish_ingredients: dish id {} not found, dropping join",
                    join.dish_id.0
                );
                continue;
            }
            if dataset.ingredient(join.ingredient_id).is_none() {
                log::warn!(
                    "dish_ingredients: ingredient id {} not found, dropping join",
                    join.ingredient_id.0
                );
                continue;
            }
            graph
                .dish_ingredients
                .entry(join.dish_id)
                .or_default()
                .push(IngredientLineRef {
                    ingredient_id: join.ingredient_id,
                    count: join.count,
                    upgrade_count: join.upgrade_count,
                    levels: join.levels,
                });
            graph
                .ingredient_dishes
                .entry(join.ingredient_id)
                .or_default()
                .push(DishUseRef {
                    dish_id: join.dish_id,
                    count: join.count,
                    upgrade_count: join.upgrade_count,
                });
        }

        for join in &dataset.dish_parties {
            if dataset.dish(join.dish_id).is_none() {
                log::warn!(
                    "dish_parties: dish id {} not found, dropping join",
                    join.dish_id.0
                );
                continue;
            }
            if dataset.party(join.party_id).is_none() {
                log::warn!(
                    "dish_parties: party id {} not found, dropping join",
                    join.party_id.0
                );
                continue;
            }
            graph
                .dish_parties
                .entry(join.dish_id)
                .or_default()
                .push(join.party_id);
            graph
                .party_dishes
                .entry(join.party_id)
                .or_default()
                .push(join.dish_id);
        }

        graph
    }

    /// Recipe lines of a dish, in join-row order.
    pub fn ingredients_of(&self, dish: DishId) -> &[IngredientLineRef] {
        self.dish_ingredients.get(&dish).map_or(&[], Vec::as_slice)
    }

    /// Usage lines of an ingredient, in join-row order.
    pub fn dishes_using(&self, ingredient: IngredientId) -> &[DishUseRef] {
        self.ingredient_dishes
            .get(&ingredient)
            .map_or(&[], Vec::as_slice)
    }

    /// Parties a dish is served at, in join-row order.
    pub fn parties_of(&self, dish: DishId) -> &[PartyId] {
        self.dish_parties.get(&dish).map_or(&[], Vec::as_slice)
    }

    /// Dishes served at a party, in join-row order.
    pub fn dishes_of(&self, party: PartyId) -> &[DishId] {
        self.party_dishes.get(&party).map_or(&[], Vec::as_slice)
    }
}
