//! Dish enrichment: recipe economics, party fan-out, search strings.
//!
//! The economics contract, end to end:
//!
//! - `line_cost = count * unit_cost`, where `unit_cost` is the ingredient's
//!   buy price, falling back to its sell price, falling back to 0. Missing
//!   price data degrades to a zero contribution on purpose: cost math never
//!   fails.
//! - `recipe_cost` sums line costs; `upgrade_cost` sums
//!   `unit_cost * upgrade_count` and prices upgrading the recipe, not
//!   cooking it once.
//! - `final_revenue = final_price * final_servings`;
//!   `final_profit = final_revenue - recipe_cost`; per-serving profit rounds
//!   once, half away from zero.
//! - Each (dish, party) join yields one [`EnrichedPartyDish`] with the same
//!   formulas under the party's bonus multiplier. `max_profit_per_serving`
//!   takes the best per-serving outcome across the base dish and all its
//!   parties, keeping the base value on ties.

use crate::dataset::Dataset;
use crate::graph::RelationGraph;
use crate::id::*;
use crate::money::{per_serving, per_serving_f64, round_half_away};
use crate::text::{sort_key, SearchBuilder};
use serde::Serialize;

/// One costed recipe line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLine {
    pub ingredient_id: IngredientId,
    pub count: u32,
    pub upgrade_count: u32,
    pub unit_cost: i64,
    pub line_cost: i64,
}

/// A dish with every derived field the frontend reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedDish {
    pub id: DishId,
    pub name: String,
    pub source: Option<String>,
    pub final_price: i64,
    pub final_servings: i64,
    pub base_price: i64,
    pub base_servings: i64,
    pub unlock: Option<String>,
    pub chapter: Option<u32>,
    pub cooksta: Option<String>,
    pub dlc: Option<String>,
    pub staff: Option<String>,
    pub staff_level: Option<u32>,
    pub ingredient_lines: Vec<IngredientLine>,
    pub recipe_cost: i64,
    pub upgrade_cost: i64,
    pub final_revenue: i64,
    pub final_profit: i64,
    pub final_profit_per_serving: i64,
    pub max_profit_per_serving: i64,
    pub party_dish_ids: Vec<PartyDishId>,
    pub search: String,
    /// Pre-lowercased name for comparator use.
    pub name_key: String,
}

/// One dish's economics under one party's bonus multiplier. Fully derived:
/// created once per build, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPartyDish {
    pub id: PartyDishId,
    pub dish_id: DishId,
    pub party_id: PartyId,
    pub name: String,
    pub party_name: String,
    pub bonus: f64,
    pub final_servings: i64,
    pub recipe_cost: i64,
    pub party_price: f64,
    pub party_revenue: f64,
    pub party_profit: i64,
    pub party_profit_per_serving: i64,
    pub search: String,
    pub name_key: String,
}

/// Enrich every dish and derive the synthetic party-dish rows.
///
/// Party-dish ids are assigned sequentially from 1, in dish input order and
/// join-row order within a dish, so they are stable for identical input.
pub fn enrich_dishes(
    dataset: &Dataset,
    graph: &RelationGraph,
) -> (Vec<EnrichedDish>, Vec<EnrichedPartyDish>) {
    let mut dishes = Vec::with_capacity(dataset.dishes.len());
    let mut party_dishes = Vec::new();
    let mut next_party_dish = 1u32;

    for row in &dataset.dishes {
        let mut lines = Vec::new();
        let mut recipe_cost = 0i64;
        let mut upgrade_cost = 0i64;
        let mut search = SearchBuilder::new();
        search
            .push(&row.name)
            .push_opt(row.dlc.as_deref())
            .push_opt(row.unlock.as_deref());

        for line in graph.ingredients_of(row.id) {
            let Some(ingredient) = dataset.ingredient(line.ingredient_id) else {
                log::warn!(
                    "dish '{}': ingredient id {} not found, skipping line",
                    row.name,
                    line.ingredient_id.0
                );
                continue;
            };
            let unit_cost = ingredient.cost.or(ingredient.sell).unwrap_or(0);
            let line_cost = i64::from(line.count) * unit_cost;
            recipe_cost += line_cost;
            upgrade_cost += i64::from(line.upgrade_count) * unit_cost;
            search.push(&ingredient.name);
            lines.push(IngredientLine {
                ingredient_id: line.ingredient_id,
                count: line.count,
                upgrade_count: line.upgrade_count,
                unit_cost,
                line_cost,
            });
        }

        let final_revenue = row.final_price * row.final_servings;
        let final_profit = final_revenue - recipe_cost;
        let final_profit_per_serving = per_serving(final_profit, row.final_servings);
        let mut max_profit_per_serving = final_profit_per_serving;

        let mut party_dish_ids = Vec::new();
        for &party_id in graph.parties_of(row.id) {
            let Some(party) = dataset.party(party_id) else {
                log::warn!(
                    "dish '{}': party id {} not found, skipping pairing",
                    row.name,
                    party_id.0
                );
                continue;
            };
            let id = PartyDishId(next_party_dish);
            next_party_dish += 1;

            let party_price = row.final_price as f64 * party.bonus;
            let party_revenue = party_price * row.final_servings as f64;
            // Both figures round the unrounded total exactly once each;
            // deriving the per-serving value from the rounded profit would
            // round twice.
            let raw_profit = party_revenue - recipe_cost as f64;
            let party_profit = round_half_away(raw_profit);
            let party_profit_per_serving = per_serving_f64(raw_profit, row.final_servings);
            // Strict comparison keeps the first-seen (base) value on ties.
            if party_profit_per_serving > max_profit_per_serving {
                max_profit_per_serving = party_profit_per_serving;
            }

            let mut pd_search = SearchBuilder::new();
            pd_search.push(&row.name).push(&party.name);
            party_dishes.push(EnrichedPartyDish {
                id,
                dish_id: row.id,
                party_id,
                name: row.name.clone(),
                party_name: party.name.clone(),
                bonus: party.bonus,
                final_servings: row.final_servings,
                recipe_cost,
                party_price,
                party_revenue,
                party_profit,
                party_profit_per_serving,
                search: pd_search.finish(),
                name_key: sort_key(&row.name),
            });
            party_dish_ids.push(id);
        }

        dishes.push(EnrichedDish {
            id: row.id,
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
            ingredient_lines: lines,
            recipe_cost,
            upgrade_cost,
            final_revenue,
            final_profit,
            final_profit_per_serving,
            max_profit_per_serving,
            party_dish_ids,
            search: search.finish(),
            name_key: sort_key(&row.name),
        });
    }

    (dishes, party_dishes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use crate::row::DishPartyRow;

    fn enriched() -> (Vec<EnrichedDish>, Vec<EnrichedPartyDish>) {
        let ds = small_dataset();
        let graph = RelationGraph::build(&ds);
        enrich_dishes(&ds, &graph)
    }

    // -----------------------------------------------------------------------
    // Worked example: Seaweed Salad (price 100 x 2, line 2 x 5, bonus 1.5)
    // -----------------------------------------------------------------------

    #[test]
    fn base_economics_match_worked_example() {
        let (dishes, _) = enriched();
        let salad = &dishes[0];
        assert_eq!(salad.recipe_cost, 10);
        assert_eq!(salad.final_revenue, 200);
        assert_eq!(salad.final_profit, 190);
        assert_eq!(salad.final_profit_per_serving, 95);
    }

    #[test]
    fn party_economics_match_worked_example() {
        let (dishes, party_dishes) = enriched();
        let pd = &party_dishes[0];
        assert_eq!(pd.dish_id, DishId(1));
        assert_eq!(pd.party_id, PartyId(1));
        assert!((pd.party_price - 150.0).abs() < f64::EPSILON);
        assert!((pd.party_revenue - 300.0).abs() < f64::EPSILON);
        assert_eq!(pd.party_profit, 290);
        assert_eq!(pd.party_profit_per_serving, 145);
        assert_eq!(dishes[0].max_profit_per_serving, 145);
    }

    #[test]
    fn profit_formula_round_trip() {
        let (dishes, party_dishes) = enriched();
        for pd in &party_dishes {
            let dish = dishes.iter().find(|d| d.id == pd.dish_id).unwrap();
            let expected = round_half_away(
                (dish.final_price as f64 * pd.bonus * dish.final_servings as f64
                    - dish.recipe_cost as f64)
                    / dish.final_servings as f64,
            );
            assert_eq!(pd.party_profit_per_serving, expected);
        }
    }

    #[test]
    fn fractional_bonus_rounds_per_serving_profit_once() {
        let mut ds = small_dataset();
        // 101 * 1.25 * 2 - 2 = 250.5; per serving 125.25 -> 125. Rounding
        // the total profit first (251) and dividing after would give 126.
        ds.dishes[0].final_price = 101;
        ds.parties[0].bonus = 1.25;
        ds.ingredients[0].cost = Some(1);
        let graph = RelationGraph::build(&ds);
        let (_, party_dishes) = enrich_dishes(&ds, &graph);
        let pd = &party_dishes[0];
        assert_eq!(pd.party_profit, 251);
        assert_eq!(pd.party_profit_per_serving, 125);
    }

    // -----------------------------------------------------------------------
    // Cost fallbacks and aggregates
    // -----------------------------------------------------------------------

    #[test]
    fn unit_cost_falls_back_cost_then_sell_then_zero() {
        let (dishes, _) = enriched();
        // Tuna Nigiri: tuna has no buy price, sells for 400; seaweed buys at 5.
        let nigiri = &dishes[1];
        assert_eq!(nigiri.ingredient_lines[0].unit_cost, 400);
        assert_eq!(nigiri.ingredient_lines[1].unit_cost, 5);
        assert_eq!(nigiri.recipe_cost, 405);
        // Glacier Special: mystery egg has neither price.
        let special = &dishes[2];
        assert_eq!(special.ingredient_lines[0].unit_cost, 0);
        assert_eq!(special.recipe_cost, 0);
        assert_eq!(special.final_profit, 250);
    }

    #[test]
    fn upgrade_cost_is_distinct_from_recipe_cost() {
        let (dishes, _) = enriched();
        // Salad: one line, upgrade_count 1, unit cost 5.
        assert_eq!(dishes[0].upgrade_cost, 5);
        // Nigiri: tuna upgrade_count 1 at 400, seaweed upgrade_count 0.
        assert_eq!(dishes[1].upgrade_cost, 400);
    }

    #[test]
    fn cost_conservation_over_lines() {
        let (dishes, _) = enriched();
        for dish in &dishes {
            let sum: i64 = dish.ingredient_lines.iter().map(|l| l.line_cost).sum();
            assert_eq!(dish.recipe_cost, sum, "dish {}", dish.name);
        }
    }

    #[test]
    fn max_profit_keeps_base_when_no_party_beats_it() {
        let ds = small_dataset();
        let graph = RelationGraph::build(&ds);
        let (dishes, _) = enrich_dishes(&ds, &graph);
        // Glacier Special has no parties at all.
        assert_eq!(
            dishes[2].max_profit_per_serving,
            dishes[2].final_profit_per_serving
        );
    }

    // -----------------------------------------------------------------------
    // Party-dish identity and search
    // -----------------------------------------------------------------------

    #[test]
    fn party_dish_ids_are_sequential_from_one() {
        let (dishes, party_dishes) = enriched();
        let ids: Vec<u32> = party_dishes.iter().map(|pd| pd.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(dishes[0].party_dish_ids, vec![PartyDishId(1)]);
        assert_eq!(dishes[1].party_dish_ids, vec![PartyDishId(2)]);
    }

    #[test]
    fn search_concatenates_name_dlc_unlock_and_ingredients() {
        let (dishes, _) = enriched();
        assert_eq!(dishes[0].search, "seaweed salad default seaweed");
        let special = &dishes[2];
        assert!(special.search.contains("glacier special"));
        assert!(special.search.contains("glacier"));
        assert!(special.search.contains("mystery egg"));
    }

    #[test]
    fn duplicate_lines_sum_into_recipe_cost() {
        let mut ds = small_dataset();
        ds.dish_ingredients.push(crate::row::DishIngredientRow {
            dish_id: DishId(1),
            ingredient_id: IngredientId(1),
            count: 3,
            upgrade_count: 0,
            levels: 0,
        });
        let graph = RelationGraph::build(&ds);
        let (dishes, _) = enrich_dishes(&ds, &graph);
        // 2*5 + 3*5, both lines kept.
        assert_eq!(dishes[0].ingredient_lines.len(), 2);
        assert_eq!(dishes[0].recipe_cost, 25);
    }

    #[test]
    fn dangling_party_join_skipped_without_poisoning_ids() {
        let mut ds = small_dataset();
        // Insert a dangling pairing before the valid ones.
        ds.dish_parties.insert(
            0,
            DishPartyRow {
                dish_id: DishId(999),
                party_id: PartyId(1),
            },
        );
        let graph = RelationGraph::build(&ds);
        let (_, party_dishes) = enrich_dishes(&ds, &graph);
        // The dangling row was already excluded by the graph; numbering is
        // unchanged.
        assert_eq!(party_dishes.len(), 2);
        assert_eq!(party_dishes[0].id, PartyDishId(1));
    }
}
