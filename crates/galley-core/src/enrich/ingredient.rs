//! Ingredient enrichment: the reverse view of the dish economics.

use crate::dataset::Dataset;
use crate::graph::RelationGraph;
use crate::id::*;
use crate::text::{sort_key, SearchBuilder};
use serde::Serialize;
use std::collections::BTreeMap;

/// One consuming dish, as seen from an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsedIn {
    pub dish_id: DishId,
    pub count: u32,
    pub upgrade_count: u32,
}

/// An ingredient with its derived fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedIngredient {
    pub id: IngredientId,
    pub name: String,
    pub source: Option<String>,
    pub kg: Option<f64>,
    pub max_meats: Option<i64>,
    pub cost: Option<i64>,
    pub sell: Option<i64>,
    pub chapter: Option<u32>,
    pub day: bool,
    pub night: bool,
    /// Sell value of a full catch per kilogram. `None` whenever any operand
    /// is missing or kg is zero -- never a computed zero.
    pub sell_per_kg: Option<f64>,
    pub vendors: BTreeMap<String, i64>,
    /// Consuming dishes, most valuable consumer first.
    pub used_in: Vec<UsedIn>,
    /// Parties reachable through any consuming dish, first-seen order.
    pub used_for_parties: Vec<PartyId>,
    pub search: String,
    pub name_key: String,
}

/// Enrich every ingredient.
pub fn enrich_ingredients(dataset: &Dataset, graph: &RelationGraph) -> Vec<EnrichedIngredient> {
    dataset
        .ingredients
        .iter()
        .map(|row| {
            let mut used_in: Vec<UsedIn> = graph
                .dishes_using(row.id)
                .iter()
                .map(|u| UsedIn {
                    dish_id: u.dish_id,
                    count: u.count,
                    upgrade_count: u.upgrade_count,
                })
                .collect();
            // Most valuable consumer first; ties by ascending dish id.
            used_in.sort_by(|a, b| {
                let price = |id: DishId| dataset.dish(id).map_or(0, |d| d.final_price);
                price(b.dish_id)
                    .cmp(&price(a.dish_id))
                    .then(a.dish_id.cmp(&b.dish_id))
            });

            let mut used_for_parties = Vec::new();
            for use_ref in graph.dishes_using(row.id) {
                for &party_id in graph.parties_of(use_ref.dish_id) {
                    if !used_for_parties.contains(&party_id) {
                        used_for_parties.push(party_id);
                    }
                }
            }

            let sell_per_kg = match (row.sell, row.max_meats, row.kg) {
                (Some(sell), Some(max_meats), Some(kg)) if kg != 0.0 => {
                    Some((sell * max_meats) as f64 / kg)
                }
                _ => None,
            };

            let mut search = SearchBuilder::new();
            search.push(&row.name).push_opt(row.source.as_deref());

            EnrichedIngredient {
                id: row.id,
                name: row.name.clone(),
                source: row.source.clone(),
                kg: row.kg,
                max_meats: row.max_meats,
                cost: row.cost,
                sell: row.sell,
                chapter: row.chapter,
                day: row.day,
                night: row.night,
                sell_per_kg,
                vendors: row.vendors.clone(),
                used_in,
                used_for_parties,
                search: search.finish(),
                name_key: sort_key(&row.name),
            }
        })
        .collect()
}
