//! Party enrichment.

use crate::dataset::Dataset;
use crate::enrich::dish::EnrichedPartyDish;
use crate::id::*;
use crate::text::{sort_key, SearchBuilder};
use serde::Serialize;

/// A party with its dish list pre-sorted, best deal first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedParty {
    pub id: PartyId,
    pub name: String,
    pub bonus: f64,
    pub order: u32,
    /// Party dishes ordered by descending party profit, so the frontend
    /// never re-sorts.
    pub party_dish_ids: Vec<PartyDishId>,
    pub search: String,
    pub name_key: String,
}

/// Enrich every party from the already-derived party-dish rows.
pub fn enrich_parties(dataset: &Dataset, party_dishes: &[EnrichedPartyDish]) -> Vec<EnrichedParty> {
    dataset
        .parties
        .iter()
        .map(|row| {
            let mut own: Vec<&EnrichedPartyDish> = party_dishes
                .iter()
                .filter(|pd| pd.party_id == row.id)
                .collect();
            own.sort_by(|a, b| b.party_profit.cmp(&a.party_profit).then(a.id.cmp(&b.id)));

            let mut search = SearchBuilder::new();
            search.push(&row.name);

            EnrichedParty {
                id: row.id,
                name: row.name.clone(),
                bonus: row.bonus,
                order: row.order,
                party_dish_ids: own.iter().map(|pd| pd.id).collect(),
                search: search.finish(),
                name_key: sort_key(&row.name),
            }
        })
        .collect()
}
