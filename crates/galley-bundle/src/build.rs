//! Per-entity bundle builders and the whole-pipeline entry point.
//!
//! Sort fields, like facet names, are closed enums: each entity type
//! declares the exact (field, direction) pairs it exports, and `value`
//! extracts the comparator key for one entity. A field that can be absent
//! maps to [`SortValue::Missing`], never to a sentinel number.
//!
//! [`build_all`] is the pipeline: index the joins, enrich every entity,
//! then assemble one [`Bundle`] per entity type.

use crate::bundle::{Bundle, FacetMap, SCHEMA_VERSION};
use crate::facet::{
    effective_chapter, DishFacet, FacetAccumulator, IngredientFacet, PartyDishFacet, StaffFacet,
};
use crate::sort::{materialize, Direction, SortValue};
use galley_core::dataset::Dataset;
use galley_core::enrich::{
    enrich_chapters, enrich_cooksta, enrich_dishes, enrich_dlcs, enrich_ingredients,
    enrich_parties, enrich_staff, EnrichedChapter, EnrichedCookstaTier, EnrichedDish, EnrichedDlc,
    EnrichedIngredient, EnrichedParty, EnrichedPartyDish, EnrichedStaff,
};
use galley_core::graph::RelationGraph;
use galley_core::id::*;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Sort fields
// ---------------------------------------------------------------------------

/// Exported sort orders of the dish bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishSort {
    Name,
    FinalPrice,
    FinalProfitPerServing,
    MaxProfitPerServing,
    RecipeCost,
    FinalServings,
}

impl DishSort {
    pub const SPECS: &'static [(DishSort, Direction)] = &[
        (DishSort::Name, Direction::Ascending),
        (DishSort::FinalPrice, Direction::Descending),
        (DishSort::FinalProfitPerServing, Direction::Descending),
        (DishSort::MaxProfitPerServing, Direction::Descending),
        (DishSort::RecipeCost, Direction::Ascending),
        (DishSort::FinalServings, Direction::Descending),
    ];

    pub fn key(self) -> &'static str {
        match self {
            DishSort::Name => "name",
            DishSort::FinalPrice => "finalPrice",
            DishSort::FinalProfitPerServing => "finalProfitPerServing",
            DishSort::MaxProfitPerServing => "maxProfitPerServing",
            DishSort::RecipeCost => "recipeCost",
            DishSort::FinalServings => "finalServings",
        }
    }

    pub fn value(self, dish: &EnrichedDish) -> SortValue {
        match self {
            DishSort::Name => SortValue::Str(dish.name_key.clone()),
            DishSort::FinalPrice => SortValue::num(dish.final_price as f64),
            DishSort::FinalProfitPerServing => {
                SortValue::num(dish.final_profit_per_serving as f64)
            }
            DishSort::MaxProfitPerServing => SortValue::num(dish.max_profit_per_serving as f64),
            DishSort::RecipeCost => SortValue::num(dish.recipe_cost as f64),
            DishSort::FinalServings => SortValue::num(dish.final_servings as f64),
        }
    }
}

/// Exported sort orders of the ingredient bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientSort {
    Name,
    Cost,
    Sell,
    SellPerKg,
}

impl IngredientSort {
    pub const SPECS: &'static [(IngredientSort, Direction)] = &[
        (IngredientSort::Name, Direction::Ascending),
        (IngredientSort::Cost, Direction::Ascending),
        (IngredientSort::Sell, Direction::Descending),
        (IngredientSort::SellPerKg, Direction::Descending),
    ];

    pub fn key(self) -> &'static str {
        match self {
            IngredientSort::Name => "name",
            IngredientSort::Cost => "cost",
            IngredientSort::Sell => "sell",
            IngredientSort::SellPerKg => "sellPerKg",
        }
    }

    pub fn value(self, ingredient: &EnrichedIngredient) -> SortValue {
        match self {
            IngredientSort::Name => SortValue::Str(ingredient.name_key.clone()),
            IngredientSort::Cost => SortValue::opt_num(ingredient.cost.map(|v| v as f64)),
            IngredientSort::Sell => SortValue::opt_num(ingredient.sell.map(|v| v as f64)),
            IngredientSort::SellPerKg => SortValue::opt_num(ingredient.sell_per_kg),
        }
    }
}

/// Exported sort orders of the party-dish bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyDishSort {
    Name,
    PartyProfitPerServing,
}

impl PartyDishSort {
    pub const SPECS: &'static [(PartyDishSort, Direction)] = &[
        (PartyDishSort::Name, Direction::Ascending),
        (PartyDishSort::PartyProfitPerServing, Direction::Descending),
    ];

    pub fn key(self) -> &'static str {
        match self {
            PartyDishSort::Name => "name",
            PartyDishSort::PartyProfitPerServing => "partyProfitPerServing",
        }
    }

    pub fn value(self, pd: &EnrichedPartyDish) -> SortValue {
        match self {
            PartyDishSort::Name => SortValue::Str(pd.name_key.clone()),
            PartyDishSort::PartyProfitPerServing => {
                SortValue::num(pd.party_profit_per_serving as f64)
            }
        }
    }
}

/// Map key for one materialized order, e.g. `finalPrice.desc`.
fn order_key(field: &'static str, dir: Direction) -> String {
    format!("{field}.{}", dir.suffix())
}

/// Materialize every (field, direction) order for one entity list.
fn sorted_orders<Id, E, F>(
    entities: &[E],
    id_of: impl Fn(&E) -> Id,
    specs: &[(F, Direction)],
    key_of: impl Fn(F) -> &'static str,
    value_of: impl Fn(F, &E) -> SortValue,
) -> BTreeMap<String, Vec<Id>>
where
    Id: Ord + Copy,
    F: Copy,
{
    specs
        .iter()
        .map(|&(field, dir)| {
            let entries = entities
                .iter()
                .map(|e| (id_of(e), value_of(field, e)))
                .collect();
            (order_key(key_of(field), dir), materialize(entries, dir))
        })
        .collect()
}

/// The two orders every auxiliary entity type exports: name ascending and
/// explicit display order ascending.
fn name_and_order<Id: Ord + Copy, E>(
    entities: &[E],
    id_of: impl Fn(&E) -> Id,
    name_key_of: impl Fn(&E) -> &str,
    order_of: impl Fn(&E) -> u32,
) -> BTreeMap<String, Vec<Id>> {
    let mut map = BTreeMap::new();
    let by_name = entities
        .iter()
        .map(|e| (id_of(e), SortValue::str(name_key_of(e))))
        .collect();
    map.insert(
        order_key("name", Direction::Ascending),
        materialize(by_name, Direction::Ascending),
    );
    let by_order = entities
        .iter()
        .map(|e| (id_of(e), SortValue::num(order_of(e) as f64)))
        .collect();
    map.insert(
        order_key("order", Direction::Ascending),
        materialize(by_order, Direction::Ascending),
    );
    map
}

// ---------------------------------------------------------------------------
// Per-entity builders
// ---------------------------------------------------------------------------

fn dish_facets(dishes: &[EnrichedDish], dataset: &Dataset) -> FacetMap<DishId> {
    let mut acc = FacetAccumulator::new();
    let max_chapter = dataset.max_chapter();
    let max_rank = dataset.max_cooksta_rank();
    let rank_names: BTreeMap<u32, &str> = dataset
        .cooksta
        .iter()
        .map(|t| (t.rank, t.name.as_str()))
        .collect();

    for dish in dishes {
        if let Some(source) = &dish.source {
            acc.insert(DishFacet::Source.key(), source.clone(), dish.id);
        }
        if let Some(dlc) = &dish.dlc {
            acc.insert(DishFacet::Dlc.key(), dlc.clone(), dish.id);
        }

        // A dish is available from the latest chapter among its own unlock
        // and its ingredients' unlocks, through the end of the game.
        let unlock = effective_chapter(
            dish.chapter,
            dish.ingredient_lines.iter().filter_map(|line| {
                dataset
                    .ingredient(line.ingredient_id)
                    .and_then(|g| g.chapter)
            }),
        );
        for chapter in unlock..=max_chapter {
            acc.insert(DishFacet::Chapter.key(), chapter.to_string(), dish.id);
        }

        // No tier requirement means available from the first tier on. An
        // unknown tier name is an unresolvable reference: warn, then degrade
        // the same way.
        let unlock_rank = match dish.cooksta.as_deref() {
            None => 1,
            Some(name) => dataset.cooksta_rank(name).unwrap_or_else(|| {
                log::warn!(
                    "dish '{}': unknown cooksta tier '{}', treating as available from the first tier",
                    dish.name,
                    name
                );
                1
            }),
        };
        for rank in unlock_rank..=max_rank {
            if let Some(name) = rank_names.get(&rank) {
                acc.insert(DishFacet::Cooksta.key(), *name, dish.id);
            }
        }
    }
    acc.finish()
}

fn build_dish_bundle(dishes: Vec<EnrichedDish>, dataset: &Dataset) -> Bundle<DishId, EnrichedDish> {
    let facets = dish_facets(&dishes, dataset);
    let sorted_ids = sorted_orders(
        &dishes,
        |d| d.id,
        DishSort::SPECS,
        DishSort::key,
        DishSort::value,
    );
    Bundle {
        schema_version: SCHEMA_VERSION,
        by_id: dishes.into_iter().map(|d| (d.id, d)).collect(),
        facets,
        sorted_ids,
    }
}

fn ingredient_facets(
    ingredients: &[EnrichedIngredient],
    dataset: &Dataset,
) -> FacetMap<IngredientId> {
    let mut acc = FacetAccumulator::new();
    let max_chapter = dataset.max_chapter();

    for ingredient in ingredients {
        if let Some(source) = &ingredient.source {
            acc.insert(IngredientFacet::Source.key(), source.clone(), ingredient.id);
        }
        for vendor in ingredient.vendors.keys() {
            acc.insert(IngredientFacet::Vendor.key(), vendor.clone(), ingredient.id);
        }
        if ingredient.day {
            acc.insert(IngredientFacet::Time.key(), "Day", ingredient.id);
        }
        if ingredient.night {
            acc.insert(IngredientFacet::Time.key(), "Night", ingredient.id);
        }
        let unlock = effective_chapter(ingredient.chapter, std::iter::empty());
        for chapter in unlock..=max_chapter {
            acc.insert(
                IngredientFacet::Chapter.key(),
                chapter.to_string(),
                ingredient.id,
            );
        }
    }
    acc.finish()
}

fn build_ingredient_bundle(
    ingredients: Vec<EnrichedIngredient>,
    dataset: &Dataset,
) -> Bundle<IngredientId, EnrichedIngredient> {
    let facets = ingredient_facets(&ingredients, dataset);
    let sorted_ids = sorted_orders(
        &ingredients,
        |g| g.id,
        IngredientSort::SPECS,
        IngredientSort::key,
        IngredientSort::value,
    );
    Bundle {
        schema_version: SCHEMA_VERSION,
        by_id: ingredients.into_iter().map(|g| (g.id, g)).collect(),
        facets,
        sorted_ids,
    }
}

fn build_party_dish_bundle(
    party_dishes: Vec<EnrichedPartyDish>,
) -> Bundle<PartyDishId, EnrichedPartyDish> {
    let mut acc = FacetAccumulator::new();
    for pd in &party_dishes {
        acc.insert(PartyDishFacet::Party.key(), pd.party_name.clone(), pd.id);
    }
    let sorted_ids = sorted_orders(
        &party_dishes,
        |pd| pd.id,
        PartyDishSort::SPECS,
        PartyDishSort::key,
        PartyDishSort::value,
    );
    Bundle {
        schema_version: SCHEMA_VERSION,
        by_id: party_dishes.into_iter().map(|pd| (pd.id, pd)).collect(),
        facets: acc.finish(),
        sorted_ids,
    }
}

fn build_staff_bundle(staff: Vec<EnrichedStaff>) -> Bundle<StaffId, EnrichedStaff> {
    let mut acc = FacetAccumulator::new();
    for member in &staff {
        if let Some(skill) = &member.skill {
            acc.insert(StaffFacet::Skill.key(), skill.clone(), member.id);
        }
    }
    let sorted_ids = name_and_order(&staff, |s| s.id, |s| s.name_key.as_str(), |s| s.order);
    Bundle {
        schema_version: SCHEMA_VERSION,
        by_id: staff.into_iter().map(|s| (s.id, s)).collect(),
        facets: acc.finish(),
        sorted_ids,
    }
}

fn build_party_bundle(parties: Vec<EnrichedParty>) -> Bundle<PartyId, EnrichedParty> {
    let sorted_ids = name_and_order(&parties, |p| p.id, |p| p.name_key.as_str(), |p| p.order);
    Bundle {
        schema_version: SCHEMA_VERSION,
        by_id: parties.into_iter().map(|p| (p.id, p)).collect(),
        facets: BTreeMap::new(),
        sorted_ids,
    }
}

fn build_chapter_bundle(chapters: Vec<EnrichedChapter>) -> Bundle<ChapterId, EnrichedChapter> {
    let sorted_ids = name_and_order(&chapters, |c| c.id, |c| c.name_key.as_str(), |c| c.order);
    Bundle {
        schema_version: SCHEMA_VERSION,
        by_id: chapters.into_iter().map(|c| (c.id, c)).collect(),
        facets: BTreeMap::new(),
        sorted_ids,
    }
}

fn build_dlc_bundle(dlcs: Vec<EnrichedDlc>) -> Bundle<DlcId, EnrichedDlc> {
    let sorted_ids = name_and_order(&dlcs, |d| d.id, |d| d.name_key.as_str(), |d| d.order);
    Bundle {
        schema_version: SCHEMA_VERSION,
        by_id: dlcs.into_iter().map(|d| (d.id, d)).collect(),
        facets: BTreeMap::new(),
        sorted_ids,
    }
}

fn build_cooksta_bundle(
    tiers: Vec<EnrichedCookstaTier>,
) -> Bundle<CookstaTierId, EnrichedCookstaTier> {
    let sorted_ids = name_and_order(&tiers, |t| t.id, |t| t.name_key.as_str(), |t| t.order);
    Bundle {
        schema_version: SCHEMA_VERSION,
        by_id: tiers.into_iter().map(|t| (t.id, t)).collect(),
        facets: BTreeMap::new(),
        sorted_ids,
    }
}

// ---------------------------------------------------------------------------
// Whole-pipeline entry point
// ---------------------------------------------------------------------------

/// Every bundle produced by one build.
#[derive(Debug)]
pub struct Bundles {
    pub dishes: Bundle<DishId, EnrichedDish>,
    pub party_dishes: Bundle<PartyDishId, EnrichedPartyDish>,
    pub ingredients: Bundle<IngredientId, EnrichedIngredient>,
    pub parties: Bundle<PartyId, EnrichedParty>,
    pub staff: Bundle<StaffId, EnrichedStaff>,
    pub chapters: Bundle<ChapterId, EnrichedChapter>,
    pub dlcs: Bundle<DlcId, EnrichedDlc>,
    pub cooksta: Bundle<CookstaTierId, EnrichedCookstaTier>,
}

/// Run the full enrichment pipeline over a frozen dataset and assemble one
/// bundle per entity type.
pub fn build_all(dataset: &Dataset) -> Bundles {
    let graph = RelationGraph::build(dataset);
    let (dishes, party_dishes) = enrich_dishes(dataset, &graph);
    let ingredients = enrich_ingredients(dataset, &graph);
    let parties = enrich_parties(dataset, &party_dishes);
    let staff = enrich_staff(dataset);
    let chapters = enrich_chapters(dataset);
    let dlcs = enrich_dlcs(dataset);
    let cooksta = enrich_cooksta(dataset);

    Bundles {
        dishes: build_dish_bundle(dishes, dataset),
        party_dishes: build_party_dish_bundle(party_dishes),
        ingredients: build_ingredient_bundle(ingredients, dataset),
        parties: build_party_bundle(parties),
        staff: build_staff_bundle(staff),
        chapters: build_chapter_bundle(chapters),
        dlcs: build_dlc_bundle(dlcs),
        cooksta: build_cooksta_bundle(cooksta),
    }
}
