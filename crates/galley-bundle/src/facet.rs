//! Faceted inverted-index construction.
//!
//! Facet names per entity type are closed enums: an invalid facet name is a
//! compile-time error, not a silently-empty runtime lookup. Two shapes
//! exist:
//!
//! - **Simple categorical**: an entity contributes to exactly the values it
//!   literally has.
//! - **Cumulative**: progression semantics. An entity whose effective
//!   unlock level is `c` is inserted into every bucket from `c` through the
//!   maximum known level. No cumulative classification at all means "always
//!   available": the entity lands in every bucket.
//!
//! Bucket insertion order reproduces input iteration order. A facet value
//! nobody contributes to simply never appears; nothing here is fatal.

use crate::bundle::FacetMap;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Facet names
// ---------------------------------------------------------------------------

/// Facets of the dish bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishFacet {
    Source,
    Dlc,
    Chapter,
    Cooksta,
}

impl DishFacet {
    pub fn key(self) -> &'static str {
        match self {
            DishFacet::Source => "source",
            DishFacet::Dlc => "dlc",
            DishFacet::Chapter => "chapter",
            DishFacet::Cooksta => "cooksta",
        }
    }
}

/// Facets of the ingredient bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientFacet {
    Source,
    Vendor,
    Time,
    Chapter,
}

impl IngredientFacet {
    pub fn key(self) -> &'static str {
        match self {
            IngredientFacet::Source => "source",
            IngredientFacet::Vendor => "vendor",
            IngredientFacet::Time => "time",
            IngredientFacet::Chapter => "chapter",
        }
    }
}

/// Facets of the party-dish bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyDishFacet {
    Party,
}

impl PartyDishFacet {
    pub fn key(self) -> &'static str {
        match self {
            PartyDishFacet::Party => "party",
        }
    }
}

/// Facets of the staff bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffFacet {
    Skill,
}

impl StaffFacet {
    pub fn key(self) -> &'static str {
        match self {
            StaffFacet::Skill => "skill",
        }
    }
}

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

/// Builds a facet map by pushing (facet, value, id) triples in input order.
#[derive(Debug)]
pub struct FacetAccumulator<Id> {
    map: FacetMap<Id>,
}

impl<Id> Default for FacetAccumulator<Id> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<Id> FacetAccumulator<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an id to one facet bucket. Buckets keep insertion order.
    pub fn insert(&mut self, facet: &'static str, value: impl Into<String>, id: Id)
    where
        Id: Copy,
    {
        self.map
            .entry(facet.to_string())
            .or_default()
            .entry(value.into())
            .or_default()
            .push(id);
    }

    pub fn finish(self) -> FacetMap<Id> {
        self.map
    }
}

// ---------------------------------------------------------------------------
// Cumulative helpers
// ---------------------------------------------------------------------------

/// Effective unlock chapter of an entity: the maximum of its own declared
/// chapter and every chapter it depends on (a dish cannot be available
/// before all its ingredients). Defaults to 1 when nothing declares one.
pub fn effective_chapter(own: Option<u32>, dependencies: impl Iterator<Item = u32>) -> u32 {
    dependencies.fold(own.unwrap_or(1).max(1), u32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_keep_insertion_order() {
        let mut acc = FacetAccumulator::new();
        acc.insert("source", "Fish", 3u32);
        acc.insert("source", "Fish", 1);
        acc.insert("source", "Plant", 2);
        let map = acc.finish();
        assert_eq!(map["source"]["Fish"], vec![3, 1]);
        assert_eq!(map["source"]["Plant"], vec![2]);
    }

    #[test]
    fn effective_chapter_takes_the_max() {
        assert_eq!(effective_chapter(Some(2), [1, 3].into_iter()), 3);
        assert_eq!(effective_chapter(Some(4), [1, 3].into_iter()), 4);
    }

    #[test]
    fn effective_chapter_defaults_to_one() {
        assert_eq!(effective_chapter(None, std::iter::empty()), 1);
        assert_eq!(effective_chapter(Some(0), std::iter::empty()), 1);
        assert_eq!(effective_chapter(None, [2].into_iter()), 2);
    }

    #[test]
    fn facet_names_are_stable_strings() {
        assert_eq!(DishFacet::Chapter.key(), "chapter");
        assert_eq!(IngredientFacet::Vendor.key(), "vendor");
        assert_eq!(PartyDishFacet::Party.key(), "party");
        assert_eq!(StaffFacet::Skill.key(), "skill");
    }
}
