//! The frozen input to a build.
//!
//! A [`Dataset`] holds every validated table for one run and is passed by
//! reference into the graph builder and the enrichers. There is no ambient
//! global state: constructing a fresh `Dataset` is the only initialization
//! a build needs, and dropping it discards everything.

use crate::id::*;
use crate::row::*;
use std::collections::HashMap;

/// All validated tables for one build, with id-lookup indices.
///
/// Row vectors preserve input order; every deterministic ordering downstream
/// (facet bucket insertion, synthetic PartyDish ids) derives from it.
#[derive(Debug, Default)]
pub struct Dataset {
    pub dishes: Vec<DishRow>,
    pub ingredients: Vec<IngredientRow>,
    pub parties: Vec<PartyRow>,
    pub staff: Vec<StaffRow>,
    pub chapters: Vec<ChapterRow>,
    pub dlcs: Vec<DlcRow>,
    pub cooksta: Vec<CookstaTierRow>,
    pub dish_ingredients: Vec<DishIngredientRow>,
    pub dish_parties: Vec<DishPartyRow>,

    dish_index: HashMap<DishId, usize>,
    ingredient_index: HashMap<IngredientId, usize>,
    party_index: HashMap<PartyId, usize>,
}

impl Dataset {
    /// Freeze validated tables into a dataset, building the id indices.
    pub fn new(
        dishes: Vec<DishRow>,
        ingredients: Vec<IngredientRow>,
        parties: Vec<PartyRow>,
        staff: Vec<StaffRow>,
        chapters: Vec<ChapterRow>,
        dlcs: Vec<DlcRow>,
        cooksta: Vec<CookstaTierRow>,
        dish_ingredients: Vec<DishIngredientRow>,
        dish_parties: Vec<DishPartyRow>,
    ) -> Self {
        let dish_index = dishes.iter().enumerate().map(|(i, d)| (d.id, i)).collect();
        let ingredient_index = ingredients
            .iter()
            .enumerate()
            .map(|(i, g)| (g.id, i))
            .collect();
        let party_index = parties.iter().enumerate().map(|(i, p)| (p.id, i)).collect();
        Self {
            dishes,
            ingredients,
            parties,
            staff,
            chapters,
            dlcs,
            cooksta,
            dish_ingredients,
            dish_parties,
            dish_index,
            ingredient_index,
            party_index,
        }
    }

    pub fn dish(&self, id: DishId) -> Option<&DishRow> {
        self.dish_index.get(&id).map(|&i| &self.dishes[i])
    }

    pub fn ingredient(&self, id: IngredientId) -> Option<&IngredientRow> {
        self.ingredient_index.get(&id).map(|&i| &self.ingredients[i])
    }

    pub fn party(&self, id: PartyId) -> Option<&PartyRow> {
        self.party_index.get(&id).map(|&i| &self.parties[i])
    }

    /// Cooksta tier rank by tier name. Tier references on dishes are by
    /// name; an unknown name simply resolves to `None`.
    pub fn cooksta_rank(&self, name: &str) -> Option<u32> {
        self.cooksta.iter().find(|t| t.name == name).map(|t| t.rank)
    }

    /// Highest chapter number known to the dataset: the maximum over the
    /// chapters table and every chapter reference on dishes and
    /// ingredients. Defaults to 1 so that cumulative facets always have at
    /// least one bucket.
    pub fn max_chapter(&self) -> u32 {
        self.chapters
            .iter()
            .map(|c| c.number)
            .chain(self.dishes.iter().filter_map(|d| d.chapter))
            .chain(self.ingredients.iter().filter_map(|g| g.chapter))
            .max()
            .unwrap_or(1)
            .max(1)
    }

    /// Highest cooksta tier rank, defaulting to 1.
    pub fn max_cooksta_rank(&self) -> u32 {
        self.cooksta.iter().map(|t| t.rank).max().unwrap_or(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn lookup_by_id() {
        let ds = small_dataset();
        assert_eq!(ds.dish(DishId(1)).unwrap().name, "Seaweed Salad");
        assert_eq!(ds.ingredient(IngredientId(1)).unwrap().name, "Seaweed");
        assert!(ds.dish(DishId(99)).is_none());
        assert!(ds.party(PartyId(99)).is_none());
    }

    #[test]
    fn max_chapter_covers_all_tables() {
        let mut ds = small_dataset();
        assert_eq!(ds.max_chapter(), 3);
        // An ingredient referencing a later chapter than the chapters table
        // still counts.
        ds.ingredients[0].chapter = Some(7);
        let ds = Dataset::new(
            ds.dishes,
            ds.ingredients,
            ds.parties,
            ds.staff,
            ds.chapters,
            ds.dlcs,
            ds.cooksta,
            ds.dish_ingredients,
            ds.dish_parties,
        );
        assert_eq!(ds.max_chapter(), 7);
    }

    #[test]
    fn empty_dataset_defaults() {
        let ds = Dataset::default();
        assert_eq!(ds.max_chapter(), 1);
        assert_eq!(ds.max_cooksta_rank(), 1);
        assert!(ds.cooksta_rank("Diamond").is_none());
    }

    #[test]
    fn cooksta_rank_by_name() {
        let ds = small_dataset();
        assert_eq!(ds.cooksta_rank("Bronze"), Some(1));
        assert_eq!(ds.cooksta_rank("Silver"), Some(2));
        assert_eq!(ds.max_cooksta_rank(), 3);
    }
}
