//! Staff enrichment.
//!
//! Staff-unlocked dishes are not a join table in the input: dishes carry a
//! staff name and a required level. The enricher scans all dishes for a
//! matching name and bakes in the list, sorted ascending by the level
//! required (earliest unlock first).

use crate::dataset::Dataset;
use crate::id::*;
use crate::text::{sort_key, SearchBuilder};
use serde::Serialize;

/// A staff member with the dishes their hiring unlocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedStaff {
    pub id: StaffId,
    pub name: String,
    pub skill: Option<String>,
    pub order: u32,
    /// Dishes unlocked by this staff member, ascending by required level.
    pub dish_ids: Vec<DishId>,
    pub search: String,
    pub name_key: String,
}

/// Enrich every staff member.
pub fn enrich_staff(dataset: &Dataset) -> Vec<EnrichedStaff> {
    dataset
        .staff
        .iter()
        .map(|row| {
            let mut unlocked: Vec<(u32, DishId)> = dataset
                .dishes
                .iter()
                .filter(|d| d.staff.as_deref() == Some(row.name.as_str()))
                .map(|d| (d.staff_level.unwrap_or(0), d.id))
                .collect();
            unlocked.sort();

            let mut search = SearchBuilder::new();
            search.push(&row.name).push_opt(row.skill.as_deref());

            EnrichedStaff {
                id: row.id,
                name: row.name.clone(),
                skill: row.skill.clone(),
                order: row.order,
                dish_ids: unlocked.into_iter().map(|(_, id)| id).collect(),
                search: search.finish(),
                name_key: sort_key(&row.name),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn unlocked_dishes_sorted_by_required_level() {
        let ds = small_dataset();
        let staff = enrich_staff(&ds);
        // Kyoko unlocks Glacier Special at level 2, Tuna Nigiri at level 5.
        assert_eq!(staff[0].dish_ids, vec![DishId(3), DishId(2)]);
    }

    #[test]
    fn staff_with_no_dishes_gets_empty_list() {
        let ds = small_dataset();
        let staff = enrich_staff(&ds);
        assert_eq!(staff[1].name, "Billy");
        assert!(staff[1].dish_ids.is_empty());
    }

    #[test]
    fn missing_level_sorts_first() {
        let mut ds = small_dataset();
        ds.dishes[1].staff_level = None;
        let staff = enrich_staff(&ds);
        assert_eq!(staff[0].dish_ids, vec![DishId(2), DishId(3)]);
    }

    #[test]
    fn search_includes_skill() {
        let ds = small_dataset();
        let staff = enrich_staff(&ds);
        assert_eq!(staff[0].search, "kyoko cooking+");
        assert_eq!(staff[1].search, "billy");
    }
}
