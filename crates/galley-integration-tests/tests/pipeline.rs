//! Whole-pipeline tests: raw table files through load, validation,
//! enrichment, bundle assembly, and JSON export.

use galley_bundle::build_all;
use galley_bundle::export_bundles;
use galley_core::id::*;
use galley_core::test_utils::small_dataset;
use galley_data::load_dataset;
use std::fs;
use std::path::{Path, PathBuf};

// ===========================================================================
// On-disk fixture
// ===========================================================================

fn make_data_dir(suffix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("galley_e2e_{suffix}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn cleanup(dir: &Path) {
    let _ = fs::remove_dir_all(dir);
}

/// Write the unit-test dataset as mixed-format table files: RON for the
/// entity tables, JSON for the joins, TOML for one table to cover all
/// three loaders in a single run.
fn write_tables(dir: &Path) {
    fs::write(
        dir.join("dishes.ron"),
        r#"[
            (id: 1, name: "Seaweed Salad", source: Some("Starter"), final_price: 100,
             final_servings: 2, base_price: 20, unlock: Some("Default"), chapter: Some(1)),
            (id: 2, name: "Tuna Nigiri", source: Some("Sushi"), final_price: 900,
             final_servings: 3, base_price: 150, unlock: Some("Catch a bluefin tuna"),
             chapter: Some(2), cooksta: Some("Silver"), staff: Some("Kyoko"), staff_level: Some(5)),
            (id: 3, name: "Glacier Special", final_price: 250, final_servings: 1,
             base_price: 80, dlc: Some("Glacier"), staff: Some("Kyoko"), staff_level: Some(2)),
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("ingredients.ron"),
        r#"[
            (id: 1, name: "Seaweed", source: Some("Plant"), kg: Some(0.5), cost: Some(5),
             sell: Some(3), chapter: Some(1), day: true, night: true, vendors: {"Otto": Some(5)}),
            (id: 2, name: "Bluefin Tuna", source: Some("Fish"), kg: Some(200.0),
             max_meats: Some(12), sell: Some(400), chapter: Some(3), day: true),
            (id: 3, name: "Mystery Egg", night: true),
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("dish_ingredients.json"),
        r#"[
            {"dish": "Seaweed Salad", "ingredient": "Seaweed", "count": 2, "upgrade_count": 1, "levels": 4},
            {"dish": "Tuna Nigiri", "ingredient": "Bluefin Tuna", "count": 1, "upgrade_count": 1, "levels": 10},
            {"dish": "Tuna Nigiri", "ingredient": "Seaweed", "count": 1},
            {"dish": "Glacier Special", "ingredient": "Mystery Egg", "count": 1}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("dish_parties.json"),
        r#"[
            {"dish": "Seaweed Salad", "party": "Sea Party"},
            {"dish": "Tuna Nigiri", "party": "Sea Party"}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("parties.ron"),
        r#"[(id: 1, name: "Sea Party", bonus: 1.5, order: 1)]"#,
    )
    .unwrap();
    fs::write(
        dir.join("staff.toml"),
        concat!(
            "[[staff]]\nid = 1\nname = \"Kyoko\"\nskill = \"Cooking+\"\norder = 1\n\n",
            "[[staff]]\nid = 2\nname = \"Billy\"\norder = 2\n",
        ),
    )
    .unwrap();
    fs::write(
        dir.join("chapters.ron"),
        r#"[
            (id: 1, number: 1, name: "The Blue Hole"),
            (id: 2, number: 2, name: "Deeper Waters"),
            (id: 3, number: 3, name: "The Trench"),
        ]"#,
    )
    .unwrap();
    fs::write(dir.join("dlcs.ron"), r#"[(id: 1, name: "Glacier", order: 1)]"#).unwrap();
    fs::write(
        dir.join("cooksta.ron"),
        r#"[
            (id: 1, name: "Bronze", rank: 1),
            (id: 2, name: "Silver", rank: 2),
            (id: 3, name: "Gold", rank: 3),
        ]"#,
    )
    .unwrap();
}

// ===========================================================================
// Load -> build
// ===========================================================================

#[test]
fn loaded_tables_build_the_same_bundles_as_in_memory_rows() {
    let dir = make_data_dir("parity");
    write_tables(&dir);

    let loaded = load_dataset(&dir).unwrap();
    let from_disk = build_all(&loaded);
    let from_memory = build_all(&small_dataset());

    assert_eq!(
        serde_json::to_string(&from_disk.dishes).unwrap(),
        serde_json::to_string(&from_memory.dishes).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&from_disk.ingredients).unwrap(),
        serde_json::to_string(&from_memory.ingredients).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&from_disk.party_dishes).unwrap(),
        serde_json::to_string(&from_memory.party_dishes).unwrap()
    );

    cleanup(&dir);
}

#[test]
fn worked_example_numbers_survive_the_full_pipeline() {
    let dir = make_data_dir("numbers");
    write_tables(&dir);

    let bundles = build_all(&load_dataset(&dir).unwrap());
    let salad = &bundles.dishes.by_id[&DishId(1)];
    assert_eq!(salad.recipe_cost, 10);
    assert_eq!(salad.final_revenue, 200);
    assert_eq!(salad.final_profit, 190);
    assert_eq!(salad.final_profit_per_serving, 95);
    assert_eq!(salad.max_profit_per_serving, 145);

    let pd = &bundles.party_dishes.by_id[&PartyDishId(1)];
    assert_eq!(pd.party_price, 150.0);
    assert_eq!(pd.party_revenue, 300.0);
    assert_eq!(pd.party_profit, 290);
    assert_eq!(pd.party_profit_per_serving, 145);

    cleanup(&dir);
}

#[test]
fn unresolvable_join_rows_drop_without_failing_the_build() {
    let dir = make_data_dir("dangling");
    write_tables(&dir);
    // Append a join to a dish nobody defined.
    fs::write(
        dir.join("dish_parties.json"),
        r#"[
            {"dish": "Seaweed Salad", "party": "Sea Party"},
            {"dish": "Tuna Nigiri", "party": "Sea Party"},
            {"dish": "Phantom Platter", "party": "Sea Party"}
        ]"#,
    )
    .unwrap();

    let bundles = build_all(&load_dataset(&dir).unwrap());
    // The surviving joins still get ids 1 and 2.
    assert_eq!(bundles.party_dishes.by_id.len(), 2);
    assert!(bundles.party_dishes.by_id.contains_key(&PartyDishId(1)));
    assert!(bundles.party_dishes.by_id.contains_key(&PartyDishId(2)));

    cleanup(&dir);
}

// ===========================================================================
// Bundle invariants
// ===========================================================================

#[test]
fn every_bundle_is_referentially_closed() {
    let bundles = build_all(&small_dataset());
    bundles.dishes.verify_referential_closure().unwrap();
    bundles.party_dishes.verify_referential_closure().unwrap();
    bundles.ingredients.verify_referential_closure().unwrap();
    bundles.parties.verify_referential_closure().unwrap();
    bundles.staff.verify_referential_closure().unwrap();
    bundles.chapters.verify_referential_closure().unwrap();
    bundles.dlcs.verify_referential_closure().unwrap();
    bundles.cooksta.verify_referential_closure().unwrap();
}

#[test]
fn cumulative_chapter_buckets_are_contiguous_to_the_end() {
    let bundles = build_all(&small_dataset());
    let chapter = &bundles.dishes.facets["chapter"];
    for (&id, _) in &bundles.dishes.by_id {
        let first = (1..=3u32)
            .find(|c| chapter[&c.to_string()].contains(&id))
            .expect("every dish appears in some chapter bucket");
        // Present in every bucket from first unlock through the last
        // chapter, absent before.
        for c in 1..=3u32 {
            assert_eq!(chapter[&c.to_string()].contains(&id), c >= first);
        }
    }
}

#[test]
fn missing_sell_price_never_becomes_a_zero_rate() {
    let mut ds = small_dataset();
    ds.ingredients[1].sell = None;
    let bundles = build_all(&ds);
    let tuna = &bundles.ingredients.by_id[&IngredientId(2)];
    assert_eq!(tuna.sell_per_kg, None);
    // Descending by rate now puts tuna with the other missing values,
    // tie-broken by ascending id.
    assert_eq!(
        bundles.ingredients.sorted_ids["sellPerKg.desc"],
        vec![IngredientId(1), IngredientId(2), IngredientId(3)]
    );
}

#[test]
fn recipe_cost_equals_the_sum_of_its_lines() {
    let bundles = build_all(&small_dataset());
    for dish in bundles.dishes.by_id.values() {
        let line_sum: i64 = dish.ingredient_lines.iter().map(|l| l.line_cost).sum();
        assert_eq!(dish.recipe_cost, line_sum, "dish {}", dish.name);
        assert_eq!(dish.final_profit, dish.final_revenue - dish.recipe_cost);
    }
}

// ===========================================================================
// Export
// ===========================================================================

#[test]
fn export_round_trips_through_serde_json() {
    let dir = make_data_dir("export");
    write_tables(&dir);
    let out = dir.join("bundles");

    let bundles = build_all(&load_dataset(&dir).unwrap());
    export_bundles(&bundles, &out, false).unwrap();

    let dishes: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("dishes.json")).unwrap()).unwrap();
    assert_eq!(dishes["schemaVersion"], 2);
    assert_eq!(dishes["byId"]["2"]["name"], "Tuna Nigiri");
    assert_eq!(dishes["byId"]["2"]["recipeCost"], 405);
    assert_eq!(
        dishes["sortedIds"]["finalPrice.desc"],
        serde_json::json!([2, 3, 1])
    );
    assert_eq!(dishes["facets"]["cooksta"]["Silver"], serde_json::json!([1, 2, 3]));

    let ingredients: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("ingredients.json")).unwrap()).unwrap();
    // Absent rates export as null, never 0.
    assert_eq!(ingredients["byId"]["1"]["sellPerKg"], serde_json::Value::Null);
    assert_eq!(ingredients["byId"]["2"]["sellPerKg"], 24.0);

    cleanup(&dir);
}

#[test]
fn two_exports_of_the_same_input_are_byte_identical() {
    let dir = make_data_dir("idempotent");
    write_tables(&dir);
    let out_a = dir.join("a");
    let out_b = dir.join("b");

    export_bundles(&build_all(&load_dataset(&dir).unwrap()), &out_a, true).unwrap();
    export_bundles(&build_all(&load_dataset(&dir).unwrap()), &out_b, true).unwrap();

    for entry in fs::read_dir(&out_a).unwrap() {
        let name = entry.unwrap().file_name();
        assert_eq!(
            fs::read(out_a.join(&name)).unwrap(),
            fs::read(out_b.join(&name)).unwrap(),
            "{name:?} differs between identical builds"
        );
    }

    cleanup(&dir);
}
