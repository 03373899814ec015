//! A small but complete dataset shared by unit tests across the crate.
//!
//! Dish 1 ("Seaweed Salad") reproduces the worked example from the
//! economics contract: price 100 x 2 servings, one line of 2 x cost-5
//! seaweed, one party at bonus 1.5.

use crate::dataset::Dataset;
use crate::id::*;
use crate::row::*;
use std::collections::BTreeMap;

pub fn small_dataset() -> Dataset {
    let dishes = vec![
        DishRow {
            id: DishId(1),
            name: "Seaweed Salad".to_string(),
            source: Some("Starter".to_string()),
            final_price: 100,
            final_servings: 2,
            base_price: 20,
            base_servings: 1,
            unlock: Some("Default".to_string()),
            chapter: Some(1),
            cooksta: None,
            dlc: None,
            staff: None,
            staff_level: None,
        },
        DishRow {
            id: DishId(2),
            name: "Tuna Nigiri".to_string(),
            source: Some("Sushi".to_string()),
            final_price: 900,
            final_servings: 3,
            base_price: 150,
            base_servings: 1,
            unlock: Some("Catch a bluefin tuna".to_string()),
            chapter: Some(2),
            cooksta: Some("Silver".to_string()),
            dlc: None,
            staff: Some("Kyoko".to_string()),
            staff_level: Some(5),
        },
        DishRow {
            id: DishId(3),
            name: "Glacier Special".to_string(),
            source: None,
            final_price: 250,
            final_servings: 1,
            base_price: 80,
            base_servings: 1,
            unlock: None,
            chapter: None,
            cooksta: None,
            dlc: Some("Glacier".to_string()),
            staff: Some("Kyoko".to_string()),
            staff_level: Some(2),
        },
    ];

    let ingredients = vec![
        IngredientRow {
            id: IngredientId(1),
            name: "Seaweed".to_string(),
            source: Some("Plant".to_string()),
            kg: Some(0.5),
            max_meats: None,
            cost: Some(5),
            sell: Some(3),
            chapter: Some(1),
            day: true,
            night: true,
            vendors: BTreeMap::from([("Otto".to_string(), 5)]),
        },
        IngredientRow {
            id: IngredientId(2),
            name: "Bluefin Tuna".to_string(),
            source: Some("Fish".to_string()),
            kg: Some(200.0),
            max_meats: Some(12),
            cost: None,
            sell: Some(400),
            chapter: Some(3),
            day: true,
            night: false,
            vendors: BTreeMap::new(),
        },
        IngredientRow {
            id: IngredientId(3),
            name: "Mystery Egg".to_string(),
            source: None,
            kg: None,
            max_meats: None,
            cost: None,
            sell: None,
            chapter: None,
            day: false,
            night: true,
            vendors: BTreeMap::new(),
        },
    ];

    let parties = vec![PartyRow {
        id: PartyId(1),
        name: "Sea Party".to_string(),
        bonus: 1.5,
        order: 1,
    }];

    let staff = vec![
        StaffRow {
            id: StaffId(1),
            name: "Kyoko".to_string(),
            skill: Some("Cooking+".to_string()),
            order: 1,
        },
        StaffRow {
            id: StaffId(2),
            name: "Billy".to_string(),
            skill: None,
            order: 2,
        },
    ];

    let chapters = vec![
        ChapterRow {
            id: ChapterId(1),
            number: 1,
            name: "The Blue Hole".to_string(),
        },
        ChapterRow {
            id: ChapterId(2),
            number: 2,
            name: "Deeper Waters".to_string(),
        },
        ChapterRow {
            id: ChapterId(3),
            number: 3,
            name: "The Trench".to_string(),
        },
    ];

    let dlcs = vec![DlcRow {
        id: DlcId(1),
        name: "Glacier".to_string(),
        order: 1,
    }];

    let cooksta = vec![
        CookstaTierRow {
            id: CookstaTierId(1),
            name: "Bronze".to_string(),
            rank: 1,
        },
        CookstaTierRow {
            id: CookstaTierId(2),
            name: "Silver".to_string(),
            rank: 2,
        },
        CookstaTierRow {
            id: CookstaTierId(3),
            name: "Gold".to_string(),
            rank: 3,
        },
    ];

    let dish_ingredients = vec![
        DishIngredientRow {
            dish_id: DishId(1),
            ingredient_id: IngredientId(1),
            count: 2,
            upgrade_count: 1,
            levels: 4,
        },
        DishIngredientRow {
            dish_id: DishId(2),
            ingredient_id: IngredientId(2),
            count: 1,
            upgrade_count: 1,
            levels: 10,
        },
        DishIngredientRow {
            dish_id: DishId(2),
            ingredient_id: IngredientId(1),
            count: 1,
            upgrade_count: 0,
            levels: 0,
        },
        DishIngredientRow {
            dish_id: DishId(3),
            ingredient_id: IngredientId(3),
            count: 1,
            upgrade_count: 0,
            levels: 0,
        },
    ];

    let dish_parties = vec![
        DishPartyRow {
            dish_id: DishId(1),
            party_id: PartyId(1),
        },
        DishPartyRow {
            dish_id: DishId(2),
            party_id: PartyId(1),
        },
    ];

    Dataset::new(
        dishes,
        ingredients,
        parties,
        staff,
        chapters,
        dlcs,
        cooksta,
        dish_ingredients,
        dish_parties,
    )
}
