//! Tests for recipe catalog construction and lookup.

use ore_calculator::calculator::minimum_raw_material;
use ore_calculator::{ChainError, QuantifiedResource, Recipe, RecipeCatalog};

fn recipe(ingredients: &[(u64, &str)], output: (u64, &str)) -> Recipe {
    Recipe {
        ingredients: ingredients
            .iter()
            .map(|&(quantity, name)| QuantifiedResource::new(name, quantity))
            .collect(),
        output: QuantifiedResource::new(output.1, output.0),
    }
}

#[test]
fn test_lookup_finds_registered_recipe() {
    let catalog = RecipeCatalog::new(vec![
        recipe(&[(10, "ORE")], (10, "A")),
        recipe(&[(7, "A")], (1, "FUEL")),
    ])
    .unwrap();

    let found = catalog.lookup("FUEL").unwrap();
    assert_eq!(found.output, QuantifiedResource::new("FUEL", 1));
    assert_eq!(found.ingredients, vec![QuantifiedResource::new("A", 7)]);
}

#[test]
fn test_lookup_miss_is_unknown_resource() {
    let catalog = RecipeCatalog::new(vec![recipe(&[(1, "ORE")], (1, "FUEL"))]).unwrap();

    match catalog.lookup("XYZZY") {
        Err(ChainError::UnknownResource(name)) => assert_eq!(name, "XYZZY"),
        other => panic!("expected UnknownResource, got {:?}", other),
    }
}

#[test]
fn test_duplicate_output_is_rejected() {
    let result = RecipeCatalog::new(vec![
        recipe(&[(1, "ORE")], (1, "FUEL")),
        recipe(&[(2, "ORE")], (3, "FUEL")),
    ]);

    match result {
        Err(ChainError::DuplicateOutput(name)) => assert_eq!(name, "FUEL"),
        other => panic!("expected DuplicateOutput, got {:?}", other),
    }
}

#[test]
fn test_has_recipe_distinguishes_raw_material() {
    let catalog = RecipeCatalog::new(vec![recipe(&[(1, "ORE")], (1, "FUEL"))]).unwrap();

    assert!(catalog.has_recipe("FUEL"));
    assert!(!catalog.has_recipe("ORE"));
}

#[test]
fn test_producible_resources_are_sorted() {
    let catalog = RecipeCatalog::new(vec![
        recipe(&[(1, "ORE")], (1, "ZINC")),
        recipe(&[(1, "ORE")], (1, "ALGAE")),
        recipe(&[(1, "ZINC"), (1, "ALGAE")], (1, "FUEL")),
    ])
    .unwrap();

    assert_eq!(catalog.producible_resources(), vec!["ALGAE", "FUEL", "ZINC"]);
}

#[test]
fn test_construction_is_idempotent() {
    let recipes = || {
        vec![
            recipe(&[(10, "ORE")], (10, "A")),
            recipe(&[(1, "ORE")], (1, "B")),
            recipe(&[(7, "A"), (1, "B")], (1, "FUEL")),
        ]
    };

    let first = RecipeCatalog::new(recipes()).unwrap();
    let second = RecipeCatalog::new(recipes()).unwrap();

    assert_eq!(
        minimum_raw_material(&first, "ORE", "FUEL").unwrap(),
        minimum_raw_material(&second, "ORE", "FUEL").unwrap(),
    );
}
