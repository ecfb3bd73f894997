//! Common test utilities for building recipes and substitution tables.
use zerowaste::prelude::*;

/// Builds a recipe with placeholder metadata around the given ingredients and steps.
#[allow(dead_code)]
pub fn make_recipe(id: u32, title: &str, ingredients: &[&str], steps: &[&str]) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        cuisine: Some("Test".to_string()),
        time: Some("10 min".to_string()),
        image: String::new(),
        rating: Some(4.0),
        difficulty: Some("Easy".to_string()),
        servings: Some(2),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}

/// The "AI Fusion Pasta" recipe from the built-in catalog.
#[allow(dead_code)]
pub fn fusion_pasta() -> Recipe {
    RecipeCatalog::builtin()
        .get(1)
        .cloned()
        .expect("built-in catalog has recipe 1")
}

/// A minimal table with one known substitution.
#[allow(dead_code)]
pub fn tiny_table() -> SubstitutionTable {
    SubstitutionTable::from_pairs([("butter", &["ghee", "coconut oil"][..])])
}

/// Asserts the partition invariants: disjoint, covering the recipe, in recipe order.
#[allow(dead_code)]
pub fn assert_partition(recipe: &Recipe, plan: &AdaptationPlan) {
    assert_eq!(
        plan.have.len() + plan.missing.len(),
        recipe.ingredients.len(),
        "have and missing must cover every ingredient exactly once"
    );
    for name in &plan.have {
        assert!(!plan.missing.contains(name), "{} is in both partitions", name);
    }

    let mut have = plan.have.iter().peekable();
    let mut missing = plan.missing.iter().peekable();
    for ingredient in &recipe.ingredients {
        if have.peek() == Some(&ingredient) {
            have.next();
        } else if missing.peek() == Some(&ingredient) {
            missing.next();
        } else {
            panic!("{} is out of recipe order", ingredient);
        }
    }
}
