//! Tests for the adaptation planner's partitioning and line generation.
mod common;
use common::*;
use zerowaste::planner::ZERO_WASTE_TIPS;
use zerowaste::prelude::*;

#[test]
fn test_fusion_pasta_partial_match() {
    let recipe = fusion_pasta();
    let plan = Planner::default().build_plan(&recipe, "pasta, olive oil");

    assert_eq!(plan.have, vec!["Pasta", "Olive Oil"]);
    assert_eq!(plan.missing, vec!["Garlic", "Parmesan"]);
    assert_eq!(plan.branch(), PlanBranch::Adapted);

    let lines = plan.plan_lines();
    assert_eq!(
        lines,
        vec![
            "You have: Pasta, Olive Oil — great, we'll use these.",
            "Adapted steps (use what you have):",
            "1. Boil pasta in salted water.",
            "2. Sauté garlic in oil, add sauce.",
            "3. Toss pasta with sauce and top with parmesan.",
            "Missing: Garlic, Parmesan.",
            "Substitute for Garlic: onion or garlic powder.",
            "Substitute for Parmesan: yogurt or crumbled paneer.",
        ]
    );
    assert_partition(&recipe, &plan);
}

#[test]
fn test_matching_ignores_case_and_whitespace() {
    let recipe = fusion_pasta();
    let planner = Planner::default();
    let messy = planner.build_plan(&recipe, "Pasta, GARLIC ");
    let clean = planner.build_plan(&recipe, "pasta,garlic");

    assert_eq!(messy.have, clean.have);
    assert_eq!(messy.missing, clean.missing);
    assert_eq!(messy.have, vec!["Pasta", "Garlic"]);
}

#[test]
fn test_empty_input_gives_zero_waste_tips() {
    let recipe = fusion_pasta();
    let planner = Planner::default();

    for input in ["", "   ", ",,,", " , ,\t,"] {
        let plan = planner.build_plan(&recipe, input);
        assert!(plan.have.is_empty(), "input {:?} should match nothing", input);
        assert_eq!(plan.missing, recipe.ingredients);
        assert_eq!(plan.branch(), PlanBranch::ZeroWasteTips);

        let lines = plan.plan_lines();
        assert_eq!(lines[0], "No core ingredients detected from your input.");
        assert_eq!(lines[1], "Zero-waste options & tips:");
        assert_eq!(lines.len(), 2 + ZERO_WASTE_TIPS.len());
        assert!(lines.iter().all(|l| !l.contains("Boil pasta")));
    }
}

#[test]
fn test_unrelated_input_never_references_steps() {
    let recipe = fusion_pasta();
    let plan = Planner::default().build_plan(&recipe, "chocolate, marshmallows");

    assert_eq!(plan.branch(), PlanBranch::ZeroWasteTips);
    assert!(
        !plan
            .lines
            .iter()
            .any(|l| matches!(l, PlanLine::Step { .. }))
    );
    assert_eq!(
        plan.plan_lines().last().map(String::as_str),
        Some("• If you share what you have (comma-separated), I can tailor steps.")
    );
}

#[test]
fn test_full_match_has_no_substitution_lines() {
    let recipe = fusion_pasta();
    let plan = Planner::default().build_plan(&recipe, "PARMESAN, garlic, olive oil, Pasta");

    assert!(plan.missing.is_empty());
    assert_eq!(plan.have, recipe.ingredients);
    let lines = plan.plan_lines();
    assert_eq!(
        lines.last().map(String::as_str),
        Some("You have everything — follow the original steps.")
    );
    assert!(!lines.iter().any(|l| l.starts_with("Substitute for")));
    assert!(!lines.iter().any(|l| l.starts_with("Missing:")));
}

#[test]
fn test_one_advice_line_per_missing_ingredient_in_order() {
    let recipe = make_recipe(
        10,
        "Toast",
        &["Bread", "Butter", "Jam", "Cinnamon"],
        &["Toast the bread.", "Spread and serve."],
    );
    let plan = build_plan(&recipe, "bread", &tiny_table());

    assert_eq!(plan.missing, vec!["Butter", "Jam", "Cinnamon"]);
    let advice: Vec<_> = plan
        .lines
        .iter()
        .filter(|l| matches!(l, PlanLine::Substitute { .. } | PlanLine::NoSubstitute { .. }))
        .collect();
    assert_eq!(advice.len(), 3);
    assert_eq!(
        advice[0],
        &PlanLine::Substitute {
            ingredient: "Butter".to_string(),
            alternatives: vec!["ghee".to_string(), "coconut oil".to_string()],
        }
    );
    assert_eq!(
        PlanFormatter::format_line(advice[1]),
        "No direct substitution found for Jam. Use pantry staples or improvise."
    );
    assert_eq!(
        advice[2],
        &PlanLine::NoSubstitute {
            ingredient: "Cinnamon".to_string()
        }
    );
}

#[test]
fn test_partial_match_keeps_steps_verbatim() {
    let recipe = RecipeCatalog::builtin().get(4).cloned().unwrap();
    let plan = Planner::default().build_plan(&recipe, "tomato");

    let steps: Vec<_> = plan
        .lines
        .iter()
        .filter_map(|l| match l {
            PlanLine::Step { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(steps, recipe.steps);
}

#[test]
fn test_plurals_are_not_matched() {
    let recipe = RecipeCatalog::builtin().get(4).cloned().unwrap();
    let plan = Planner::default().build_plan(&recipe, "tomatoes, onions");
    assert!(plan.have.is_empty());
}

#[test]
fn test_injected_table_replaces_builtin() {
    let recipe = fusion_pasta();
    let planner = Planner::builder().substitutions(tiny_table()).build();
    let plan = planner.build_plan(&recipe, "pasta");

    let lines = plan.plan_lines();
    assert!(lines.contains(
        &"No direct substitution found for Garlic. Use pantry staples or improvise.".to_string()
    ));
    assert!(!lines.iter().any(|l| l.contains("garlic powder")));
}

#[test]
fn test_build_plan_is_pure() {
    let recipe = fusion_pasta();
    let planner = Planner::default();
    let first = planner.build_plan(&recipe, "garlic, pasta");
    let second = planner.build_plan(&recipe, "garlic, pasta");
    assert_eq!(first, second);
}

#[test]
fn test_partition_invariant_across_catalog() {
    let catalog = RecipeCatalog::builtin();
    let planner = Planner::default();
    let inputs = [
        "",
        "garlic",
        "rice, soy sauce, lime",
        "onion,TOMATO,spices,coconut milk",
        "noodles, broth, spring onions, protein, chickpeas",
    ];

    for recipe in catalog.iter() {
        for input in inputs {
            let plan = planner.build_plan(recipe, input);
            assert_partition(recipe, &plan);
        }
    }
}

#[test]
fn test_plan_serializes_with_line_kinds() {
    let plan = Planner::default().build_plan(&fusion_pasta(), "");
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["lines"][0]["kind"], "no_match");
    assert_eq!(json["have"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_pantry_tokens_unused_by_recipe() {
    let recipe = fusion_pasta();
    let pantry = PantrySet::parse("Water, pasta, GARLIC , basil");
    assert_eq!(pantry.unused_by(&recipe), vec!["basil", "water"]);
    assert!(PantrySet::parse("").unused_by(&recipe).is_empty());
}
