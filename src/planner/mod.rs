//! The zero-waste adaptation planner.
//!
//! Given a recipe and the free-text list of ingredients a user has on hand, the
//! planner partitions the recipe's ingredients into `have` and `missing` and
//! produces an ordered list of advice lines. The policy is a coarse two-way split:
//!
//! - at least one ingredient matched: the base steps are listed verbatim, followed
//!   by a substitution (or improvisation) line for every missing ingredient;
//! - nothing matched: the recipe's steps are ignored and a fixed set of generic
//!   zero-waste tips is returned instead.
//!
//! A single shared ingredient is enough to take the first branch. The steps are
//! never rewritten to account for what is missing.

mod formatter;

pub use formatter::PlanFormatter;

use crate::pantry::PantrySet;
use crate::recipe::Recipe;
use crate::substitution::SubstitutionTable;
use serde::Serialize;
use tracing::debug;

/// Generic advice emitted when the user's input shares nothing with the recipe.
pub const ZERO_WASTE_TIPS: [&str; 4] = [
    "Use vegetable peels/ends to make a quick stock.",
    "Combine leftover grains + any veg + a sauce to create a bowl.",
    "Roast scraps for crunchy salad toppers.",
    "If you share what you have (comma-separated), I can tailor steps.",
];

/// One line of an adaptation plan, before rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanLine {
    /// The matched ingredients, in recipe order.
    Have { ingredients: Vec<String> },
    StepsHeader,
    /// A base step, numbered from 1.
    Step { number: usize, text: String },
    /// The missing ingredients, in recipe order.
    Missing { ingredients: Vec<String> },
    Substitute {
        ingredient: String,
        alternatives: Vec<String>,
    },
    NoSubstitute { ingredient: String },
    HaveEverything,
    NoMatch,
    TipsHeader,
    Tip { text: &'static str },
}

/// Which of the two planning policies produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanBranch {
    /// At least one recipe ingredient was found in the user's input.
    Adapted,
    /// Nothing matched; generic tips only.
    ZeroWasteTips,
}

/// The result of planning a recipe against a user's ingredients.
///
/// `have` and `missing` are complementary subsequences of the recipe's ingredient
/// list, both in recipe order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdaptationPlan {
    pub have: Vec<String>,
    pub missing: Vec<String>,
    pub lines: Vec<PlanLine>,
}

impl AdaptationPlan {
    pub fn branch(&self) -> PlanBranch {
        if self.have.is_empty() {
            PlanBranch::ZeroWasteTips
        } else {
            PlanBranch::Adapted
        }
    }

    /// Renders every line to its human-readable form, in order.
    pub fn plan_lines(&self) -> Vec<String> {
        PlanFormatter::format_plan(self)
    }
}

/// Builds adaptation plans against an injected substitution table.
///
/// The planner holds no per-request state and is safe to share between threads.
#[derive(Debug, Clone)]
pub struct Planner {
    substitutions: SubstitutionTable,
}

/// Configures a [`Planner`]. Defaults to the built-in substitution table.
#[derive(Debug, Default)]
pub struct PlannerBuilder {
    substitutions: Option<SubstitutionTable>,
}

impl PlannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the substitution table consulted for missing ingredients.
    pub fn substitutions(mut self, table: SubstitutionTable) -> Self {
        self.substitutions = Some(table);
        self
    }

    pub fn build(self) -> Planner {
        Planner {
            substitutions: self
                .substitutions
                .unwrap_or_else(SubstitutionTable::builtin),
        }
    }
}

impl Planner {
    pub fn builder() -> PlannerBuilder {
        PlannerBuilder::new()
    }

    /// Plans `recipe` against the comma-separated `user_text`. Never fails.
    pub fn build_plan(&self, recipe: &Recipe, user_text: &str) -> AdaptationPlan {
        build_plan(recipe, user_text, &self.substitutions)
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Plans `recipe` against `user_text` using an explicit substitution table.
pub fn build_plan(recipe: &Recipe, user_text: &str, table: &SubstitutionTable) -> AdaptationPlan {
    let pantry = PantrySet::parse(user_text);
    let (have, missing): (Vec<String>, Vec<String>) = recipe
        .ingredients
        .iter()
        .cloned()
        .partition(|ingredient| pantry.contains(ingredient));

    let lines = if have.is_empty() {
        zero_waste_lines()
    } else {
        adapted_lines(recipe, &have, &missing, table)
    };

    debug!(
        recipe_id = recipe.id,
        have = have.len(),
        missing = missing.len(),
        lines = lines.len(),
        "built adaptation plan"
    );

    AdaptationPlan {
        have,
        missing,
        lines,
    }
}

fn adapted_lines(
    recipe: &Recipe,
    have: &[String],
    missing: &[String],
    table: &SubstitutionTable,
) -> Vec<PlanLine> {
    let mut lines = Vec::with_capacity(recipe.steps.len() + missing.len() + 3);
    lines.push(PlanLine::Have {
        ingredients: have.to_vec(),
    });
    lines.push(PlanLine::StepsHeader);
    lines.extend(
        recipe
            .steps
            .iter()
            .enumerate()
            .map(|(idx, text)| PlanLine::Step {
                number: idx + 1,
                text: text.clone(),
            }),
    );

    if missing.is_empty() {
        lines.push(PlanLine::HaveEverything);
        return lines;
    }

    lines.push(PlanLine::Missing {
        ingredients: missing.to_vec(),
    });
    for ingredient in missing {
        let line = match table.lookup(ingredient) {
            Some(alternatives) => PlanLine::Substitute {
                ingredient: ingredient.clone(),
                alternatives: alternatives.to_vec(),
            },
            None => PlanLine::NoSubstitute {
                ingredient: ingredient.clone(),
            },
        };
        lines.push(line);
    }
    lines
}

fn zero_waste_lines() -> Vec<PlanLine> {
    let mut lines = vec![PlanLine::NoMatch, PlanLine::TipsHeader];
    lines.extend(ZERO_WASTE_TIPS.iter().map(|&text| PlanLine::Tip { text }));
    lines
}
