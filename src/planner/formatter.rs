use super::{AdaptationPlan, PlanLine};
use itertools::Itertools;

/// Renders plan lines into the text shown to the user.
pub struct PlanFormatter;

impl PlanFormatter {
    /// Formats every line of a plan, preserving order.
    pub fn format_plan(plan: &AdaptationPlan) -> Vec<String> {
        plan.lines.iter().map(Self::format_line).collect()
    }

    pub fn format_line(line: &PlanLine) -> String {
        match line {
            PlanLine::Have { ingredients } => format!(
                "You have: {} — great, we'll use these.",
                ingredients.iter().join(", ")
            ),
            PlanLine::StepsHeader => "Adapted steps (use what you have):".to_string(),
            PlanLine::Step { number, text } => format!("{}. {}", number, text),
            PlanLine::Missing { ingredients } => {
                format!("Missing: {}.", ingredients.iter().join(", "))
            }
            PlanLine::Substitute {
                ingredient,
                alternatives,
            } => format!(
                "Substitute for {}: {}.",
                ingredient,
                alternatives.iter().join(" or ")
            ),
            PlanLine::NoSubstitute { ingredient } => format!(
                "No direct substitution found for {}. Use pantry staples or improvise.",
                ingredient
            ),
            PlanLine::HaveEverything => {
                "You have everything — follow the original steps.".to_string()
            }
            PlanLine::NoMatch => "No core ingredients detected from your input.".to_string(),
            PlanLine::TipsHeader => "Zero-waste options & tips:".to_string(),
            PlanLine::Tip { text } => format!("• {}", text),
        }
    }
}
