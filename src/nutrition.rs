use serde::Serialize;
use std::fmt;

/// A single macronutrient figure, in grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Nutrient {
    pub label: &'static str,
    pub grams: u32,
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}g", self.label, self.grams)
    }
}

/// Fixed per-serving macronutrient figures shown alongside recipes.
///
/// These are display placeholders. Nothing is derived from the ingredients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionFacts {
    pub nutrients: Vec<Nutrient>,
}

impl NutritionFacts {
    pub fn placeholder() -> Self {
        Self {
            nutrients: vec![
                Nutrient {
                    label: "Protein",
                    grams: 25,
                },
                Nutrient {
                    label: "Carbs",
                    grams: 45,
                },
                Nutrient {
                    label: "Fat",
                    grams: 12,
                },
            ],
        }
    }

    pub fn get(&self, label: &str) -> Option<&Nutrient> {
        self.nutrients
            .iter()
            .find(|n| n.label.eq_ignore_ascii_case(label))
    }
}
