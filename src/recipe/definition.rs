use crate::pantry::normalize;
use serde::{Deserialize, Serialize};

/// A single catalog entry: display metadata plus the canonical ingredient list
/// and base preparation steps the planner works from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Preparation time label, e.g. "25 min".
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    /// Canonical ingredient names. Identity is case-insensitive.
    pub ingredients: Vec<String>,
    /// Base steps, referenced by position only.
    #[serde(alias = "baseSteps")]
    pub steps: Vec<String>,
}

impl Recipe {
    /// Returns true if any ingredient normalizes to `name`.
    pub fn uses(&self, name: &str) -> bool {
        let needle = normalize(name);
        self.ingredients
            .iter()
            .any(|ingredient| normalize(ingredient) == needle)
    }
}
