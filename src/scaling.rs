//! Servings-based quantity scaling.
//!
//! Quantities scale linearly with `target / base` servings. Discrete ingredients
//! (counted in whole units, like eggs) are rounded to the nearest whole number;
//! continuous ones keep their exact value and are displayed with one decimal.

use crate::error::ScaleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an ingredient is measured, which decides the rounding policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    /// Counted in whole units. Scaled values are rounded half away from zero.
    Discrete,
    /// Divisible. Scaled values are kept as-is and shown to one decimal place.
    #[default]
    Continuous,
}

/// A scaled quantity ready for display next to an ingredient name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScaledQuantity {
    Count(i64),
    Amount(f64),
}

impl ScaledQuantity {
    pub fn as_f64(&self) -> f64 {
        match self {
            ScaledQuantity::Count(n) => *n as f64,
            ScaledQuantity::Amount(v) => *v,
        }
    }
}

impl fmt::Display for ScaledQuantity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScaledQuantity::Count(n) => write!(f, "{}", n),
            ScaledQuantity::Amount(v) => write!(f, "{}", format_tenths(*v)),
        }
    }
}

/// Formats `value` to one decimal place from its exact binary value.
///
/// Exact ties (`v * 10` representable with a fractional part of one half) round
/// away from zero; `{:.1}` alone would round them to even.
fn format_tenths(value: f64) -> String {
    let tenths = value * 10.0;
    let exact = value.mul_add(10.0, -tenths) == 0.0;
    if exact && tenths.fract().abs() == 0.5 {
        format!("{:.1}", tenths.round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}

/// Scales `base_quantity` from `base_servings` to `target_servings`.
///
/// `base_servings` is not checked here; a zero base produces a non-finite result.
/// Use [`ServingRatio::new`] where the servings come from untrusted input.
///
/// ```rust
/// use zerowaste::scaling::{scale_quantity, Measure};
///
/// assert_eq!(scale_quantity(2.0, 4.0, 8.0, Measure::Continuous).to_string(), "4.0");
/// assert_eq!(scale_quantity(3.0, 4.0, 5.0, Measure::Discrete).to_string(), "4");
/// ```
pub fn scale_quantity(
    base_quantity: f64,
    base_servings: f64,
    target_servings: f64,
    measure: Measure,
) -> ScaledQuantity {
    let scaled = base_quantity * target_servings / base_servings;
    match measure {
        Measure::Discrete => ScaledQuantity::Count(scaled.round() as i64),
        Measure::Continuous => ScaledQuantity::Amount(scaled),
    }
}

/// A validated pair of base and target servings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServingRatio {
    base: f64,
    target: f64,
}

impl ServingRatio {
    /// Both servings counts must be finite and strictly positive.
    pub fn new(base: f64, target: f64) -> Result<Self, ScaleError> {
        if !base.is_finite() || base <= 0.0 {
            return Err(ScaleError::InvalidBaseServings(base));
        }
        if !target.is_finite() || target <= 0.0 {
            return Err(ScaleError::InvalidTargetServings(target));
        }
        Ok(Self { base, target })
    }

    pub fn factor(&self) -> f64 {
        self.target / self.base
    }

    pub fn apply(&self, quantity: f64, measure: Measure) -> ScaledQuantity {
        scale_quantity(quantity, self.base, self.target, measure)
    }
}

/// An ingredient amount as written in a recipe, tagged with its measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub measure: Measure,
}

impl IngredientQuantity {
    pub fn new(name: &str, quantity: f64, unit: &str, measure: Measure) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            measure,
        }
    }

    pub fn scaled(&self, ratio: &ServingRatio) -> ScaledQuantity {
        ratio.apply(self.quantity, self.measure)
    }
}

/// Scales every ingredient in `ingredients`, preserving order.
pub fn scale_ingredients<'a>(
    ingredients: &'a [IngredientQuantity],
    ratio: &ServingRatio,
) -> Vec<(&'a IngredientQuantity, ScaledQuantity)> {
    ingredients
        .iter()
        .map(|ingredient| (ingredient, ingredient.scaled(ratio)))
        .collect()
}

/// Servings the demo ingredient list is written for.
pub const DEMO_BASE_SERVINGS: u32 = 4;

/// Servings range exposed by the product's slider.
pub const DEMO_SERVINGS_RANGE: std::ops::RangeInclusive<u32> = 1..=12;

/// The batter ingredients used by the product's scaling demo, for 4 servings.
pub fn demo_ingredients() -> Vec<IngredientQuantity> {
    vec![
        IngredientQuantity::new("Flour", 2.0, "cups", Measure::Continuous),
        IngredientQuantity::new("Sugar", 1.0, "cups", Measure::Continuous),
        IngredientQuantity::new("Eggs", 3.0, "pcs", Measure::Discrete),
        IngredientQuantity::new("Milk", 1.5, "cups", Measure::Continuous),
    ]
}
