//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to plan and scale recipes.
//!
//! # Example
//!
//! ```rust
//! use zerowaste::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = RecipeCatalog::builtin();
//! let planner = Planner::default();
//! let recipe = catalog.find_by_title("cyber curry").ok_or("not found")?;
//! let plan = planner.build_plan(recipe, "");
//! assert_eq!(plan.branch(), PlanBranch::ZeroWasteTips);
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Planning
pub use crate::pantry::{PantrySet, normalize};
pub use crate::planner::{
    AdaptationPlan, PlanBranch, PlanFormatter, PlanLine, Planner, PlannerBuilder, build_plan,
};
pub use crate::substitution::SubstitutionTable;

// Catalog
pub use crate::recipe::{IntoRecipe, Recipe, RecipeCatalog};

// Scaling
pub use crate::scaling::{
    IngredientQuantity, Measure, ScaledQuantity, ServingRatio, demo_ingredients,
    scale_ingredients, scale_quantity,
};

// Placeholder nutrition
pub use crate::nutrition::{Nutrient, NutritionFacts};

// Error types
pub use crate::error::{CatalogError, RecipeConversionError, ScaleError, SubstitutionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
