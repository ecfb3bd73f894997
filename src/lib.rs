//! # Zerowaste - Recipe Adaptation and Scaling Engine
//!
//! **Zerowaste** holds the decision logic behind a recipe-discovery product: given
//! a recipe and the ingredients a user has on hand, it works out what is present,
//! what is missing and how to substitute for it. It also rescales ingredient
//! quantities to a different number of servings.
//!
//! Both computations are pure. The only shared data, the recipe catalog and the
//! substitution table, is built once and read by reference afterwards.
//!
//! ## Core Workflow
//!
//! 1.  **Load the catalog**: use [`RecipeCatalog::builtin`](recipe::RecipeCatalog::builtin),
//!     or load your own records with `from_json` / `from_recipes` (implement
//!     [`IntoRecipe`](recipe::IntoRecipe) for custom formats).
//! 2.  **Build a planner**: `Planner::builder()` injects the substitution table.
//! 3.  **Plan**: call `build_plan` with a recipe and the user's comma-separated text.
//! 4.  **Scale**: validate servings with `ServingRatio::new` and apply it to tagged
//!     [`IngredientQuantity`](scaling::IngredientQuantity) values.
//!
//! ## Quick Start
//!
//! ```rust
//! use zerowaste::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let catalog = RecipeCatalog::builtin();
//!     let planner = Planner::builder()
//!         .substitutions(SubstitutionTable::builtin())
//!         .build();
//!
//!     let recipe = catalog.get(1).ok_or("recipe 1 missing")?;
//!     let plan = planner.build_plan(recipe, "pasta, olive oil");
//!     assert_eq!(plan.have, vec!["Pasta", "Olive Oil"]);
//!     assert_eq!(plan.missing, vec!["Garlic", "Parmesan"]);
//!
//!     for line in plan.plan_lines() {
//!         println!("{}", line);
//!     }
//!
//!     let ratio = ServingRatio::new(4.0, 6.0)?;
//!     for (ingredient, scaled) in scale_ingredients(&demo_ingredients(), &ratio) {
//!         println!("{} {} {}", ingredient.name, scaled, ingredient.unit);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod nutrition;
pub mod pantry;
pub mod planner;
pub mod prelude;
pub mod recipe;
pub mod scaling;
pub mod substitution;
