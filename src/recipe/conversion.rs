use super::definition::Recipe;
use crate::error::RecipeConversionError;

/// A trait for custom record formats that can be converted into a catalog `Recipe`.
///
/// This is the extension point that keeps the catalog format-agnostic. Implement it
/// on whatever structs your data source deserializes into and hand the results to
/// [`RecipeCatalog::from_recipes`](super::RecipeCatalog::from_recipes).
///
/// # Example
///
/// ```rust
/// use zerowaste::error::RecipeConversionError;
/// use zerowaste::recipe::{IntoRecipe, Recipe};
///
/// struct CmsEntry {
///     slug_id: u32,
///     headline: String,
///     needs: String,
/// }
///
/// impl IntoRecipe for CmsEntry {
///     fn into_recipe(self) -> Result<Recipe, RecipeConversionError> {
///         let ingredients: Vec<String> = self
///             .needs
///             .split(';')
///             .map(|s| s.trim().to_string())
///             .filter(|s| !s.is_empty())
///             .collect();
///         if ingredients.is_empty() {
///             return Err(RecipeConversionError::ValidationError(format!(
///                 "entry '{}' lists no ingredients",
///                 self.headline
///             )));
///         }
///         Ok(Recipe {
///             id: self.slug_id,
///             title: self.headline,
///             cuisine: None,
///             time: None,
///             image: String::new(),
///             rating: None,
///             difficulty: None,
///             servings: None,
///             ingredients,
///             steps: vec![],
///         })
///     }
/// }
///
/// let recipe = CmsEntry { slug_id: 7, headline: "Toast".into(), needs: "Bread; Butter".into() }
///     .into_recipe()
///     .unwrap();
/// assert_eq!(recipe.ingredients, vec!["Bread", "Butter"]);
/// ```
pub trait IntoRecipe {
    /// Consumes the record and converts it into a catalog recipe.
    fn into_recipe(self) -> Result<Recipe, RecipeConversionError>;
}

impl IntoRecipe for Recipe {
    fn into_recipe(self) -> Result<Recipe, RecipeConversionError> {
        Ok(self)
    }
}
