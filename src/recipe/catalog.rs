use super::conversion::IntoRecipe;
use super::definition::Recipe;
use crate::error::CatalogError;
use crate::pantry::normalize;
use ahash::AHashSet;
use std::fs;
use tracing::{debug, info};

/// The read-only collection of recipes the planner is queried against.
///
/// A catalog is validated once on construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Builds a catalog from any records implementing [`IntoRecipe`], validating
    /// id uniqueness, non-empty ingredient lists and the rating range.
    pub fn from_recipes<I, R>(records: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = R>,
        R: IntoRecipe,
    {
        let mut seen = AHashSet::new();
        let mut recipes = Vec::new();

        for record in records {
            let recipe = record.into_recipe()?;
            if !seen.insert(recipe.id) {
                return Err(CatalogError::DuplicateId(recipe.id));
            }
            if recipe.ingredients.is_empty() {
                return Err(CatalogError::EmptyIngredients {
                    id: recipe.id,
                    title: recipe.title,
                });
            }
            if let Some(rating) = recipe.rating {
                if !(0.0..=5.0).contains(&rating) {
                    return Err(CatalogError::RatingOutOfRange {
                        id: recipe.id,
                        rating,
                    });
                }
            }
            recipes.push(recipe);
        }

        debug!(count = recipes.len(), "recipe catalog validated");
        Ok(Self { recipes })
    }

    /// Parses a JSON array of recipes.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<Recipe> =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        Self::from_recipes(records)
    }

    /// Loads a JSON catalog from disk.
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let catalog = Self::from_json(&content)?;
        info!(path, count = catalog.len(), "loaded recipe catalog");
        Ok(catalog)
    }

    /// The six recipes shipped with the product demo.
    pub fn builtin() -> Self {
        Self {
            recipes: builtin_recipes(),
        }
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Finds a recipe by title, ignoring case and surrounding whitespace.
    pub fn find_by_title(&self, title: &str) -> Option<&Recipe> {
        let needle = normalize(title);
        self.recipes
            .iter()
            .find(|r| normalize(&r.title) == needle)
    }

    /// Case-insensitive substring search over title and cuisine.
    /// An empty or blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        let needle = normalize(query);
        if needle.is_empty() {
            return self.recipes.iter().collect();
        }
        self.recipes
            .iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&needle)
                    || r
                        .cuisine
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn recipe(
    id: u32,
    title: &str,
    cuisine: &str,
    time: &str,
    image: &str,
    rating: f64,
    difficulty: &str,
    servings: u32,
    ingredients: &[&str],
    steps: &[&str],
) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        cuisine: Some(cuisine.to_string()),
        time: Some(time.to_string()),
        image: image.to_string(),
        rating: Some(rating),
        difficulty: Some(difficulty.to_string()),
        servings: Some(servings),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}

fn builtin_recipes() -> Vec<Recipe> {
    vec![
        recipe(
            1,
            "AI Fusion Pasta",
            "Italian",
            "25 min",
            "https://i.pinimg.com/1200x/24/d3/62/24d362c6c549820edada6ed8b85b55a9.jpg",
            4.9,
            "Easy",
            4,
            &["Pasta", "Olive Oil", "Garlic", "Parmesan"],
            &[
                "Boil pasta in salted water.",
                "Sauté garlic in oil, add sauce.",
                "Toss pasta with sauce and top with parmesan.",
            ],
        ),
        recipe(
            2,
            "Smart Stir Fry",
            "Asian",
            "15 min",
            "https://i.pinimg.com/1200x/35/c1/d7/35c1d7488e9f466a2dd38bceb2fb9c01.jpg",
            4.8,
            "Easy",
            2,
            &["Mixed Vegetables", "Soy Sauce", "Sesame Oil", "Rice"],
            &[
                "Heat oil in wok.",
                "Stir-fry vegetables on high heat.",
                "Season with soy sauce and serve on rice.",
            ],
        ),
        recipe(
            3,
            "Quantum Quinoa Bowl",
            "Healthy",
            "20 min",
            "https://i.pinimg.com/736x/09/fb/f9/09fbf9c70c5adc9467f5571988280e8e.jpg",
            5.0,
            "Medium",
            1,
            &["Quinoa", "Avocado", "Greens", "Lime"],
            &[
                "Cook quinoa until fluffy.",
                "Assemble bowl with greens and avocado.",
                "Dress with lime and olive oil.",
            ],
        ),
        recipe(
            4,
            "Cyber Curry",
            "Indian",
            "35 min",
            "https://i.pinimg.com/1200x/fa/d6/88/fad68848a79e3af3f76e8422b34da6dd.jpg",
            4.7,
            "Medium",
            6,
            &["Onion", "Tomato", "Spices", "Coconut Milk"],
            &[
                "Sauté onions and spices.",
                "Add tomato and simmer.",
                "Pour coconut milk and cook until thick.",
            ],
        ),
        recipe(
            5,
            "Holographic Hummus",
            "Middle-Eastern",
            "10 min",
            "https://i.pinimg.com/1200x/43/43/b4/4343b42187bcb1ce6172bfba0ff830bc.jpg",
            4.6,
            "Easy",
            4,
            &["Chickpeas", "Tahini", "Lemon", "Garlic"],
            &[
                "Blend chickpeas with tahini and lemon.",
                "Add garlic and seasoning.",
                "Adjust texture with oil or water.",
            ],
        ),
        recipe(
            6,
            "Neural Network Noodles",
            "Japanese",
            "30 min",
            "https://i.pinimg.com/1200x/85/09/10/850910eeb1283265cdded6dc94107ba4.jpg",
            4.9,
            "Hard",
            2,
            &["Noodles", "Broth", "Spring Onions", "Protein"],
            &[
                "Prepare the broth.",
                "Cook noodles until tender.",
                "Assemble and garnish with spring onions and protein.",
            ],
        ),
    ]
}
