use thiserror::Error;

/// Errors that can occur while loading or validating a recipe catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read catalog file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Recipe id {0} appears more than once in the catalog")]
    DuplicateId(u32),

    #[error("Recipe {id} ('{title}') has no ingredients")]
    EmptyIngredients { id: u32, title: String },

    #[error("Recipe {id} has rating {rating}, expected a value between 0.0 and 5.0")]
    RatingOutOfRange { id: u32, rating: f64 },

    #[error("Failed to convert record into a recipe: {0}")]
    Conversion(#[from] RecipeConversionError),
}

/// Errors that can occur when loading a substitution table from external data.
#[derive(Error, Debug, Clone)]
pub enum SubstitutionError {
    #[error("Failed to parse substitution JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read substitution file '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors raised by the caller-side servings guard.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    #[error("Base servings must be a positive number, got {0}")]
    InvalidBaseServings(f64),

    #[error("Target servings must be a positive number, got {0}")]
    InvalidTargetServings(f64),
}

/// Errors that can occur when converting a custom user format into a `Recipe`.
#[derive(Error, Debug, Clone)]
pub enum RecipeConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}
