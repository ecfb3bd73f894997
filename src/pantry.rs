use crate::recipe::Recipe;
use ahash::AHashSet;

/// Canonical form used for every ingredient identity comparison: trimmed and lower-cased.
///
/// No synonym, plural or typo handling is attempted. "Tomatoes" and "tomato" are
/// different ingredients.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// The set of ingredients a user says they have, derived from free text.
///
/// Input is split on commas, each token is normalized and empty tokens are
/// dropped. Any text is accepted; unparseable input simply yields an empty set.
#[derive(Debug, Clone, Default)]
pub struct PantrySet {
    items: AHashSet<String>,
}

impl PantrySet {
    /// Parses a comma-separated ingredient list.
    pub fn parse(text: &str) -> Self {
        let items = text
            .split(',')
            .map(normalize)
            .filter(|token| !token.is_empty())
            .collect();
        Self { items }
    }

    /// Case- and whitespace-insensitive membership test.
    pub fn contains(&self, ingredient: &str) -> bool {
        self.items.contains(&normalize(ingredient))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the normalized tokens in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Tokens that match none of `recipe`'s ingredients, sorted.
    pub fn unused_by(&self, recipe: &Recipe) -> Vec<&str> {
        let mut unused: Vec<&str> = self.iter().filter(|token| !recipe.uses(token)).collect();
        unused.sort_unstable();
        unused
    }
}

impl<S: AsRef<str>> FromIterator<S> for PantrySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let items = iter
            .into_iter()
            .map(|s| normalize(s.as_ref()))
            .filter(|token| !token.is_empty())
            .collect();
        Self { items }
    }
}
