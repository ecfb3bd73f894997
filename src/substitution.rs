use crate::error::SubstitutionError;
use crate::pantry::normalize;
use ahash::AHashMap;
use std::fs;
use tracing::{info, warn};

const BUILTIN: &[(&str, &[&str])] = &[
    ("olive oil", &["any neutral oil", "butter"]),
    ("garlic", &["onion", "garlic powder"]),
    ("pasta", &["rice", "noodles"]),
    ("quinoa", &["rice", "millet"]),
    ("soy sauce", &["tamari", "salt + vinegar"]),
    ("coconut milk", &["yogurt", "cream"]),
    ("parmesan", &["yogurt", "crumbled paneer"]),
    ("chickpeas", &["white beans", "lentils"]),
];

/// Immutable mapping from a normalized ingredient name to its acceptable
/// alternatives, in order of preference.
///
/// Build one at startup and hand it to the [`Planner`](crate::planner::Planner) by
/// reference; nothing in the crate consults a global table.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    entries: AHashMap<String, Vec<String>>,
}

impl SubstitutionTable {
    /// The substitutions shipped with the product demo.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN.iter().copied())
    }

    /// Builds a table from `(ingredient, alternatives)` pairs. Keys are normalized;
    /// a later pair for the same key replaces an earlier one.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let entries = pairs
            .into_iter()
            .map(|(name, alternatives)| {
                (
                    normalize(name),
                    alternatives.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Parses a JSON object of `"ingredient": ["alternative", ...]`.
    ///
    /// Entries with an empty alternatives list are skipped, since they could never
    /// produce a substitution line.
    pub fn from_json(json: &str) -> Result<Self, SubstitutionError> {
        let raw: AHashMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| SubstitutionError::JsonParseError(e.to_string()))?;

        let mut entries = AHashMap::with_capacity(raw.len());
        for (name, alternatives) in raw {
            if alternatives.is_empty() {
                warn!(ingredient = %name, "skipping substitution entry with no alternatives");
                continue;
            }
            entries.insert(normalize(&name), alternatives);
        }
        Ok(Self { entries })
    }

    /// Loads a JSON substitution table from disk.
    pub fn from_file(path: &str) -> Result<Self, SubstitutionError> {
        let content = fs::read_to_string(path).map_err(|e| SubstitutionError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let table = Self::from_json(&content)?;
        info!(path, entries = table.len(), "loaded substitution table");
        Ok(table)
    }

    /// Returns the alternatives for `ingredient`, matched after normalization.
    pub fn lookup(&self, ingredient: &str) -> Option<&[String]> {
        self.entries.get(&normalize(ingredient)).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_normalizes_query() {
        let table = SubstitutionTable::builtin();
        let subs = table.lookup("  Olive OIL ").unwrap();
        assert_eq!(subs, ["any neutral oil", "butter"]);
    }

    #[test]
    fn json_keys_are_normalized_and_empty_entries_dropped() {
        let table =
            SubstitutionTable::from_json(r#"{ " Butter ": ["ghee", "margarine"], "salt": [] }"#)
                .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("butter").unwrap(), ["ghee", "margarine"]);
        assert!(table.lookup("salt").is_none());
    }
}
