//! Ingredient store.
//!
//! Holds the ordered, de-duplicated list of ingredient names the user has
//! entered. All operations are silent no-ops on bad input: blank names,
//! duplicates and removals of absent items never produce an error.

use serde::{Deserialize, Serialize};

/// Ordered set of ingredient names, unique under exact string comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientStore {
    items: Vec<String>,
}

impl IngredientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim `name` and append it unless it is blank or already present.
    ///
    /// Matching is case-sensitive: "Egg" and "egg" are distinct entries.
    /// Returns `true` when the store changed.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.items.push(name.to_string());
        true
    }

    /// Split a raw input line on commas and [`add`](Self::add) each piece.
    ///
    /// Returns how many entries were actually appended.
    pub fn add_many(&mut self, input: &str) -> usize {
        input.split(',').filter(|part| self.add(part)).count()
    }

    /// Remove every entry exactly equal to `name`. Returns `true` when the
    /// store changed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != name);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a IngredientStore {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_and_appends() {
        let mut store = IngredientStore::new();
        assert!(store.add("  chicken "));
        assert!(store.add("spinach"));
        assert_eq!(store.items(), &["chicken", "spinach"]);
    }

    #[test]
    fn add_blank_is_noop() {
        let mut store = IngredientStore::new();
        assert!(!store.add(""));
        assert!(!store.add("   "));
        assert!(!store.add("\t\n"));
        assert!(store.is_empty());
    }

    #[test]
    fn add_duplicate_is_noop() {
        let mut store = IngredientStore::new();
        store.add("rice");
        assert!(!store.add("rice"));
        assert!(!store.add(" rice  "));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_is_case_sensitive() {
        let mut store = IngredientStore::new();
        store.add("Egg");
        store.add("egg");
        assert_eq!(store.items(), &["Egg", "egg"]);
    }

    #[test]
    fn remove_deletes_exact_match_only() {
        let mut store = IngredientStore::new();
        store.add("Egg");
        store.add("egg");
        assert!(store.remove("egg"));
        assert_eq!(store.items(), &["Egg"]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut store = IngredientStore::new();
        store.add("tomato");
        assert!(!store.remove("potato"));
        assert!(!store.remove(" tomato"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_then_readd_goes_to_end() {
        let mut store = IngredientStore::new();
        store.add("a");
        store.add("b");
        store.remove("a");
        store.add("a");
        assert_eq!(store.items(), &["b", "a"]);
    }

    #[test]
    fn add_many_splits_on_commas() {
        let mut store = IngredientStore::new();
        store.add("onion");
        let added = store.add_many("chicken, spinach,,onion ,  ");
        assert_eq!(added, 2);
        assert_eq!(store.items(), &["onion", "chicken", "spinach"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut store = IngredientStore::new();
        store.add("garlic");
        store.add("lemon");
        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(json, r#"["garlic","lemon"]"#);
    }
}
