//! Domain-specific words excluded from matching

use serde::Serialize;

/// Ordered list of excluded words without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExcludedWords {
    words: Vec<String>,
}

impl ExcludedWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word. Returns false when the word is blank or already listed.
    pub fn add(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() || self.contains(word) {
            return false;
        }
        self.words.push(word.to_string());
        true
    }

    /// Remove a word. Returns false when it was not listed.
    pub fn remove(&mut self, word: &str) -> bool {
        let word = word.trim();
        let before = self.words.len();
        self.words.retain(|w| w != word);
        self.words.len() != before
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word.trim())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_order_and_skips_duplicates() {
        let mut words = ExcludedWords::new();
        assert!(words.add("ltd"));
        assert!(words.add(" inc "));
        assert!(!words.add("ltd"));
        assert!(!words.add("   "));
        assert_eq!(words.iter().collect::<Vec<_>>(), vec!["ltd", "inc"]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut words = ExcludedWords::new();
        words.add("ltd");
        words.add("plc");
        assert!(words.remove("ltd"));
        assert!(!words.remove("ltd"));
        assert_eq!(words.len(), 1);

        words.clear();
        assert!(words.is_empty());
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let mut words = ExcludedWords::new();
        words.add("group");
        assert_eq!(serde_json::to_string(&words).unwrap(), r#"["group"]"#);
    }
}
