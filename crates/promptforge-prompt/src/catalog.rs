//! The static catalog of **modifier templates**.
//!
//! A modifier is a named instruction fragment ("Keep it concise", "Technical
//! language", …) that the user toggles on to steer the model's response
//! style.  The catalog is declared once at startup and never mutated during a
//! session, so the composer can treat it as read-only shared state.
//!
//! Entries are kept in a `Vec` rather than a hash map: key lookup on a
//! ten-entry catalog is trivially cheap, and declaration order is preserved
//! for display surfaces that list the available modifiers.

use promptforge_core::error::{ForgeError, Result};

/// Insertion-ordered catalog of `{key, text}` instruction fragments.
///
/// Keys are unique: inserting an existing key replaces its text in place,
/// keeping the original position.
#[derive(Debug, Clone, Default)]
pub struct ModifierCatalog {
    entries: Vec<(String, String)>,
}

impl ModifierCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The ten modifier templates the stock prompt-builder form ships with.
    pub fn builtin() -> Self {
        Self::new()
            .with("Professional tone", "Please respond in a professional, business-appropriate manner. ")
            .with("Detailed explanation", "Please provide a comprehensive and detailed explanation. ")
            .with("Include examples", "Please include practical examples to illustrate your points. ")
            .with("Keep it concise", "Please keep your response brief and to the point. ")
            .with("Technical language", "Please use technical terminology and assume technical knowledge. ")
            .with("Simple language", "Please explain in simple terms that anyone can understand. ")
            .with("Step by step", "Please break down your response into clear, numbered steps. ")
            .with("Pros and cons", "Please include both advantages and disadvantages in your analysis. ")
            .with("Creative approach", "Please be creative and think outside the box in your response. ")
            .with("Data-driven", "Please support your response with data, statistics, or research when possible. ")
    }

    /// Add or replace a template.  Takes `self` by value for declaration-site
    /// chaining.
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        let key = key.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((key, text)),
        }
        self
    }

    /// Look up a template's text, `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, text)| text.as_str())
    }

    /// Look up a template's text, failing with
    /// [`ForgeError::UnknownModifierKey`] when the key is absent.
    pub fn resolve(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| ForgeError::UnknownModifierKey {
            key: key.to_string(),
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in declaration order, for display surfaces.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
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
    fn builtin_catalog_is_complete() {
        let catalog = ModifierCatalog::builtin();
        assert_eq!(catalog.len(), 10);
        assert_eq!(
            catalog.get("Keep it concise"),
            Some("Please keep your response brief and to the point. ")
        );
        assert_eq!(catalog.keys().next(), Some("Professional tone"));
    }

    #[test]
    fn reinserting_a_key_replaces_in_place() {
        let catalog = ModifierCatalog::new()
            .with("a", "first ")
            .with("b", "second ")
            .with("a", "replaced ");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a"), Some("replaced "));
        let keys: Vec<_> = catalog.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn resolve_names_the_missing_key() {
        let catalog = ModifierCatalog::builtin();
        let err = catalog.resolve("Shakespearean").unwrap_err();
        assert!(matches!(err, ForgeError::UnknownModifierKey { ref key } if key == "Shakespearean"));
    }
}
