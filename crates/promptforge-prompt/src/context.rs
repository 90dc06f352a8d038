//! Ordered contextual fields narrated into the composed instruction.
//!
//! Persona, audience, metric of interest — free-form `{label, value}` pairs
//! the form renderer collects alongside the modifier selection.  Declaration
//! order is the narration order, so the same fields always render the same
//! bytes.  A hash map would make narration order depend on hashing; a `Vec`
//! keeps it under the caller's control.

/// Insertion-ordered list of `{label, value}` pairs.
///
/// Labels are unique: setting an existing label replaces its value in place,
/// keeping the original position.
#[derive(Debug, Clone, Default)]
pub struct ContextFields {
    fields: Vec<(String, String)>,
}

impl ContextFields {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field.  Takes `self` by value for chaining.
    pub fn with(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(label, value);
        self
    }

    /// Add or replace a field in place.
    pub fn set(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(l, _)| *l == label) {
            Some(field) => field.1 = value,
            None => self.fields.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Owned snapshot of the fields, in declaration order.  Recorded on each
    /// ledger exchange.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.fields.clone()
    }
}
