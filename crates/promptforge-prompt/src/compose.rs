//! Deterministic instruction composition — the core of the prompt assembler.
//!
//! `compose` turns `{base instruction, selected modifier keys, context
//! fields}` into the single system-role instruction string a gateway sends.
//! The function is pure and idempotent: identical inputs yield byte-identical
//! output, which keeps submissions reproducible and the property tests below
//! honest.
//!
//! Output layout:
//!
//! ```text
//! <base><template 1><template 2>…
//! <blank line, only when context is non-empty>
//! <Label>: <value>
//! <Label>: <value>
//! ```
//!
//! Templates carry their own trailing whitespace (see
//! [`crate::catalog::ModifierCatalog::builtin`]), so concatenation needs no
//! separator of its own.

use promptforge_core::error::Result;

use crate::builder::InstructionBuilder;
use crate::catalog::ModifierCatalog;
use crate::context::ContextFields;

/// Compose the final system instruction.
///
/// Every key in `selected` is resolved against `catalog` **before** any text
/// is produced; an unknown key fails with
/// [`promptforge_core::error::ForgeError::UnknownModifierKey`] and nothing is
/// emitted.  Selection order is significant: `[A, B]` and `[B, A]` compose to
/// different strings whenever the templates differ.
pub fn compose<K: AsRef<str>>(
    base_instruction: &str,
    selected: &[K],
    catalog: &ModifierCatalog,
    context: &ContextFields,
) -> Result<String> {
    let mut texts = Vec::with_capacity(selected.len());
    for key in selected {
        texts.push(catalog.resolve(key.as_ref())?);
    }

    let mut builder = InstructionBuilder::new().add_text(base_instruction);
    for text in texts {
        builder = builder.add_text(text);
    }

    if !context.is_empty() {
        builder = builder.add_blank_line();
        for (label, value) in context.iter() {
            builder = builder.add_labeled(label, value);
        }
    }

    Ok(builder.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptforge_core::error::ForgeError;

    const BASE: &str = "You are a helpful assistant. ";

    fn catalog() -> ModifierCatalog {
        ModifierCatalog::builtin()
    }

    #[test]
    fn zero_modifiers_yields_exactly_the_base() {
        let out = compose::<&str>(BASE, &[], &catalog(), &ContextFields::new()).unwrap();
        assert_eq!(out, BASE);
    }

    #[test]
    fn worked_example_concatenates_in_selection_order() {
        let out = compose(
            BASE,
            &["Keep it concise", "Technical language"],
            &catalog(),
            &ContextFields::new(),
        )
        .unwrap();
        assert_eq!(
            out,
            "You are a helpful assistant. \
             Please keep your response brief and to the point. \
             Please use technical terminology and assume technical knowledge. "
        );
    }

    #[test]
    fn composition_is_order_sensitive() {
        let ab = compose(BASE, &["Keep it concise", "Step by step"], &catalog(), &ContextFields::new()).unwrap();
        let ba = compose(BASE, &["Step by step", "Keep it concise"], &catalog(), &ContextFields::new()).unwrap();
        assert_ne!(ab, ba);
    }

    #[test]
    fn composition_is_deterministic() {
        let ctx = ContextFields::new()
            .with("Persona", "recruiter")
            .with("Metric", "response quality");
        let first = compose(BASE, &["Data-driven"], &catalog(), &ctx).unwrap();
        let second = compose(BASE, &["Data-driven"], &catalog(), &ctx).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn context_fields_narrate_in_declared_order() {
        let ctx = ContextFields::new()
            .with("Persona", "recruiter")
            .with("Metric", "latency");
        let out = compose::<&str>(BASE, &[], &catalog(), &ctx).unwrap();
        assert_eq!(
            out,
            "You are a helpful assistant. \nPersona: recruiter\nMetric: latency\n"
        );
    }

    #[test]
    fn unknown_key_fails_without_partial_output() {
        let err = compose(
            BASE,
            &["Keep it concise", "Pirate voice"],
            &catalog(),
            &ContextFields::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ForgeError::UnknownModifierKey { ref key } if key == "Pirate voice"));
    }
}
