//! # `promptforge-prompt`
//!
//! The prompt-assembly half of the workspace: a statically declared catalog
//! of modifier templates, an ordered set of contextual fields, and the pure
//! [`compose::compose`] function that turns
//! `{base instruction, selected modifiers, context}` into one reproducible
//! system instruction string.
//!
//! Nothing here performs I/O and every operation is deterministic: identical
//! inputs yield byte-identical output.

pub mod builder;
pub mod catalog;
pub mod chain;
pub mod compose;
pub mod context;

pub use builder::InstructionBuilder;
pub use catalog::ModifierCatalog;
pub use chain::MessageChain;
pub use compose::compose;
pub use context::ContextFields;
