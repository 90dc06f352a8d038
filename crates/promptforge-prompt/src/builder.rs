//! Builder-style helper for constructing **plain-text instructions**.
//!
//! Assembling instruction strings with repeated `push_str` calls is tedious
//! and error-prone.  `InstructionBuilder` offers a fluent API so call sites
//! read like the instruction they produce.  Every method returns `self`,
//! enabling call-chaining:
//!
//! ```rust
//! use promptforge_prompt::builder::InstructionBuilder;
//!
//! let text = InstructionBuilder::new()
//!     .add_text("You are a helpful AI assistant. ")
//!     .add_text("Please keep your response brief and to the point. ")
//!     .add_blank_line()
//!     .add_labeled("Persona", "technical recruiter")
//!     .finalize();
//!
//! assert!(text.starts_with("You are a helpful AI assistant. "));
//! assert!(text.ends_with("Persona: technical recruiter\n"));
//! ```
//!
//! The builder performs **no validation** besides `expect`ing that writing to
//! the internal `String` never fails (which it can't).  It also refrains from
//! smart-formatting: whitespace and newlines are emitted exactly as
//! requested, which is what makes composed output reproducible byte for byte.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce instruction text.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once done, call [`Self::finalize`] to obtain the assembled text.
pub struct InstructionBuilder {
    buffer: String,
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Append text exactly as given, no trailing newline.
    ///
    /// Modifier templates carry their own trailing space, so chaining
    /// `add_text` calls concatenates them seamlessly.
    pub fn add_text(mut self, text: impl Display) -> Self {
        write!(self.buffer, "{text}").expect("failed to write buffer");
        self
    }

    /// Append a line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Append a labeled value on its own line: `Label: value`.
    pub fn add_labeled(mut self, label: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "{label}: {value}").expect("failed to write buffer");
        self
    }

    /// Insert a single newline.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}
