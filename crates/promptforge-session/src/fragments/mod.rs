//! Prompt fragments derived from session state.

mod history;

pub use history::HistoryFragment;
