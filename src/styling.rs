//! Terminal styling for user-facing output.
//!
//! Uses the anstyle ecosystem: anstream's streams auto-detect color
//! support and strip ANSI codes when output is piped, so styled error
//! messages stay clean in redirects and test captures.

// Re-exports from anstream (auto-detecting output)
pub use anstream::{eprintln, println};

/// Marks fatal error messages.
pub const ERROR_EMOJI: &str = "❌";

/// Marks hint lines shown under an error.
pub const HINT_EMOJI: &str = "💡";
