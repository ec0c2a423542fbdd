//! Foundation types for the navigation core.
//!
//! This module provides the primitives everything else builds on:
//! - [`FileId`] - Interned handles for resolved module files
//! - [`LineCol`], [`Span`] - Line/column positions and closed-open ranges
//! - [`LineIndex`] - Byte-offset to line/column conversion
//!
//! This module has NO dependencies on other tern-nav modules.

mod file_id;
mod span;

pub use file_id::FileId;
pub use span::{LineCol, LineIndex, Span};

// Re-export text-size types for convenience
pub use text_size::TextSize;
