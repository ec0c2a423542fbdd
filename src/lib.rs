//! # tern-nav
//!
//! Cross-language navigation core for the Tern toolchain: resolves
//! go-to-definition requests made from *Python* files that import Tern
//! modules. The Tern compiler owns parsing, symbol tables, and the
//! language server; this crate is the piece that makes "where is this
//! defined" work when the file under the cursor is not Tern source.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide      → request pipeline (goto_definition, NavHost)
//!   ↓
//! resolve  → module-path resolution, symbol lookup, compile cache
//!   ↓
//! extract  → reference intent at the cursor
//!   ↓
//! foreign  → Python parsing (tree-sitter) + AST conversion
//!   ↓
//! ast      → host AST nodes + cursor/span lookup
//!   ↓
//! base     → primitives (FileId, LineCol, Span, LineIndex)
//! ```
//!
//! ## Position handling
//!
//! Converted AST nodes keep the foreign parser's original line/column
//! data on every node — spans are never recomputed from regenerated
//! text, so a location reported to the editor is always a range in the
//! file the user is actually looking at.

/// Foundation types: FileId, LineCol, Span, LineIndex
pub mod base;

/// Host AST node type and cursor resolution
pub mod ast;

/// Foreign parser boundary and position-preserving conversion
pub mod foreign;

/// Reference-intent extraction
pub mod extract;

/// Module and symbol resolution
pub mod resolve;

/// Request-level APIs for the editor server
pub mod ide;

/// Failure taxonomy crossing the library boundary
pub mod error;

// Re-export the types most callers need
pub use base::{FileId, LineCol, LineIndex, Span};
pub use error::NavError;
pub use ide::{GotoRequest, GotoResult, NavHost, goto_definition};
pub use resolve::{DefinitionLocation, ResolveConfig};
