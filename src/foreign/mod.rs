//! The foreign-language boundary.
//!
//! Python files are parsed by the Python ecosystem's own parser
//! (tree-sitter with the tree-sitter-python grammar); this module wraps
//! that collaborator and converts its syntax tree into the host AST.
//! The parser is consumed as-is — nothing here re-implements Python
//! parsing.

mod convert;
mod parser;

pub use convert::{Conversion, ConversionNote, convert_source};
pub use parser::{ForeignParser, ForeignTree, ParseError};
