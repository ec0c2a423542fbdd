//! Thin wrapper around the foreign language's own parser.

use std::fmt;

use thiserror::Error;
use tree_sitter::{Parser, Tree};

/// The syntax tree the foreign parser produces.
///
/// Node positions in this tree are the original source rows/columns;
/// the converter copies them verbatim onto host AST nodes.
pub type ForeignTree = Tree;

/// Failures at the foreign-parser boundary.
///
/// Tree-sitter is error-tolerant: syntactically broken files still
/// yield a tree with ERROR subtrees, which the converter degrades to
/// opaque nodes. These errors cover the cases where no tree exists at
/// all.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to load the Python grammar: {reason}")]
    GrammarLoad { reason: String },

    #[error("the Python parser produced no syntax tree")]
    NoTree,
}

/// A reusable Python parser instance.
pub struct ForeignParser {
    parser: Parser,
}

impl fmt::Debug for ForeignParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignParser")
            .field("language", &"Python")
            .finish()
    }
}

impl ForeignParser {
    /// Create a parser with the Python grammar installed.
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| ParseError::GrammarLoad {
                reason: e.to_string(),
            })?;

        Ok(Self { parser })
    }

    /// Parse one foreign source file.
    pub fn parse(&mut self, source: &str) -> Result<ForeignTree, ParseError> {
        self.parser.parse(source, None).ok_or(ParseError::NoTree)
    }
}
