//! Read-only view of a compiled module's symbol table.
//!
//! Symbol tables are produced by the host compiler (an external
//! collaborator) and only ever *queried* here. The one navigation-
//! relevant wrinkle is [`SymbolKind::Reexport`]: an entry whose
//! definition actually lives in another module, which lookup follows.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{FileId, Span};

/// What kind of declaration a symbol table entry names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    Type,
    Constant,
    Field,
    Module,
    /// The name is re-exported from another module; the entry carries
    /// the target module path instead of a local definition.
    Reexport,
}

/// One declared name in a compiled module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: SmolStr,
    pub kind: SymbolKind,
    /// Where the declaration appears in its file.
    pub declared_span: Span,
    /// For [`SymbolKind::Reexport`]: the dotted module path the name
    /// comes from, possibly relative (leading dots) to this module.
    pub reexport_target: Option<SmolStr>,
}

impl SymbolEntry {
    /// A locally declared symbol.
    pub fn declared(name: impl Into<SmolStr>, kind: SymbolKind, span: Span) -> Self {
        Self {
            name: name.into(),
            kind,
            declared_span: span,
            reexport_target: None,
        }
    }

    /// A re-exported symbol pointing at another module.
    pub fn reexport(name: impl Into<SmolStr>, target: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Reexport,
            declared_span: span,
            reexport_target: Some(target.into()),
        }
    }
}

/// Per-module mapping from declared names to their entries.
///
/// Owned by the compiler cache and shared read-only across concurrent
/// requests; the core never mutates a table after the compiler hands
/// it over.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    file: FileId,
    by_name: FxHashMap<SmolStr, SymbolEntry>,
}

impl SymbolTable {
    /// Create an empty table for a file.
    pub fn new(file: FileId) -> Self {
        Self {
            file,
            by_name: FxHashMap::default(),
        }
    }

    /// The file this table describes.
    pub fn file(&self) -> FileId {
        self.file
    }

    /// Add an entry. Intended for the compiler side of the boundary;
    /// lookups never insert.
    pub fn insert(&mut self, entry: SymbolEntry) {
        self.by_name.insert(entry.name.clone(), entry);
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.by_name.get(name)
    }

    /// Iterate over all entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.by_name.values()
    }

    /// Number of declared names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the module declares nothing.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
