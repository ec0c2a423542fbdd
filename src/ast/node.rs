//! The host-side AST node type.
//!
//! One closed tagged variant covers every syntactic category the host
//! compiler understands, plus an explicit [`AstKind::Opaque`] fallback
//! for foreign constructs with no host equivalent. Keeping the variant
//! closed makes the foreign-to-host conversion a total match that the
//! compiler checks for exhaustiveness.

use smol_str::SmolStr;

use crate::base::Span;

/// The syntactic category of an [`AstNode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AstKind {
    /// The root of a converted file.
    Module,
    /// `import a.b, c as d` — children are [`AstKind::ImportItem`]s.
    Import,
    /// `from ..pkg.mod import X, Y as Z` — first child is the
    /// [`AstKind::ModulePath`], remaining children are the imported
    /// items (or a single [`AstKind::Wildcard`]).
    ImportFrom {
        /// Number of leading dots; 0 for absolute imports.
        relative_level: u32,
    },
    /// A dotted module path inside an import. Children are one
    /// [`AstKind::Name`] per segment, each with the exact span of that
    /// segment's token.
    ModulePath,
    /// One imported name, possibly aliased. Children carry the tight
    /// per-token spans: a [`AstKind::ModulePath`] or [`AstKind::Name`]
    /// for the name itself, and a trailing [`AstKind::Name`] for the
    /// alias when present.
    ImportItem {
        name: SmolStr,
        alias: Option<SmolStr>,
    },
    /// The `*` of a wildcard import.
    Wildcard,
    /// An identifier reference.
    Name(SmolStr),
    /// Attribute access; the payload is the attribute name, the first
    /// child is the object expression.
    Attribute(SmolStr),
    /// A call expression.
    Call,
    /// An assignment statement.
    Assign,
    /// An expression used as a statement.
    ExprStmt,
    /// A statement container: an indented suite or the whole of a
    /// compound statement (`if`/`for`/`try`/...). Imports nested inside
    /// these still convert fully.
    Block,
    FunctionDef(SmolStr),
    ClassDef(SmolStr),
    /// A foreign construct with no host equivalent. Carries only its
    /// span so position lookups still succeed; reference extraction on
    /// it yields no reference.
    Opaque,
}

impl AstKind {
    /// Whether this kind is one of the import statement forms.
    pub fn is_import(&self) -> bool {
        matches!(self, AstKind::Import | AstKind::ImportFrom { .. })
    }
}

/// A node of the host AST.
///
/// Each node exclusively owns its children; the tree is acyclic by
/// construction. The span always refers to the *foreign* source the
/// node was converted from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstNode {
    kind: AstKind,
    span: Span,
    children: Vec<AstNode>,
}

impl AstNode {
    /// Create a leaf node.
    pub fn new(kind: AstKind, span: Span) -> Self {
        Self {
            kind,
            span,
            children: Vec::new(),
        }
    }

    /// Create a node with children.
    pub fn with_children(kind: AstKind, span: Span, children: Vec<AstNode>) -> Self {
        Self {
            kind,
            span,
            children,
        }
    }

    pub fn kind(&self) -> &AstKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn children(&self) -> &[AstNode] {
        &self.children
    }

    /// Append a child node.
    pub fn push(&mut self, child: AstNode) {
        self.children.push(child);
    }

    /// The identifier text this node introduces or references, if any.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            AstKind::Name(n)
            | AstKind::Attribute(n)
            | AstKind::FunctionDef(n)
            | AstKind::ClassDef(n) => Some(n),
            AstKind::ImportItem { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Total number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(AstNode::node_count).sum::<usize>()
    }

    /// Verify the span containment invariant over the whole subtree:
    /// every child's span is a sub-range of its parent's span.
    ///
    /// Returns the first offending (parent, child) span pair, if any.
    pub fn validate_containment(&self) -> Result<(), (Span, Span)> {
        for child in &self.children {
            if !self.span.contains_span(child.span) {
                return Err((self.span, child.span));
            }
            child.validate_containment()?;
        }
        Ok(())
    }
}
