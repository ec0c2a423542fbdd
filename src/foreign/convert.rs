//! Position-preserving conversion of the foreign syntax tree.
//!
//! Every synthesized host node takes its span directly from the
//! corresponding foreign node's row/column data — an identity mapping,
//! never recomputed from re-printed text, which is why no separate
//! source-map layer exists anywhere in the crate.
//!
//! Import statements get the full treatment: one node per imported
//! item with the tightest span available for just that item's tokens.
//! Constructs the host has no equivalent for become [`AstKind::Opaque`]
//! placeholders carrying only a span; the degradation is collected as
//! [`ConversionNote`]s and never aborts the conversion.

use smol_str::SmolStr;
use tracing::debug;
use tree_sitter::Node;

use crate::ast::{AstKind, AstNode};
use crate::base::{LineCol, Span};

use super::parser::ForeignTree;

/// Foreign node kinds that convert to a generic statement container.
/// Imports nested anywhere below these still convert fully.
const CONTAINER_KINDS: &[&str] = &[
    "block",
    "if_statement",
    "elif_clause",
    "else_clause",
    "while_statement",
    "for_statement",
    "try_statement",
    "except_clause",
    "finally_clause",
    "with_statement",
    "decorated_definition",
    "match_statement",
    "case_clause",
];

/// The result of converting one foreign file.
#[derive(Debug)]
pub struct Conversion {
    /// Root of the host AST, spanning the whole source.
    pub root: AstNode,
    /// One note per foreign construct that degraded to an opaque node.
    pub notes: Vec<ConversionNote>,
}

/// Records a foreign construct with no host-AST equivalent.
///
/// Not an error: the node still exists (as `Opaque`) and position
/// lookups over it succeed; only reference extraction gives up on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionNote {
    /// The foreign grammar's name for the construct.
    pub foreign_kind: SmolStr,
    pub span: Span,
}

/// Convert a parsed foreign tree into the host AST.
pub fn convert_source(tree: &ForeignTree, source: &str) -> Conversion {
    let mut converter = Converter {
        source,
        notes: Vec::new(),
    };
    let root = converter.convert(tree.root_node());

    debug!(
        nodes = root.node_count(),
        degraded = converter.notes.len(),
        "converted foreign tree"
    );

    Conversion {
        root,
        notes: converter.notes,
    }
}

struct Converter<'s> {
    source: &'s str,
    notes: Vec<ConversionNote>,
}

fn span_of(node: Node) -> Span {
    let start = node.start_position();
    let end = node.end_position();
    Span::new(
        LineCol::new(start.row as u32, start.column as u32),
        LineCol::new(end.row as u32, end.column as u32),
    )
}

impl<'s> Converter<'s> {
    fn text(&self, node: Node) -> &'s str {
        &self.source[node.byte_range()]
    }

    fn convert(&mut self, node: Node) -> AstNode {
        match node.kind() {
            "module" => self.container(AstKind::Module, node),
            "import_statement" => self.convert_import(node),
            "import_from_statement" => self.convert_import_from(node),
            "identifier" => AstNode::new(AstKind::Name(self.text(node).into()), span_of(node)),
            "attribute" => self.convert_attribute(node),
            "call" => self.container(AstKind::Call, node),
            "assignment" | "augmented_assignment" => self.container(AstKind::Assign, node),
            "expression_statement" => self.container(AstKind::ExprStmt, node),
            "function_definition" => {
                let name = self.field_text(node, "name");
                self.container(AstKind::FunctionDef(name), node)
            }
            "class_definition" => {
                let name = self.field_text(node, "name");
                self.container(AstKind::ClassDef(name), node)
            }
            // Comments have no host equivalent either, but noting every
            // comment would drown real degradations.
            "comment" => AstNode::new(AstKind::Opaque, span_of(node)),
            kind if CONTAINER_KINDS.contains(&kind) => self.container(AstKind::Block, node),
            kind => {
                self.notes.push(ConversionNote {
                    foreign_kind: kind.into(),
                    span: span_of(node),
                });
                AstNode::new(AstKind::Opaque, span_of(node))
            }
        }
    }

    /// Convert a node by converting all of its named children.
    fn container(&mut self, kind: AstKind, node: Node) -> AstNode {
        let mut cursor = node.walk();
        let children = node
            .named_children(&mut cursor)
            .map(|child| self.convert(child))
            .collect();
        AstNode::with_children(kind, span_of(node), children)
    }

    fn field_text(&self, node: Node, field: &str) -> SmolStr {
        node.child_by_field_name(field)
            .map(|n| SmolStr::new(self.text(n)))
            .unwrap_or_default()
    }

    fn convert_attribute(&mut self, node: Node) -> AstNode {
        let attr = self.field_text(node, "attribute");
        let mut children = Vec::new();
        if let Some(object) = node.child_by_field_name("object") {
            children.push(self.convert(object));
        }
        if let Some(attr_node) = node.child_by_field_name("attribute") {
            children.push(self.convert(attr_node));
        }
        AstNode::with_children(AstKind::Attribute(attr), span_of(node), children)
    }

    /// `import a.b, c as d` — one item per comma-separated target.
    fn convert_import(&mut self, node: Node) -> AstNode {
        let mut items = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "dotted_name" | "identifier" => {
                    let path = self.convert_module_path(child);
                    items.push(AstNode::with_children(
                        AstKind::ImportItem {
                            name: self.text(child).into(),
                            alias: None,
                        },
                        span_of(child),
                        vec![path],
                    ));
                }
                "aliased_import" => items.push(self.convert_aliased(child, true)),
                _ => {}
            }
        }
        AstNode::with_children(AstKind::Import, span_of(node), items)
    }

    /// `from ..pkg.mod import X, Y as Z` / `from m import *`.
    fn convert_import_from(&mut self, node: Node) -> AstNode {
        let mut relative_level = 0u32;
        let mut children = Vec::new();

        match node.child_by_field_name("module_name") {
            Some(module) if module.kind() == "relative_import" => {
                // (relative_import (import_prefix) (dotted_name)?)
                let mut dotted = None;
                let mut cursor = module.walk();
                for child in module.children(&mut cursor) {
                    match child.kind() {
                        "import_prefix" => {
                            relative_level =
                                self.text(child).chars().filter(|&c| c == '.').count() as u32;
                        }
                        "dotted_name" => dotted = Some(child),
                        _ => {}
                    }
                }
                // The path node spans the dots as well, so a cursor on
                // the dots still resolves to the module path.
                let segments = match dotted {
                    Some(d) => self.convert_module_path(d).children().to_vec(),
                    None => Vec::new(),
                };
                children.push(AstNode::with_children(
                    AstKind::ModulePath,
                    span_of(module),
                    segments,
                ));
            }
            Some(module) => children.push(self.convert_module_path(module)),
            None => {}
        }

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "wildcard_import" {
                children.push(AstNode::new(AstKind::Wildcard, span_of(child)));
            }
        }

        let mut cursor = node.walk();
        for item in node.children_by_field_name("name", &mut cursor) {
            match item.kind() {
                "dotted_name" | "identifier" => {
                    // The imported name's own token range, not the
                    // whole statement: this is what lets two names in
                    // one statement resolve to different targets.
                    children.push(AstNode::new(
                        AstKind::ImportItem {
                            name: self.text(item).into(),
                            alias: None,
                        },
                        span_of(item),
                    ));
                }
                "aliased_import" => children.push(self.convert_aliased(item, false)),
                _ => {}
            }
        }

        AstNode::with_children(
            AstKind::ImportFrom { relative_level },
            span_of(node),
            children,
        )
    }

    /// `name as alias`. For `import a.b as c` the name is a module
    /// path; for `from m import X as y` it is a symbol name.
    fn convert_aliased(&mut self, node: Node, module_target: bool) -> AstNode {
        let name_node = node.child_by_field_name("name");
        let alias_node = node.child_by_field_name("alias");

        let Some(name_node) = name_node else {
            // Per-item data unavailable (malformed tree): fall back to
            // the enclosing construct's span. Precision loss, not an
            // error.
            return AstNode::new(
                AstKind::ImportItem {
                    name: self.text(node).into(),
                    alias: None,
                },
                span_of(node),
            );
        };

        let mut children = Vec::new();
        if module_target {
            children.push(self.convert_module_path(name_node));
        } else {
            children.push(AstNode::new(
                AstKind::Name(self.text(name_node).into()),
                span_of(name_node),
            ));
        }

        let alias = alias_node.map(|a| {
            children.push(AstNode::new(
                AstKind::Name(self.text(a).into()),
                span_of(a),
            ));
            SmolStr::new(self.text(a))
        });

        AstNode::with_children(
            AstKind::ImportItem {
                name: self.text(name_node).into(),
                alias,
            },
            span_of(node),
            children,
        )
    }

    /// A dotted name (or bare identifier) as a module path with one
    /// `Name` child per segment, each spanning exactly its own token.
    fn convert_module_path(&mut self, node: Node) -> AstNode {
        let mut segments = Vec::new();
        if node.kind() == "identifier" {
            segments.push(AstNode::new(
                AstKind::Name(self.text(node).into()),
                span_of(node),
            ));
        } else {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind() == "identifier" {
                    segments.push(AstNode::new(
                        AstKind::Name(self.text(child).into()),
                        span_of(child),
                    ));
                }
            }
        }
        AstNode::with_children(AstKind::ModulePath, span_of(node), segments)
    }
}
