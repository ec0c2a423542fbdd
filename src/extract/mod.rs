//! Reference extraction — what does the node under the cursor refer to?
//!
//! Walks the root-to-cursor chain upward, bounded by the enclosing
//! statement, and classifies the click into one of four intents. Only
//! import-site references are in scope: a node inside a function body,
//! an attribute access, a literal — all of those classify as
//! [`ReferenceIntent::NotAReference`], which is a stated limitation,
//! not an error.

use smol_str::SmolStr;

use crate::ast::{AstKind, AstNode};
use crate::resolve::ModulePath;

/// What the clicked token refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReferenceIntent {
    /// The click targets a module: a path segment, an aliased module
    /// import, or a wildcard import's statement.
    ImportedModule { module: ModulePath },
    /// `from module import name` with the click on `name`.
    ImportedSymbol {
        module: ModulePath,
        symbol: SmolStr,
    },
    /// `from module import name as alias` with the click on either
    /// `name` or `alias`.
    AliasedImport {
        module: ModulePath,
        symbol: SmolStr,
        alias: SmolStr,
    },
    /// The cursor is not on an import-site reference.
    NotAReference,
}

/// Classify the chain returned by [`crate::ast::locate_path`].
///
/// The chain runs root → innermost; an empty chain (cursor outside the
/// tree) is not a reference.
pub fn classify(chain: &[&AstNode]) -> ReferenceIntent {
    // Find the enclosing import statement, if any. Imports never nest,
    // so the first hit walking upward is the statement.
    let Some(stmt_idx) = chain.iter().rposition(|n| n.kind().is_import()) else {
        return ReferenceIntent::NotAReference;
    };
    let stmt = chain[stmt_idx];
    let below = &chain[stmt_idx + 1..];

    let relative_level = match stmt.kind() {
        AstKind::ImportFrom { relative_level } => *relative_level,
        _ => 0,
    };

    match below.first().map(|n| n.kind()) {
        // Click on the statement itself: keyword, comma, whitespace.
        None => ReferenceIntent::NotAReference,

        // `from m import *` — the only target worth offering is the
        // module itself.
        Some(AstKind::Wildcard) => match module_path_of(stmt, relative_level) {
            Some(module) => ReferenceIntent::ImportedModule { module },
            None => ReferenceIntent::NotAReference,
        },

        // Click inside the `from ...` module path.
        Some(AstKind::ModulePath) => {
            let path_node = below[0];
            let module = clicked_prefix(path_node, below.get(1).copied(), relative_level);
            ReferenceIntent::ImportedModule { module }
        }

        // Click inside one imported item.
        Some(AstKind::ImportItem { name, alias }) => {
            match stmt.kind() {
                AstKind::Import => {
                    // `import a.b.c [as x]` binds a module, not a
                    // symbol. A click on a path segment narrows to
                    // that segment's prefix; a click on the alias (or
                    // the item itself) takes the full path.
                    match below.get(1).map(|n| n.kind()) {
                        Some(AstKind::ModulePath) => {
                            let module =
                                clicked_prefix(below[1], below.get(2).copied(), relative_level);
                            ReferenceIntent::ImportedModule { module }
                        }
                        _ => ReferenceIntent::ImportedModule {
                            module: ModulePath::parse(name),
                        },
                    }
                }
                _ => {
                    let Some(module) = module_path_of(stmt, relative_level) else {
                        return ReferenceIntent::NotAReference;
                    };
                    match alias {
                        Some(alias) => ReferenceIntent::AliasedImport {
                            module,
                            symbol: name.clone(),
                            alias: alias.clone(),
                        },
                        None => ReferenceIntent::ImportedSymbol {
                            module,
                            symbol: name.clone(),
                        },
                    }
                }
            }
        }

        Some(_) => ReferenceIntent::NotAReference,
    }
}

/// The full module path of a `from` statement: its first `ModulePath`
/// child plus the statement's relative level.
fn module_path_of(stmt: &AstNode, relative_level: u32) -> Option<ModulePath> {
    let path_node = stmt
        .children()
        .iter()
        .find(|c| matches!(c.kind(), AstKind::ModulePath))?;
    Some(path_from_node(path_node, path_node.children().len(), relative_level))
}

/// The module path up to and including the clicked segment. A click on
/// the path node itself (a dot between segments) takes the full path.
fn clicked_prefix(
    path_node: &AstNode,
    clicked: Option<&AstNode>,
    relative_level: u32,
) -> ModulePath {
    let upto = match clicked {
        Some(segment) => path_node
            .children()
            .iter()
            .position(|c| std::ptr::eq(c, segment))
            .map(|i| i + 1)
            .unwrap_or(path_node.children().len()),
        None => path_node.children().len(),
    };
    path_from_node(path_node, upto, relative_level)
}

fn path_from_node(path_node: &AstNode, upto: usize, relative_level: u32) -> ModulePath {
    let segments = path_node
        .children()
        .iter()
        .take(upto)
        .filter_map(|c| c.name().map(SmolStr::new))
        .collect();
    if relative_level > 0 {
        ModulePath::relative(relative_level, segments)
    } else {
        ModulePath::absolute(segments)
    }
}
