//! Pre-order traversal over a tree-sitter tree.
//!
//! A single `TreeCursor` is moved through the tree, so deep nesting never
//! grows the call stack.

use tree_sitter::Node;

/// What the walk should do after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Descend,
    /// Do not enter this node's children.
    Skip,
}

/// Visit `root` and every node below it exactly once, parents before children.
pub fn walk<'tree, F>(root: Node<'tree>, mut visit: F)
where
    F: FnMut(Node<'tree>) -> Walk,
{
    let mut cursor = root.walk();
    loop {
        let descend = visit(cursor.node()) == Walk::Descend;

        if descend && cursor.goto_first_child() {
            continue;
        }

        if cursor.goto_next_sibling() {
            continue;
        }

        // No next sibling: climb until an ancestor has one, or we are back at the root.
        loop {
            if !cursor.goto_parent() {
                return;
            }
            if cursor.goto_next_sibling() {
                break;
            }
        }
    }
}

/// Position (1-based line, column) of the first ERROR or MISSING node, if any.
pub fn first_error(root: Node<'_>) -> Option<(usize, usize)> {
    if !root.has_error() {
        return None;
    }

    let mut found = None;
    walk(root, |node| {
        if found.is_some() || !node.has_error() {
            return Walk::Skip;
        }
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            found = Some((pos.row + 1, pos.column + 1));
            return Walk::Skip;
        }
        Walk::Descend
    });

    // has_error() was true, so something below is broken even if we did not pin it.
    found.or_else(|| {
        let pos = root.start_position();
        Some((pos.row + 1, pos.column + 1))
    })
}
