
use std::fmt::Debug;

use crate::rbtree::{Color, NodeRef, RBTree};

/// Indented structural dump, right subtree above the left so the output
/// reads as the tree rotated 90 degrees counterclockwise. `>` marks the
/// root. Debug aid only; never consulted by the balancing code.
pub fn render<T: Debug>(tree: &RBTree<T>) -> String {
    let mut out = String::from("--------------\n");
    if let Some(root) = tree.root.as_ref() {
        render_node(root, 0, true, &mut out);
    }
    out.push_str("--------------");
    out
}

fn render_node<T: Debug>(node: &NodeRef<T>, depth: usize, is_root: bool, out: &mut String) {
    let n = node.borrow();

    if let Some(right) = n.right.as_ref() {
        render_node(right, depth + 1, false, out);
    }

    let symbol = if is_root { '>' } else { '*' };
    let tag = match n.get_color() {
        Color::Red => 'R',
        Color::Black => 'B',
    };
    out.push_str(&format!(
        "{}{} {:?}({})\n",
        "    ".repeat(depth),
        symbol,
        n.element,
        tag
    ));

    if let Some(left) = n.left.as_ref() {
        render_node(left, depth + 1, false, out);
    }
}
