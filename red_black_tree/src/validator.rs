
use std::rc::Rc;

use crate::rbtree::{Color, NodeRef, RBTree};

/// One red-black invariant the tree failed to uphold.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Violation {
    ParentChildLink,
    BstOrder,
    RootNotBlack,
    DoubleRed,
    BlackHeight,
}

/// Re-checks all five invariants from scratch, independently of the
/// balancing code. Intended for test harnesses; an empty result means the
/// tree is sound.
pub fn check<T: Ord>(tree: &RBTree<T>) -> Vec<Violation> {
    let mut violations = Vec::new();
    let root = match tree.root.as_ref() {
        Some(root) => root,
        None => return violations,
    };

    if !links_consistent(root) {
        violations.push(Violation::ParentChildLink);
    }
    if !ordered(root, None, None) {
        violations.push(Violation::BstOrder);
    }
    if root.borrow().get_color() != Color::Black {
        violations.push(Violation::RootNotBlack);
    }
    if !no_double_red(root) {
        violations.push(Violation::DoubleRed);
    }
    if black_height(Some(root)).is_none() {
        violations.push(Violation::BlackHeight);
    }
    violations
}

/// Tree height in nodes; 0 for the empty tree. Used by tests to confirm
/// the 2*log2(n+1) red-black height bound.
pub fn height<T>(tree: &RBTree<T>) -> usize {
    fn node_height<T>(node: Option<&NodeRef<T>>) -> usize {
        match node {
            None => 0,
            Some(node) => {
                let node = node.borrow();
                1 + node_height(node.left.as_ref()).max(node_height(node.right.as_ref()))
            }
        }
    }
    node_height(tree.root.as_ref())
}

fn links_consistent<T>(node: &NodeRef<T>) -> bool {
    let n = node.borrow();
    let mut consistent = true;

    for child in [n.left.as_ref(), n.right.as_ref()].into_iter().flatten() {
        let back_link = child
            .borrow()
            .get_parent()
            .map_or(false, |parent| Rc::ptr_eq(&parent, node));
        consistent = consistent && back_link && links_consistent(child);
    }
    consistent
}

fn ordered<T: Ord>(node: &NodeRef<T>, low: Option<&T>, high: Option<&T>) -> bool {
    let n = node.borrow();
    let element = &n.element;

    if low.map_or(false, |low| element <= low) {
        return false;
    }
    if high.map_or(false, |high| element >= high) {
        return false;
    }

    n.left
        .as_ref()
        .map_or(true, |left| ordered(left, low, Some(element)))
        && n.right
            .as_ref()
            .map_or(true, |right| ordered(right, Some(element), high))
}

fn no_double_red<T>(node: &NodeRef<T>) -> bool {
    let n = node.borrow();

    if n.get_color() == Color::Red {
        let red_child = [n.left.as_ref(), n.right.as_ref()]
            .into_iter()
            .flatten()
            .any(|child| child.borrow().get_color() == Color::Red);
        if red_child {
            return false;
        }
    }

    n.left.as_ref().map_or(true, no_double_red) && n.right.as_ref().map_or(true, no_double_red)
}

/// Black nodes on any path down to an absent-child position, counting the
/// implicit black nil; `None` when the paths disagree.
fn black_height<T>(node: Option<&NodeRef<T>>) -> Option<usize> {
    let node = match node {
        Some(node) => node,
        None => return Some(1),
    };
    let n = node.borrow();

    let left = black_height(n.left.as_ref())?;
    let right = black_height(n.right.as_ref())?;
    if left != right {
        return None;
    }

    match n.get_color() {
        Color::Black => Some(left + 1),
        Color::Red => Some(left),
    }
}
