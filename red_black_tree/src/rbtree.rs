#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator;
    use proptest::prelude::*;
    use rand::distributions::{Alphanumeric, DistString};
    use rand::seq::SliceRandom;
    use std::collections::BTreeSet;

    fn rand_string_gen() -> String {
        Alphanumeric.sample_string(&mut rand::thread_rng(), 20)
    }

    #[test]
    fn test_node_color_update() {
        let mut node = Node::new(2, Color::Red, None, None, None);
        node.update_color(Color::Black);
        assert_eq!(Color::Black, node.get_color());
    }

    #[test]
    fn test_get_left_child() {
        let node_1 = Node::new(1, Color::Red, None, None, None);
        let node_1_rc = Rc::new(RefCell::new(node_1));
        let node_2 = Node::new(2, Color::Red, Some(Rc::clone(&node_1_rc)), None, None);

        assert!(Rc::ptr_eq(&node_1_rc, &node_2.get_left_child().unwrap()))
    }

    #[test]
    fn test_get_right_child() {
        let node_1 = Node::new(3, Color::Red, None, None, None);
        let node_1_rc = Rc::new(RefCell::new(node_1));
        let node_2 = Node::new(2, Color::Red, None, Some(Rc::clone(&node_1_rc)), None);

        assert!(Rc::ptr_eq(&node_1_rc, &node_2.get_right_child().unwrap()))
    }

    #[test]
    fn test_get_parent() {
        let node_1 = Node::new(1, Color::Red, None, None, None);
        let node_1_rc = Rc::new(RefCell::new(node_1));
        let node_2 = Node::new(2, Color::Red, None, None, Some(Rc::downgrade(&node_1_rc)));

        assert!(Rc::ptr_eq(&node_1_rc, &node_2.get_parent().unwrap()))
    }

    #[test]
    fn test_tree_insertion_and_search() {
        let sample_vec: Vec<String> = (0..20).map(|_| rand_string_gen()).collect();

        let mut rb_tree = RBTree::new();

        for key in &sample_vec {
            rb_tree.insert(key.clone());
        }

        for key in &sample_vec {
            assert_eq!(
                rb_tree.search(key).as_ref(),
                Some(key),
                "did not find key: {}",
                key
            );
        }

        assert_eq!(rb_tree.search(&String::from("not inserted")), None);
    }

    #[test]
    fn test_tree_order() {
        let mut keys: Vec<String> = (0..20).map(|_| rand_string_gen()).collect();

        let mut tree = RBTree::new();
        for key in &keys {
            tree.insert(key.clone());
        }

        keys.sort();
        let tree_vec: Vec<String> = tree.iter().collect();
        assert_eq!(keys, tree_vec);
    }

    #[test]
    fn test_empty_tree() {
        let tree: RBTree<i32> = RBTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.search(&5), None);
        assert_eq!(tree.iter().next(), None);
        assert!(validator::check(&tree).is_empty());
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut tree = RBTree::new();
        tree.insert(5);
        tree.insert(5);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.search(&5), Some(5));
    }

    // Inserting 10, 20, 30 forces the straight-line case: one left rotation
    // at 10 and a recolor leaves 20 as the black root with two red children.
    #[test]
    fn test_insert_rebalances_ascending_triple() {
        let mut tree = RBTree::new();
        tree.insert(10);
        tree.insert(20);
        tree.insert(30);

        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.borrow().element, 20);
        assert_eq!(root.borrow().get_color(), Color::Black);

        let left = root.borrow().get_left_child().unwrap();
        assert_eq!(left.borrow().element, 10);
        assert_eq!(left.borrow().get_color(), Color::Red);

        let right = root.borrow().get_right_child().unwrap();
        assert_eq!(right.borrow().element, 30);
        assert_eq!(right.borrow().get_color(), Color::Red);
    }

    #[test]
    fn test_insert_keeps_invariants_after_every_step() {
        let mut keys: Vec<i32> = (0..100).collect();
        keys.shuffle(&mut rand::thread_rng());

        let mut tree = RBTree::new();
        for key in keys {
            tree.insert(key);
            assert!(validator::check(&tree).is_empty());
        }
        assert_eq!(tree.len(), 100);
    }

    #[test]
    fn test_delete_missing_key_leaves_tree_unchanged() {
        let mut tree = RBTree::new();
        for key in [10, 20, 30] {
            tree.insert(key);
        }

        assert_eq!(tree.delete(&99), None);
        assert_eq!(tree.len(), 3);
        let contents: Vec<i32> = tree.iter().collect();
        assert_eq!(contents, vec![10, 20, 30]);
    }

    #[test]
    fn test_delete_interior_node() {
        let mut tree = RBTree::new();
        for key in [10, 20, 30, 40, 50, 25] {
            tree.insert(key);
        }

        assert_eq!(tree.delete(&30), Some(30));
        assert!(validator::check(&tree).is_empty());
        let contents: Vec<i32> = tree.iter().collect();
        assert_eq!(contents, vec![10, 20, 25, 40, 50]);
    }

    #[test]
    fn test_delete_only_element() {
        let mut tree = RBTree::new();
        tree.insert(5);

        assert_eq!(tree.delete(&5), Some(5));
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.search(&5), None);
        assert_eq!(tree.delete(&5), None);
        assert!(validator::check(&tree).is_empty());
    }

    #[test]
    fn test_round_trip_leaves_empty_tree() {
        let mut keys: Vec<i32> = (0..200).collect();
        keys.shuffle(&mut rand::thread_rng());

        let mut tree = RBTree::new();
        for key in &keys {
            tree.insert(*key);
        }
        assert_eq!(tree.len(), 200);

        keys.shuffle(&mut rand::thread_rng());
        for key in &keys {
            assert_eq!(tree.delete(key), Some(*key));
            assert!(validator::check(&tree).is_empty());
        }

        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert!(validator::check(&tree).is_empty());
    }

    #[test]
    fn test_height_stays_logarithmic() {
        let n = 1024;
        let mut tree = RBTree::new();
        for key in 0..n {
            tree.insert(key);
        }

        let height = validator::height(&tree);
        let bound = 2.0 * ((n + 1) as f64).log2();
        assert!(
            (height as f64) <= bound,
            "height {} exceeds bound {}",
            height,
            bound
        );
    }

    proptest! {
        // Interleaved inserts and deletes checked against BTreeSet as the
        // model, re-validating all five invariants after every operation.
        #[test]
        fn prop_matches_btreeset(ops in prop::collection::vec((any::<bool>(), 0u16..512), 1..200)) {
            let mut tree = RBTree::new();
            let mut model = BTreeSet::new();

            for (is_insert, key) in ops {
                if is_insert {
                    tree.insert(key);
                    model.insert(key);
                } else {
                    prop_assert_eq!(tree.delete(&key), model.take(&key));
                }
                prop_assert!(validator::check(&tree).is_empty());
                prop_assert_eq!(tree.len(), model.len());
            }

            let contents: Vec<u16> = tree.iter().collect();
            let expected: Vec<u16> = model.into_iter().collect();
            prop_assert_eq!(contents, expected);
        }

        // A narrow key range forces dense trees and many deletions of
        // interior nodes, hammering the red-sibling conversion in both
        // mirror orientations.
        #[test]
        fn prop_clustered_deletes_keep_invariants(ops in prop::collection::vec((any::<bool>(), 0u8..16), 1..300)) {
            let mut tree = RBTree::new();
            let mut model = BTreeSet::new();

            for (is_insert, key) in ops {
                if is_insert {
                    tree.insert(key);
                    model.insert(key);
                } else {
                    prop_assert_eq!(tree.delete(&key), model.take(&key));
                }
                prop_assert!(validator::check(&tree).is_empty());
            }
        }

        #[test]
        fn prop_search_agrees_with_membership(keys in prop::collection::hash_set(0u16..512, 0..100), probes in prop::collection::vec(0u16..512, 0..50)) {
            let mut tree = RBTree::new();
            for key in &keys {
                tree.insert(*key);
            }

            for probe in probes {
                prop_assert_eq!(tree.search(&probe), keys.get(&probe).copied());
            }
        }
    }
}

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::{Rc, Weak};

use anyhow::{anyhow, bail, Result};
use log::trace;

pub type NodeRef<T> = Rc<RefCell<Node<T>>>;
pub type ParentRef<T> = Weak<RefCell<Node<T>>>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Which child slot a node occupies under its parent. Both fix-ups are
/// written once over this instead of as two mirrored copies.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Debug)]
pub struct Node<T> {
    pub element: T,
    color: Color,
    pub left: Option<NodeRef<T>>,
    pub right: Option<NodeRef<T>>,
    pub parent: Option<ParentRef<T>>,
}

impl<T> Node<T> {
    pub fn new(
        element: T,
        color: Color,
        left: Option<NodeRef<T>>,
        right: Option<NodeRef<T>>,
        parent: Option<ParentRef<T>>,
    ) -> Node<T> {
        Node {
            element,
            color,
            left,
            right,
            parent,
        }
    }

    pub fn get_color(&self) -> Color {
        self.color
    }

    pub fn update_color(&mut self, new_color: Color) {
        self.color = new_color;
    }

    pub fn get_left_child(&self) -> Option<NodeRef<T>> {
        self.left.as_ref().map(Rc::clone)
    }

    pub fn get_right_child(&self) -> Option<NodeRef<T>> {
        self.right.as_ref().map(Rc::clone)
    }

    pub fn get_parent(&self) -> Option<NodeRef<T>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    pub fn child(&self, side: Side) -> Option<NodeRef<T>> {
        match side {
            Side::Left => self.get_left_child(),
            Side::Right => self.get_right_child(),
        }
    }

    pub fn set_child(&mut self, side: Side, child: Option<NodeRef<T>>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

/// An absent child is an implicit black nil leaf.
fn is_black<T>(node: &Option<NodeRef<T>>) -> bool {
    node.as_ref()
        .map_or(true, |n| n.borrow().get_color() == Color::Black)
}

fn minimum<T>(node: NodeRef<T>) -> NodeRef<T> {
    let mut smallest = node;
    let mut next = smallest.borrow().get_left_child();

    while let Some(node) = next {
        next = node.borrow().get_left_child();
        smallest = node;
    }
    smallest
}

/// Self-balancing ordered container. Elements compare by `Ord`; inserting
/// an element equal to a stored one is a no-op, so every stored element is
/// unique.
#[derive(Debug)]
pub struct RBTree<T> {
    pub(crate) root: Option<NodeRef<T>>,
    size: usize,
}

impl<T> Default for RBTree<T> {
    fn default() -> RBTree<T> {
        RBTree::new()
    }
}

impl<T> RBTree<T> {
    pub fn new() -> RBTree<T> {
        RBTree {
            root: None,
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn iter(&self) -> InOrder<T> {
        InOrder::new(self.root.as_ref())
    }

    fn parent_of(node: &NodeRef<T>) -> Option<NodeRef<T>> {
        node.borrow().get_parent()
    }

    fn side_of(parent: &NodeRef<T>, child: &NodeRef<T>) -> Result<Side> {
        let parent = parent.borrow();
        if parent.left.as_ref().map_or(false, |l| Rc::ptr_eq(l, child)) {
            Ok(Side::Left)
        } else if parent.right.as_ref().map_or(false, |r| Rc::ptr_eq(r, child)) {
            Ok(Side::Right)
        } else {
            bail!("parent/child links are out of sync")
        }
    }

    fn sibling(node: &NodeRef<T>) -> Result<Option<NodeRef<T>>> {
        match Self::parent_of(node) {
            Some(parent) => {
                let side = Self::side_of(&parent, node)?;
                Ok(parent.borrow().child(side.opposite()))
            }
            None => Ok(None),
        }
    }

    /// Rotate so that `node` descends toward `dir` and its `dir.opposite()`
    /// child takes its place. Rotating a node without that child is a
    /// precondition violation.
    fn rotate(&mut self, node: &NodeRef<T>, dir: Side) -> Result<()> {
        let pivot = node
            .borrow()
            .child(dir.opposite())
            .ok_or_else(|| anyhow!("rotation pivot missing"))?;

        let transfer = pivot.borrow().child(dir);
        if let Some(ref grandchild) = transfer {
            grandchild.borrow_mut().parent = Some(Rc::downgrade(node));
        }
        node.borrow_mut().set_child(dir.opposite(), transfer);

        match Self::parent_of(node) {
            Some(parent) => {
                pivot.borrow_mut().parent = Some(Rc::downgrade(&parent));
                let side = Self::side_of(&parent, node)?;
                parent.borrow_mut().set_child(side, Some(Rc::clone(&pivot)));
            }
            None => {
                pivot.borrow_mut().parent = None;
                self.root = Some(Rc::clone(&pivot));
            }
        }

        pivot.borrow_mut().set_child(dir, Some(Rc::clone(node)));
        node.borrow_mut().parent = Some(Rc::downgrade(&pivot));
        Ok(())
    }

    /// Link `node`'s parent directly to `child`, cutting `node` out of the
    /// tree. `child` may be absent.
    fn transplant(&mut self, node: &NodeRef<T>, child: Option<NodeRef<T>>) -> Result<()> {
        match Self::parent_of(node) {
            Some(parent) => {
                let side = Self::side_of(&parent, node)?;
                if let Some(ref c) = child {
                    c.borrow_mut().parent = Some(Rc::downgrade(&parent));
                }
                parent.borrow_mut().set_child(side, child);
            }
            None => {
                if let Some(ref c) = child {
                    c.borrow_mut().parent = None;
                }
                self.root = child;
            }
        }

        let mut node = node.borrow_mut();
        node.left = None;
        node.right = None;
        node.parent = None;
        Ok(())
    }
}

impl<T: Ord + Clone> RBTree<T> {
    fn search_node(&self, key: &T) -> Option<NodeRef<T>> {
        let mut iter: Option<NodeRef<T>> = self.root.as_ref().cloned();

        while let Some(iter_node) = iter {
            let ordering = key.cmp(&iter_node.borrow().element);
            match ordering {
                Ordering::Equal => return Some(iter_node),
                Ordering::Less => iter = iter_node.borrow().get_left_child(),
                Ordering::Greater => iter = iter_node.borrow().get_right_child(),
            }
        }
        None
    }

    pub fn search(&self, key: &T) -> Option<T> {
        self.search_node(key)
            .map(|node| node.borrow().element.clone())
    }

    pub fn insert(&mut self, element: T) {
        let mut leaf_node: Option<NodeRef<T>> = None;
        let mut side = Side::Left;
        let mut iter: Option<NodeRef<T>> = self.root.as_ref().cloned();

        while let Some(iter_node) = iter {
            leaf_node = Some(Rc::clone(&iter_node));
            let ordering = element.cmp(&iter_node.borrow().element);
            match ordering {
                // The element is already stored; leave the tree untouched.
                Ordering::Equal => return,
                Ordering::Less => {
                    side = Side::Left;
                    iter = iter_node.borrow().get_left_child();
                }
                Ordering::Greater => {
                    side = Side::Right;
                    iter = iter_node.borrow().get_right_child();
                }
            }
        }

        let new_node = Rc::new(RefCell::new(Node::new(element, Color::Red, None, None, None)));

        match leaf_node {
            Some(leaf) => {
                new_node.borrow_mut().parent = Some(Rc::downgrade(&leaf));
                leaf.borrow_mut().set_child(side, Some(Rc::clone(&new_node)));
                self.size += 1;
                self.insert_fixup(new_node)
                    .expect("insert fixup hit an impossible tree state");
            }
            None => {
                new_node.borrow_mut().update_color(Color::Black);
                self.root = Some(new_node);
                self.size += 1;
            }
        }
    }

    fn insert_fixup(&mut self, new_node: NodeRef<T>) -> Result<()> {
        let mut curr_node = new_node;

        loop {
            let parent = match Self::parent_of(&curr_node) {
                Some(parent) => parent,
                None => break,
            };
            if parent.borrow().get_color() == Color::Black {
                break;
            }

            // The parent is red, so it cannot be the black root.
            let grandparent = Self::parent_of(&parent)
                .ok_or_else(|| anyhow!("red node has no grandparent"))?;
            let side = Self::side_of(&grandparent, &parent)?;
            let uncle = Self::sibling(&parent)?;

            match uncle {
                Some(uncle) if uncle.borrow().get_color() == Color::Red => {
                    trace!("insert fixup: red uncle, recoloring and ascending");
                    parent.borrow_mut().update_color(Color::Black);
                    uncle.borrow_mut().update_color(Color::Black);
                    grandparent.borrow_mut().update_color(Color::Red);
                    curr_node = grandparent;
                }
                _ => {
                    let is_inner = parent
                        .borrow()
                        .child(side.opposite())
                        .map_or(false, |inner| Rc::ptr_eq(&inner, &curr_node));
                    if is_inner {
                        trace!("insert fixup: black uncle, straightening zig-zag");
                        curr_node = Rc::clone(&parent);
                        self.rotate(&curr_node, side)?;
                    }

                    trace!("insert fixup: black uncle, rotating grandparent");
                    let parent = Self::parent_of(&curr_node)
                        .ok_or_else(|| anyhow!("fixup lost the parent after rotation"))?;
                    let grandparent = Self::parent_of(&parent)
                        .ok_or_else(|| anyhow!("fixup lost the grandparent after rotation"))?;
                    parent.borrow_mut().update_color(Color::Black);
                    grandparent.borrow_mut().update_color(Color::Red);
                    self.rotate(&grandparent, side.opposite())?;
                    break;
                }
            }
        }

        if let Some(root) = self.root.as_ref() {
            root.borrow_mut().update_color(Color::Black);
        }
        Ok(())
    }

    pub fn delete(&mut self, key: &T) -> Option<T> {
        let node = self.search_node(key)?;
        let removed = self
            .remove_node(node)
            .expect("delete fixup hit an impossible tree state");
        Some(removed)
    }

    fn remove_node(&mut self, node: NodeRef<T>) -> Result<T> {
        let removed = node.borrow().element.clone();

        // A node with two children swaps elements with its in-order
        // successor, which has at most one child, and that successor is
        // what gets physically removed.
        let left = node.borrow().get_left_child();
        let right = node.borrow().get_right_child();
        let target = if let (Some(_), Some(right)) = (left, right) {
            let successor = minimum(right);
            let replacement = successor.borrow().element.clone();
            node.borrow_mut().element = replacement;
            successor
        } else {
            node
        };

        let target_color = target.borrow().get_color();
        let parent = Self::parent_of(&target);
        let side = match parent.as_ref() {
            Some(parent) => Some(Self::side_of(parent, &target)?),
            None => None,
        };
        let child = {
            let target = target.borrow();
            target.get_left_child().or_else(|| target.get_right_child())
        };

        self.transplant(&target, child.clone())?;
        self.size -= 1;

        if target_color == Color::Black {
            match child {
                Some(ref child) if child.borrow().get_color() == Color::Red => {
                    // The red child absorbs the lost black unit.
                    child.borrow_mut().update_color(Color::Black);
                }
                _ => {
                    if let (Some(parent), Some(side)) = (parent, side) {
                        self.delete_fixup(child, parent, side)?;
                    }
                    // A black root removed with no red child leaves every
                    // remaining path one black unit shorter uniformly.
                }
            }
        }

        Ok(removed)
    }

    /// Resolve the double-black deficit at the position `node` (possibly
    /// absent) occupies on `side` under `parent`.
    fn delete_fixup(
        &mut self,
        node: Option<NodeRef<T>>,
        parent: NodeRef<T>,
        side: Side,
    ) -> Result<()> {
        let mut node = node;
        let mut parent = Some(parent);
        let mut side = side;

        loop {
            let curr_parent = match parent {
                Some(ref parent) => Rc::clone(parent),
                // The deficit reached the root and vanishes there.
                None => break,
            };
            if !is_black(&node) {
                // A red node absorbs the deficit by turning black below.
                break;
            }

            let mut sibling = curr_parent
                .borrow()
                .child(side.opposite())
                .ok_or_else(|| anyhow!("double-black position has no sibling"))?;

            // Case 1: a red sibling converts to a black-sibling case by
            // rotating the parent toward the deficit.
            if sibling.borrow().get_color() == Color::Red {
                trace!("delete fixup: red sibling, rotating parent toward deficit");
                sibling.borrow_mut().update_color(Color::Black);
                curr_parent.borrow_mut().update_color(Color::Red);
                self.rotate(&curr_parent, side)?;
                sibling = curr_parent
                    .borrow()
                    .child(side.opposite())
                    .ok_or_else(|| anyhow!("red sibling rotation left no sibling"))?;
            }

            let near = sibling.borrow().child(side);
            let mut far = sibling.borrow().child(side.opposite());

            // Case 2: black sibling with two black children gives up one
            // black unit; the deficit either stops at a red parent or
            // moves up.
            if is_black(&near) && is_black(&far) {
                trace!("delete fixup: black sibling and children, pushing deficit up");
                sibling.borrow_mut().update_color(Color::Red);
                if curr_parent.borrow().get_color() == Color::Red {
                    curr_parent.borrow_mut().update_color(Color::Black);
                    break;
                }
                node = Some(Rc::clone(&curr_parent));
                parent = Self::parent_of(&curr_parent);
                if let Some(ref grandparent) = parent {
                    side = Self::side_of(grandparent, &curr_parent)?;
                }
                continue;
            }

            // Case 3: only the near child is red; rotating the sibling
            // away from the deficit moves the red onto the far slot.
            if is_black(&far) {
                trace!("delete fixup: red near child, converting to far");
                let near = near.ok_or_else(|| anyhow!("near child vanished mid-fixup"))?;
                near.borrow_mut().update_color(Color::Black);
                sibling.borrow_mut().update_color(Color::Red);
                self.rotate(&sibling, side.opposite())?;
                sibling = curr_parent
                    .borrow()
                    .child(side.opposite())
                    .ok_or_else(|| anyhow!("sibling rotation left no sibling"))?;
                far = sibling.borrow().child(side.opposite());
            }

            // Case 4: a red far child absorbs the deficit outright.
            trace!("delete fixup: red far child, absorbing deficit");
            let parent_color = curr_parent.borrow().get_color();
            sibling.borrow_mut().update_color(parent_color);
            curr_parent.borrow_mut().update_color(Color::Black);
            far.ok_or_else(|| anyhow!("far child vanished mid-fixup"))?
                .borrow_mut()
                .update_color(Color::Black);
            self.rotate(&curr_parent, side)?;
            break;
        }

        if let Some(node) = node {
            node.borrow_mut().update_color(Color::Black);
        }
        Ok(())
    }
}

/// Lazy ascending walk over the stored elements, computed fresh per call
/// to [`RBTree::iter`].
pub struct InOrder<T> {
    node: Option<NodeRef<T>>,
}

impl<T> InOrder<T> {
    fn new(root: Option<&NodeRef<T>>) -> InOrder<T> {
        InOrder {
            node: root.map(|root| minimum(Rc::clone(root))),
        }
    }
}

impl<T: Clone> Iterator for InOrder<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node.as_ref().cloned()?;
        let ret = node.borrow().element.clone();

        if let Some(right_child) = node.borrow().get_right_child() {
            self.node = Some(minimum(right_child));
        } else {
            // Climb until leaving a right spine; the first ancestor we
            // reach from its left child is the successor.
            let mut child = Rc::clone(&node);
            let mut parent_op = node.borrow().get_parent();
            while let Some(parent) = parent_op.as_ref().cloned() {
                let parent_right_child = parent.borrow().get_right_child();
                match parent_right_child {
                    Some(right_child) if Rc::ptr_eq(&right_child, &child) => {
                        parent_op = parent.borrow().get_parent();
                        child = parent;
                    }
                    _ => break,
                };
            }
            self.node = parent_op;
        }

        Some(ret)
    }
}
