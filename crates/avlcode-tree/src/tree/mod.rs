//! Height-balanced binary search tree.

mod iter;
mod rebalance;

use std::cmp::Ordering;

pub use iter::Iter;
pub use rebalance::REBALANCE_MIN_HEIGHT;
use rebalance::{link_at, rebalance_path, refresh_heights};

use crate::core::Side;
use crate::node::{EMPTY_HEIGHT, Link, Node, link_height};

/// Outcome of descending from the root towards an element.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct Descent {
    /// Steps taken from the root.
    pub(super) path: Vec<Side>,
    /// Whether `path` ends at a node holding an equal element. When `false`
    /// the path ends at the vacant link where the element would go.
    pub(super) found: bool,
}

/// An AVL tree over a totally ordered element type.
///
/// Elements are unique by their [`Ord`] implementation. After every call to
/// [`AvlTree::insert`] or [`AvlTree::remove`] the heights of the two subtrees
/// of any node differ by at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvlTree<T> {
    root: Link<T>,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AvlTree<T> {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// The root node, if any.
    #[must_use]
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root, `-1` for an empty tree.
    #[must_use]
    pub fn height(&self) -> i32 {
        link_height(&self.root)
    }

    /// Number of stored elements. Walks the whole tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Elements in ascending order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// Smallest element.
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.root().map(|root| root.min_descendant().element())
    }

    /// Greatest element.
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.root().map(|root| root.max_descendant().element())
    }

    /// The node reached by following `steps` from the root.
    #[must_use]
    pub fn node_at(&self, steps: &[Side]) -> Option<&Node<T>> {
        steps
            .iter()
            .try_fold(self.root()?, |node, &side| node.child(side))
    }
}

impl<T: Ord> AvlTree<T> {
    pub(super) fn descend(&self, element: &T) -> Descent {
        let mut path = Vec::new();
        let mut cursor = self.root();
        while let Some(node) = cursor {
            let side = match element.cmp(node.element()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Descent { path, found: true },
            };
            path.push(side);
            cursor = node.child(side);
        }
        Descent { path, found: false }
    }

    /// Whether an element equal to `element` is stored.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.descend(element).found
    }

    /// The stored element equal to `element`.
    #[must_use]
    pub fn get(&self, element: &T) -> Option<&T> {
        let descent = self.descend(element);
        if !descent.found {
            return None;
        }
        self.node_at(&descent.path).map(Node::element)
    }

    /// Insert `element`, rebalancing the tree.
    ///
    /// Returns `false`, leaving the tree untouched, when an equal element is
    /// already present.
    pub fn insert(&mut self, element: T) -> bool {
        let Descent { path, found } = self.descend(&element);
        if found {
            return false;
        }
        *link_at(&mut self.root, &path) = Some(Node::leaf(element));
        refresh_heights(&mut self.root, &path);
        rebalance_path(&mut self.root, &path);
        true
    }

    /// Remove the element equal to `element`, rebalancing the tree.
    ///
    /// Returns `false` when no such element is stored.
    pub fn remove(&mut self, element: &T) -> bool {
        self.take(element).is_some()
    }

    /// Remove and return the element equal to `element`.
    pub fn take(&mut self, element: &T) -> Option<T> {
        let Descent { mut path, found } = self.descend(element);
        if !found {
            return None;
        }

        let link = link_at(&mut self.root, &path);
        let mut removed = link.take()?;
        let left = removed.child_mut(Side::Left).take();
        let right = removed.child_mut(Side::Right).take();
        *link = match (left, right) {
            (Some(left), Some(right)) => Some(replace_with_successor(left, right, &mut path)),
            (Some(child), None) | (None, Some(child)) => Some(child),
            (None, None) => None,
        };

        refresh_heights(&mut self.root, &path);
        rebalance_path(&mut self.root, &path);
        Some(removed.into_element())
    }

    /// Check the structural invariants: cached heights match the structure,
    /// every node is balanced and the in-order sequence strictly ascends.
    #[must_use]
    pub fn check_invariants(&self) -> bool {
        let ascending = self
            .iter()
            .zip(self.iter().skip(1))
            .all(|(previous, next)| previous < next);
        ascending && checked_height(self.root()).is_some()
    }
}

/// Build the subtree that takes the place of a removed node with two children.
///
/// When the right child has no left subtree it is the in-order successor
/// itself and simply adopts `left`. Otherwise the successor is detached from
/// the bottom of the right child's left spine and adopts both subtrees; `path`
/// is extended down to the successor's former parent so its height is redone.
fn replace_with_successor<T>(
    left: Box<Node<T>>,
    mut right: Box<Node<T>>,
    path: &mut Vec<Side>,
) -> Box<Node<T>> {
    match right.child_mut(Side::Left).take() {
        None => {
            *right.child_mut(Side::Left) = Some(left);
            right
        }
        Some(spine) => {
            path.push(Side::Right);
            let (mut successor, remainder) = take_leftmost(spine, path);
            *right.child_mut(Side::Left) = remainder;
            *successor.child_mut(Side::Left) = Some(left);
            *successor.child_mut(Side::Right) = Some(right);
            successor
        }
    }
}

/// Split off the leftmost node of `node`, returning it and the rest of the
/// subtree. The leftmost node's right subtree stays in the rest.
fn take_leftmost<T>(mut node: Box<Node<T>>, path: &mut Vec<Side>) -> (Box<Node<T>>, Link<T>) {
    match node.child_mut(Side::Left).take() {
        None => {
            let remainder = node.child_mut(Side::Right).take();
            (node, remainder)
        }
        Some(left) => {
            path.push(Side::Left);
            let (leftmost, remainder) = take_leftmost(left, path);
            *node.child_mut(Side::Left) = remainder;
            (leftmost, Some(node))
        }
    }
}

fn checked_height<T>(node: Option<&Node<T>>) -> Option<i32> {
    let Some(node) = node else {
        return Some(EMPTY_HEIGHT);
    };
    let left = checked_height(node.left())?;
    let right = checked_height(node.right())?;
    let height = left.max(right).saturating_add(1);
    (left.abs_diff(right) <= 1 && height == node.height()).then_some(height)
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(tree: &AvlTree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn empty_tree() {
        let tree = AvlTree::<i32>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert!(tree.check_invariants());
    }

    #[test]
    fn ascending_inserts_stay_balanced() {
        let tree: AvlTree<i32> = [10, 20, 30, 40, 50].into_iter().collect();
        assert_eq!(tree.height(), 2);
        assert_eq!(collect(&tree), vec![10, 20, 30, 40, 50]);
        assert_eq!(tree.root().map(|n| *n.element()), Some(20));
        assert!(tree.check_invariants());
    }

    #[test]
    fn duplicate_insert_is_noop() {
        let mut tree: AvlTree<i32> = [5, 3, 8].into_iter().collect();
        let before = tree.clone();
        assert!(!tree.insert(3));
        assert_eq!(tree, before);
    }

    #[test]
    fn insert_reports_new_elements() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(1));
        assert!(tree.insert(2));
        assert!(tree.contains(&1));
        assert!(!tree.contains(&3));
        assert_eq!(tree.get(&2), Some(&2));
        assert_eq!(tree.get(&7), None);
    }

    #[test]
    fn left_right_case_on_insert() {
        let tree: AvlTree<i32> = [30, 10, 20].into_iter().collect();
        assert_eq!(tree.root().map(|n| *n.element()), Some(20));
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn right_left_case_on_insert() {
        let tree: AvlTree<i32> = [10, 30, 20].into_iter().collect();
        assert_eq!(tree.root().map(|n| *n.element()), Some(20));
        assert!(tree.check_invariants());
    }

    #[test]
    fn remove_root_of_three() {
        let mut tree: AvlTree<i32> = [10, 5, 15].into_iter().collect();
        assert!(tree.remove(&10));
        assert_eq!(tree.len(), 2);
        assert_eq!(collect(&tree), vec![5, 15]);
        assert_eq!(tree.root().map(|n| *n.element()), Some(15));
        assert!(tree.check_invariants());
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut tree: AvlTree<i32> = [2, 1, 3].into_iter().collect();
        let before = tree.clone();
        assert!(!tree.remove(&4));
        assert_eq!(tree, before);

        let mut empty = AvlTree::<i32>::new();
        assert!(!empty.remove(&1));
        assert!(empty.is_empty());
    }

    #[test]
    fn remove_leaf_and_single_child() {
        let mut tree: AvlTree<i32> = [20, 10, 30, 40].into_iter().collect();
        assert!(tree.remove(&30));
        assert_eq!(collect(&tree), vec![10, 20, 40]);
        assert!(tree.check_invariants());
        assert!(tree.remove(&10));
        assert_eq!(collect(&tree), vec![20, 40]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn remove_with_deep_successor() {
        //        40
        //     20      60
        //   10  30  50  70
        //          45
        let mut tree: AvlTree<i32> = [40, 20, 60, 10, 30, 50, 70, 45].into_iter().collect();
        assert!(tree.remove(&40));
        assert_eq!(tree.root().map(|n| *n.element()), Some(45));
        assert_eq!(collect(&tree), vec![10, 20, 30, 45, 50, 60, 70]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn remove_with_successor_right_child_kept() {
        //        40
        //     20      60
        //   10  30  50  70
        //             55
        let mut tree: AvlTree<i32> = [40, 20, 60, 10, 30, 50, 70, 55].into_iter().collect();
        assert!(tree.remove(&40));
        assert_eq!(tree.root().map(|n| *n.element()), Some(50));
        let right = tree.node_at(&[Side::Right]).expect("right subtree");
        assert_eq!(*right.element(), 60);
        assert_eq!(right.left().map(|n| *n.element()), Some(55));
        assert!(tree.check_invariants());
    }

    #[test]
    fn remove_triggers_rotation() {
        let mut tree: AvlTree<i32> = [20, 10, 30, 40].into_iter().collect();
        assert!(tree.remove(&10));
        assert_eq!(tree.root().map(|n| *n.element()), Some(30));
        assert_eq!(tree.height(), 1);
        assert!(tree.check_invariants());
    }

    #[test]
    fn take_returns_stored_element() {
        let mut tree: AvlTree<i32> = (1..=7).collect();
        assert_eq!(tree.take(&4), Some(4));
        assert_eq!(tree.take(&4), None);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn node_at_follows_steps() {
        let tree: AvlTree<i32> = [41, 20, 65, 11, 29, 50, 91].into_iter().collect();
        assert_eq!(tree.node_at(&[]).map(|n| *n.element()), Some(41));
        assert_eq!(
            tree.node_at(&[Side::Left, Side::Right])
                .map(|n| *n.element()),
            Some(29)
        );
        assert!(tree.node_at(&[Side::Left, Side::Left, Side::Left]).is_none());
    }

    #[test]
    fn min_and_max() {
        let tree: AvlTree<i32> = [8, 3, 12, 1, 9].into_iter().collect();
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&12));
    }

    #[test]
    fn clear_empties() {
        let mut tree: AvlTree<i32> = (0..32).collect();
        assert_eq!(tree.len(), 32);
        tree.clear();
        assert!(tree.is_empty());
    }
}
