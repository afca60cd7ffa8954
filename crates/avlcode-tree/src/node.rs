//! AVL tree node type.
//!
//! A node exclusively owns its two subtrees through [`Link`]s. Rotations take
//! the subtree root by value and hand back the new subtree root, so ownership
//! of every node is explicit at each step of a restructuring.

use crate::core::Side;

/// Owning link to an optional subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// Height reported for an absent subtree.
pub const EMPTY_HEIGHT: i32 = -1;

/// A single vertex of an AVL tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    element: T,
    left: Link<T>,
    right: Link<T>,
    height: i32,
}

/// Height of an optional subtree, `-1` when absent.
#[must_use]
pub fn link_height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(EMPTY_HEIGHT, |node| node.height)
}

impl<T> Node<T> {
    /// Create a leaf holding `element`.
    #[must_use]
    pub const fn new(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// Create a boxed leaf holding `element`.
    #[must_use]
    pub fn leaf(element: T) -> Box<Self> {
        Box::new(Self::new(element))
    }

    /// The stored element.
    #[must_use]
    pub const fn element(&self) -> &T {
        &self.element
    }

    /// Consume the node, returning its element. Both subtrees are dropped.
    #[must_use]
    pub fn into_element(self) -> T {
        self.element
    }

    /// Left subtree, if any.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Right subtree, if any.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Subtree on `side`, if any.
    #[must_use]
    pub fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// Owning link on `side`.
    pub const fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Cached number of edges on the longest path down to a leaf.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Height of the left subtree minus height of the right subtree.
    #[must_use]
    pub fn balance_factor(&self) -> i32 {
        link_height(&self.left).saturating_sub(link_height(&self.right))
    }

    /// The leftmost node of this subtree.
    #[must_use]
    pub fn min_descendant(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The rightmost node of this subtree.
    #[must_use]
    pub fn max_descendant(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Recompute the cached height from the children's cached heights.
    pub fn update_height(&mut self) {
        self.height = link_height(&self.left)
            .max(link_height(&self.right))
            .saturating_add(1);
    }

    /// Promote the right child to subtree root.
    ///
    /// The promoted node's former left subtree becomes the right subtree of
    /// `self`. Returns `self` unchanged when there is no right child.
    #[must_use]
    pub fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut pivot) = self.right.take() else {
            return self;
        };
        self.right = pivot.left.take();
        self.update_height();
        pivot.left = Some(self);
        pivot.update_height();
        pivot
    }

    /// Promote the left child to subtree root. Mirror of [`Self::rotate_left`].
    #[must_use]
    pub fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut pivot) = self.left.take() else {
            return self;
        };
        self.left = pivot.right.take();
        self.update_height();
        pivot.right = Some(self);
        pivot.update_height();
        pivot
    }

    /// Rotate the left child left, then `self` right (left-right case).
    #[must_use]
    pub fn rotate_left_then_right(mut self: Box<Self>) -> Box<Self> {
        self.left = self.left.take().map(Self::rotate_left);
        self.rotate_right()
    }

    /// Rotate the right child right, then `self` left (right-left case).
    #[must_use]
    pub fn rotate_right_then_left(mut self: Box<Self>) -> Box<Self> {
        self.right = self.right.take().map(Self::rotate_right);
        self.rotate_left()
    }
}
