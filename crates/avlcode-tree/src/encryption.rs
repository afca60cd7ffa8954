//! Path-code encryption on top of an AVL tree.
//!
//! An element's code is the descent from the root to its node: `r`, then `0`
//! for every left step and `1` for every right step. Codes depend on the
//! current shape of the tree, so they change whenever a mutation rotates a
//! node on the path.

use std::ops::{Deref, DerefMut};

use crate::core::{NOT_FOUND_CODE, PathCode};
use crate::node::Node;
use crate::tree::AvlTree;

/// An AVL tree that encodes elements as path codes and decodes them back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncryptionTree<T> {
    tree: AvlTree<T>,
}

impl<T> EncryptionTree<T> {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: AvlTree::new(),
        }
    }

    /// The element at the node addressed by `code`.
    #[must_use]
    pub fn resolve(&self, code: &PathCode) -> Option<&T> {
        self.tree.node_at(code.steps()).map(Node::element)
    }

    /// Decode a textual path code.
    ///
    /// Returns `None` when `path` is not a well-formed code (it must start
    /// with `r` and continue with `0`/`1` steps only) or when it addresses no
    /// node of the tree.
    #[must_use]
    pub fn decrypt(&self, path: &str) -> Option<&T> {
        let code = path.parse::<PathCode>().ok()?;
        self.resolve(&code)
    }
}

impl<T: Ord> EncryptionTree<T> {
    /// The code of `element`, or `None` if it is not stored.
    #[must_use]
    pub fn locate(&self, element: &T) -> Option<PathCode> {
        let descent = self.tree.descend(element);
        descent.found.then(|| PathCode::from_steps(descent.path))
    }

    /// Encode `element` as a path code string.
    ///
    /// Returns [`NOT_FOUND_CODE`] (`"?"`) when `element` is not stored.
    #[must_use]
    pub fn encrypt(&self, element: &T) -> String {
        self.locate(element)
            .map_or_else(|| NOT_FOUND_CODE.to_owned(), |code| code.to_string())
    }
}

impl<T> Deref for EncryptionTree<T> {
    type Target = AvlTree<T>;

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}

impl<T> DerefMut for EncryptionTree<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.tree
    }
}

impl<T> From<AvlTree<T>> for EncryptionTree<T> {
    fn from(tree: AvlTree<T>) -> Self {
        Self { tree }
    }
}

impl<T: Ord> FromIterator<T> for EncryptionTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EncryptionTree<i32> {
        [41, 20, 65, 11, 29, 50, 91].into_iter().collect()
    }

    #[test]
    fn encrypts_by_descent() {
        let tree = sample();
        assert_eq!(tree.encrypt(&41), "r");
        assert_eq!(tree.encrypt(&11), "r00");
        assert_eq!(tree.encrypt(&29), "r01");
        assert_eq!(tree.encrypt(&91), "r11");
        assert_eq!(tree.encrypt(&99), "?");
    }

    #[test]
    fn decrypts_codes() {
        let tree = sample();
        assert_eq!(tree.decrypt("r"), Some(&41));
        assert_eq!(tree.decrypt("r00"), Some(&11));
        assert_eq!(tree.decrypt("r10"), Some(&50));
    }

    #[test]
    fn decrypt_rejects_unknown_paths() {
        let tree = sample();
        assert_eq!(tree.decrypt("r000"), None);
        assert_eq!(tree.decrypt("00"), None);
        assert_eq!(tree.decrypt(""), None);
        assert_eq!(tree.decrypt("?"), None);
        assert_eq!(tree.decrypt("r0x"), None);
    }

    #[test]
    fn empty_tree_has_no_codes() {
        let tree = EncryptionTree::<i32>::new();
        assert_eq!(tree.encrypt(&1), "?");
        assert_eq!(tree.decrypt("r"), None);
        assert_eq!(tree.locate(&1), None);
    }

    #[test]
    fn codes_follow_mutations() {
        let mut tree: EncryptionTree<i32> = [1, 2].into_iter().collect();
        assert_eq!(tree.encrypt(&2), "r1");
        tree.insert(3);
        assert_eq!(tree.encrypt(&2), "r");
        assert_eq!(tree.encrypt(&3), "r1");
        tree.remove(&2);
        assert_eq!(tree.decrypt(&tree.encrypt(&3)), Some(&3));
    }
}
