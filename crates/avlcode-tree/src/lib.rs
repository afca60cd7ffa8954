//! Self-balancing AVL tree with structural path-code encryption.
//!
//! [`AvlTree`] keeps its elements ordered and height balanced through
//! insertions and removals. [`EncryptionTree`] adds an encoding of every
//! stored element as the left/right descent that reaches it from the root,
//! and the reverse lookup from such a code to the element.

mod core;
mod encryption;
mod node;
mod traversal;
mod tree;

pub use crate::core::{
    LEFT_STEP, NOT_FOUND_CODE, PathCode, PathCodeError, RIGHT_STEP, ROOT_MARKER, Side,
};

pub use encryption::EncryptionTree;
pub use node::{EMPTY_HEIGHT, Link, Node, link_height};
pub use traversal::{ABSENT_MARKER, LEVEL_ORDER_LINE_WIDTH};
pub use tree::{AvlTree, Iter, REBALANCE_MIN_HEIGHT};
