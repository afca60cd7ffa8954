//! Height repair and rotation selection along a recorded descent path.
//!
//! A path is the list of [`Side`] steps taken from the root during an insert
//! or remove. The node at depth `d` is reached by replaying the first `d`
//! steps, which stays valid for every depth above the deepest rotation.

use crate::core::Side;
use crate::node::{Link, Node, link_height};

/// Minimum height a subtree needs before it can be out of balance.
///
/// The whole pass is skipped while the root is lower than this, and only
/// nodes at least this high are examined.
pub const REBALANCE_MIN_HEIGHT: i32 = 2;

/// Rotation that restores balance at a skewed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rotation {
    Left,
    Right,
    LeftThenRight,
    RightThenLeft,
}

/// Follow `path` from `root`, stopping early at the first vacant link.
pub(super) fn link_at<'a, T>(mut link: &'a mut Link<T>, path: &[Side]) -> &'a mut Link<T> {
    for &side in path {
        match link {
            Some(node) => link = node.child_mut(side),
            None => break,
        }
    }
    link
}

fn prefix(path: &[Side], depth: usize) -> &[Side] {
    path.get(..depth).unwrap_or(path)
}

fn refresh_at<T>(root: &mut Link<T>, path: &[Side], depth: usize) {
    if let Some(node) = link_at(root, prefix(path, depth)).as_deref_mut() {
        node.update_height();
    }
}

/// Recompute cached heights for every node on `path`, deepest first.
pub(super) fn refresh_heights<T>(root: &mut Link<T>, path: &[Side]) {
    for depth in (0..=path.len()).rev() {
        refresh_at(root, path, depth);
    }
}

fn required_rotation<T>(node: &Node<T>) -> Option<Rotation> {
    if node.height() < REBALANCE_MIN_HEIGHT {
        return None;
    }
    let factor = node.balance_factor();
    if factor < -1 {
        let heavy = node.right()?;
        // Ties go to the single rotation.
        Some(if heavy.balance_factor() <= 0 {
            Rotation::Left
        } else {
            Rotation::RightThenLeft
        })
    } else if factor > 1 {
        let heavy = node.left()?;
        Some(if heavy.balance_factor() >= 0 {
            Rotation::Right
        } else {
            Rotation::LeftThenRight
        })
    } else {
        None
    }
}

/// Rotate the subtree held by `link` if it is out of balance.
///
/// Returns whether a rotation took place.
fn rebalance_link<T>(link: &mut Link<T>) -> bool {
    let Some(rotation) = link.as_deref().and_then(required_rotation) else {
        return false;
    };
    let Some(node) = link.take() else {
        return false;
    };
    *link = Some(match rotation {
        Rotation::Left => node.rotate_left(),
        Rotation::Right => node.rotate_right(),
        Rotation::LeftThenRight => node.rotate_left_then_right(),
        Rotation::RightThenLeft => node.rotate_right_then_left(),
    });
    true
}

/// Walk `path` from its deepest node up to the root, rotating every skewed
/// subtree back into balance.
///
/// Heights on `path` must already be fresh. After each rotation the heights of
/// the remaining ancestors are recomputed before the walk continues upward.
pub(super) fn rebalance_path<T>(root: &mut Link<T>, path: &[Side]) {
    if link_height(root) < REBALANCE_MIN_HEIGHT {
        return;
    }
    for depth in (0..=path.len()).rev() {
        if !rebalance_link(link_at(root, prefix(path, depth))) {
            continue;
        }
        for ancestor in (0..depth).rev() {
            refresh_at(root, path, ancestor);
        }
    }
}
