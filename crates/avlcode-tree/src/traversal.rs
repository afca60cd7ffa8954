//! Text renderings of a tree's shape.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, Write};

use crate::node::Node;
use crate::tree::AvlTree;

/// Token written in place of a missing subtree.
pub const ABSENT_MARKER: &str = "NULL";

/// Number of tokens per line of level-order output.
pub const LEVEL_ORDER_LINE_WIDTH: usize = 20;

/// Indentation added per preorder level.
const PREORDER_INDENT: &str = "  ";

impl<T: Display> Node<T> {
    /// Write this subtree in preorder, one element per line.
    ///
    /// Each level is indented two spaces deeper than its parent and missing
    /// children are written as [`ABSENT_MARKER`].
    ///
    /// # Errors
    /// Returns any error raised by `out`.
    pub fn write_preorder<W: Write>(&self, out: &mut W, indent: &str) -> io::Result<()> {
        writeln!(out, "{indent}{}", self.element())?;
        let indent = format!("{indent}{PREORDER_INDENT}");
        for child in [self.left(), self.right()] {
            match child {
                Some(child) => child.write_preorder(out, &indent)?,
                None => writeln!(out, "{indent}{ABSENT_MARKER}")?,
            }
        }
        Ok(())
    }
}

impl<T: Display> AvlTree<T> {
    /// Write the tree in preorder. An empty tree is a single [`ABSENT_MARKER`] line.
    ///
    /// # Errors
    /// Returns any error raised by `out`.
    pub fn write_preorder<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.root() {
            Some(root) => root.write_preorder(out, ""),
            None => writeln!(out, "{ABSENT_MARKER}"),
        }
    }

    /// Write the tree breadth first.
    ///
    /// The root comes first, followed by the left and right slot of every
    /// present node in breadth-first order, missing children written as
    /// [`ABSENT_MARKER`]. Tokens are space separated, [`LEVEL_ORDER_LINE_WIDTH`]
    /// to a line.
    ///
    /// # Errors
    /// Returns any error raised by `out`.
    pub fn write_level_order<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Some(root) = self.root() else {
            return writeln!(out, "{ABSENT_MARKER}");
        };

        let mut slots = vec![Some(root)];
        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            for child in [node.left(), node.right()] {
                slots.push(child);
                if let Some(child) = child {
                    queue.push_back(child);
                }
            }
        }

        for line in slots.chunks(LEVEL_ORDER_LINE_WIDTH) {
            for (index, slot) in line.iter().enumerate() {
                if index > 0 {
                    out.write_all(b" ")?;
                }
                match slot {
                    Some(node) => write!(out, "{}", node.element())?,
                    None => out.write_all(ABSENT_MARKER.as_bytes())?,
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
