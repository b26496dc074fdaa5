//! A sideways text diagram of a [`Tree`]. The right subtree is drawn above its parent and the
//! left subtree below, so tilting your head to the left shows the tree the usual way up.
//!
//! ```text
//! │       ┌── 9
//! │   ┌── 8
//! │   │   └── 7
//! └── 5
//!     │   ┌── 4
//!     └── 3
//!         └── 1
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_node(f, root, "", true),
            None => Ok(()),
        }
    }
}

/// Writes `node` and its subtrees. `is_left` says which side of its parent `node` hangs from;
/// the root is drawn like a left child.
fn write_node<T>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result
where
    T: fmt::Display,
{
    if let Some(right) = node.right() {
        let branch = if is_left { "│   " } else { "    " };
        write_node(f, right, &format!("{prefix}{branch}"), false)?;
    }

    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{prefix}{connector}{}", node.value())?;

    if let Some(left) = node.left() {
        let branch = if is_left { "    " } else { "│   " };
        write_node(f, left, &format!("{prefix}{branch}"), true)?;
    }
    Ok(())
}
