//! A BST balanced on demand. Bulk construction always yields a height-balanced tree by
//! splitting the sorted input at its median. Single inserts and deletes never rotate, so the
//! tree can skew until [`Tree::rebalance`] rebuilds it.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::new([5, 3, 8, 1, 4, 7, 9]);
//!
//! assert_eq!(tree.inorder(), vec![&1, &3, &4, &5, &7, &8, &9]);
//! assert!(tree.find(&4).is_some());
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert!(!tree.contains(&5));
//!
//! // The two-child root took the value of its successor.
//! assert_eq!(tree.root().map(|n| *n.value()), Some(7));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// An owned pointer to a possibly empty subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree over values that double as their own keys. Values in a left subtree are
/// strictly less than their parent and values in a right subtree are greater than or equal to it.
///
/// Dropping, clearing and rebalancing walk the tree with an explicit stack. The derived `Clone`
/// and `Debug` recurse once per level, so call [`Tree::rebalance`] before cloning or printing a
/// tree skewed by many thousands of inserts.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> Tree<T> {
    /// Builds a balanced tree from the given values. The values may be unsorted and may contain
    /// duplicates; only one copy of each distinct value is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::new([3, 1, 2, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(2));
    /// assert!(tree.is_balanced());
    /// ```
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut tree = Self::default();
        tree.build_tree(values);
        tree
    }

    /// Replaces the contents of this tree with a height-balanced tree holding the distinct
    /// `values`. The values are sorted and deduplicated, then the middle element (index
    /// `(n - 1) / 2`) becomes the root and each half is built the same way.
    pub fn build_tree<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();

        self.clear();
        self.len = values.len();
        self.root = Node::build(values);

        debug!(len = self.len, height = self.height(), "built balanced tree");
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many values are stored, counting duplicates added by [`Tree::insert`].
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every node. Nodes are dropped with an explicit stack so a skewed tree can't
    /// overflow the call stack.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Inserts the value as a new leaf. Values equal to an existing node go to its right
    /// subtree, so duplicates are kept. The tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new([2]);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.inorder(), vec![&2, &2]);
    /// assert!(tree.root().and_then(|n| n.right()).is_some());
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        self.root = Node::insert_into(self.root.take(), value);
        self.len += 1;
    }

    /// Deletes the first node found holding `value` and returns the removed value. Deleting a
    /// value that isn't in the tree does nothing and returns `None`.
    ///
    /// A node with two children keeps its place in the tree: it takes the value of its successor
    /// (the smallest value of its right subtree) and the successor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new([1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.inorder(), vec![&1, &3]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let removed = Node::delete_from(&mut self.root, value);
        match removed {
            Some(_) => self.len -= 1,
            None => trace!("delete missed, tree unchanged"),
        }
        removed
    }

    /// Finds the node holding `value`, or `None` if no node holds it.
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root()?.find(value)
    }

    /// Whether any node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The node holding the smallest value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if there are no nodes. A minimum only exists for a non-empty subtree,
    /// so an empty tree is an invalid argument here rather than a `None` result.
    pub fn find_minimum(&self) -> Result<&Node<T>> {
        self.root()
            .map(Node::find_minimum)
            .ok_or(Error::EmptyTree("find_minimum"))
    }

    /// Values in breadth-first order, each level from left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::new([5, 3, 8, 1, 4, 7, 9]);
    /// assert_eq!(tree.level_order(), vec![&5, &3, &8, &1, &4, &7, &9]);
    /// ```
    pub fn level_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            queue.extend(node.left());
            queue.extend(node.right());
            values.push(&node.value);
        }
        values
    }

    /// Values in sorted order: left subtree, node, right subtree.
    pub fn inorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        if let Some(root) = self.root() {
            root.inorder_into(&mut values);
        }
        values
    }

    /// Values with each node before its subtrees: node, left subtree, right subtree.
    pub fn preorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        if let Some(root) = self.root() {
            root.preorder_into(&mut values);
        }
        values
    }

    /// Values with each node after its subtrees: left subtree, right subtree, node.
    pub fn postorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        if let Some(root) = self.root() {
            root.postorder_into(&mut values);
        }
        values
    }

    /// Number of edges on the longest path from the root to a leaf. A single node has height 0
    /// and an empty tree has height -1.
    pub fn height(&self) -> isize {
        Node::height_of(self.root())
    }

    /// Number of edges from the root down to `target`, or `None` if `target` isn't a node of
    /// this tree. Nodes are matched by identity so equal values in distinct nodes are told
    /// apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::new([5, 3, 8, 1, 4, 7, 9]);
    /// let other = Tree::new([4]);
    ///
    /// let four = tree.find(&4).unwrap();
    /// assert_eq!(tree.depth(four), Some(2));
    /// assert_eq!(tree.depth(other.root().unwrap()), None);
    /// ```
    pub fn depth(&self, target: &Node<T>) -> Option<usize>
    where
        T: Ord,
    {
        self.root()?.depth(target)
    }

    /// Whether, at every node, the heights of the two subtrees differ by at most one. An empty
    /// tree is balanced.
    pub fn is_balanced(&self) -> bool {
        Node::balanced_height(self.root()).is_some()
    }

    /// Rebuilds the tree from its values in sorted order so it is balanced again. Duplicates
    /// added by [`Tree::insert`] are collapsed into a single value, as in [`Tree::build_tree`].
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new([1]);
    /// for x in 2..=7 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.level_order(), vec![&4, &2, &6, &1, &3, &5, &7]);
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let skewed_len = self.len;
        let values = Node::into_sorted_vec(self.root.take());
        self.build_tree(values);

        debug!(before = skewed_len, after = self.len, "rebalanced tree");
    }
}

/// A `Node` holds a value and owns up to two children. Nodes are only created and linked by a
/// [`Tree`]; callers get shared references to walk the structure.
///
/// Nodes compare by value alone: two distinct nodes holding equal values are `==`. Use
/// [`Tree::depth`] or [`std::ptr::eq`] to tell such nodes apart.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: PartialOrd> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, whose values are all less than this node's.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, whose values are all at least this node's.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Finds the node holding `value` in the subtree rooted here.
    pub fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left()?.find(value),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right()?.find(value),
        }
    }

    /// The node holding the smallest value of the subtree rooted here, found by following left
    /// children until there are none.
    pub fn find_minimum(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// Height of the subtree rooted here. A leaf has height 0.
    pub fn height(&self) -> isize {
        1 + Self::height_of(self.left()).max(Self::height_of(self.right()))
    }

    /// Number of edges from this node down to `target`, matched by identity.
    ///
    /// Equal values always sit in the right subtree of one another so the search only descends
    /// along the path a lookup of `target`'s value would take.
    pub fn depth(&self, target: &Self) -> Option<usize>
    where
        T: Ord,
    {
        if std::ptr::eq(self, target) {
            return Some(0);
        }
        let child = match target.value.cmp(&self.value) {
            Ordering::Less => self.left(),
            Ordering::Equal | Ordering::Greater => self.right(),
        }?;
        child.depth(target).map(|depth| depth + 1)
    }

    /// Whether the subtree rooted here is balanced.
    pub fn is_balanced(&self) -> bool {
        Self::balanced_height(Some(self)).is_some()
    }

    fn height_of(node: Option<&Self>) -> isize {
        node.map_or(-1, Self::height)
    }

    /// Height of a balanced subtree, or `None` as soon as any node in it is unbalanced. Computing
    /// both at once visits each node a single time.
    fn balanced_height(node: Option<&Self>) -> Option<isize> {
        let Some(node) = node else {
            return Some(-1);
        };
        let left = Self::balanced_height(node.left())?;
        let right = Self::balanced_height(node.right())?;
        (left.abs_diff(right) <= 1).then(|| 1 + left.max(right))
    }

    fn inorder_into<'a>(&'a self, values: &mut Vec<&'a T>) {
        if let Some(left) = self.left() {
            left.inorder_into(values);
        }
        values.push(&self.value);
        if let Some(right) = self.right() {
            right.inorder_into(values);
        }
    }

    fn preorder_into<'a>(&'a self, values: &mut Vec<&'a T>) {
        values.push(&self.value);
        if let Some(left) = self.left() {
            left.preorder_into(values);
        }
        if let Some(right) = self.right() {
            right.preorder_into(values);
        }
    }

    fn postorder_into<'a>(&'a self, values: &mut Vec<&'a T>) {
        if let Some(left) = self.left() {
            left.postorder_into(values);
        }
        if let Some(right) = self.right() {
            right.postorder_into(values);
        }
        values.push(&self.value);
    }

    /// Builds a balanced subtree from sorted, distinct values by rooting it at the median.
    fn build(mut sorted: Vec<T>) -> Link<T> {
        let mid = sorted.len().checked_sub(1)? / 2;
        let right = sorted.split_off(mid + 1);
        let value = sorted.pop()?;

        Some(Box::new(Self {
            value,
            left: Self::build(sorted),
            right: Self::build(right),
        }))
    }

    /// Inserts into the subtree `link` and returns the subtree's (possibly new) root so the
    /// caller can put it back in place.
    fn insert_into(link: Link<T>, value: T) -> Link<T>
    where
        T: Ord,
    {
        let Some(mut node) = link else {
            return Some(Box::new(Self::leaf(value)));
        };
        if value < node.value {
            node.left = Self::insert_into(node.left.take(), value);
        } else {
            node.right = Self::insert_into(node.right.take(), value);
        }

        if cfg!(debug_assertions) {
            if let Some(left) = node.left() {
                assert!(left.value < node.value);
            }
            if let Some(right) = node.right() {
                assert!(right.value >= node.value);
            }
        }
        Some(node)
    }

    /// Deletes the first node holding `value` from the subtree `link`, rewiring `link` in place.
    fn delete_from(link: &mut Link<T>, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let node = link.as_mut()?;
        match value.cmp(&node.value) {
            Ordering::Less => Self::delete_from(&mut node.left, value),
            Ordering::Greater => Self::delete_from(&mut node.right, value),
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    // The successor's value is copied up and its node spliced out.
                    let successor = Self::take_minimum(&mut node.right)?;
                    return Some(std::mem::replace(&mut node.value, successor));
                }

                // Zero or one child: the child (if any) takes this node's place.
                let mut removed = link.take()?;
                *link = removed.left.take().or_else(|| removed.right.take());
                Some(removed.value)
            }
        }
    }

    /// Removes the leftmost node of the subtree `link` and returns its value. Its right child, if
    /// any, takes its place.
    fn take_minimum(link: &mut Link<T>) -> Option<T> {
        let node = link.as_mut()?;
        if node.left.is_some() {
            return Self::take_minimum(&mut node.left);
        }

        let mut minimum = link.take()?;
        *link = minimum.right.take();
        Some(minimum.value)
    }

    /// Consumes the subtree `link` and returns its values in order. Walks with an explicit stack
    /// since this is what flattens skewed trees for rebalancing.
    fn into_sorted_vec(mut link: Link<T>) -> Vec<T> {
        let mut values = Vec::new();
        let mut stack: Vec<Box<Self>> = Vec::new();
        loop {
            while let Some(mut node) = link {
                link = node.left.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else {
                return values;
            };
            let Self { value, right, .. } = *node;
            values.push(value);
            link = right;
        }
    }
}
