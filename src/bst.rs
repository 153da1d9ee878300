//! An unbalanced BST. Values are inserted by walking down from the root and attaching a new node
//! at the first empty spot. Nothing is ever rebalanced or removed, so inserting already sorted
//! values produces a tree that is really a list.
//!
//! # Examples
//!
//! ```
//! use classic_ds::bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&10));
//!
//! tree.insert(10);
//! tree.insert(5);
//! tree.insert(15);
//! assert!(tree.contains(&10));
//!
//! assert_eq!(tree.traverse_in_order(), [&5, &10, &15]);
//! assert_eq!(tree.traverse_pre_order(), [&10, &5, &15]);
//! assert_eq!(tree.traverse_post_order(), [&5, &15, &10]);
//! ```

use std::cmp;
use std::fmt;
use std::iter::FromIterator;

/// A Binary Search Tree. Equal values are kept, not merged: a value equal to a node's value is
/// sent into that node's left subtree.
pub enum Tree<T> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` that has a value and two children (which are both `Tree`s). This enum trivially
    /// wraps the [`Node`] struct.
    Node(Node<T>),
}

/// A `Node` always has two children although those children may be [`Leaf`][Tree::Leaf]s.
pub struct Node<T> {
    value: T,
    left: Box<Tree<T>>,
    right: Box<Tree<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Whether this tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Inserts `value` into the tree. Values greater than a node's value go right, everything
    /// else (including duplicates) goes left.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// // Duplicates are kept.
    /// assert_eq!(tree.traverse_in_order(), [&1, &1]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: cmp::Ord,
    {
        match self {
            Self::Leaf => *self = Self::Node(Node::new(value)),
            Self::Node(n) => n.insert(value),
        }
    }

    /// Whether any node in the tree holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        match self {
            Self::Leaf => false,
            Self::Node(n) => n.contains(value),
        }
    }

    /// Collects the values visiting the left subtree, then the node, then the right subtree. For
    /// a tree built with [`insert`][Tree::insert] this is sorted.
    pub fn traverse_in_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        self.collect_in_order(&mut values);
        values
    }

    /// Collects the values visiting the node, then the left subtree, then the right subtree.
    pub fn traverse_pre_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        self.collect_pre_order(&mut values);
        values
    }

    /// Collects the values visiting the left subtree, then the right subtree, then the node.
    pub fn traverse_post_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        self.collect_post_order(&mut values);
        values
    }

    /// Lazily iterates the values in order. Unlike the `traverse_*` methods this keeps its own
    /// stack so a degenerate tree can't exhaust the call stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::bst::Tree;
    ///
    /// let tree: Tree<_> = vec![3, 1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    fn collect_in_order<'a>(&'a self, values: &mut Vec<&'a T>) {
        if let Self::Node(n) = self {
            n.left.collect_in_order(values);
            values.push(&n.value);
            n.right.collect_in_order(values);
        }
    }

    fn collect_pre_order<'a>(&'a self, values: &mut Vec<&'a T>) {
        if let Self::Node(n) = self {
            values.push(&n.value);
            n.left.collect_pre_order(values);
            n.right.collect_pre_order(values);
        }
    }

    fn collect_post_order<'a>(&'a self, values: &mut Vec<&'a T>) {
        if let Self::Node(n) = self {
            n.left.collect_post_order(values);
            n.right.collect_post_order(values);
            values.push(&n.value);
        }
    }
}

impl<T: cmp::Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: cmp::Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    // TODO stack based Debug
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => f.write_str("Leaf"),
            Self::Node(n) => fmt::Debug::fmt(n, f),
        }
    }
}

impl<T> Node<T> {
    /// Construct a new childless `Node` holding `value`.
    fn new(value: T) -> Self {
        Self {
            value,
            left: Box::new(Tree::Leaf),
            right: Box::new(Tree::Leaf),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The subtree holding values less than or equal to this node's value.
    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    /// The subtree holding values greater than this node's value.
    pub fn right(&self) -> &Tree<T> {
        &self.right
    }

    fn insert(&mut self, value: T)
    where
        T: cmp::Ord,
    {
        match value.cmp(&self.value) {
            cmp::Ordering::Greater => self.right.insert(value),
            cmp::Ordering::Less | cmp::Ordering::Equal => self.left.insert(value),
        }
    }

    fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        match value.cmp(&self.value) {
            cmp::Ordering::Less => self.left.contains(value),
            cmp::Ordering::Equal => true,
            cmp::Ordering::Greater => self.right.contains(value),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

/// In order iterator over a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose left subtree has been pushed but whose own value hasn't been yielded yet.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = &*n.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.value)
    }
}
