//! This crate exposes a few classic data structures mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! values. The [`bst::Tree`] here is the simplest possible version: no balancing and no deletion.
//! For every node, all the values in its left subtree are less than or equal to its own value and
//! all the values in its right subtree are greater. That gives sorted iteration for free by
//! visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Value Tree
//!
//! A [`value_tree::Node`] is a binary tree of strings with no ordering at all. Its shape is
//! whatever the caller builds. It can be written to and read back from a small textual format,
//! compared structurally, and asked how many of its subtrees hold a single value.
//!
//! ## Doubly Linked List
//!
//! A [`linked_list::DoublyLinkedList`] keeps its elements in insertion order with links in both
//! directions. Each node owns its successor and only points back at its predecessor, so memory
//! is always released front to back.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod linked_list;
pub mod value_tree;


pub use linked_list::{DoublyLinkedList, NotFound};
pub use value_tree::ParseError;
