//! This crate is an in-memory contact directory built on plain Binary
//! Search Trees (BSTs), one keyed by name and one keyed by phone number.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (here, a whole [`ContactRecord`]) and will sometimes
//! have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The trees here do no rebalancing,
//! so the height is whatever the insertion order makes it: anywhere from `O(lg N)`
//! down to `N` when records arrive already sorted. BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then the
//! right subtree.
//!
//! ## Two keys, one tree
//!
//! There is a single [`Tree`] type, generic over a [`KeyOrder`] that picks which
//! field of the record it is ordered by. [`NameTree`] and [`PhoneTree`] are that
//! tree ordered by [`ByName`] and [`ByPhone`]. A [`Directory`] keeps one of each
//! in step.
//!
//! ```
//! use contact_bst::{ContactRecord, NameTree, PhoneTree};
//!
//! let contacts = [
//!     ContactRecord::new("Betty", "0868026665", "Apt 4"),
//!     ContactRecord::new("Abraham", "0887178084", "Apt 5"),
//! ];
//!
//! let mut names = NameTree::new();
//! let mut phones = PhoneTree::new();
//! for contact in &contacts {
//!     names.insert(contact.clone()).unwrap();
//!     phones.insert(contact.clone()).unwrap();
//! }
//!
//! assert_eq!(names.find("Abraham"), Some(&contacts[1]));
//! assert_eq!(phones.find("0868026665"), Some(&contacts[0]));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod contact;
mod directory;
mod error;
pub mod node;
mod order;
pub mod tree;

pub use contact::ContactRecord;
pub use directory::Directory;
pub use error::{Error, Result};
pub use node::{Node, Side};
pub use order::{ByName, ByPhone, KeyOrder};
pub use tree::{NameTree, PhoneTree, Tree};
