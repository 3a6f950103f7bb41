//! A plain, unbalanced BST of [`ContactRecord`]s. The shape of the tree depends only on the
//! order records were inserted in, so inserting already-sorted records produces a chain and every
//! operation degrades to a linear walk.
//!
//! # Examples
//!
//! ```
//! use contact_bst::{ContactRecord, Error, NameTree};
//!
//! let mut tree = NameTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find("Betty"), None);
//! assert_eq!(tree.delete("Betty"), Err(Error::EmptyTree));
//!
//! tree.insert(ContactRecord::new("Betty", "0868026665", "Apt 4")).unwrap();
//! tree.insert(ContactRecord::new("Abraham", "0887178084", "Apt 5")).unwrap();
//! assert_eq!(tree.find("Abraham").map(|c| c.address()), Some("Apt 5"));
//!
//! // Inserting an existing key changes nothing.
//! tree.insert(ContactRecord::new("Betty", "0800000000", "Apt 40")).unwrap();
//! assert_eq!(tree.find("Betty").map(|c| c.phone()), Some("0868026665"));
//!
//! // Deleting hands back the record that was removed.
//! let betty = tree.delete("Betty").unwrap();
//! assert_eq!(betty.address(), "Apt 4");
//! assert_eq!(tree.find("Betty"), None);
//! assert!(tree.find("Abraham").is_some());
//! ```

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::node::{Link, Node, Side};
use crate::order::{ByName, ByPhone, KeyOrder};
use crate::ContactRecord;

/// A tree of contacts ordered by name.
pub type NameTree = Tree<ByName>;

/// A tree of contacts ordered by phone number.
pub type PhoneTree = Tree<ByPhone>;

/// A Binary Search Tree of contacts ordered by the field `O` picks. Keys are unique: the first
/// record inserted under a key stays until it is deleted.
pub struct Tree<O> {
    root: Link<O>,
}

impl<O> Default for Tree<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: KeyOrder> fmt::Debug for Tree<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("index", &O::NAME)
            .field("records", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<O> Tree<O> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, if the tree has any nodes.
    pub fn root(&self) -> Option<&Node<O>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no records.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the records in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<O>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Iterates over the records in ascending key order.
    pub fn iter(&self) -> Iter<'_, O> {
        Iter::new(self.root())
    }

    /// Calls `visitor` once for every record, in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_bst::{ContactRecord, PhoneTree};
    ///
    /// let mut tree = PhoneTree::new();
    /// tree.insert(ContactRecord::new("Zach", "0884624315", "Apt 2")).unwrap();
    /// tree.insert(ContactRecord::new("Cory", "0850602678", "Apt 3")).unwrap();
    ///
    /// let mut names = Vec::new();
    /// tree.traverse(|contact| names.push(contact.name().to_owned()));
    ///
    /// assert_eq!(names, ["Cory", "Zach"]);
    /// ```
    pub fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(&ContactRecord),
    {
        self.iter().for_each(visitor)
    }
}

impl<O: KeyOrder> Tree<O> {
    /// Inserts `record` under its key. An empty tree takes it as its root; otherwise it goes
    /// through [`Node::insert`]. Inserting a key that is already present is a no-op.
    pub fn insert(&mut self, record: ContactRecord) -> Result<()> {
        if self.root.is_none() {
            debug!(index = O::NAME, key = O::key(&record), "inserted root contact");
            self.root = Some(Box::new(Node::new(record)));
            return Ok(());
        }

        Node::insert(self.root.as_deref_mut(), record)
    }

    /// Potentially finds the record stored under `key`. If no node has the key, `None` is
    /// returned.
    pub fn find(&self, key: &str) -> Option<&ContactRecord> {
        self.root().and_then(|root| root.find(key))
    }

    /// Whether a record is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Deletes the node keyed `key` and returns the record it held.
    ///
    /// The root is hung off a stand-in parent for the duration of the delete so that removing it
    /// is no different from removing any other node. Whatever that parent's link holds afterwards
    /// becomes the new root.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no nodes, [`Error::NotFound`] if `key` isn't in it.
    pub fn delete(&mut self, key: &str) -> Result<ContactRecord> {
        let root = self.root.take().ok_or(Error::EmptyTree)?;

        let mut sentinel = Node::sentinel(Some(root));
        let deleted = Node::delete(&mut sentinel, Side::Right, key);
        self.root = sentinel.right.take();

        if deleted.is_ok() {
            debug!(index = O::NAME, key, emptied = self.root.is_none(), "deleted contact");
        }
        deleted
    }
}

impl<'a, O> IntoIterator for &'a Tree<O> {
    type Item = &'a ContactRecord;
    type IntoIter = Iter<'a, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`Tree`]'s records, created by [`Tree::iter`].
///
/// The path back up to the next unvisited ancestor is kept on an explicit stack so iterating a
/// deep tree uses heap rather than call stack.
pub struct Iter<'a, O> {
    stack: Vec<&'a Node<O>>,
}

impl<'a, O> Iter<'a, O> {
    fn new(root: Option<&'a Node<O>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<O>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, O> Iterator for Iter<'a, O> {
    type Item = &'a ContactRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.record())
    }
}
