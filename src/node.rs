//! The node-level half of the tree. Every operation here walks down from a node it is handed
//! rather than from a tree, and deletion identifies the node it works on by its parent and the
//! side of the parent it hangs from. Nodes never point back at their parents.
//!
//! All walks are loops carrying the current node (and, for deletion, its parent) so that a
//! degenerate tree built from sorted input cannot exhaust the call stack.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::mem;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::order::KeyOrder;
use crate::ContactRecord;

/// An owning child pointer. `None` marks the empty spot below a leaf.
pub(crate) type Link<O> = Option<Box<Node<O>>>;

/// Which of its parent's two links a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The parent's left link.
    Left,
    /// The parent's right link.
    Right,
}

/// A single cell of a tree ordered by `O`. It owns its record and both of its subtrees.
pub struct Node<O> {
    pub(crate) record: ContactRecord,
    pub(crate) left: Link<O>,
    pub(crate) right: Link<O>,
    order: PhantomData<O>,
}

impl<O> Drop for Node<O> {
    // The default drop recurses once per level, which a long chain of right children would turn
    // into a stack overflow. Detach children onto a heap stack instead so each node is dropped
    // with no children left.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<O>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<O: KeyOrder> fmt::Debug for Node<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key())
            .field("left", &self.left.as_ref().map(|n| n.key()))
            .field("right", &self.right.as_ref().map(|n| n.key()))
            .finish()
    }
}

impl<O> Node<O> {
    /// Creates a leaf holding `record`.
    pub fn new(record: ContactRecord) -> Self {
        Self {
            record,
            left: None,
            right: None,
            order: PhantomData,
        }
    }

    /// Creates the stand-in parent used when deleting from the top of a tree. The subtree being
    /// deleted from hangs off its right link so the root can be relinked like any other node.
    pub(crate) fn sentinel(root: Link<O>) -> Self {
        Self {
            record: ContactRecord::default(),
            left: None,
            right: root,
            order: PhantomData,
        }
    }

    /// The record stored in this node.
    pub fn record(&self) -> &ContactRecord {
        &self.record
    }

    /// The left child, holding strictly smaller keys.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, holding strictly larger keys.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn link(&self, side: Side) -> &Link<O> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn link_mut(&mut self, side: Side) -> &mut Link<O> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl<O: KeyOrder> Node<O> {
    /// The key this node is ordered by.
    pub fn key(&self) -> &str {
        O::key(&self.record)
    }

    /// The side of this node under which `key` belongs, or `None` if `key` is this node's key.
    fn side_for(&self, key: &str) -> Option<Side> {
        match key.cmp(self.key()) {
            Ordering::Less => Some(Side::Left),
            Ordering::Equal => None,
            Ordering::Greater => Some(Side::Right),
        }
    }

    /// Inserts `record` into the subtree rooted at `target`, adding a new leaf at the first empty
    /// link on its search path.
    ///
    /// If a node with the same key already exists nothing changes: the first record inserted for
    /// a key is the one that stays.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NilTarget`] if `target` is `None`. Creating the first node of a tree is
    /// the tree's job.
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_bst::{ByName, ContactRecord, Error, Node};
    ///
    /// let mut root = Node::<ByName>::new(ContactRecord::new("Betty", "0868026665", "Apt 4"));
    /// let abraham = ContactRecord::new("Abraham", "0887178084", "Apt 5");
    ///
    /// Node::insert(Some(&mut root), abraham.clone()).unwrap();
    /// assert_eq!(root.left().map(|n| n.record()), Some(&abraham));
    ///
    /// assert_eq!(Node::<ByName>::insert(None, abraham), Err(Error::NilTarget));
    /// ```
    pub fn insert(target: Option<&mut Self>, record: ContactRecord) -> Result<()> {
        let node = target.ok_or(Error::NilTarget)?;

        let mut link = match node.side_for(O::key(&record)) {
            Some(side) => node.link_mut(side),
            None => return Self::ignore_duplicate(&record),
        };
        while let Some(child) = link {
            link = match child.side_for(O::key(&record)) {
                Some(side) => child.link_mut(side),
                None => return Self::ignore_duplicate(&record),
            };
        }

        debug!(index = O::NAME, key = O::key(&record), "inserted contact");
        *link = Some(Box::new(Self::new(record)));
        Ok(())
    }

    fn ignore_duplicate(record: &ContactRecord) -> Result<()> {
        trace!(index = O::NAME, key = O::key(record), "key already present, ignoring insert");
        Ok(())
    }

    /// Finds the record stored under `key` in the subtree rooted at this node.
    pub fn find(&self, key: &str) -> Option<&ContactRecord> {
        let mut node = self;
        while let Some(side) = node.side_for(key) {
            node = node.link(side).as_deref()?;
        }

        Some(&node.record)
    }

    /// Finds the node with the largest key in the subtree hanging off `parent`'s `side` link.
    ///
    /// The node itself is not returned. Instead this returns that node's parent together with
    /// the side it hangs from, which is exactly what [`Node::replace_node`] needs to unlink it.
    pub(crate) fn find_max(mut parent: &mut Self, mut side: Side) -> Result<(&mut Self, Side)> {
        loop {
            let node = parent.link(side).as_deref().ok_or(Error::NilTarget)?;
            if node.right.is_none() {
                return Ok((parent, side));
            }

            parent = parent
                .link_mut(side)
                .as_deref_mut()
                .ok_or(Error::NilTarget)?;
            side = Side::Right;
        }
    }

    /// Points `parent`'s `side` link at `replacement` and hands back the node that was there.
    ///
    /// `replacement` MUST keep the ordering of `parent`'s subtree intact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLink`] if there is no node on that side of `parent`.
    pub(crate) fn replace_node(
        parent: &mut Self,
        side: Side,
        replacement: Link<O>,
    ) -> Result<Box<Self>> {
        let link = parent.link_mut(side);
        match link.take() {
            Some(node) => {
                *link = replacement;
                Ok(node)
            }
            None => Err(Error::InvalidLink),
        }
    }

    /// Deletes the node keyed `key` from the subtree hanging off `parent`'s `side` link and
    /// returns the record it held.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the search runs off the bottom of the subtree.
    pub(crate) fn delete(
        mut parent: &mut Self,
        mut side: Side,
        key: &str,
    ) -> Result<ContactRecord> {
        loop {
            let node = parent
                .link(side)
                .as_deref()
                .ok_or_else(|| Error::not_found(key))?;

            match node.side_for(key) {
                Some(next) => {
                    parent = parent
                        .link_mut(side)
                        .as_deref_mut()
                        .ok_or_else(|| Error::not_found(key))?;
                    side = next;
                }
                None => return Self::remove(parent, side),
            }
        }
    }

    /// Removes the node hanging off `parent`'s `side` link, keeping everything below it.
    ///
    /// A leaf is detached and a node with one child is spliced out. A node with two children
    /// stays in place: it takes over the whole record of its in-order predecessor, and the
    /// predecessor (which has no right child) is removed instead.
    fn remove(parent: &mut Self, side: Side) -> Result<ContactRecord> {
        let node = parent
            .link_mut(side)
            .as_deref_mut()
            .ok_or(Error::InvalidLink)?;

        match (node.left.is_some(), node.right.is_some()) {
            (false, false) => {
                let mut removed = Self::replace_node(parent, side, None)?;
                Ok(mem::take(&mut removed.record))
            }
            (true, false) => {
                let child = node.left.take();
                let mut removed = Self::replace_node(parent, side, child)?;
                Ok(mem::take(&mut removed.record))
            }
            (false, true) => {
                let child = node.right.take();
                let mut removed = Self::replace_node(parent, side, child)?;
                Ok(mem::take(&mut removed.record))
            }
            (true, true) => {
                let predecessor = {
                    let (max_parent, max_side) = Self::find_max(node, Side::Left)?;
                    Self::remove(max_parent, max_side)?
                };
                trace!(
                    index = O::NAME,
                    key = node.key(),
                    predecessor = O::key(&predecessor),
                    "replacing deleted record with its predecessor"
                );
                Ok(mem::replace(&mut node.record, predecessor))
            }
        }
    }
}
