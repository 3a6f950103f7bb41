use contact_bst::{ContactRecord, Error, KeyOrder, NameTree, Node, Tree};

use std::collections::{BTreeMap, HashSet};

use crate::{contact, key, Op};

/// Checks the BST invariant for every node: everything left of a node has a smaller key and
/// everything right of it a larger one.
fn is_bst<O: KeyOrder>(tree: &Tree<O>) -> bool {
    let mut stack: Vec<(&Node<O>, Option<&str>, Option<&str>)> =
        tree.root().map(|n| (n, None, None)).into_iter().collect();

    while let Some((node, lower, upper)) = stack.pop() {
        let key = node.key();
        if lower.map_or(false, |lower| key <= lower) || upper.map_or(false, |upper| key >= upper) {
            return false;
        }
        stack.extend(node.left().map(|n| (n, lower, Some(key))));
        stack.extend(node.right().map(|n| (n, Some(key), upper)));
    }

    true
}

/// Applies a set of operations to a tree and a map standing in for it.
/// The map only takes the first record for a key, mirroring the tree.
fn do_ops(ops: &[Op], tree: &mut NameTree, map: &mut BTreeMap<String, ContactRecord>) -> bool {
    for op in ops {
        match *op {
            Op::Insert(name, phone) => {
                let record = contact(name, phone);
                if tree.insert(record.clone()).is_err() {
                    return false;
                }
                map.entry(key(name)).or_insert(record);
            }
            Op::Remove(name) => {
                let expected = match map.remove(&key(name)) {
                    Some(record) => Ok(record),
                    None if map.is_empty() && tree.is_empty() => Err(Error::EmptyTree),
                    None => Err(Error::not_found(key(name))),
                };
                if tree.delete(&key(name)) != expected {
                    return false;
                }
            }
            Op::Iter => {
                if !tree.iter().eq(map.values()) {
                    return false;
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut tree = NameTree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map)
        && is_bst(&tree)
        && tree.len() == map.len()
        && map.iter().all(|(key, record)| tree.find(key) == Some(record))
}

#[quickcheck]
fn contains(xs: Vec<u8>) -> bool {
    let mut tree = NameTree::new();
    for x in &xs {
        tree.insert(contact(*x, *x)).unwrap();
    }

    is_bst(&tree) && xs.iter().all(|x| tree.find(&key(*x)) == Some(&contact(*x, *x)))
}

#[quickcheck]
fn contains_not(xs: Vec<u8>, nots: Vec<u8>) -> bool {
    let mut tree = NameTree::new();
    for x in &xs {
        tree.insert(contact(*x, *x)).unwrap();
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(&key(*x)).is_none())
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<(u8, u8)>, dup: u8, phone: u8) -> bool {
    let mut tree = NameTree::new();
    for (name, phone) in &xs {
        tree.insert(contact(*name, *phone)).unwrap();
    }
    tree.insert(contact(dup, phone)).unwrap();
    let before: Vec<ContactRecord> = tree.iter().cloned().collect();
    let height = tree.height();

    tree.insert(contact(dup, phone.wrapping_add(1))).unwrap();

    tree.iter().eq(before.iter()) && tree.height() == height
}

#[quickcheck]
fn delete_removes_exactly_one(xs: Vec<u8>, victim: u8) -> bool {
    let mut tree = NameTree::new();
    for x in xs.iter().chain(Some(&victim)) {
        tree.insert(contact(*x, *x)).unwrap();
    }
    let mut expected: Vec<ContactRecord> = tree.iter().cloned().collect();
    expected.retain(|c| c.name() != key(victim));

    tree.delete(&key(victim)) == Ok(contact(victim, victim))
        && tree.find(&key(victim)).is_none()
        && tree.iter().eq(expected.iter())
        && is_bst(&tree)
}

#[quickcheck]
fn with_deletions(xs: Vec<u8>, deletes: Vec<u8>) -> bool {
    let mut tree = NameTree::new();
    for x in &xs {
        tree.insert(contact(*x, *x)).unwrap();
    }
    for delete in &deletes {
        let _ = tree.delete(&key(*delete));
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    is_bst(&tree)
        && deletes.iter().all(|x| tree.find(&key(*x)).is_none())
        && still_present.iter().all(|x| tree.find(&key(*x)).is_some())
}

#[quickcheck]
fn traverse_is_strictly_ascending(xs: Vec<(u8, u8)>) -> bool {
    let mut tree = NameTree::new();
    for (name, phone) in &xs {
        tree.insert(contact(*name, *phone)).unwrap();
    }

    let mut visited = Vec::new();
    tree.traverse(|c| visited.push(c.name().to_owned()));

    let distinct: HashSet<_> = xs.iter().map(|(name, _)| *name).collect();
    visited.windows(2).all(|w| w[0] < w[1]) && visited.len() == distinct.len()
}
