#[macro_use]
extern crate quickcheck_macros;

mod directory;
mod tree;

use quickcheck::{Arbitrary, Gen};

use contact_bst::ContactRecord;

/// An enum for the various kinds of "things" to do to
/// contact trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Insert a contact keyed by the first number with a phone derived from the second
    Insert(u8, u8),
    /// Delete the contact keyed by the number
    Remove(u8),
    /// Compare in-order traversal against the model
    Iter,
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(u8::arbitrary(g), u8::arbitrary(g)),
            1 => Op::Remove(u8::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}

/// Zero-padded so that string order matches numeric order.
pub(crate) fn key(k: u8) -> String {
    format!("{k:03}")
}

pub(crate) fn contact(name: u8, phone: u8) -> ContactRecord {
    ContactRecord::new(key(name), format!("08{phone:03}"), format!("Apt {name}"))
}
