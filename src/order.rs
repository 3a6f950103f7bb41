//! Key discriminators. A [`Tree`][crate::Tree] is generic over one of these, which decides which
//! field of a [`ContactRecord`] the tree is ordered by. This is what lets a single tree
//! implementation serve as both the name index and the phone index.

use crate::ContactRecord;

/// Picks the field a tree is keyed on.
///
/// Keys compare with the natural ordering of `str`, i.e. lexicographically by byte.
pub trait KeyOrder {
    /// Short name of the index, used as a field in log events.
    const NAME: &'static str;

    /// Extracts the ordering key from a record.
    fn key(record: &ContactRecord) -> &str;
}

/// Orders records by [`ContactRecord::name`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByName;

impl KeyOrder for ByName {
    const NAME: &'static str = "name";

    fn key(record: &ContactRecord) -> &str {
        record.name()
    }
}

/// Orders records by [`ContactRecord::phone`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByPhone;

impl KeyOrder for ByPhone {
    const NAME: &'static str = "phone";

    fn key(record: &ContactRecord) -> &str {
        record.phone()
    }
}
