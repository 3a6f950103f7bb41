//! A contact directory: the same set of records indexed twice, once by name and once by phone
//! number, each index being its own [`Tree`][crate::Tree].

use tracing::{trace, warn};

use crate::error::Result;
use crate::{ContactRecord, NameTree, PhoneTree};

/// Keeps a [`NameTree`] and a [`PhoneTree`] holding the same records.
///
/// A record is added only when neither its name nor its phone number is already taken, so
/// first-insert-wins holds across both indexes and neither can end up with a record the other
/// doesn't have.
///
/// # Examples
///
/// ```
/// use contact_bst::{ContactRecord, Directory};
///
/// let mut directory = Directory::new();
/// directory.add(ContactRecord::new("Cory", "0850602678", "Apt 3")).unwrap();
///
/// assert_eq!(directory.find_by_phone("0850602678").map(|c| c.name()), Some("Cory"));
///
/// // Removing through one index removes from the other as well.
/// directory.remove_by_name("Cory").unwrap();
/// assert_eq!(directory.find_by_phone("0850602678"), None);
/// ```
#[derive(Debug, Default)]
pub struct Directory {
    by_name: NameTree,
    by_phone: PhoneTree,
}

impl Directory {
    /// Generates a new, empty `Directory`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `record` to both indexes. Returns `false` and changes nothing if its name or its
    /// phone number is already in use.
    pub fn add(&mut self, record: ContactRecord) -> Result<bool> {
        if self.by_name.contains(record.name()) || self.by_phone.contains(record.phone()) {
            trace!(name = record.name(), phone = record.phone(), "contact already listed");
            return Ok(false);
        }

        self.by_name.insert(record.clone())?;
        self.by_phone.insert(record)?;
        Ok(true)
    }

    /// Looks a contact up by name.
    pub fn find_by_name(&self, name: &str) -> Option<&ContactRecord> {
        self.by_name.find(name)
    }

    /// Looks a contact up by phone number.
    pub fn find_by_phone(&self, phone: &str) -> Option<&ContactRecord> {
        self.by_phone.find(phone)
    }

    /// Removes the contact called `name` from both indexes and returns it.
    ///
    /// Only the name lookup can fail. [`Directory::add`] puts every record in both indexes, so
    /// the matching phone entry is always there to delete.
    pub fn remove_by_name(&mut self, name: &str) -> Result<ContactRecord> {
        let removed = self.by_name.delete(name)?;
        let twin = self.by_phone.delete(removed.phone());
        debug_assert!(twin.is_ok(), "phone index is missing {}", removed.phone());
        twin?;
        Ok(removed)
    }

    /// Removes the contact with phone number `phone` from both indexes and returns it.
    ///
    /// Only the phone lookup can fail, for the same reason as in [`Directory::remove_by_name`].
    pub fn remove_by_phone(&mut self, phone: &str) -> Result<ContactRecord> {
        let removed = self.by_phone.delete(phone)?;
        let twin = self.by_name.delete(removed.name());
        debug_assert!(twin.is_ok(), "name index is missing {}", removed.name());
        twin?;
        Ok(removed)
    }

    /// The number of contacts listed.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether no contacts are listed.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// The index ordered by name.
    pub fn by_name(&self) -> &NameTree {
        &self.by_name
    }

    /// The index ordered by phone number.
    pub fn by_phone(&self) -> &PhoneTree {
        &self.by_phone
    }
}

impl Extend<ContactRecord> for Directory {
    /// Adds every record, skipping the ones whose name or phone number is already taken.
    fn extend<I: IntoIterator<Item = ContactRecord>>(&mut self, records: I) {
        for record in records {
            if let Err(e) = self.add(record) {
                warn!(error = %e, "failed to add contact");
            }
        }
    }
}
