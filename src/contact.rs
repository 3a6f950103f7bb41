//! The record stored in every node of every tree.

use std::fmt;

/// A single directory entry.
///
/// Records are never edited through the public API. The only time a stored record changes is
/// when a tree deletes a node with two children and moves the in-order predecessor's record into
/// its place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ContactRecord {
    name: String,
    phone: String,
    address: String,
}

impl ContactRecord {
    /// Builds a record from its three fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_bst::ContactRecord;
    ///
    /// let betty = ContactRecord::new("Betty", "0868026665", "Apt 4");
    /// assert_eq!(betty.name(), "Betty");
    /// assert_eq!(betty.phone(), "0868026665");
    /// assert_eq!(betty.address(), "Apt 4");
    /// ```
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contact's phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// The contact's address.
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Phone Number: {}", self.phone)?;
        write!(f, "Address: {}", self.address)
    }
}
