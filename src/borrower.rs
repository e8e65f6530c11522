use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::LendingError,
    item::{Item, ItemKey},
};

/// Anything that can describe itself on a single line
pub trait Details {
    /// One-line description suitable for a listing
    fn details(&self) -> String;
}

impl<T: Details + ?Sized> Details for &T {
    fn details(&self) -> String {
        (**self).details()
    }
}

/// Process-unique handle for a borrower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct BorrowerKey(
    /// Random v4 UUID
    Uuid,
);

impl BorrowerKey {
    /// Generate a fresh key
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for BorrowerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Back reference to an item in a borrower's custody
#[derive(Debug)]
struct Holding {
    /// The held item
    item: ItemKey,
    /// Copy of the item's title, which never changes
    title: String,
}

/// A person entitled to hold items
///
/// Not `Clone`: a copy would share this borrower's key.
///
/// ```compile_fail
/// let alice = library_lending::Borrower::new("Alice", "alice@example.com", "M001");
/// let twin = alice.clone();
/// ```
#[derive(Debug)]
pub struct Borrower {
    /// Display name
    name: String,
    /// Email or other contact information
    contact_info: String,
    /// Membership identifier; uniqueness is not enforced
    borrower_id: String,
    /// Identity of this borrower
    key: BorrowerKey,
    /// Items currently held, in borrowing order
    holdings: Vec<Holding>,
}

impl Borrower {
    /// Create a borrower holding nothing
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        contact_info: impl Into<String>,
        borrower_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact_info: contact_info.into(),
            borrower_id: borrower_id.into(),
            key: BorrowerKey::generate(),
            holdings: Vec::new(),
        }
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email or other contact information
    #[must_use]
    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    /// Membership identifier
    #[must_use]
    pub fn borrower_id(&self) -> &str {
        &self.borrower_id
    }

    /// Handle identifying this borrower
    #[must_use]
    pub fn key(&self) -> BorrowerKey {
        self.key
    }

    /// Take custody of `item` if nobody holds it.
    ///
    /// The holding and the item's custodian are updated together; on
    /// failure neither changes.
    ///
    /// # Errors
    ///
    /// Returns `LendingError::ItemUnavailable` if the item already has a custodian,
    /// including when this borrower is the one holding it.
    pub fn borrow_item(&mut self, item: &mut Item) -> Result<(), LendingError> {
        if !item.is_available() {
            return Err(LendingError::ItemUnavailable {
                title: item.title().to_string(),
                identifier: item.identifier().to_string(),
            });
        }

        self.holdings.push(Holding { item: item.key(), title: item.title().to_string() });
        item.mark_borrowed(self.key);
        Ok(())
    }

    /// Give `item` back.
    ///
    /// Only the local holdings are consulted; the item's custodian is
    /// expected to agree and is checked in debug builds.
    ///
    /// # Errors
    ///
    /// Returns `LendingError::ItemNotHeld` if this borrower does not hold the item.
    pub fn return_item(&mut self, item: &mut Item) -> Result<(), LendingError> {
        let Some(pos) = self.holdings.iter().position(|holding| holding.item == item.key())
        else {
            return Err(LendingError::ItemNotHeld {
                borrower: self.name.clone(),
                title: item.title().to_string(),
            });
        };

        debug_assert_eq!(item.custodian(), Some(self.key), "holdings out of sync with custody");

        self.holdings.remove(pos);
        item.mark_returned();
        Ok(())
    }

    /// Whether this borrower currently holds the item
    #[must_use]
    pub fn holds(&self, item: ItemKey) -> bool {
        self.holdings.iter().any(|holding| holding.item == item)
    }

    /// Titles of held items, in the order they were borrowed
    pub fn holding_titles(&self) -> impl Iterator<Item = &str> {
        self.holdings.iter().map(|holding| holding.title.as_str())
    }

    /// Number of items currently held
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }
}

impl Details for Borrower {
    fn details(&self) -> String {
        format!(
            "Borrower ID: {}, Name: {}, Contact: {}",
            self.borrower_id, self.name, self.contact_info
        )
    }
}
