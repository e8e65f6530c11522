use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{borrower::BorrowerKey, custody::Custody};

/// Process-unique handle for an item
///
/// Items are told apart by key, never by comparing titles or identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ItemKey(
    /// Random v4 UUID
    Uuid,
);

impl ItemKey {
    /// Generate a fresh key
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single circulating unit and its custody state
///
/// Not `Clone`: a copy would share this item's key and could be lent twice.
///
/// ```compile_fail
/// let item = library_lending::Item::new("1984", "George Orwell", "9780451524935");
/// let copy = item.clone();
/// ```
#[derive(Debug)]
pub struct Item {
    /// Title of the item
    title: String,
    /// Author or other creator
    creator: String,
    /// Catalog identifier such as an ISBN; uniqueness is not enforced
    identifier: String,
    /// Identity of this item
    key: ItemKey,
    /// Who holds the item right now
    custody: Custody,
}

impl Item {
    /// Create an item that nobody holds yet
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        creator: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            creator: creator.into(),
            identifier: identifier.into(),
            key: ItemKey::generate(),
            custody: Custody::Available,
        }
    }

    /// Title of the item
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author or other creator
    #[must_use]
    pub fn creator(&self) -> &str {
        &self.creator
    }

    /// Catalog identifier
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Handle identifying this item
    #[must_use]
    pub fn key(&self) -> ItemKey {
        self.key
    }

    /// Current custody state
    #[must_use]
    pub fn custody(&self) -> Custody {
        self.custody
    }

    /// True when nobody holds the item
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.custody == Custody::Available
    }

    /// The borrower holding the item, if any
    #[must_use]
    pub fn custodian(&self) -> Option<BorrowerKey> {
        self.custody.custodian()
    }

    /// Record `borrower` as custodian.
    ///
    /// No availability check happens here; an existing custodian is
    /// overwritten. `Borrower::borrow_item` owns the transition rule.
    pub(crate) fn mark_borrowed(&mut self, borrower: BorrowerKey) {
        self.custody = Custody::Borrowed(borrower);
    }

    /// Clear the custodian regardless of the prior state
    pub(crate) fn mark_returned(&mut self) {
        self.custody = Custody::Available;
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Creator: {}, Identifier: {}",
            self.title, self.creator, self.identifier
        )
    }
}
