use crate::borrower::BorrowerKey;

/// Custody state of a single item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Custody {
    /// Item is on the shelf and can be borrowed
    #[default]
    Available,
    /// Item is held by the borrower with this key
    Borrowed(BorrowerKey),
}

impl Custody {
    /// The borrower currently holding the item, if any
    #[must_use]
    pub fn custodian(&self) -> Option<BorrowerKey> {
        match self {
            Self::Available => None,
            Self::Borrowed(borrower) => Some(*borrower),
        }
    }
}
