use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{borrower::BorrowerKey, item::ItemKey};

/// Transitions an item can go through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LendingAction {
    /// Item went from the shelf to a borrower
    Borrowed,
    /// Item went from a borrower back to the shelf
    Returned,
}

/// Record of a successful borrow or return
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LendingEvent {
    /// What happened
    pub action: LendingAction,
    /// The item involved
    pub item: ItemKey,
    /// The borrower involved
    pub borrower: BorrowerKey,
    /// Title of the item at the time of the event
    pub title: String,
    /// Name of the borrower at the time of the event
    pub borrower_name: String,
}

impl fmt::Display for LendingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.action {
            LendingAction::Borrowed => "borrowed",
            LendingAction::Returned => "returned",
        };
        write!(f, "{} {verb} '{}'", self.borrower_name, self.title)
    }
}
