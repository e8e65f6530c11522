use tracing::{info, warn};

use crate::{error::LendingError, events::LendingEvent};

/// Trait for lending observation
pub trait LendingObserver: Send {
    /// Called after a borrow or return succeeds
    fn on_lending(&self, event: &LendingEvent);

    /// Called when a borrow or return is rejected
    fn on_rejected(&self, _error: &LendingError) {}
}

/// Logs every lending outcome through `tracing`
#[derive(Debug)]
pub struct LendingLogger;

impl LendingObserver for LendingLogger {
    fn on_lending(&self, event: &LendingEvent) {
        info!(
            action = ?event.action,
            item = %event.item,
            borrower = %event.borrower,
            "{event}"
        );
    }

    fn on_rejected(&self, error: &LendingError) {
        warn!("lending rejected: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{borrower::Borrower, catalog::Catalog, error::CatalogError, item::Item};

    #[test]
    fn test_logger_does_not_interfere_with_lending() {
        let mut catalog = Catalog::new();
        catalog.register_observer(Box::new(LendingLogger));
        let item = catalog.add_item(Item::new("1984", "George Orwell", "9780451524935"));
        let alice = catalog.add_borrower(Borrower::new("Alice", "alice@example.com", "M001"));
        let bob = catalog.add_borrower(Borrower::new("Bob", "bob@example.com", "M002"));

        assert!(catalog.borrow(alice, item).is_ok());
        assert!(matches!(catalog.borrow(bob, item), Err(CatalogError::Lending(_))));
        assert_eq!(catalog.history().count(), 1);
    }
}
