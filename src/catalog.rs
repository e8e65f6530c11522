use std::{collections::VecDeque, fmt};

use tracing::debug;

use crate::{
    borrower::{Borrower, BorrowerKey},
    config::CatalogConfig,
    error::CatalogError,
    events::{LendingAction, LendingEvent},
    item::{Item, ItemKey},
    observers::LendingObserver,
    report::CatalogSnapshot,
};

/// Owns every item and borrower and routes lending between them
#[derive(Default)]
pub struct Catalog {
    /// Items in insertion order
    items: Vec<Item>,
    /// Borrowers in insertion order
    borrowers: Vec<Borrower>,
    /// Most recent lending events, oldest first
    history: VecDeque<LendingEvent>,
    /// Tunables
    config: CatalogConfig,
    /// Registered lending observers
    observers: Vec<Box<dyn LendingObserver>>,
}

// Manual implementation of Debug for Catalog
impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("items", &self.items)
            .field("borrowers", &self.borrowers)
            .field("history", &self.history)
            .field("config", &self.config)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Catalog {
    /// Create an empty catalog with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with the given settings
    #[must_use]
    pub fn with_config(config: CatalogConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Settings this catalog was built with
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Register an observer to be notified of lending outcomes
    pub fn register_observer(&mut self, observer: Box<dyn LendingObserver>) {
        self.observers.push(observer);
    }

    /// Add an item and return the handle used to address it later.
    /// Duplicate identifiers are accepted.
    pub fn add_item(&mut self, item: Item) -> ItemKey {
        let key = item.key();
        debug!(item = %key, title = item.title(), "item added");
        self.items.push(item);
        key
    }

    /// Add a borrower and return the handle used to address them later.
    /// Duplicate borrower ids are accepted.
    pub fn add_borrower(&mut self, borrower: Borrower) -> BorrowerKey {
        let key = borrower.key();
        debug!(borrower = %key, name = borrower.name(), "borrower added");
        self.borrowers.push(borrower);
        key
    }

    /// All items in insertion order
    pub fn list_all_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Items nobody holds, in insertion order
    pub fn list_available_items(&self) -> impl Iterator<Item = &Item> {
        self.list_all_items().filter(|item| item.is_available())
    }

    /// All borrowers in insertion order
    pub fn list_all_borrowers(&self) -> impl Iterator<Item = &Borrower> {
        self.borrowers.iter()
    }

    /// Resolve an item handle
    #[must_use]
    pub fn item(&self, key: ItemKey) -> Option<&Item> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Resolve a borrower handle
    #[must_use]
    pub fn borrower(&self, key: BorrowerKey) -> Option<&Borrower> {
        self.borrowers.iter().find(|borrower| borrower.key() == key)
    }

    /// The borrower holding an item, if the item is known and held
    #[must_use]
    pub fn custodian_of(&self, item: ItemKey) -> Option<&Borrower> {
        self.item(item)?.custodian().and_then(|key| self.borrower(key))
    }

    /// Lend `item` to `borrower`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Lending` wrapping `ItemUnavailable` if the item is
    /// already held, or `UnknownItem`/`UnknownBorrower` if a key did not come
    /// from this catalog.
    pub fn borrow(
        &mut self,
        borrower: BorrowerKey,
        item: ItemKey,
    ) -> Result<LendingEvent, CatalogError> {
        self.apply(LendingAction::Borrowed, borrower, item)
    }

    /// Take `item` back from `borrower`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Lending` wrapping `ItemNotHeld` if the borrower
    /// does not hold the item, or `UnknownItem`/`UnknownBorrower` if a key did
    /// not come from this catalog.
    pub fn return_item(
        &mut self,
        borrower: BorrowerKey,
        item: ItemKey,
    ) -> Result<LendingEvent, CatalogError> {
        self.apply(LendingAction::Returned, borrower, item)
    }

    /// Lending events retained so far, oldest first
    pub fn history(&self) -> impl Iterator<Item = &LendingEvent> {
        self.history.iter()
    }

    /// Point-in-time view of every item and borrower, for reporting
    #[must_use]
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot::capture(self)
    }

    /// Resolve both handles and run the transition through the borrower
    fn apply(
        &mut self,
        action: LendingAction,
        borrower_key: BorrowerKey,
        item_key: ItemKey,
    ) -> Result<LendingEvent, CatalogError> {
        let borrower = self
            .borrowers
            .iter_mut()
            .find(|borrower| borrower.key() == borrower_key)
            .ok_or(CatalogError::UnknownBorrower(borrower_key))?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.key() == item_key)
            .ok_or(CatalogError::UnknownItem(item_key))?;

        let outcome = match action {
            LendingAction::Borrowed => borrower.borrow_item(item),
            LendingAction::Returned => borrower.return_item(item),
        };

        if let Err(error) = outcome {
            for observer in &self.observers {
                observer.on_rejected(&error);
            }
            return Err(error.into());
        }

        let event = LendingEvent {
            action,
            item: item_key,
            borrower: borrower_key,
            title: item.title().to_string(),
            borrower_name: borrower.name().to_string(),
        };
        self.record(event.clone());
        Ok(event)
    }

    /// Notify observers and append to the bounded history
    fn record(&mut self, event: LendingEvent) {
        for observer in &self.observers {
            observer.on_lending(&event);
        }

        if self.config.history_limit == 0 {
            return;
        }
        while self.history.len() >= self.config.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(event);
    }
}
