//! Thread-safe wrapper around [`Catalog`].
//!
//! A single mutex guards the whole catalog, so the availability check and the
//! custody update of a borrow run under one lock acquisition. Two threads can
//! never both observe an item as available and both take it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    borrower::{Borrower, BorrowerKey},
    catalog::Catalog,
    error::CatalogError,
    events::LendingEvent,
    item::{Item, ItemKey},
    report::CatalogSnapshot,
};

/// Cloneable handle to a catalog shared between threads
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    /// The guarded catalog
    inner: Arc<Mutex<Catalog>>,
}

impl SharedCatalog {
    /// Share an existing catalog
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { inner: Arc::new(Mutex::new(catalog)) }
    }

    /// Acquire the lock.
    ///
    /// Every mutation finishes before the guard drops, so a poisoned lock still
    /// protects consistent state and is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, Catalog> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Catalog::add_item`]
    pub fn add_item(&self, item: Item) -> ItemKey {
        self.lock().add_item(item)
    }

    /// See [`Catalog::add_borrower`]
    pub fn add_borrower(&self, borrower: Borrower) -> BorrowerKey {
        self.lock().add_borrower(borrower)
    }

    /// See [`Catalog::borrow`]
    ///
    /// # Errors
    ///
    /// Same as [`Catalog::borrow`].
    pub fn borrow(
        &self,
        borrower: BorrowerKey,
        item: ItemKey,
    ) -> Result<LendingEvent, CatalogError> {
        self.lock().borrow(borrower, item)
    }

    /// See [`Catalog::return_item`]
    ///
    /// # Errors
    ///
    /// Same as [`Catalog::return_item`].
    pub fn return_item(
        &self,
        borrower: BorrowerKey,
        item: ItemKey,
    ) -> Result<LendingEvent, CatalogError> {
        self.lock().return_item(borrower, item)
    }

    /// Run a read-only closure against the catalog while holding the lock
    pub fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        f(&self.lock())
    }

    /// See [`Catalog::snapshot`]
    #[must_use]
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.lock().snapshot()
    }
}
