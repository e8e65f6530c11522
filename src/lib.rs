//! Lending state machine for a small circulating collection.
//!
//! An [`Item`] is held by at most one [`Borrower`] at a time. Borrowers take
//! and give back items; a [`Catalog`] owns both and enumerates them for
//! reporting. [`SharedCatalog`] adds a lock for callers on several threads.

pub mod borrower;
pub mod catalog;
pub mod config;
pub mod custody;
pub mod error;
pub mod events;
pub mod item;
pub mod logging;
pub mod observers;
pub mod report;
pub mod shared;

pub use borrower::{Borrower, BorrowerKey, Details};
pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use custody::Custody;
pub use error::{CatalogError, ConfigError, LendingError};
pub use events::{LendingAction, LendingEvent};
pub use item::{Item, ItemKey};
pub use observers::{LendingLogger, LendingObserver};
pub use report::CatalogSnapshot;
pub use shared::SharedCatalog;
