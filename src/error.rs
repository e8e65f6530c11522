use std::path::PathBuf;

use thiserror::Error;

use crate::{borrower::BorrowerKey, item::ItemKey};

/// Expected, recoverable outcomes of a borrow or return attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LendingError {
    /// Someone already holds the item
    #[error("'{title}' is not available")]
    ItemUnavailable {
        /// Title of the requested item
        title: String,
        /// Catalog identifier of the requested item
        identifier: String,
    },

    /// The borrower does not hold the item they tried to return
    #[error("{borrower} did not borrow '{title}'")]
    ItemNotHeld {
        /// Name of the borrower attempting the return
        borrower: String,
        /// Title of the item being returned
        title: String,
    },
}

/// Errors from catalog-level operations addressed by handle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The lending rules refused the operation
    #[error(transparent)]
    Lending(#[from] LendingError),

    /// The key was issued by a different catalog
    #[error("no item with key {0} in this catalog")]
    UnknownItem(ItemKey),

    /// The key was issued by a different catalog
    #[error("no borrower with key {0} in this catalog")]
    UnknownBorrower(BorrowerKey),
}

/// Errors while loading a [`CatalogConfig`](crate::config::CatalogConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid config JSON
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}
