use std::fmt;

use serde::Serialize;

use crate::{borrower::Details, catalog::Catalog};

/// Reporting view of one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSummary {
    /// Title of the item
    pub title: String,
    /// Author or other creator
    pub creator: String,
    /// Catalog identifier such as an ISBN
    pub identifier: String,
    /// Whether nobody holds the item
    pub available: bool,
    /// Name of the borrower holding the item
    pub custodian: Option<String>,
}

/// Reporting view of one borrower
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorrowerSummary {
    /// Membership identifier
    pub borrower_id: String,
    /// Display name
    pub name: String,
    /// Email or other contact information
    pub contact_info: String,
    /// Titles held, in borrowing order
    pub holdings: Vec<String>,
}

/// Point-in-time view of a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSnapshot {
    /// Items in insertion order
    pub items: Vec<ItemSummary>,
    /// Borrowers in insertion order
    pub borrowers: Vec<BorrowerSummary>,
}

impl CatalogSnapshot {
    /// Copy the reportable state out of `catalog`
    #[must_use]
    pub fn capture(catalog: &Catalog) -> Self {
        let items = catalog
            .list_all_items()
            .map(|item| ItemSummary {
                title: item.title().to_string(),
                creator: item.creator().to_string(),
                identifier: item.identifier().to_string(),
                available: item.is_available(),
                custodian: catalog
                    .custodian_of(item.key())
                    .map(|borrower| borrower.name().to_string()),
            })
            .collect();

        let borrowers = catalog
            .list_all_borrowers()
            .map(|borrower| BorrowerSummary {
                borrower_id: borrower.borrower_id().to_string(),
                name: borrower.name().to_string(),
                contact_info: borrower.contact_info().to_string(),
                holdings: borrower.holding_titles().map(str::to_string).collect(),
            })
            .collect();

        Self { items, borrowers }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Render a header line followed by one line per entry
#[must_use]
pub fn render_items<I>(header: &str, items: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    render_lines(header, items.into_iter().map(|item| item.to_string()))
}

/// Render a header line followed by each borrower's details
#[must_use]
pub fn render_borrowers<I>(header: &str, borrowers: I) -> String
where
    I: IntoIterator,
    I::Item: Details,
{
    render_lines(header, borrowers.into_iter().map(|borrower| borrower.details()))
}

/// Render a numbered transition history
#[must_use]
pub fn render_history<I>(events: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut out = String::from("Lending History:\n");
    for (position, event) in (1_usize..).zip(events) {
        out.push_str(&format!("{position}. {event}\n"));
    }
    out
}

/// Shared layout for the listing renderers
fn render_lines(header: &str, lines: impl Iterator<Item = String>) -> String {
    let mut out = format!("=== {header} ===\n");
    for line in lines {
        out.push_str(&format!("{line}\n"));
    }
    out
}

#[cfg(test)]
#[allow(clippy::indexing_slicing, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::{borrower::Borrower, item::Item};

    /// The scenario from the demo: two books, one borrower holding the first
    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        let gatsby = catalog.add_item(Item::new("The Great Gatsby", "Fitzgerald", "ISBN-A"));
        catalog.add_item(Item::new("1984", "Orwell", "ISBN-B"));
        let alice = catalog.add_borrower(Borrower::new("Alice", "alice@example.com", "M001"));
        catalog.borrow(alice, gatsby).expect("Gatsby should be available");
        catalog
    }

    #[test]
    fn test_snapshot_captures_custody() {
        let snapshot = sample_catalog().snapshot();

        assert_eq!(snapshot.items.len(), 2);
        let gatsby = &snapshot.items[0];
        assert!(!gatsby.available);
        assert_eq!(gatsby.custodian.as_deref(), Some("Alice"));
        let orwell = &snapshot.items[1];
        assert!(orwell.available);
        assert_eq!(orwell.custodian, None);

        assert_eq!(snapshot.borrowers[0].holdings, vec!["The Great Gatsby".to_string()]);
    }

    #[test]
    fn test_snapshot_json() {
        let json = sample_catalog().snapshot().to_json().expect("Snapshot should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("Snapshot JSON should parse");

        assert_eq!(value["items"][0]["custodian"], "Alice");
        assert_eq!(value["items"][1]["available"], true);
        assert_eq!(value["borrowers"][0]["borrower_id"], "M001");
    }

    #[test]
    fn test_render_available_items() {
        let catalog = sample_catalog();
        let text = render_items("List of Available Items", catalog.list_available_items());

        assert_eq!(
            text,
            "=== List of Available Items ===\nTitle: 1984, Creator: Orwell, Identifier: ISBN-B\n"
        );
    }

    #[test]
    fn test_render_borrowers() {
        let catalog = sample_catalog();
        let text = render_borrowers("List of Borrowers", catalog.list_all_borrowers());

        assert_eq!(
            text,
            "=== List of Borrowers ===\nBorrower ID: M001, Name: Alice, Contact: alice@example.com\n"
        );
    }

    #[test]
    fn test_render_history() {
        let catalog = sample_catalog();
        assert_eq!(
            render_history(catalog.history()),
            "Lending History:\n1. Alice borrowed 'The Great Gatsby'\n"
        );
    }
}
