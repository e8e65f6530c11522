use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use library_lending::{
    Borrower, BorrowerKey, Catalog, CatalogConfig, CatalogError, Item, ItemKey, LendingEvent,
    LendingLogger, logging, report,
};

/// Command-line arguments for the lending demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the final catalog as a JSON snapshot instead of text listings
    #[arg(long)]
    json: bool,

    /// JSON file with catalog settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of lending events to keep (overrides the config file)
    #[arg(long)]
    history_limit: Option<usize>,
}

/// Run the demo scenario
fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logger(args.verbose);

    let mut config = match &args.config {
        Some(path) => CatalogConfig::from_json_file(path)
            .with_context(|| format!("loading catalog config from {}", path.display()))?,
        None => CatalogConfig::default(),
    };
    if let Some(limit) = args.history_limit {
        config.history_limit = limit;
    }

    println!("{}", "Library Lending Demonstration".green().bold());
    println!("=====================================\n");

    let mut catalog = Catalog::with_config(config);
    catalog.register_observer(Box::new(LendingLogger));

    let gatsby = add_item(
        &mut catalog,
        Item::new("The Great Gatsby", "F. Scott Fitzgerald", "9780743273565"),
    );
    let mockingbird =
        add_item(&mut catalog, Item::new("To Kill a Mockingbird", "Harper Lee", "9780061120084"));
    let orwell = add_item(&mut catalog, Item::new("1984", "George Orwell", "9780451524935"));

    let alice = add_borrower(
        &mut catalog,
        Borrower::new("Alice Johnson", "alice.j@example.com", "M001"),
    );
    let bob = add_borrower(&mut catalog, Borrower::new("Bob Smith", "bob.s@example.com", "M002"));

    if !args.json {
        println!("\n{}", report::render_items("List of Items", catalog.list_all_items()));
        println!("{}", report::render_borrowers("List of Borrowers", catalog.list_all_borrowers()));
    }

    lend(&mut catalog, alice, gatsby)?;
    lend(&mut catalog, bob, mockingbird)?;
    show_available(&catalog, args.json);

    println!("{}", "\nAttempting invalid operations...".yellow().bold());
    lend(&mut catalog, bob, gatsby)?;
    give_back(&mut catalog, bob, orwell)?;

    println!();
    give_back(&mut catalog, alice, gatsby)?;
    show_available(&catalog, args.json);

    if args.json {
        println!("{}", catalog.snapshot().to_json().context("serializing catalog snapshot")?);
    } else {
        print!("{}", report::render_history(catalog.history()));
    }

    println!("\n{}", "Demonstration complete!".green().bold());
    Ok(())
}

/// Add an item and announce it
fn add_item(catalog: &mut Catalog, item: Item) -> ItemKey {
    println!("Added item: {}.", item.title());
    catalog.add_item(item)
}

/// Add a borrower and announce them
fn add_borrower(catalog: &mut Catalog, borrower: Borrower) -> BorrowerKey {
    println!("Added borrower: {}.", borrower.name());
    catalog.add_borrower(borrower)
}

/// Borrow and print the outcome
fn lend(catalog: &mut Catalog, borrower: BorrowerKey, item: ItemKey) -> Result<()> {
    print_outcome(catalog.borrow(borrower, item))
}

/// Return and print the outcome
fn give_back(catalog: &mut Catalog, borrower: BorrowerKey, item: ItemKey) -> Result<()> {
    print_outcome(catalog.return_item(borrower, item))
}

/// Lending refusals are normal outcomes; only a bad handle is a real error
fn print_outcome(outcome: Result<LendingEvent, CatalogError>) -> Result<()> {
    match outcome {
        Ok(event) => println!("{}", format!("{event}.").green()),
        Err(CatalogError::Lending(refusal)) => println!("{}", format!("{refusal}.").red()),
        Err(other) => return Err(other.into()),
    }
    Ok(())
}

/// Print the available-items listing unless JSON output was requested
fn show_available(catalog: &Catalog, json: bool) {
    if !json {
        println!(
            "\n{}",
            report::render_items("List of Available Items", catalog.list_available_items())
        );
    }
}
