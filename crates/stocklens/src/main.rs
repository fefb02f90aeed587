//! Command-line front end for the price store.
//!
//! Stands in for the dashboard that would normally render the result: picks
//! an instrument, a lookback window and a price field, prints the windowed
//! rows as JSON and the high/low of the chosen field.
//!
//! Usage: stocklens [SYMBOL WINDOW FIELD]

use std::env;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use stocklens::{extrema, Config, PriceField, PriceStore, QueryError, WindowChoice};

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = Config::load_default();
    let store = PriceStore::load(&config);

    if args.is_empty() {
        print_usage(&store);
        return Ok(());
    }
    if args.len() != 3 {
        bail!("expected SYMBOL WINDOW FIELD (run without arguments for help)");
    }

    let symbol = args[0].to_uppercase();
    let ordinal: usize = args[1]
        .parse()
        .context("window must be an ordinal between 0 and 6")?;
    let field: PriceField = args[2].to_lowercase().parse()?;

    let selection = store.select_window(&symbol, ordinal)?;
    match extrema(&selection.table, field) {
        Ok(summary) => {
            println!("{}", serde_json::to_string_pretty(selection.table.records())?);
            println!(
                "{} {} over {} {} rows: high ${:.2}, low ${:.2}",
                symbol,
                field.as_str(),
                selection.table.len(),
                selection.resolution,
                summary.max,
                summary.min
            );
        }
        Err(QueryError::EmptyRange) => println!("no data for this range"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn print_usage(store: &PriceStore) {
    println!("Available instruments:");
    for instrument in store.instruments() {
        println!("  {:<6} {}", instrument.symbol, instrument.name);
    }
    println!("\nUsage: stocklens SYMBOL WINDOW FIELD");
    println!("Windows:");
    for choice in WindowChoice::all() {
        println!("  {}  {}", choice.ordinal(), choice.label());
    }
    println!("Fields:");
    for field in PriceField::all() {
        println!("  {}", field.as_str());
    }
}
