mod board;
mod tui;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use plastrack_core::{
    expand_key, parse_args, write_csv, LeaderboardRepository, LeaderboardService,
    LeaderboardStore, ProductCatalog, StoreKind,
};

#[derive(Parser)]
#[command(name = "plastrack")]
#[command(about = "Track household plastic consumption on a shared leaderboard", long_about = None)]
struct Cli {
    /// Storage backend for the leaderboard
    #[arg(long, value_enum, default_value_t = StoreArg::File)]
    store: StoreArg,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum StoreArg {
    /// JSON document under ~/.plastrack
    File,
    /// SQLite database under ~/.plastrack
    Sqlite,
}

impl From<StoreArg> for StoreKind {
    fn from(arg: StoreArg) -> Self {
        match arg {
            StoreArg::File => StoreKind::File,
            StoreArg::Sqlite => StoreKind::Sqlite,
        }
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Submit an entry (usage: submit "Alice" bottle:2 cup:1)
    Submit {
        /// Display name followed by product key:count pairs
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Show the leaderboard ranked by yearly kilograms
    Board,
    /// List the product catalog and per-unit weights
    Products,
    /// Delete one entry by id
    Delete {
        /// Id as shown on the board
        id: u64,
    },
    /// Delete every entry
    Clear,
    /// Write a CSV snapshot of the leaderboard
    Export {
        /// Output path (defaults to leaderboard_YYYY-MM-DD.csv)
        path: Option<PathBuf>,
    },
    /// Open the interactive tracker
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let kind = StoreKind::from(cli.store);

    match cli.command {
        Some(Commands::Submit { args }) => {
            let service = open_service(kind)?;
            submit(&service, &args)?;
        }
        Some(Commands::Board) => {
            let service = open_service(kind)?;
            board::show_board(&service.ranked()?);
        }
        Some(Commands::Products) => {
            show_products(&ProductCatalog::standard());
        }
        Some(Commands::Delete { id }) => {
            let service = open_service(kind)?;
            service.delete(id)?;
            println!("Entry {} deleted.", id);
        }
        Some(Commands::Clear) => {
            let service = open_service(kind)?;
            service.clear()?;
            println!("Leaderboard cleared.");
        }
        Some(Commands::Export { path }) => {
            let service = open_service(kind)?;
            let path = path.unwrap_or_else(|| {
                PathBuf::from(format!("leaderboard_{}.csv", Local::now().format("%Y-%m-%d")))
            });
            let mut writer = BufWriter::new(File::create(&path)?);
            write_csv(&service.ranked()?, &mut writer)?;
            writer.flush()?;
            println!("Snapshot written to {}", path.display());
        }
        Some(Commands::Tui) | None => {
            tui::run(kind)?;
        }
    }
    Ok(())
}

fn open_service(kind: StoreKind) -> Result<LeaderboardService<LeaderboardStore>> {
    Ok(LeaderboardService::new(LeaderboardStore::open(kind, None)?))
}

fn submit<R: LeaderboardRepository>(
    service: &LeaderboardService<R>,
    args: &[String],
) -> Result<()> {
    if args.is_empty() {
        println!("Error: A name is required.");
        return Ok(());
    }

    let parsed = parse_args(args);

    if parsed.name.trim().is_empty() {
        println!("Error: A name is required.");
        return Ok(());
    }

    // Normalize product keys, skipping anything unknown or unreadable
    let known_keys = service.catalog().keys();
    let mut counts = HashMap::new();
    for (key, value) in parsed.counts {
        match expand_key(&key, &known_keys) {
            Ok(full_key) => match value.parse::<u32>() {
                Ok(count) => {
                    counts.insert(full_key, count);
                }
                Err(_) => {
                    println!("Warning: Invalid count '{}' for '{}'", value, key);
                }
            },
            Err(e) => {
                println!("Warning: {}", e);
            }
        }
    }

    let entry = service.submit(&parsed.name, &counts)?;
    println!("Entry added: {} (ID: {})", entry.name, entry.id);
    println!("  Daily: {:.2}g", entry.per_day);
    println!("  Yearly: {:.2}g / {:.2}kg", entry.per_year, entry.per_year_kg);
    Ok(())
}

fn show_products(catalog: &ProductCatalog) {
    println!("{:<11} {:<42} {:>8}", "Key", "Product", "Grams");
    println!("{:-<11} {:-<42} {:-<8}", "", "", "");

    for product in catalog.products() {
        println!(
            "{:<11} {:<42} {:>8}",
            product.key, product.name, product.grams
        );
    }
}
