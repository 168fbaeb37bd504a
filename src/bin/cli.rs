//! Bookshelf CLI Client
//!
//! One-shot commands against the data file: each invocation loads the file,
//! runs one operation, and saves again if the operation changed anything.

use std::io;
use std::path::PathBuf;

use bookshelf::codec::LoadReport;
use bookshelf::shell::{render_book_table, render_statistics};
use bookshelf::{Catalog, Config, LibraryError, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Bookshelf CLI
#[derive(Parser, Debug)]
#[command(name = "bookshelf-cli")]
#[command(about = "One-shot commands for a Bookshelf data file")]
#[command(version)]
struct Args {
    /// Data file to operate on
    #[arg(short, long, default_value = "library_books.txt", global = true)]
    file: PathBuf,

    /// Print JSON instead of tables (list, search, stats)
    #[arg(long, global = true)]
    json: bool,

    /// Log load and save activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every book with its ID
    #[command(alias = "ls")]
    List,

    /// Search title, author, year and genre (case-insensitive)
    Search {
        /// Keyword to look for
        keyword: String,
    },

    /// Add a book
    Add {
        title: String,
        author: String,
        /// Four-digit publication year
        year: String,
        genre: String,

        /// Save even if lines of the data file were skipped (they are dropped)
        #[arg(long)]
        force: bool,
    },

    /// Delete a book by ID
    #[command(alias = "rm")]
    Delete {
        /// ID as shown by `list`
        id: usize,

        /// Save even if lines of the data file were skipped (they are dropped)
        #[arg(long)]
        force: bool,
    },

    /// Show total and per-genre counts
    Stats,

    /// Load the file and report skipped lines without changing it
    Check,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("{} {}", "Error:".red(), e);
        if matches!(e, LibraryError::SkippedLines { .. }) {
            eprintln!("Run `bookshelf-cli check` to see them, or pass --force to save anyway.");
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::builder().data_file(&args.file).build();
    let mut catalog = Catalog::new(config)?;

    let report = catalog.load()?;
    if !matches!(args.command, Commands::Check) {
        print_skipped(&report);
    }

    match args.command {
        Commands::List => {
            let books = catalog.list_books();
            if args.json {
                print_json(&books)?;
            } else if books.is_empty() {
                println!("No books available.");
            } else {
                print!("{}", render_book_table(&books, catalog.config()));
            }
        }
        Commands::Search { keyword } => {
            let result = catalog.search_books(&keyword);
            if args.json {
                print_json(&result)?;
            } else if result.store_was_empty() {
                println!("No books available.");
            } else if result.is_no_match() {
                println!("{}", "No book found.".yellow());
            } else {
                print!("{}", render_book_table(&result.matches, catalog.config()));
            }
        }
        Commands::Add {
            title,
            author,
            year,
            genre,
            force,
        } => {
            ensure_rewrite_is_lossless(&report, force)?;
            catalog.add_book(&title, &author, &year, &genre)?;
            catalog.save()?;
            println!("{}", "Book added successfully".green());
        }
        Commands::Delete { id, force } => {
            ensure_rewrite_is_lossless(&report, force)?;
            let removed = catalog.delete_book(id)?;
            catalog.save()?;
            println!("{}", format!("Book '{}' deleted.", removed.title).green());
        }
        Commands::Stats => {
            let stats = catalog.statistics();
            if args.json {
                print_json(&stats)?;
            } else {
                print!("{}", render_statistics(&stats, catalog.config()));
            }
        }
        Commands::Check => print_check(&report),
    }

    Ok(())
}

/// Saving writes only the loaded records, so refuse while lines were skipped
fn ensure_rewrite_is_lossless(report: &LoadReport, force: bool) -> Result<()> {
    if force || report.is_clean() {
        return Ok(());
    }
    Err(LibraryError::SkippedLines {
        skipped: report.skipped_count(),
    })
}

fn print_skipped(report: &LoadReport) {
    for skipped in &report.skipped {
        eprintln!(
            "{} line {} skipped ({}): {}",
            "Warning:".yellow(),
            skipped.line_number,
            skipped.reason,
            skipped.raw
        );
    }
}

fn print_check(report: &LoadReport) {
    if report.file_created {
        println!("No saved file found. Empty file created.");
        return;
    }

    println!("Accepted: {}", report.accepted);
    println!("Blank lines: {}", report.blank_lines);
    println!("Skipped: {}", report.skipped_count());
    for skipped in &report.skipped {
        println!(
            "  line {}: {} -> {}",
            skipped.line_number, skipped.reason, skipped.raw
        );
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{}", text);
    Ok(())
}
