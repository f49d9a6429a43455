use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use passbook_core::{BankCode, Direction, ImportDiagnostics, ParsedTransaction};
use passbook_ingest::{detect_bank, parse_bulk_csv, pipeline};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "passbook", version, about = "Bank statement import pipeline")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse extracted statement text into normalized transactions
    Statement {
        /// Path to a statement text file (PDF text already extracted)
        file: PathBuf,

        /// Statement date used to anchor date validation (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Import an already-structured CSV (Date, Description, Amount, Type, Category, Notes)
    Bulk {
        file: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List banks with a known statement layout
    Banks,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Statement { file, date, json } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;

            let detection = detect_bank(&text);
            let (txns, diag) = pipeline::detect_and_parse(&text, date)
                .with_context(|| format!("parsing {}", file.display()))?;

            if json {
                let payload = serde_json::json!({
                    "detection": detection,
                    "transactions": txns,
                    "diagnostics": diag,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!(
                    "Detected {} (score {})\n",
                    detection.bank.display_name(),
                    detection.score
                );
                print_table(&txns, &diag);
            }
        }

        Command::Bulk { file, json } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;

            let (txns, diag) =
                parse_bulk_csv(&content).with_context(|| format!("parsing {}", file.display()))?;

            if json {
                print_json(&txns, &diag)?;
            } else {
                print_table(&txns, &diag);
            }
        }

        Command::Banks => {
            for bank in BankCode::supported() {
                println!("{}", bank.display_name());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_json(txns: &[ParsedTransaction], diag: &ImportDiagnostics) -> Result<()> {
    let payload = serde_json::json!({
        "transactions": txns,
        "diagnostics": diag,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn print_table(txns: &[ParsedTransaction], diag: &ImportDiagnostics) {
    for txn in txns {
        let sign = match txn.direction {
            Direction::Income => '+',
            Direction::Expense => '-',
        };
        println!(
            "{}  {}{:>12.2}  {:<40}  {}",
            txn.date,
            sign,
            txn.amount,
            truncate(&txn.description, 40),
            txn.category_hint.as_deref().unwrap_or("-"),
        );
    }

    println!(
        "\n{} transactions ({} duplicates skipped, {} lines unmatched)",
        diag.transactions_emitted, diag.duplicates_skipped, diag.unmatched_lines
    );

    for err in &diag.row_errors {
        println!("  line {}: {}", err.line, err.reason);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{cut}…")
    }
}
