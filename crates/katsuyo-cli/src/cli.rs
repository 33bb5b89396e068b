//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Katsuyo: Japanese conjugation generator
#[derive(Parser)]
#[command(name = "katsuyo")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate and store conjugations for a vocabulary
    Generate {
        /// SQLite vocabulary database (entries are read from and forms written to it)
        #[arg(long, value_name = "DB", required_unless_present_all = ["input", "dry_run"])]
        db: Option<PathBuf>,

        /// Read entries from a CSV/TSV file instead of the database's words table
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Field delimiter of the input file ("tab" or one ASCII character);
        /// read from the header line when omitted
        #[arg(long, value_name = "CHAR", requires = "input", value_parser = parse_delimiter)]
        delimiter: Option<u8>,

        /// Classify and conjugate without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Entries per write transaction (overrides config)
        #[arg(short, long)]
        batch_size: Option<usize>,

        /// Process at most this many entries, in id order
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only entries whose tag looks like a verb or adjective
        #[arg(long)]
        candidates_only: bool,

        /// Only these entry ids (comma-separated), e.g. a previous retry list
        #[arg(long, value_delimiter = ',')]
        ids: Option<Vec<i64>>,

        /// JSON generator config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the run report as JSON to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Show the conjugation class a tag resolves to
    Classify {
        /// Dictionary form
        word: String,

        /// Part-of-speech tag (e.g. "他動1", "イ形")
        #[arg(short, long)]
        pos: String,
    },

    /// Print the full paradigm of a word
    Conjugate {
        /// Dictionary form
        word: String,

        /// Part-of-speech tag (e.g. "他動1", "イ形")
        #[arg(short, long)]
        pos: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the grammatical category catalog
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show stored form counts for a database
    Status {
        /// SQLite vocabulary database
        #[arg(long, value_name = "DB")]
        db: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(format!("expected one ASCII character or 'tab', got '{}'", value)),
        },
    }
}
