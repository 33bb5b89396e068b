//! Generate command - conjugate a vocabulary and store the forms.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use colored::Colorize;
use katsuyo::{
    EntryFilter, FailureKind, GenerationReport, Generator, GeneratorConfig, LexicalEntry,
    SqliteStore, VocabularyFile, VocabularySource,
};
use tracing::debug;

/// Failures listed individually before the rest are summarized.
const MAX_LISTED_FAILURES: usize = 10;

pub struct GenerateArgs {
    pub db: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub delimiter: Option<u8>,
    pub dry_run: bool,
    pub batch_size: Option<usize>,
    pub limit: Option<usize>,
    pub candidates_only: bool,
    pub ids: Option<Vec<i64>>,
    pub config: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match args.config {
        Some(ref path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }
    config.validate()?;
    debug!(?config, "Generator config");

    let filter = EntryFilter {
        candidates_only: args.candidates_only,
        ids: args.ids.clone(),
        limit: args.limit,
    };

    // Dry runs leave the database untouched.
    let mut store = match args.db {
        Some(ref path) if args.dry_run => Some(SqliteStore::open_read_only(path)?),
        Some(ref path) => Some(SqliteStore::open(path)?),
        None => None,
    };

    let entries: Vec<LexicalEntry> = match (&args.input, &store) {
        (Some(path), _) => {
            let file = VocabularyFile::open_with_delimiter(path, args.delimiter)?;
            println!(
                "{} {} ({}, {})",
                "Reading".cyan().bold(),
                path.display().to_string().white(),
                file.format,
                &file.hash[..file.hash.len().min(19)]
            );
            file.load_entries(&filter)?
        }
        (None, Some(db)) => db.load_entries(&filter)?,
        (None, None) => return Err("Either --db or --input is required".into()),
    };

    println!(
        "{} {} entries{}",
        "Loaded".cyan().bold(),
        entries.len().to_string().white().bold(),
        if args.dry_run { " (dry run)" } else { "" }
    );

    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;

    let generator = Generator::with_config(config).with_cancel(cancel);

    let report = match store.as_mut() {
        Some(db) if !args.dry_run => generator.generate(db, entries)?,
        _ => generator.preview(entries),
    };

    print_report(&report);

    if let Some(path) = args.report {
        std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
        println!(
            "{} {}",
            "Report saved to".green().bold(),
            path.display().to_string().white()
        );
    }

    Ok(())
}

fn print_report(report: &GenerationReport) {
    println!();
    if report.dry_run {
        println!("{}", "Dry run summary:".yellow().bold());
    } else {
        println!("{}", "Generation summary:".yellow().bold());
    }
    println!("  Processed: {}", report.processed.to_string().green());
    println!("  Skipped:   {}", report.skipped.to_string().white());
    println!("  Failed:    {}", report.failed.len().to_string().red());
    println!(
        "  Forms:     {}{}",
        report.forms_written.to_string().white().bold(),
        if report.dry_run { " (not written)" } else { "" }
    );
    println!("  Time:      {} ms", report.duration_ms());

    if !report.by_class.is_empty() {
        println!();
        println!("{}", "By class:".yellow().bold());
        for (class, count) in &report.by_class {
            println!("  {:18} {}", class.label(), count);
        }
    }

    if !report.failed.is_empty() {
        println!();
        println!("{}", "Failures:".red().bold());
        for failure in report.failed.iter().take(MAX_LISTED_FAILURES) {
            let kind = match failure.kind {
                FailureKind::MalformedInput => "malformed".yellow(),
                FailureKind::Persistence => "persistence".red(),
            };
            println!(
                "  [{}] #{} {} - {}",
                kind, failure.entry_id, failure.word, failure.message
            );
        }
        if report.failed.len() > MAX_LISTED_FAILURES {
            println!("  ... and {} more", report.failed.len() - MAX_LISTED_FAILURES);
        }

        let retry = report.retry_ids();
        if !retry.is_empty() {
            let ids: Vec<String> = retry.iter().map(|id| id.to_string()).collect();
            println!();
            println!(
                "Retry with {}",
                format!("katsuyo generate --ids {}", ids.join(",")).cyan().bold()
            );
        }
    }

    if report.cancelled {
        println!();
        println!("{}", "Cancelled; completed batches were kept.".yellow());
    } else if report.is_clean() {
        println!();
        println!("{}", "All entries conjugated.".green());
    }
}
