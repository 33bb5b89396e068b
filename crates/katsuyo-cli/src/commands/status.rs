//! Status command - show what a database holds.

use std::path::PathBuf;

use colored::Colorize;
use katsuyo::SqliteStore;

pub fn run(db: PathBuf, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !db.exists() {
        return Err(format!("Database not found: {}", db.display()).into());
    }

    let store = SqliteStore::open_read_only(&db)?;
    let entries = if store.table_exists("words")? {
        store.entry_count()?
    } else {
        0
    };
    let (conjugated, total, counts) = if store.table_exists("word_conjugations")?
        && store.table_exists("conjugation_types")?
    {
        (
            store.conjugated_entries()?,
            store.total_forms()?,
            store.form_counts()?,
        )
    } else {
        (0, 0, Vec::new())
    };

    if json_output {
        let by_category: serde_json::Map<String, serde_json::Value> = counts
            .iter()
            .map(|(code, n)| (code.clone(), serde_json::json!(n)))
            .collect();
        let status = serde_json::json!({
            "database": db.display().to_string(),
            "entries": entries,
            "conjugated_entries": conjugated,
            "total_forms": total,
            "categories": counts.len(),
            "forms_by_category": by_category,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Status for".cyan().bold(),
        db.display().to_string().white()
    );
    println!();

    // Coverage bar
    let coverage = if entries == 0 {
        0.0
    } else {
        conjugated as f64 / entries as f64
    };
    let bar_width = 30;
    let filled = ((coverage * bar_width as f64).round() as usize).min(bar_width);
    let bar: String = "█".repeat(filled) + &"░".repeat(bar_width - filled);

    println!(
        "Conjugated: {} {}/{} entries ({:.0}%)",
        bar.cyan(),
        conjugated.to_string().white().bold(),
        entries,
        coverage * 100.0
    );
    println!("Forms:      {}", total.to_string().white().bold());
    println!();

    if counts.is_empty() {
        println!(
            "{}",
            "No categories stored yet. Run 'katsuyo generate' first.".yellow()
        );
        return Ok(());
    }

    println!("{}", "Forms by category:".yellow().bold());
    for (code, n) in &counts {
        println!("  {:22} {}", code, n);
    }

    Ok(())
}
