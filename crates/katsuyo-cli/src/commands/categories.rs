//! Categories command - list the grammatical category catalog.

use colored::Colorize;
use katsuyo::{catalog, GrammaticalCategory};

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(catalog())?);
        return Ok(());
    }

    println!("{}", "Grammatical categories:".yellow().bold());
    for category in GrammaticalCategory::ALL {
        let scope = if category.is_verb_only() {
            "verbs".magenta()
        } else {
            "all".blue()
        };
        println!(
            "  {:>4} {} {:14} {:16} {}",
            category.sort_rank(),
            format!("{:22}", category.code()).white().bold(),
            category.label_primary(),
            category.label_secondary(),
            scope
        );
    }

    Ok(())
}
