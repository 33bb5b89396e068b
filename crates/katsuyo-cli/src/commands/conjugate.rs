//! Conjugate command - print a word's full paradigm.

use colored::Colorize;
use katsuyo::conjugate_tagged;

pub fn run(word: &str, pos: &str, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let conjugation = conjugate_tagged(word, pos)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&conjugation)?);
        return Ok(());
    }

    println!(
        "{} {}",
        conjugation.word.white().bold(),
        conjugation.class.to_string().cyan()
    );

    if conjugation.forms.is_empty() {
        println!("{}", "Not conjugable.".dimmed());
        return Ok(());
    }

    println!();
    for (category, text) in conjugation.forms.iter() {
        println!(
            "  {} {:12} {}",
            format!("{:22}", category.code()).dimmed(),
            category.label_primary(),
            text.green()
        );
    }

    Ok(())
}
