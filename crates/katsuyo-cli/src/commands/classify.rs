//! Classify command - show which rule decides a word's class.

use colored::Colorize;
use katsuyo::{classify, explain};

pub fn run(word: &str, pos: &str, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let class = classify(word, pos);

    println!(
        "{} {} {}",
        word.white().bold(),
        format!("[{}]", pos).dimmed(),
        class.to_string().cyan().bold()
    );

    match explain(word, pos) {
        Some(rule) => println!("  matched rule: {}", rule.name.yellow()),
        None => println!("  {}", "no rule matched; not conjugable".dimmed()),
    }

    if verbose && class.paradigm_size() > 0 {
        println!("  forms generated: {}", class.paradigm_size());
    }

    Ok(())
}
