//! Katsuyo CLI - Japanese conjugation generator.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            db,
            input,
            delimiter,
            dry_run,
            batch_size,
            limit,
            candidates_only,
            ids,
            config,
            report,
        } => commands::generate::run(commands::generate::GenerateArgs {
            db,
            input,
            delimiter,
            dry_run,
            batch_size,
            limit,
            candidates_only,
            ids,
            config,
            report,
        }),

        Commands::Classify { word, pos } => commands::classify::run(&word, &pos, cli.verbose),

        Commands::Conjugate { word, pos, json } => commands::conjugate::run(&word, &pos, json),

        Commands::Categories { json } => commands::categories::run(json),

        Commands::Status { db, json } => commands::status::run(db, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
