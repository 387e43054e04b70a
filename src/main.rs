//! Command line entry point: parse a match log and print the record as
//! JSON on stdout.

use clap::Parser;
use matchrec::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
};
use matchrec::model::record::Winner;
use matchrec::parser::parse_match;
use matchrec::resolve::{FixedResolver, PromptResolver, WinnerResolver};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

/// Parse a match log into a structured JSON record.
#[derive(Debug, Parser)]
#[command(name = "matchrec", version, about)]
struct Args {
    /// Path to the match log file.
    log: PathBuf,

    /// Identifier to pin to the player slot.
    #[arg(short, long)]
    player: Option<String>,

    /// Never prompt; record undecidable outcomes as unknown.
    #[arg(short, long)]
    unattended: bool,

    /// Path to the config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file_config = match load_config_with_precedence(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let config = apply_cli_overrides(
        apply_env_overrides(merge_config(file_config)),
        args.player.clone(),
    );

    if let Err(err) = matchrec::logging::init(&config.log_file_path) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    info!(log = %args.log.display(), player = ?config.player, "Parsing match log");

    let mut resolver: Box<dyn WinnerResolver> = if args.unattended {
        Box::new(FixedResolver(Winner::Unknown))
    } else {
        Box::new(PromptResolver::stdio())
    };

    match parse_match(&args.log, config.player.as_deref(), resolver.as_mut()) {
        Ok(Some(record)) => match serde_json::to_string(&record) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                error!(error = %err, "Failed to serialize match record");
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        },
        Ok(None) => {
            warn!(log = %args.log.display(), "Log did not describe a usable match");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Failed to parse match log");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
