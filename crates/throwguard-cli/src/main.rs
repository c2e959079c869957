//! throwguard CLI: checked exception enforcement for Kotlin syntax trees.
//!
//! This binary provides the `throwguard` command with subcommands for
//! analyzing serialized trees and describing the issues it reports. See
//! `throwguard --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;
mod logging;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let formatter: Box<dyn throwguard_output::OutputFormatter> = if cli.json {
        Box::new(throwguard_output::json::JsonFormatter)
    } else {
        Box::new(throwguard_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Analyze { paths, suppress } => {
            commands::analyze::run(&*formatter, cli.verbose, paths, suppress)
        }
        Commands::Issues => commands::issues::run(&*formatter),
        Commands::Explain { issue_id } => commands::explain::run(&*formatter, issue_id),
    };

    std::process::exit(exit_code);
}
