use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "throwguard",
    version,
    about = "Checked exception enforcement for Kotlin call sites"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log analysis decisions to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Analyze serialized syntax trees for unhandled checked calls
    Analyze {
        /// Tree files or directories to walk (default: current directory)
        paths: Vec<String>,
        /// Suppress an issue id (repeatable)
        #[arg(long)]
        suppress: Vec<String>,
    },

    /// List the issues this analyzer reports
    Issues,

    /// Show the full description of an issue
    Explain {
        /// Issue id (e.g., CheckedExceptionNotCaught)
        issue_id: String,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
