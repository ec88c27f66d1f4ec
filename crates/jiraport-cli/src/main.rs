// Rust guideline compliant 2026-10-15

//! Jiraport CLI Application
//!
//! Command-line interface for converting Jira XML exports into Shortcut
//! import payloads.

use clap::Parser;
use jiraport_cli::{commands, init_tracing};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jiraport",
    version,
    about = "Convert Jira XML exports into Shortcut import JSON",
    after_help = "Examples:\n  jiraport inspect export.xml\n  jiraport convert export.xml --output import.json\n  jiraport convert export.xml --user-map users.json --compact\n"
)]
struct Cli {
    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Convert an export into Shortcut import JSON
    Convert {
        /// Path to the Jira XML export
        export: PathBuf,

        /// JSON user map replacing the config's users
        #[arg(long)]
        user_map: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Report counts, unmapped users and orphan sub-tasks
    Inspect {
        /// Path to the Jira XML export
        export: PathBuf,

        /// JSON user map replacing the config's users
        #[arg(long)]
        user_map: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(&cli.log_level, cli.log_file.as_deref())?;
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Convert {
            export,
            user_map,
            output,
            compact,
        } => {
            commands::convert::execute(
                &export,
                config,
                user_map.as_deref(),
                output.as_deref(),
                compact,
            )?;
        }
        Commands::Inspect { export, user_map } => {
            commands::inspect::execute(&export, config, user_map.as_deref())?;
        }
    }

    Ok(())
}
