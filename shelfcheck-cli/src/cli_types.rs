//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "shelfcheck")]
#[command(about = "Check a want list against library and streaming catalogs", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which catalog a want list is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Domain {
    /// Books in a tab-delimited list, searched in a public library catalog
    Library,
    /// Movies in an IMDb watchlist export, looked up in a streaming listing
    Streaming,
}

#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Want list: a tab-delimited book list or an IMDb watchlist CSV
    pub file: PathBuf,

    /// Catalog to check against
    #[arg(short, long, value_enum, default_value_t = Domain::Library)]
    pub domain: Domain,

    /// Streaming listing CSV (required for --domain streaming)
    #[arg(long)]
    pub listing: Option<PathBuf>,

    /// Skip this many items at the start of the list
    #[arg(long, default_value_t = 0)]
    pub skip: usize,

    /// Number of desired-format items to pick at the end
    #[arg(long)]
    pub highlights: Option<usize>,

    /// Largest edit distance that counts as a confident match
    #[arg(long)]
    pub min_distance: Option<usize>,

    /// Edit distance beyond which a result is a different work
    #[arg(long)]
    pub max_distance: Option<usize>,

    /// Check everything but do not rewrite the list
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Also write the pass report as JSON to this path
    #[arg(long)]
    pub json_report: Option<PathBuf>,

    /// Library id for the catalog feed (overrides settings)
    #[arg(long)]
    pub library: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Check every item on a want list and record what is available
    Check(CheckArgs),

    /// Inspect or create the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,

    /// Write a settings file with the defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
