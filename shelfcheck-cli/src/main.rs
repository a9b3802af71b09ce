//! shelfcheck CLI
//!
//! Checks a want list of books or movies against a library catalog or a
//! streaming listing and records which items became available.

mod cli_types;
mod commands;
mod error;
mod logging;
mod reporter;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};

fn main() {
    let cli = Cli::parse();

    let bars = match logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        Ok(bars) => bars,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Check(args) => commands::check::run_check(args, &bars),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Init { force } => commands::config::run_config_init(force),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
