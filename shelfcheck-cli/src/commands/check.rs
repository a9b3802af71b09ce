use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

use indicatif::MultiProgress;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelfcheck_core::{Book, Movie};
use shelfcheck_lib::{
    JsonReporter, PassOptions, PassReport, Reporter, Settings, TdfStore, Thresholds,
    WatchlistStore, run_pass,
};
use shelfcheck_source::{FeedClient, LibraryFeedSource, ListingSource, load_movie_index};

use crate::cli_types::{CheckArgs, Domain};
use crate::error::CliError;
use crate::reporter::{BarProgress, ConsoleReporter};

/// Combine settings with command-line overrides.
fn pass_options(args: &CheckArgs, settings: &Settings) -> Result<PassOptions, CliError> {
    let thresholds = Thresholds::new(
        args.min_distance
            .unwrap_or(settings.thresholds.min_distance),
        args.max_distance
            .unwrap_or(settings.thresholds.max_distance),
    )?;

    Ok(PassOptions {
        thresholds,
        skip: args.skip,
        highlights: args.highlights.unwrap_or(settings.pass.highlights),
        dry_run: args.dry_run,
        year: None,
    })
}

pub(crate) fn run_check(args: CheckArgs, bars: &MultiProgress) -> Result<(), CliError> {
    let settings = Settings::load()?;
    let options = pass_options(&args, &settings)?;
    let progress = BarProgress::new(bars);

    log::info!(
        "Checking {}",
        args.file.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    let (report, highlight_label) = match args.domain {
        Domain::Library => {
            let library = args
                .library
                .as_deref()
                .unwrap_or(&settings.source.library);
            let client = FeedClient::new(
                &settings.source.user_agent,
                Duration::from_secs(settings.source.timeout_secs),
                Duration::from_millis(settings.source.request_interval_ms),
            )?;
            let mut source = LibraryFeedSource::new(client, library);
            log::debug!("Catalog feed: {}", source.url());

            let mut store = TdfStore::new(&args.file);
            (
                run_pass::<Book, _, _, _>(&mut store, &mut source, &options, &progress)?,
                "eBooks",
            )
        }
        Domain::Streaming => {
            let listing = args.listing.as_deref().ok_or_else(|| {
                CliError::usage("--listing is required with --domain streaming")
            })?;
            let index = load_movie_index(listing)?;
            log::info!("Loaded {} titles from {}", index.len(), listing.display());

            let mut source = ListingSource::new(index);
            let mut store = WatchlistStore::new(&args.file);
            (
                run_pass::<Movie, _, _, _>(&mut store, &mut source, &options, &progress)?,
                "streaming movies",
            )
        }
    };

    ConsoleReporter { highlight_label }.report(&report)?;

    if let Some(ref path) = args.json_report {
        write_json_report(&report, path)?;
        log::info!(
            "Report written to {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }

    Ok(())
}

fn write_json_report(report: &PassReport, path: &Path) -> Result<(), CliError> {
    let file = File::create(path)?;
    JsonReporter::new(BufWriter::new(file)).report(report)?;
    Ok(())
}
