//! One reconciliation pass over a want list.
//!
//! For each item: fetch candidates, find the best match, classify it, and
//! apply the verdict in place. The list is written back once at the end.

use chrono::{Datelike, Local};
use rand::Rng;
use shelfcheck_core::MediaItem;
use shelfcheck_match::{CandidateSource, find_best_match};

use crate::decision::{Diagnostic, Thresholds, Verdict, apply, classify};
use crate::error::PassError;
use crate::progress::PassProgress;
use crate::report::{Highlight, MatchSummary, PassReport, Upgrade, UpgradeKind};
use crate::reservoir;
use crate::store::CatalogStore;

#[derive(Debug, Clone)]
pub struct PassOptions {
    pub thresholds: Thresholds,
    /// Leading items to pass over (still counted as read).
    pub skip: usize,
    /// How many desired-format items to sample afterwards.
    pub highlights: usize,
    /// Decide everything but leave the store untouched.
    pub dry_run: bool,
    /// Year stamped on upgrades; the current year when `None`.
    pub year: Option<i32>,
}

impl Default for PassOptions {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            skip: 0,
            highlights: crate::settings::DEFAULT_HIGHLIGHTS,
            dry_run: false,
            year: None,
        }
    }
}

/// Run a pass with the thread-local RNG for highlight sampling.
pub fn run_pass<I, S, C, P>(
    store: &mut S,
    source: &mut C,
    options: &PassOptions,
    progress: &P,
) -> Result<PassReport, PassError>
where
    I: MediaItem,
    S: CatalogStore<I> + ?Sized,
    C: CandidateSource<I> + ?Sized,
    P: PassProgress + ?Sized,
{
    run_pass_with_rng(store, source, options, progress, &mut rand::rng())
}

/// Run a pass, sampling highlights with `rng`.
pub fn run_pass_with_rng<I, S, C, P, R>(
    store: &mut S,
    source: &mut C,
    options: &PassOptions,
    progress: &P,
    rng: &mut R,
) -> Result<PassReport, PassError>
where
    I: MediaItem,
    S: CatalogStore<I> + ?Sized,
    C: CandidateSource<I> + ?Sized,
    P: PassProgress + ?Sized,
    R: Rng,
{
    options.thresholds.validate()?;
    let year = options.year.unwrap_or_else(|| Local::now().year());

    let mut items = store.load().map_err(PassError::Load)?;
    let total = items.len();
    let mut report = PassReport {
        items_read: total,
        ..Default::default()
    };

    for (i, item) in items.iter_mut().enumerate() {
        let line = i + 1;
        progress.on_item(line, total, &item.to_string());
        if i < options.skip || item.is_consumed() {
            continue;
        }
        report.items_checked += 1;

        let Some(candidates) = source.find_candidates(item) else {
            log::debug!("line {}: no candidates for {}", line, item);
            report.diagnostics.push(Diagnostic::NoCandidates {
                item: item.to_string(),
            });
            continue;
        };

        let (verdict, matched) = match find_best_match(&*item, &candidates) {
            Some(best) => {
                log::debug!("\t{}", best);
                (classify(&best, &options.thresholds), MatchSummary::from(&best))
            }
            None => {
                log::debug!("line {}: no best match for {}", line, item);
                report.diagnostics.push(Diagnostic::NoCandidates {
                    item: item.to_string(),
                });
                continue;
            }
        };

        if let Some(diagnostic) = verdict.diagnostic(&item.to_string()) {
            log::warn!("line {}: {}", line, diagnostic);
            report.diagnostics.push(diagnostic);
            continue;
        }

        let before = item.to_string();
        if let Some(transition) = apply(item, &verdict, year) {
            log::info!("line {}: UPGRADE of {} to {}", line, before, transition.to);
            let kind = match verdict {
                Verdict::RejectAsAbsent { .. } => UpgradeKind::MarkedAbsent,
                _ => UpgradeKind::Confirmed,
            };
            report.upgrades.push(Upgrade {
                line,
                author: item.author().to_string(),
                title: item.title().to_string(),
                item: item.to_string(),
                from: transition.from,
                to: transition.to,
                kind,
                matched,
            });
        }
    }

    report.sort_upgrades();

    if options.dry_run {
        log::info!("Dry run: want list not written");
    } else {
        store.save(&items).map_err(PassError::Save)?;
    }

    report.highlights = reservoir::highlights(&items, options.highlights, rng)
        .into_iter()
        .map(Highlight::of)
        .collect();

    progress.on_complete(&report);
    Ok(report)
}
