//! Console presentation of a pass: progress bar and coloured summary.

use std::io;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelfcheck_lib::{PassProgress, PassReport, Reporter, UpgradeKind};

/// Progress bar over the want list.
///
/// The bar joins the logger's [`MultiProgress`], so per-item log lines are
/// printed above it instead of through it. A quiet bar set draws nothing.
pub(crate) struct BarProgress {
    pb: ProgressBar,
}

impl BarProgress {
    pub(crate) fn new(bars: &MultiProgress) -> Self {
        let pb = bars.add(ProgressBar::new(0));
        if let Ok(style) =
            ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {wide_msg}")
        {
            pb.set_style(style);
        }
        Self { pb }
    }
}

impl PassProgress for BarProgress {
    fn on_item(&self, current: usize, total: usize, item: &str) {
        self.pb.set_length(total as u64);
        self.pb.set_position(current as u64);
        self.pb.set_message(item.to_string());
    }

    fn on_complete(&self, _report: &PassReport) {
        self.pb.finish_and_clear();
    }
}

/// Writes the pass summary through `log`.
pub(crate) struct ConsoleReporter {
    /// What the desired format is called in this domain ("eBooks", "streaming movies").
    pub(crate) highlight_label: &'static str,
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, report: &PassReport) -> io::Result<()> {
        log::info!(
            "{} {}",
            "Done:".if_supports_color(Stdout, |t| t.bold()),
            report.summary(),
        );

        if !report.upgrades.is_empty() {
            log::info!("");
            log::info!("{}", "Upgrades".if_supports_color(Stdout, |t| t.bold()));
            for upgrade in &report.upgrades {
                let to = upgrade.to.to_string();
                let to = match upgrade.kind {
                    UpgradeKind::Confirmed => {
                        to.if_supports_color(Stdout, |t| t.green()).to_string()
                    }
                    UpgradeKind::MarkedAbsent => {
                        to.if_supports_color(Stdout, |t| t.dimmed()).to_string()
                    }
                };
                log::info!(
                    "  {} -> {}  {}",
                    upgrade.from,
                    to,
                    upgrade.item.if_supports_color(Stdout, |t| t.cyan()),
                );
            }
        }

        if !report.diagnostics.is_empty() {
            log::warn!("");
            log::warn!(
                "{}",
                "Needs a closer look".if_supports_color(Stdout, |t| t.yellow())
            );
            for diagnostic in &report.diagnostics {
                log::warn!("  {}", diagnostic);
            }
        }

        if !report.highlights.is_empty() {
            log::info!("");
            log::info!(
                "{}",
                format!(
                    "Here are {} {} from the list:",
                    report.highlights.len(),
                    self.highlight_label
                )
                .if_supports_color(Stdout, |t| t.bold())
            );
            for highlight in &report.highlights {
                log::info!("  {}", highlight.item);
            }
        }

        Ok(())
    }
}
