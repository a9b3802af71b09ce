//! Pass results and the reporters that present them.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use shelfcheck_core::{Format, MediaItem};
use shelfcheck_match::BestMatch;

use crate::decision::Diagnostic;

/// Why an item's format changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeKind {
    /// A close match was found in a better format.
    Confirmed,
    /// A never-checked item had no plausible match.
    MarkedAbsent,
}

/// The best match behind a decision, detached from its item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub title: Option<String>,
    /// `None` when nothing was compared.
    pub title_distance: Option<usize>,
    pub author: Option<String>,
    pub author_distance: Option<usize>,
    pub format: Format,
}

impl<I: MediaItem + ?Sized> From<&BestMatch<'_, I>> for MatchSummary {
    fn from(best: &BestMatch<'_, I>) -> Self {
        Self {
            title: best.title.clone(),
            title_distance: best.title_distance.as_finite(),
            author: best.author.clone(),
            author_distance: best.author_distance.as_finite(),
            format: best.format,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrade {
    /// 1-based position in the want list.
    pub line: usize,
    pub author: String,
    pub title: String,
    /// The item as displayed after the upgrade.
    pub item: String,
    pub from: Format,
    pub to: Format,
    pub kind: UpgradeKind,
    pub matched: MatchSummary,
}

/// An item sampled from those already in the desired format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub author: String,
    pub title: String,
    pub item: String,
}

impl Highlight {
    pub fn of<I: MediaItem + ?Sized>(item: &I) -> Self {
        Self {
            author: item.author().to_string(),
            title: item.title().to_string(),
            item: item.to_string(),
        }
    }
}

/// Everything a reconciliation pass found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassReport {
    /// Items in the list, including skipped ones.
    pub items_read: usize,
    /// Items actually looked up.
    pub items_checked: usize,
    pub upgrades: Vec<Upgrade>,
    pub diagnostics: Vec<Diagnostic>,
    pub highlights: Vec<Highlight>,
}

impl PassReport {
    /// Order upgrades by author, then title, ignoring case.
    pub fn sort_upgrades(&mut self) {
        self.upgrades.sort_by_cached_key(|u| (u.author.to_lowercase(), u.title.to_lowercase()));
    }

    pub fn summary(&self) -> String {
        format!(
            "{} read, {} checked, {} upgrades",
            self.items_read,
            self.items_checked,
            self.upgrades.len()
        )
    }
}

/// Presents a finished pass.
pub trait Reporter {
    fn report(&mut self, report: &PassReport) -> io::Result<()>;
}

/// Writes the report as pretty-printed JSON.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, report: &PassReport) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upgrade(author: &str, title: &str) -> Upgrade {
        Upgrade {
            line: 1,
            author: author.into(),
            title: title.into(),
            item: format!("{}:{}", author, title),
            from: Format::Unknown,
            to: Format::EBook,
            kind: UpgradeKind::Confirmed,
            matched: MatchSummary {
                title: Some(title.into()),
                title_distance: Some(0),
                author: Some(author.into()),
                author_distance: Some(0),
                format: Format::EBook,
            },
        }
    }

    #[test]
    fn upgrades_sort_by_author_then_title() {
        let mut report = PassReport {
            upgrades: vec![
                upgrade("frank herbert", "Dune"),
                upgrade("Austen, Jane", "Persuasion"),
                upgrade("Austen, Jane", "emma"),
            ],
            ..Default::default()
        };
        report.sort_upgrades();
        let order: Vec<_> = report.upgrades.iter().map(|u| u.title.as_str()).collect();
        assert_eq!(order, vec!["emma", "Persuasion", "Dune"]);
    }

    #[test]
    fn json_reporter_writes_tagged_fields() {
        let report = PassReport {
            items_read: 3,
            items_checked: 2,
            upgrades: vec![upgrade("Jane Austen", "Emma")],
            diagnostics: vec![Diagnostic::NoCandidates { item: "x".into() }],
            highlights: vec![],
        };
        let mut reporter = JsonReporter::new(Vec::new());
        reporter.report(&report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&reporter.into_inner()).unwrap();
        assert_eq!(value["items_read"], 3);
        assert_eq!(value["upgrades"][0]["kind"], "confirmed");
        assert_eq!(value["upgrades"][0]["to"], "EBook");
        assert_eq!(value["diagnostics"][0]["kind"], "no_candidates");
    }

    #[test]
    fn summary_line() {
        let report = PassReport {
            items_read: 10,
            items_checked: 7,
            ..Default::default()
        };
        assert_eq!(report.summary(), "10 read, 7 checked, 0 upgrades");
    }
}
