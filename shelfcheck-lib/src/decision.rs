//! Reconciliation decisions: what a best match means for the wanted item.
//!
//! [`classify`] is pure and only reads the match. The resulting [`Verdict`]
//! owns everything it needs, so the borrow on the item ends before
//! [`apply`] mutates it.

use std::fmt;

use serde::{Deserialize, Serialize};
use shelfcheck_core::{Format, MediaItem};
use shelfcheck_match::{BestMatch, Distance};

use crate::error::SettingsError;

pub const DEFAULT_MIN_DISTANCE: usize = 3;
pub const DEFAULT_MAX_DISTANCE: usize = 8;

/// Edit-distance bounds for accepting a match.
///
/// Distances up to `min_distance` are trusted. Anything past `max_distance`
/// is treated as a different work entirely. In between is ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub min_distance: usize,
    pub max_distance: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl Thresholds {
    pub fn new(min_distance: usize, max_distance: usize) -> Result<Self, SettingsError> {
        let thresholds = Self {
            min_distance,
            max_distance,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.min_distance >= self.max_distance {
            return Err(SettingsError::invalid_value(format!(
                "min_distance ({}) must be less than max_distance ({})",
                self.min_distance, self.max_distance
            )));
        }
        Ok(())
    }
}

/// Outcome of comparing an item with its best match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Title or author is too far off; the catalog does not hold this work.
    RejectAsAbsent { mark_not_available: bool },
    AmbiguousTitle { found: Option<String>, distance: Distance },
    AmbiguousAuthor { found: Option<String>, distance: Distance },
    /// Close enough on both axes. `upgrade` is the item's own verdict on `format`.
    Confirmed { format: Format, upgrade: bool },
}

impl Verdict {
    /// Format the item should move to, if any.
    pub fn target_format(&self) -> Option<Format> {
        match *self {
            Self::RejectAsAbsent {
                mark_not_available: true,
            } => Some(Format::NotAvailable),
            Self::Confirmed {
                format,
                upgrade: true,
            } => Some(format),
            _ => None,
        }
    }

    /// Diagnostic to record for `item`, for the ambiguous verdicts.
    pub fn diagnostic(&self, item: &str) -> Option<Diagnostic> {
        match self {
            Self::AmbiguousTitle { found, distance } => Some(Diagnostic::AmbiguousTitle {
                item: item.to_string(),
                found: found.clone(),
                distance: distance.as_finite(),
            }),
            Self::AmbiguousAuthor { found, distance } => Some(Diagnostic::AmbiguousAuthor {
                item: item.to_string(),
                found: found.clone(),
                distance: distance.as_finite(),
            }),
            _ => None,
        }
    }
}

/// A low-confidence result worth a human look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    AmbiguousTitle {
        item: String,
        found: Option<String>,
        distance: Option<usize>,
    },
    AmbiguousAuthor {
        item: String,
        found: Option<String>,
        distance: Option<usize>,
    },
    NoCandidates {
        item: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn dist(d: &Option<usize>) -> String {
            d.map_or_else(|| "inf".to_string(), |d| d.to_string())
        }
        match self {
            Self::AmbiguousTitle {
                item,
                found,
                distance,
            } => write!(
                f,
                "best title found, [{}], too far away ({}) on [{}]",
                found.as_deref().unwrap_or(""),
                dist(distance),
                item
            ),
            Self::AmbiguousAuthor {
                item,
                found,
                distance,
            } => write!(
                f,
                "best author found, [{}], too far away ({}) on [{}]",
                found.as_deref().unwrap_or(""),
                dist(distance),
                item
            ),
            Self::NoCandidates { item } => write!(f, "no catalog results for [{}]", item),
        }
    }
}

/// A format change applied to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: Format,
    pub to: Format,
}

/// Decide what `best` means for its item. Checks run in a fixed order:
/// absent, ambiguous title, ambiguous author, then the item's upgrade test.
pub fn classify<I: MediaItem + ?Sized>(best: &BestMatch<'_, I>, thresholds: &Thresholds) -> Verdict {
    let max = thresholds.max_distance;
    let min = thresholds.min_distance;

    if best.title_distance.exceeds(max) || best.author_distance.exceeds(max) {
        return Verdict::RejectAsAbsent {
            mark_not_available: best.desired.is_new(),
        };
    }
    if best.title_distance.exceeds(min) {
        return Verdict::AmbiguousTitle {
            found: best.title.clone(),
            distance: best.title_distance,
        };
    }
    if best.author_distance.exceeds(min) {
        return Verdict::AmbiguousAuthor {
            found: best.author.clone(),
            distance: best.author_distance,
        };
    }
    Verdict::Confirmed {
        format: best.format,
        upgrade: best.desired.would_be_upgrade(best.format),
    }
}

/// Apply `verdict` to `item`. Returns the transition when the item changed.
pub fn apply<I: MediaItem + ?Sized>(item: &mut I, verdict: &Verdict, year: i32) -> Option<Transition> {
    let to = verdict.target_format()?;
    let from = item.format();
    item.upgrade(to, year);
    Some(Transition { from, to })
}

#[cfg(test)]
#[path = "tests/decision_tests.rs"]
mod tests;
