//! Reconciliation of a want list against a catalog.
//!
//! A pass loads items from a [`CatalogStore`], asks a
//! [`CandidateSource`](shelfcheck_match::CandidateSource) for each one,
//! classifies the best match and writes the upgraded list back.

pub mod decision;
pub mod error;
pub mod pass;
pub mod progress;
pub mod report;
pub mod reservoir;
pub mod settings;
pub mod store;

pub use decision::{Diagnostic, Thresholds, Transition, Verdict, apply, classify};
pub use error::{PassError, SettingsError, StoreError};
pub use pass::{PassOptions, run_pass, run_pass_with_rng};
pub use progress::{LogProgress, PassProgress, SilentProgress};
pub use report::{Highlight, JsonReporter, MatchSummary, PassReport, Reporter, Upgrade, UpgradeKind};
pub use reservoir::{highlights, pick_k};
pub use settings::{Settings, settings_path};
pub use store::{CatalogStore, TdfStore, WatchlistStore};
