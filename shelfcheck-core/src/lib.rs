//! Core domain types for shelfcheck: the format lattice and wanted media items.
//!
//! This crate has no I/O. Matching lives in `shelfcheck-match`, catalog
//! fetching in `shelfcheck-source`, and the reconciliation pass in
//! `shelfcheck-lib`.

pub mod format;
pub mod item;

pub use format::Format;
pub use item::{Book, MatchProfile, MediaItem, Movie, STREAMING_ATTRIBUTION};
