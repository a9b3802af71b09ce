use serde::{Deserialize, Serialize};

/// Availability states for a wanted item, ordered by desirability.
///
/// Two formats may share a rank (`Audio` and `Video`); comparisons between
/// formats always go through [`Format::rank`], never the variant order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// Never checked against a catalog.
    Unknown,
    /// Checked, and the catalog does not carry it.
    NotAvailable,
    /// Audiobook.
    Audio,
    /// Streaming video.
    Video,
    /// Printed book.
    Physical,
    /// Older e-book format (EPUB download).
    ElectronicLegacy,
    /// E-book.
    EBook,
    /// Already read or watched. Terminal.
    AlreadyConsumed,
}

/// All formats in lattice order.
const ALL_FORMATS: &[Format] = &[
    Format::Unknown,
    Format::NotAvailable,
    Format::Audio,
    Format::Video,
    Format::Physical,
    Format::ElectronicLegacy,
    Format::EBook,
    Format::AlreadyConsumed,
];

/// Formats a want-list status can decode to, tried in this order so
/// `EBEPUB` is seen before the shorter `EB`. `Video` is only ever assigned
/// by a streaming listing, never read from a book list.
const FILE_FORMATS: &[Format] = &[
    Format::Unknown,
    Format::NotAvailable,
    Format::Audio,
    Format::Physical,
    Format::ElectronicLegacy,
    Format::EBook,
    Format::AlreadyConsumed,
];

impl Format {
    /// Desirability rank; higher is better.
    pub fn rank(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::NotAvailable => 1,
            Self::Audio | Self::Video => 2,
            Self::Physical => 3,
            Self::ElectronicLegacy => 4,
            Self::EBook => 5,
            Self::AlreadyConsumed => 6,
        }
    }

    /// Label the library catalog uses for this format, if it decodes one at all.
    ///
    /// Catalog video badges (DVDs and the like) are not a way to read a book,
    /// so `Video` has no label here.
    pub fn source_label(self) -> Option<&'static str> {
        match self {
            Self::Audio => Some("Audiobook"),
            Self::Physical => Some("Book"),
            Self::EBook => Some("eBook"),
            Self::Unknown
            | Self::NotAvailable
            | Self::Video
            | Self::ElectronicLegacy
            | Self::AlreadyConsumed => None,
        }
    }

    /// Prefix tokens that identify this format in the want-list file.
    ///
    /// The first token is the canonical one written back on upgrade.
    pub fn file_tokens(self) -> &'static [&'static str] {
        match self {
            Self::Unknown => &["??"],
            Self::NotAvailable => &["NO", "XX"],
            Self::Audio => &["Audio"],
            Self::Video => &["Video"],
            Self::Physical => &["H", "Book"],
            Self::ElectronicLegacy => &["EBEPUB"],
            Self::EBook => &["eBook", "EB"],
            Self::AlreadyConsumed => &["READ"],
        }
    }

    /// Canonical file tag for this format (first file token).
    pub fn file_tag(self) -> &'static str {
        self.file_tokens()[0]
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::NotAvailable => "not available",
            Self::Audio => "audiobook",
            Self::Video => "video",
            Self::Physical => "book",
            Self::ElectronicLegacy => "EPUB",
            Self::EBook => "eBook",
            Self::AlreadyConsumed => "already read",
        }
    }

    /// True if `self` ranks strictly above `other`.
    pub fn outranks(self, other: Format) -> bool {
        self.rank() > other.rank()
    }

    /// Decode a format indicator as reported by a catalog source.
    ///
    /// Case-insensitive exact match against the source labels; anything
    /// else is `Unknown`.
    pub fn from_source(text: &str) -> Format {
        let text = text.to_lowercase();
        ALL_FORMATS
            .iter()
            .copied()
            .find(|format| {
                format
                    .source_label()
                    .is_some_and(|label| label.to_lowercase() == text)
            })
            .unwrap_or(Format::Unknown)
    }

    /// Decode a status from the want-list file.
    ///
    /// Statuses may carry a year suffix (`eBook24`), so trailing digits are
    /// dropped before prefix-matching against each format's file tokens.
    pub fn from_file(text: &str) -> Format {
        let lower = text.to_lowercase();
        let stem = strip_year_suffix(&lower);
        for &format in FILE_FORMATS {
            for token in format.file_tokens() {
                if !token.is_empty() && stem.starts_with(&token.to_lowercase()) {
                    return format;
                }
            }
        }
        Format::Unknown
    }

    /// All formats in lattice order.
    pub fn all() -> &'static [Format] {
        ALL_FORMATS
    }
}

/// Drop a trailing run of ASCII digits, always keeping the first character.
fn strip_year_suffix(s: &str) -> &str {
    let mut end = s.len();
    for (idx, c) in s.char_indices().rev() {
        if idx == 0 || !c.is_ascii_digit() {
            break;
        }
        end = idx;
    }
    &s[..end]
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
