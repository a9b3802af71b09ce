use std::fmt;

/// Levenshtein edit distance between two strings, counted in chars.
///
/// Inserts, deletes and substitutions each cost 1. Case and whitespace are
/// compared as given.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Keep the row as short as the shorter string.
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(lc != sc);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// A match distance, or `Infinite` when nothing was compared on that axis.
///
/// `Finite` values order before `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(usize),
    Infinite,
}

impl Distance {
    /// True if this distance is strictly greater than `bound`.
    pub fn exceeds(self, bound: usize) -> bool {
        match self {
            Self::Finite(d) => d > bound,
            Self::Infinite => true,
        }
    }

    pub fn as_finite(self) -> Option<usize> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Infinite => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{}", d),
            Self::Infinite => write!(f, "inf"),
        }
    }
}
