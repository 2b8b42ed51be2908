//! Showdown result between two hands.

use core::fmt;

use crate::ranking::Ranking;

/// Outcome of comparing two hands.
///
/// Displays as `"{owner} wins with {reason}"` or `"Tie"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Showdown<'a> {
    /// One hand has a strictly higher rank.
    Win {
        /// Owner of the winning hand.
        owner: &'a str,
        /// Ranking of the winning hand.
        ranking: Ranking,
    },
    /// Both hands have the same rank.
    Tie,
}

impl<'a> Showdown<'a> {
    /// Returns the owner of the winning hand, or `None` on a tie.
    #[must_use]
    pub const fn winner(&self) -> Option<&'a str> {
        match *self {
            Self::Win { owner, .. } => Some(owner),
            Self::Tie => None,
        }
    }

    /// Returns whether the hands tied.
    #[must_use]
    pub const fn is_tie(&self) -> bool {
        matches!(self, Self::Tie)
    }
}

impl fmt::Display for Showdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win { owner, ranking } => write!(f, "{owner} wins with {ranking}"),
            Self::Tie => f.write_str("Tie"),
        }
    }
}
