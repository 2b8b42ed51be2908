//! Five-card hands and showdowns between them.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::str::FromStr;

use crate::card::{Card, Suit, Value};
use crate::error::HandError;
use crate::ranking::{Category, Ranking, evaluate};
use crate::result::Showdown;
use crate::sync::Once;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// A player's hand of five cards.
///
/// Cards are kept sorted by ascending rank. The ranking is computed the
/// first time it is needed and reused afterwards.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Name of the player holding the hand.
    owner: String,
    /// Cards sorted by rank, lowest first.
    cards: [Card; HAND_SIZE],
    /// Ranking, computed on first access.
    ranking: Once<Ranking>,
}

impl Hand {
    /// Parses a hand from five space separated card tokens.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::Hand;
    ///
    /// let hand = Hand::parse("Black", "9S QH 9D QC 9C").unwrap();
    /// assert_eq!(hand.rank(), 106);
    /// assert_eq!(hand.reason(), "full house: nine over queen");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`HandError::MalformedHand`] if the text does not hold exactly
    /// five tokens, or [`HandError::InvalidToken`] for the first token that
    /// is not a valid card.
    pub fn parse(owner: impl Into<String>, text: &str) -> Result<Self, HandError> {
        let tokens: [&str; HAND_SIZE] = text
            .split_ascii_whitespace()
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|tokens: Vec<_>| HandError::MalformedHand(tokens.len()))?;

        let mut cards = [Card::new(Value::Two, Suit::Clubs); HAND_SIZE];
        for (index, (slot, token)) in cards.iter_mut().zip(tokens).enumerate() {
            *slot = Card::parse(token).map_err(|source| HandError::InvalidToken { index, source })?;
        }

        Ok(Self::from_cards(owner, cards))
    }

    /// Creates a hand from five cards, sorting them by rank.
    #[must_use]
    pub fn from_cards(owner: impl Into<String>, mut cards: [Card; HAND_SIZE]) -> Self {
        cards.sort_by_key(Card::rank);

        Self {
            owner: owner.into(),
            cards,
            ranking: Once::new(),
        }
    }

    /// Returns the name of the player holding the hand.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the cards sorted by ascending rank.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the ranking of the hand.
    #[must_use]
    pub fn ranking(&self) -> Ranking {
        *self.ranking.get_or_init(|| evaluate(self.cards))
    }

    /// Returns the numeric rank of the hand.
    ///
    /// Ranks are comparable across categories: a stronger category always
    /// yields a higher rank.
    #[must_use]
    pub fn rank(&self) -> u8 {
        self.ranking().rank()
    }

    /// Returns the human readable reason for the rank, e.g. `"pair: four"`.
    #[must_use]
    pub fn reason(&self) -> String {
        self.ranking().to_string()
    }

    /// Returns the category of the hand.
    #[must_use]
    pub fn category(&self) -> Category {
        self.ranking().category()
    }

    /// Compares this hand against another one.
    ///
    /// The hand with the higher rank wins; equal ranks are a tie.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::Hand;
    ///
    /// let bob = Hand::parse("Bob", "2C 3H 4S 8C AH").unwrap();
    /// let john = Hand::parse("John", "2H 3D 5S 9C KD").unwrap();
    /// assert_eq!(bob.compare(&john).to_string(), "Bob wins with high card: ace");
    /// ```
    #[must_use]
    pub fn compare<'a>(&'a self, other: &'a Self) -> Showdown<'a> {
        let ours = self.ranking();
        let theirs = other.ranking();
        log::debug!(
            "{} has rank {}, {} has rank {}",
            self.owner,
            ours.rank(),
            other.owner,
            theirs.rank()
        );

        match ours.rank().cmp(&theirs.rank()) {
            Ordering::Greater => Showdown::Win {
                owner: &self.owner,
                ranking: ours,
            },
            Ordering::Less => Showdown::Win {
                owner: &other.owner,
                ranking: theirs,
            },
            Ordering::Equal => Showdown::Tie,
        }
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parses a hand with an empty owner name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(String::new(), s)
    }
}
