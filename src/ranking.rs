//! Hand categories, rank encoding and the category cascade.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Suit, Value};
use crate::hand::HAND_SIZE;

/// Poker hand category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// No other category matches.
    HighCard,
    /// Two cards of one value.
    Pair,
    /// Two cards of one value and two cards of another.
    TwoPairs,
    /// Three cards of one value.
    ThreeOfAKind,
    /// Five cards of consecutive value.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind together with a pair.
    FullHouse,
    /// Four cards of one value.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
}

impl Category {
    /// All categories from weakest to strongest.
    pub const ALL: [Self; 9] = [
        Self::HighCard,
        Self::Pair,
        Self::TwoPairs,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
    ];

    /// Returns the offset added to the tiebreak of hands in this category.
    ///
    /// Each bonus is larger than the highest rank any weaker category can
    /// reach, so ranks of different categories never overlap.
    #[must_use]
    pub const fn bonus(self) -> u8 {
        match self {
            Self::HighCard => 0,
            Self::Pair => 14,
            Self::TwoPairs => 28,
            Self::ThreeOfAKind => 55,
            Self::Straight => 69,
            Self::Flush => 83,
            Self::FullHouse => 97,
            Self::FourOfAKind => 111,
            Self::StraightFlush => 125,
        }
    }
}

/// The category a hand falls into, together with the cards that decided it.
///
/// The [`Display`](fmt::Display) output is the human readable reason for
/// the ranking, e.g. `"full house: nine over queen"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ranking {
    /// Highest card of the hand.
    HighCard(Value),
    /// Value of the pair.
    Pair(Value),
    /// Values of both pairs, in the order they were found.
    TwoPairs {
        /// The lower pair, found first.
        first: Value,
        /// The higher pair, found second.
        second: Value,
    },
    /// Value of the three cards.
    ThreeOfAKind(Value),
    /// Lowest and highest value of the run.
    Straight {
        /// Lowest card of the run.
        low: Value,
        /// Highest card of the run.
        high: Value,
    },
    /// Suit and highest value of the flush.
    Flush {
        /// The shared suit.
        suit: Suit,
        /// Highest card of the flush.
        high: Value,
    },
    /// Values of the three cards and of the pair.
    FullHouse {
        /// Value appearing three times.
        triple: Value,
        /// Value appearing twice.
        pair: Value,
    },
    /// Value of the four cards.
    FourOfAKind(Value),
    /// Suit and bounds of the run.
    StraightFlush {
        /// The shared suit.
        suit: Suit,
        /// Lowest card of the run.
        low: Value,
        /// Highest card of the run.
        high: Value,
    },
}

impl Ranking {
    /// Returns the category of this ranking.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::HighCard(_) => Category::HighCard,
            Self::Pair(_) => Category::Pair,
            Self::TwoPairs { .. } => Category::TwoPairs,
            Self::ThreeOfAKind(_) => Category::ThreeOfAKind,
            Self::Straight { .. } => Category::Straight,
            Self::Flush { .. } => Category::Flush,
            Self::FullHouse { .. } => Category::FullHouse,
            Self::FourOfAKind(_) => Category::FourOfAKind,
            Self::StraightFlush { .. } => Category::StraightFlush,
        }
    }

    /// Returns the part of the rank that orders hands within a category.
    #[must_use]
    pub const fn tiebreak(&self) -> u8 {
        match *self {
            Self::HighCard(value)
            | Self::Pair(value)
            | Self::ThreeOfAKind(value)
            | Self::FourOfAKind(value)
            | Self::FullHouse { triple: value, .. }
            | Self::Straight { high: value, .. }
            | Self::Flush { high: value, .. }
            | Self::StraightFlush { high: value, .. } => value.rank(),
            Self::TwoPairs { first, second } => first.rank() + second.rank(),
        }
    }

    /// Returns the numeric rank of the hand: category bonus plus tiebreak.
    ///
    /// A hand in a stronger category always has a higher rank.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.category().bonus() + self.tiebreak()
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighCard(value) => write!(f, "high card: {}", value.name()),
            Self::Pair(value) => write!(f, "pair: {}", value.name()),
            Self::TwoPairs { first, second } => {
                write!(f, "two pairs: {} and {}", second.name(), first.name())
            }
            Self::ThreeOfAKind(value) => write!(f, "three of a kind: {}", value.name()),
            Self::Straight { low, high } => {
                write!(f, "straight: from {} to {}", low.name(), high.name())
            }
            Self::Flush { suit, .. } => write!(f, "flush: {}", suit.name()),
            Self::FullHouse { triple, pair } => {
                write!(f, "full house: {} over {}", triple.name(), pair.name())
            }
            Self::FourOfAKind(value) => write!(f, "four of a kind: {}", value.name()),
            Self::StraightFlush { suit, low, high } => write!(
                f,
                "straight flush: {}, from {} to {}",
                suit.name(),
                low.name(),
                high.name()
            ),
        }
    }
}

/// Occurrences of each value in a hand.
struct Tally {
    counts: HashMap<Value, u8>,
    /// Distinct values in ascending order.
    values: Vec<Value>,
}

impl Tally {
    fn new(cards: &[Card; HAND_SIZE]) -> Self {
        let mut counts = HashMap::with_capacity(HAND_SIZE);
        let mut values = Vec::with_capacity(HAND_SIZE);

        for card in cards {
            let count = counts.entry(card.value).or_insert(0);
            if *count == 0 {
                values.push(card.value);
            }
            *count += 1;
        }

        values.sort_unstable();
        Self { counts, values }
    }

    /// Values that appear exactly `count` times, lowest first.
    fn with_count(&self, count: u8) -> impl Iterator<Item = Value> + '_ {
        self.values
            .iter()
            .copied()
            .filter(move |value| self.counts.get(value) == Some(&count))
    }

    fn single(&self, count: u8) -> Option<Value> {
        let mut matches = self.with_count(count);
        match (matches.next(), matches.next()) {
            (Some(value), None) => Some(value),
            _ => None,
        }
    }
}

type Detector = fn(&[Card; HAND_SIZE], &Tally) -> Option<Ranking>;

/// Detectors from the strongest category down, the first match wins.
const CASCADE: [Detector; 8] = [
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pairs,
    pair,
];

/// Ranks five cards, in any order.
///
/// Cards are sorted by rank first. Category detectors then run from
/// straight flush down to pair and the first match decides the ranking. A
/// hand matching none of them is ranked by its highest card.
///
/// # Example
///
/// ```
/// use pkrs::{Card, Ranking, Suit, Value, evaluate};
///
/// let cards = ["9H", "5H", "7H", "6H", "8H"].map(|token| Card::parse(token).unwrap());
/// assert_eq!(
///     evaluate(cards),
///     Ranking::StraightFlush {
///         suit: Suit::Hearts,
///         low: Value::Five,
///         high: Value::Nine,
///     }
/// );
/// ```
#[must_use]
pub fn evaluate(mut cards: [Card; HAND_SIZE]) -> Ranking {
    cards.sort_by_key(Card::rank);
    let cards = &cards;
    let tally = Tally::new(cards);

    let ranking = CASCADE
        .iter()
        .find_map(|detect| detect(cards, &tally))
        .unwrap_or(Ranking::HighCard(cards[HAND_SIZE - 1].value));

    log::trace!(
        "{cards:?} ranked as {:?} with rank {}",
        ranking.category(),
        ranking.rank()
    );
    ranking
}

fn is_run(cards: &[Card; HAND_SIZE]) -> bool {
    cards.windows(2).all(|w| w[1].rank() == w[0].rank() + 1)
}

fn is_suited(cards: &[Card; HAND_SIZE]) -> bool {
    cards.windows(2).all(|w| w[0].suit == w[1].suit)
}

fn straight_flush(cards: &[Card; HAND_SIZE], _: &Tally) -> Option<Ranking> {
    (is_run(cards) && is_suited(cards)).then(|| Ranking::StraightFlush {
        suit: cards[0].suit,
        low: cards[0].value,
        high: cards[HAND_SIZE - 1].value,
    })
}

fn four_of_a_kind(_: &[Card; HAND_SIZE], tally: &Tally) -> Option<Ranking> {
    // Five equal values only come from duplicate cards and count as four.
    tally
        .values
        .iter()
        .copied()
        .find(|value| tally.counts.get(value).is_some_and(|&count| count >= 4))
        .map(Ranking::FourOfAKind)
}

fn full_house(_: &[Card; HAND_SIZE], tally: &Tally) -> Option<Ranking> {
    let triple = tally.single(3)?;
    let pair = tally.single(2)?;
    Some(Ranking::FullHouse { triple, pair })
}

fn flush(cards: &[Card; HAND_SIZE], _: &Tally) -> Option<Ranking> {
    is_suited(cards).then(|| Ranking::Flush {
        suit: cards[0].suit,
        high: cards[HAND_SIZE - 1].value,
    })
}

fn straight(cards: &[Card; HAND_SIZE], _: &Tally) -> Option<Ranking> {
    is_run(cards).then(|| Ranking::Straight {
        low: cards[0].value,
        high: cards[HAND_SIZE - 1].value,
    })
}

fn three_of_a_kind(_: &[Card; HAND_SIZE], tally: &Tally) -> Option<Ranking> {
    tally.with_count(3).next().map(Ranking::ThreeOfAKind)
}

fn two_pairs(_: &[Card; HAND_SIZE], tally: &Tally) -> Option<Ranking> {
    let mut pairs = tally.with_count(2);
    match (pairs.next(), pairs.next(), pairs.next()) {
        (Some(first), Some(second), None) => Some(Ranking::TwoPairs { first, second }),
        _ => None,
    }
}

fn pair(_: &[Card; HAND_SIZE], tally: &Tally) -> Option<Ranking> {
    tally.with_count(2).next().map(Ranking::Pair)
}
