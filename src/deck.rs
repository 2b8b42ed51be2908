//! Seeded deck for dealing random hands.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit, Value};
use crate::hand::{HAND_SIZE, Hand};

/// A shuffled 52 card deck.
///
/// The deck is driven by a seeded RNG, so the same seed always deals the
/// same cards.
pub struct Deck {
    /// Cards left in the deck, the next card to draw is last.
    cards: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::Deck;
    ///
    /// let mut deck = Deck::new(42);
    /// let hand = deck.deal("Alice").unwrap();
    /// assert_eq!(hand.cards().len(), 5);
    /// assert_eq!(deck.remaining(), 47);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::create_cards(&mut rng);
        Self { cards, rng }
    }

    /// Creates and shuffles a full deck.
    fn create_cards(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for value in Value::ALL {
                cards.push(Card::new(value, suit));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Puts all cards back and shuffles the deck.
    pub fn reshuffle(&mut self) {
        self.cards = Self::create_cards(&mut self.rng);
        log::debug!("deck reshuffled");
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Draws a card from the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals a five card hand to `owner`.
    ///
    /// Returns `None`, leaving the deck untouched, if fewer than five cards
    /// are left.
    pub fn deal(&mut self, owner: impl Into<String>) -> Option<Hand> {
        let start = self.cards.len().checked_sub(HAND_SIZE)?;
        let cards: [Card; HAND_SIZE] = self.cards.split_off(start).try_into().ok()?;
        Some(Hand::from_cards(owner, cards))
    }
}
