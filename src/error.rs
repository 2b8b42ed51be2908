//! Error types for parsing cards and hands.

use thiserror::Error;

/// Errors that can occur while parsing a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Token is not exactly two characters long.
    #[error("card token must be two characters, got {0}")]
    InvalidLength(usize),
    /// Value symbol is not one of `23456789TJQKA`.
    #[error("unknown card value `{0}`")]
    UnknownValue(char),
    /// Suit symbol is not one of `CDHS`.
    #[error("unknown card suit `{0}`")]
    UnknownSuit(char),
}

/// Errors that can occur while parsing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Hand text does not contain exactly five card tokens.
    #[error("hand must have 5 cards, got {0}")]
    MalformedHand(usize),
    /// A card token could not be parsed.
    #[error("invalid card at position {index}")]
    InvalidToken {
        /// Position of the token in the hand text.
        index: usize,
        /// Why the token was rejected.
        #[source]
        source: CardError,
    },
}
