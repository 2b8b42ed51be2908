//! A five-card poker hand evaluator with optional `no_std` support.
//!
//! The crate parses hands such as `"2H 3H 4H 5H 7C"`, ranks them into one
//! of the standard poker categories with a human readable reason, and
//! compares two hands to find the winner.
//!
//! # Example
//!
//! ```
//! use pkrs::Hand;
//!
//! let black = Hand::parse("Black", "2H 3H 4H 4D AS").unwrap();
//! assert_eq!(black.rank(), 18);
//! assert_eq!(black.reason(), "pair: four");
//!
//! let white = Hand::parse("White", "8H 6H 7H 9H 5H").unwrap();
//! assert_eq!(
//!     black.compare(&white).to_string(),
//!     "White wins with straight flush: hearts, from five to nine"
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod ranking;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, Value};
pub use deck::Deck;
pub use error::{CardError, HandError};
pub use hand::{HAND_SIZE, Hand};
pub use ranking::{Category, Ranking, evaluate};
pub use result::Showdown;
