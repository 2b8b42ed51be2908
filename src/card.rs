//! Card types and token parsing.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in symbol order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Parses a suit symbol (`C`, `D`, `H` or `S`).
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'C' => Some(Self::Clubs),
            'D' => Some(Self::Diamonds),
            'H' => Some(Self::Hearts),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the single character symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }

    /// Returns the lowercase English name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        }
    }
}

/// Card value, from two up to ace.
///
/// The discriminant is the card rank, so values compare the same way
/// their ranks do. Aces are always high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Value {
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Ace.
    Ace = 14,
}

impl Value {
    /// All values in ascending rank order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Parses a value symbol (`2`-`9`, `T`, `J`, `Q`, `K` or `A`).
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }

    /// Returns the single character symbol of the value.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// Returns the rank of the value (2 for a two up to 14 for an ace).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase English name of the value.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::Five => "five",
            Self::Six => "six",
            Self::Seven => "seven",
            Self::Eight => "eight",
            Self::Nine => "nine",
            Self::Ten => "ten",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
            Self::Ace => "ace",
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The value of the card.
    pub value: Value,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Parses a two character token such as `"TH"` (ten of hearts).
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::{Card, Suit, Value};
    ///
    /// let card = Card::parse("QD").unwrap();
    /// assert_eq!(card, Card::new(Value::Queen, Suit::Diamonds));
    /// assert_eq!(card.rank(), 12);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not exactly two characters long or
    /// if either symbol is not recognized.
    pub fn parse(token: &str) -> Result<Self, CardError> {
        let mut symbols = token.chars();
        let (Some(value), Some(suit), None) = (symbols.next(), symbols.next(), symbols.next())
        else {
            return Err(CardError::InvalidLength(token.chars().count()));
        };

        let value = Value::from_symbol(value).ok_or(CardError::UnknownValue(value))?;
        let suit = Suit::from_symbol(suit).ok_or(CardError::UnknownSuit(suit))?;
        Ok(Self::new(value, suit))
    }

    /// Returns the rank of the card, based on its value only.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.value.rank()
    }

    /// Returns the English name of the card value.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.value.name()
    }

    /// Returns the English name of the card suit.
    #[must_use]
    pub const fn suit_name(&self) -> &'static str {
        self.suit.name()
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.symbol(), self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
