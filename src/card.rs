//! Card types and deck constants.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// Every suit, in the order a fresh deck is built.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];

    /// Returns the full name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank of an Ace.
pub const ACE: u8 = 1;
/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
///
/// Cards are plain values: copying one never affects another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but count as zero when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Returns the face label: `2` through `10`, `Jack`, `Queen`, `King` or `Ace`.
    #[must_use]
    pub const fn face(&self) -> Face {
        Face(self.rank)
    }
}

/// Face label of a card, as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face(u8);

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ACE => f.write_str("Ace"),
            JACK => f.write_str("Jack"),
            QUEEN => f.write_str("Queen"),
            KING => f.write_str("King"),
            rank => write!(f, "{rank}"),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.face(), self.suit)
    }
}
