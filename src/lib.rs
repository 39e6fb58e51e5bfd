//! A single-player console blackjack game.
//!
//! The crate provides a [`Game`] type that runs one round at a time against
//! the dealer: the opening deal, the player's hits, the dealer's fixed
//! draw-to-17 policy and the showdown. The engine performs no I/O; the
//! [`Console`] front end (with the `std` feature) turns it into the
//! interactive text game.
//!
//! # Example
//!
//! ```
//! use blackjack::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new("Ann", GameOptions::default(), 42);
//! game.deal().unwrap();
//! if game.state() == GameState::PlayerTurn {
//!     game.stand().unwrap();
//! }
//! if game.state() == GameState::DealerTurn {
//!     game.dealer_play().unwrap();
//! }
//! let result = game.showdown().unwrap();
//! let _ = result.winner;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, JACK, KING, QUEEN, Suit};
#[cfg(feature = "std")]
pub use console::Console;
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::ConsoleError;
pub use error::{ActionError, DealError, EmptyDeckError, ShowdownError};
pub use game::{Game, GameState};
pub use hand::{Hand, HandStatus, TWENTY_ONE, hand_value};
pub use options::{DeckPolicy, GameOptions};
pub use participant::{DEALER_NAME, Dealer, Player};
pub use result::{Decision, RoundResult, Winner};
