//! Ranking and comparing five card poker hands.
//!
//! ```
//! use showdown_core::Hand;
//!
//! let pair: Hand = "3 of hearts, 4 of diamonds, 5 of spades, K of spades, 5 of clubs"
//!     .parse()
//!     .unwrap();
//! let flush: Hand = "2h 7h 9h Jh Kh".parse().unwrap();
//! assert_eq!(pair.description(), "pair");
//! assert!(flush.beats(&pair));
//! ```
pub mod choose;
pub mod class;
pub mod deck;
pub mod hand;
pub mod profile;

pub use class::{classify, HandClass, RANKINGS};
pub use deck::{Card, CardError, Rank, Suit};
pub use hand::{compare, Hand, HandError, WinState};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ShowdownError {
    Card(CardError),
    Hand(HandError),
}

impl From<CardError> for ShowdownError {
    fn from(e: CardError) -> Self {
        ShowdownError::Card(e)
    }
}

impl From<HandError> for ShowdownError {
    fn from(e: HandError) -> Self {
        ShowdownError::Hand(e)
    }
}
