//! Card system: suits, ranks, cards, and the shuffled deck.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: the 4 x 13 card domain
//! - `CardId`: identity assigned at deck creation
//! - `Card`: immutable card value (suit, rank, derived point value)
//! - `Deck`: ordered cards, top = end

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::{create_deck, create_deck_with, ordered_deck, shuffle, shuffle_with, Deck};
