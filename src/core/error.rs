//! Error types.
//!
//! Illegal intents are not errors: the engine ignores them and returns the
//! unchanged snapshot. These types cover broken invariants, which are
//! programming errors the presentation layer should answer with a restart.

use thiserror::Error;

use crate::cards::CardId;

/// A game-state invariant was violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("deck exhausted while dealing")]
    DeckExhausted,
    #[error("no non-ace card available to seed the discard pile")]
    NoSeedCard,
    #[error("card count mismatch: expected {expected}, found {found}")]
    CardCount { expected: usize, found: usize },
    #[error("card {0} appears in more than one place")]
    DuplicateCard(CardId),
    #[error("suit choice pending but top card is not an ace")]
    SuitChoiceWithoutAce,
    #[error("game status does not match hand sizes")]
    OverWithCards,
}

/// Failure to encode or decode a saved snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),
    #[error("snapshot is inconsistent: {0}")]
    Invalid(#[from] InvariantError),
}
