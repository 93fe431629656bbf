//! # crazy-aces
//!
//! Game engine for a two-player (human vs. computer) Crazy Eights variant
//! where Aces are wild.
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: every intent maps one `GameState` to the
//!    next. Zones are `im` persistent vectors, so snapshots clone in O(1).
//!
//! 2. **Silent rejection**: an illegal intent returns the unchanged
//!    snapshot. Only a broken invariant surfaces as an error.
//!
//! 3. **One rule set for both seats**: the computer goes through the same
//!    transitions as the human, including the Ace suit declaration.
//!
//! ## Modules
//!
//! - `core`: participants, RNG, configuration, errors
//! - `cards`: card domain, deck creation, shuffling
//! - `rules`: move legality
//! - `engine`: snapshot, intents, transition function
//! - `ai`: computer opponent policy
//! - `session`: presentation-facing driver, AI turn scheduling, observers

pub mod core;
pub mod cards;
pub mod rules;
pub mod engine;
pub mod ai;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, GameRng, GameRngState, InvariantError, Participant, SnapshotError,
    DECK_SIZE, HAND_SIZE,
};

pub use crate::cards::{create_deck, create_deck_with, shuffle, shuffle_with, Card, CardId, Deck, Rank, Suit};

pub use crate::rules::{has_valid_move, is_valid_move, valid_cards};

pub use crate::engine::{Engine, GameState, Intent, Status};

pub use crate::ai::{choose_move, decide_turn, AiDecision, AiMove, MatchFirstPolicy, OpponentPolicy};

pub use crate::session::{AiTurnTicket, GameObserver, GameSession, Scoreboard};
