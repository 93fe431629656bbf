//! Core engine types: participants, RNG, configuration, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::Participant;
pub use rng::{GameRng, GameRngState};
pub use config::{EngineConfig, DECK_SIZE, DEFAULT_AI_THINK_DELAY, HAND_SIZE};
pub use error::{InvariantError, SnapshotError};
