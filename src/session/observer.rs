//! Observers notified at the session boundary.
//!
//! Side effects that react to the end of a game (win counters, effects,
//! persistence) hang off these hooks instead of the transition logic.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::core::Participant;
use crate::engine::GameState;

/// Receives session events.
pub trait GameObserver: Send {
    /// Called once when a game reaches `Over`.
    fn on_game_over(&mut self, winner: Participant, state: &GameState);
}

/// Win counters shared between the session and the presentation layer.
///
/// Clones share the same counters, so one clone can be registered as an
/// observer while another is kept for display.
#[derive(Clone, Debug, Default)]
pub struct Scoreboard {
    player_wins: Arc<AtomicU32>,
    ai_wins: Arc<AtomicU32>,
}

impl Scoreboard {
    /// Start at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from previously stored totals.
    #[must_use]
    pub fn with_totals(player_wins: u32, ai_wins: u32) -> Self {
        Self {
            player_wins: Arc::new(AtomicU32::new(player_wins)),
            ai_wins: Arc::new(AtomicU32::new(ai_wins)),
        }
    }

    #[must_use]
    pub fn player_wins(&self) -> u32 {
        self.player_wins.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn ai_wins(&self) -> u32 {
        self.ai_wins.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.player_wins() + self.ai_wins()
    }

    /// Record one win.
    pub fn record(&self, winner: Participant) {
        let counter = match winner {
            Participant::Player => &self.player_wins,
            Participant::Ai => &self.ai_wins,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl GameObserver for Scoreboard {
    fn on_game_over(&mut self, winner: Participant, _state: &GameState) {
        self.record(winner);
    }
}
