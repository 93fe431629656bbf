//! Participant identification.
//!
//! The game is strictly human vs. computer, so a participant is one of
//! two fixed seats rather than an index.

use serde::{Deserialize, Serialize};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Participant {
    /// The human player.
    Player,
    /// The computer opponent.
    Ai,
}

impl Participant {
    /// Both seats, human first.
    pub const ALL: [Participant; 2] = [Participant::Player, Participant::Ai];

    /// The other seat.
    ///
    /// ```
    /// use crazy_aces::core::Participant;
    ///
    /// assert_eq!(Participant::Player.opponent(), Participant::Ai);
    /// assert_eq!(Participant::Ai.opponent(), Participant::Player);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Participant::Player => Participant::Ai,
            Participant::Ai => Participant::Player,
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Participant::Player => write!(f, "Player"),
            Participant::Ai => write!(f, "AI"),
        }
    }
}
