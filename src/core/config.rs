//! Engine configuration.
//!
//! Only presentation-facing knobs live here. Rule constants (hand size,
//! deck size) are fixed because the game has no rule variants.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cards dealt to each hand at the start of a game.
pub const HAND_SIZE: usize = 8;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Default pause before the computer takes its turn.
pub const DEFAULT_AI_THINK_DELAY: Duration = Duration::from_millis(1000);

/// Configuration for an [`Engine`](crate::engine::Engine) or
/// [`GameSession`](crate::session::GameSession).
///
/// ```
/// use std::time::Duration;
/// use crazy_aces::core::EngineConfig;
///
/// let config = EngineConfig::new()
///     .with_seed(42)
///     .with_ai_think_delay(Duration::from_millis(250));
///
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// RNG seed. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// How long the presentation layer waits before running the AI turn.
    #[serde(default = "default_ai_think_delay")]
    pub ai_think_delay: Duration,
}

fn default_ai_think_delay() -> Duration {
    DEFAULT_AI_THINK_DELAY
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ai_think_delay: DEFAULT_AI_THINK_DELAY,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed for reproducible deals and AI choices.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the computer's thinking pause.
    #[must_use]
    pub fn with_ai_think_delay(mut self, delay: Duration) -> Self {
        self.ai_think_delay = delay;
        self
    }
}
