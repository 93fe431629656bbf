//! Intents submitted by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Suit};
use crate::core::Participant;

/// One request to change the game state.
///
/// Cards are referenced by id; the engine looks them up in the acting hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Deal a fresh game.
    StartGame,
    /// The human plays a card.
    PlayerPlays(CardId),
    /// The computer plays a card.
    AiPlays(CardId),
    /// Take the top card of the draw pile.
    Draw(Participant),
    /// Name the suit for a just-played Ace.
    DeclareSuit(Suit),
    /// Abandon the current game.
    ReturnToMenu,
    /// Mark a computer turn as scheduled or finished.
    SetAiThinking(bool),
    /// Pass when nothing can be played or drawn.
    Skip(Participant),
}

impl Intent {
    /// Play a card as the given participant.
    #[must_use]
    pub fn play(who: Participant, card: CardId) -> Self {
        match who {
            Participant::Player => Intent::PlayerPlays(card),
            Participant::Ai => Intent::AiPlays(card),
        }
    }

    /// Does this intent discard the current game?
    #[must_use]
    pub fn resets_game(&self) -> bool {
        matches!(self, Intent::StartGame | Intent::ReturnToMenu)
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::StartGame => write!(f, "start-game"),
            Intent::PlayerPlays(card) => write!(f, "player-plays({card})"),
            Intent::AiPlays(card) => write!(f, "ai-plays({card})"),
            Intent::Draw(who) => write!(f, "draw({who})"),
            Intent::DeclareSuit(suit) => write!(f, "declare-suit({suit})"),
            Intent::ReturnToMenu => write!(f, "return-to-menu"),
            Intent::SetAiThinking(on) => write!(f, "set-ai-thinking({on})"),
            Intent::Skip(who) => write!(f, "skip({who})"),
        }
    }
}
