//! Game state snapshot.
//!
//! A `GameState` is the unit the engine transitions. Zones are `im`
//! persistent vectors, so cloning a snapshot is O(1) and each transition
//! shares structure with the snapshot it came from.
//!
//! ## Zone orientation
//!
//! - Draw pile: top = back of the vector, bottom = front
//! - Discard pile: oldest first, top card = back
//! - Hands: insertion order, no rule significance

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Suit};
use crate::core::{InvariantError, Participant, SnapshotError, DECK_SIZE};
use crate::rules;

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Menu,
    Playing,
    Over,
}

/// Immutable game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub status: Status,
    pub draw_pile: Vector<Card>,
    pub player_hand: Vector<Card>,
    pub ai_hand: Vector<Card>,
    pub discard_pile: Vector<Card>,
    /// Whose move is legal next.
    pub turn: Participant,
    /// Suit named after an Ace; overrides the top card's suit.
    ///
    /// Lasts only until the next card is played: the new top card then
    /// governs, and a new Ace waits for a fresh declaration.
    pub declared_suit: Option<Suit>,
    /// Status line for the table.
    pub message: String,
    /// Set while a computer turn is scheduled.
    pub is_ai_thinking: bool,
    /// An Ace was just played and its suit has not been named yet.
    pub awaiting_suit_choice: bool,
    /// Set once `status` is `Over`.
    pub winner: Option<Participant>,
    /// Incremented every time the turn passes.
    pub turn_number: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::menu()
    }
}

impl GameState {
    /// The menu snapshot: no game in progress.
    #[must_use]
    pub fn menu() -> Self {
        Self {
            status: Status::Menu,
            draw_pile: Vector::new(),
            player_hand: Vector::new(),
            ai_hand: Vector::new(),
            discard_pile: Vector::new(),
            turn: Participant::Player,
            declared_suit: None,
            message: String::new(),
            is_ai_thinking: false,
            awaiting_suit_choice: false,
            winner: None,
            turn_number: 0,
        }
    }

    /// Is a game in progress?
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == Status::Playing
    }

    /// The card that governs the next play.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.back()
    }

    /// A participant's hand.
    #[must_use]
    pub fn hand(&self, who: Participant) -> &Vector<Card> {
        match who {
            Participant::Player => &self.player_hand,
            Participant::Ai => &self.ai_hand,
        }
    }

    pub(crate) fn hand_mut(&mut self, who: Participant) -> &mut Vector<Card> {
        match who {
            Participant::Player => &mut self.player_hand,
            Participant::Ai => &mut self.ai_hand,
        }
    }

    /// The hand of whoever is to move.
    #[must_use]
    pub fn active_hand(&self) -> &Vector<Card> {
        self.hand(self.turn)
    }

    /// Find a card in a participant's hand.
    #[must_use]
    pub fn find_in_hand(&self, who: Participant, id: CardId) -> Option<(usize, Card)> {
        self.hand(who)
            .iter()
            .enumerate()
            .find(|(_, card)| card.id == id)
            .map(|(idx, card)| (idx, *card))
    }

    /// Is `card` playable on the current table?
    #[must_use]
    pub fn can_play(&self, card: &Card) -> bool {
        rules::is_valid_move(card, self.top_card(), self.declared_suit)
    }

    /// Does `who` hold at least one playable card?
    #[must_use]
    pub fn has_playable_card(&self, who: Participant) -> bool {
        rules::has_valid_move(self.hand(who), self.top_card(), self.declared_suit)
    }

    /// Total cards across all four zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.draw_pile.len() + self.player_hand.len() + self.ai_hand.len() + self.discard_pile.len()
    }

    /// Check the structural invariants of this snapshot.
    ///
    /// - Outside the menu, the four zones hold all 52 cards exactly once.
    /// - `Over` iff a hand is empty (while playing, neither is).
    /// - A pending suit choice means an Ace is on top.
    pub fn validate_invariants(&self) -> Result<(), InvariantError> {
        if self.status == Status::Menu {
            return Ok(());
        }

        let found = self.card_count();
        if found != DECK_SIZE {
            return Err(InvariantError::CardCount { expected: DECK_SIZE, found });
        }

        let mut seen = FxHashSet::default();
        let zones = [&self.draw_pile, &self.player_hand, &self.ai_hand, &self.discard_pile];
        for card in zones.into_iter().flatten() {
            if !seen.insert(card.id) {
                return Err(InvariantError::DuplicateCard(card.id));
            }
        }

        let hand_empty = self.player_hand.is_empty() || self.ai_hand.is_empty();
        if hand_empty != (self.status == Status::Over) {
            return Err(InvariantError::OverWithCards);
        }

        if self.awaiting_suit_choice && !self.top_card().is_some_and(Card::is_ace) {
            return Err(InvariantError::SuitChoiceWithoutAce);
        }

        Ok(())
    }

    /// Encode this snapshot for checkpointing.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a checkpoint, rejecting inconsistent snapshots.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: GameState = bincode::deserialize(bytes)?;
        state.validate_invariants()?;
        Ok(state)
    }
}
