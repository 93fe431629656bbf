//! The engine: one pure transition per intent.
//!
//! `Engine::dispatch` maps `(snapshot, intent)` to the next snapshot. The
//! input snapshot is never modified. Illegal intents are ignored and the
//! unchanged snapshot is returned; only a broken invariant is an error.

use tracing::{debug, error, info, trace};

use crate::cards::{create_deck_with, CardId, Suit};
use crate::core::{EngineConfig, GameRng, GameRngState, InvariantError, Participant, HAND_SIZE};

use super::intent::Intent;
use super::state::{GameState, Status};

/// Owns the randomness used for deals; everything else is pure.
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    rng: GameRng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    /// Create an engine. A config without a seed draws one from OS entropy.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Shared RNG, also used for computer tie-breaks.
    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    /// Capture the RNG position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Restore the RNG position.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// Apply an intent, returning the next snapshot.
    ///
    /// Illegal intents return a clone of `state`.
    pub fn dispatch(&mut self, state: &GameState, intent: &Intent) -> Result<GameState, InvariantError> {
        if !Self::is_legal(state, intent) {
            trace!(%intent, status = ?state.status, turn = %state.turn, "intent rejected");
            return Ok(state.clone());
        }

        let next = match *intent {
            Intent::StartGame => self.new_game()?,
            Intent::ReturnToMenu => GameState::menu(),
            Intent::PlayerPlays(card) => play_card(state, Participant::Player, card),
            Intent::AiPlays(card) => play_card(state, Participant::Ai, card),
            Intent::DeclareSuit(suit) => declare_suit(state, suit),
            Intent::Draw(who) => draw_card(state, who),
            Intent::Skip(who) => skip_turn(state, who),
            Intent::SetAiThinking(on) => set_ai_thinking(state, on),
        };

        if let Err(err) = next.validate_invariants() {
            error!(%intent, %err, "invariant violated");
            return Err(err);
        }

        debug!(
            %intent,
            status = ?next.status,
            turn = %next.turn,
            draw_pile = next.draw_pile.len(),
            "intent applied"
        );
        if next.status == Status::Over && state.status != Status::Over {
            info!(winner = ?next.winner, turns = next.turn_number, "game over");
        }

        Ok(next)
    }

    /// Is `intent` accepted in `state`?
    ///
    /// The same check `dispatch` uses, exposed so the presentation layer can
    /// enable only the actions that will be accepted.
    #[must_use]
    pub fn is_legal(state: &GameState, intent: &Intent) -> bool {
        match *intent {
            Intent::StartGame | Intent::ReturnToMenu => true,
            Intent::SetAiThinking(_) => state.is_playing(),
            Intent::PlayerPlays(card) => can_play(state, Participant::Player, card),
            Intent::AiPlays(card) => can_play(state, Participant::Ai, card),
            Intent::DeclareSuit(_) => state.is_playing() && state.awaiting_suit_choice,
            Intent::Draw(who) => must_pass(state, who) && !state.draw_pile.is_empty(),
            Intent::Skip(who) => must_pass(state, who) && state.draw_pile.is_empty(),
        }
    }

    /// Shuffle and deal a fresh game.
    ///
    /// Each hand gets `HAND_SIZE` cards from the top of the deck. The next
    /// card seeds the discard pile; Aces go back under the pile until a
    /// non-Ace turns up.
    pub fn new_game(&mut self) -> Result<GameState, InvariantError> {
        let mut state = GameState::menu();
        state.draw_pile = create_deck_with(&mut self.rng).into_iter().collect();

        for _ in 0..HAND_SIZE {
            for who in Participant::ALL {
                let card = state.draw_pile.pop_back().ok_or(InvariantError::DeckExhausted)?;
                state.hand_mut(who).push_back(card);
            }
        }

        let mut seed = None;
        for _ in 0..state.draw_pile.len() {
            let card = state.draw_pile.pop_back().ok_or(InvariantError::DeckExhausted)?;
            if card.is_ace() {
                state.draw_pile.push_front(card);
            } else {
                seed = Some(card);
                break;
            }
        }
        state.discard_pile.push_back(seed.ok_or(InvariantError::NoSeedCard)?);

        state.status = Status::Playing;
        state.turn = Participant::Player;
        state.turn_number = 1;
        state.message = "Your turn. Match the suit or rank; Aces are wild.".to_string();

        info!(seed = self.rng.seed(), top = ?state.top_card(), "new game dealt");
        Ok(state)
    }
}

/// Playing, `who` to move, and no suit choice pending.
fn may_act(state: &GameState, who: Participant) -> bool {
    state.is_playing() && state.turn == who && !state.awaiting_suit_choice
}

fn can_play(state: &GameState, who: Participant, id: CardId) -> bool {
    may_act(state, who)
        && state
            .find_in_hand(who, id)
            .is_some_and(|(_, card)| state.can_play(&card))
}

/// `who` is to move and holds nothing playable.
fn must_pass(state: &GameState, who: Participant) -> bool {
    may_act(state, who) && !state.has_playable_card(who)
}

fn pass_turn(state: &mut GameState) {
    state.turn = state.turn.opponent();
    state.turn_number = state.turn_number.wrapping_add(1);
    state.awaiting_suit_choice = false;
    state.is_ai_thinking = false;
}

fn play_card(state: &GameState, who: Participant, id: CardId) -> GameState {
    let mut next = state.clone();
    let Some((idx, card)) = next.find_in_hand(who, id) else {
        return next;
    };
    next.hand_mut(who).remove(idx);
    next.discard_pile.push_back(card);
    next.declared_suit = None;

    if next.hand(who).is_empty() {
        next.status = Status::Over;
        next.winner = Some(who);
        next.awaiting_suit_choice = false;
        next.is_ai_thinking = false;
        next.message = match who {
            Participant::Player => "You win!".to_string(),
            Participant::Ai => "The AI wins!".to_string(),
        };
    } else if card.is_ace() {
        next.awaiting_suit_choice = true;
        next.message = match who {
            Participant::Player => "You played an Ace. Choose a suit.".to_string(),
            Participant::Ai => "The AI played an Ace.".to_string(),
        };
    } else {
        pass_turn(&mut next);
        next.message = match who {
            Participant::Player => format!("You played {card}."),
            Participant::Ai => format!("The AI played {card}. Your turn."),
        };
    }
    next
}

fn declare_suit(state: &GameState, suit: Suit) -> GameState {
    let mut next = state.clone();
    let who = next.turn;
    next.declared_suit = Some(suit);
    pass_turn(&mut next);
    next.message = match who {
        Participant::Player => format!("You chose {suit}."),
        Participant::Ai => format!("The AI chose {suit}. Your turn."),
    };
    next
}

fn draw_card(state: &GameState, who: Participant) -> GameState {
    let mut next = state.clone();
    if let Some(card) = next.draw_pile.pop_back() {
        next.hand_mut(who).push_back(card);
    }
    pass_turn(&mut next);
    next.message = match who {
        Participant::Player => "You drew a card.".to_string(),
        Participant::Ai => "The AI drew a card. Your turn.".to_string(),
    };
    next
}

fn skip_turn(state: &GameState, who: Participant) -> GameState {
    let mut next = state.clone();
    pass_turn(&mut next);
    next.message = match who {
        Participant::Player => "You passed.".to_string(),
        Participant::Ai => "The AI passed. Your turn.".to_string(),
    };
    next
}

fn set_ai_thinking(state: &GameState, on: bool) -> GameState {
    let mut next = state.clone();
    next.is_ai_thinking = on;
    if on {
        next.message = "The AI is thinking...".to_string();
    }
    next
}
