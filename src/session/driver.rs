//! Presentation-facing game driver.
//!
//! `GameSession` holds the live snapshot, forwards intents to the engine,
//! and runs the computer's turns. The caller owns the clock: it asks for
//! a ticket with `schedule_ai_turn`, waits `ai_think_delay`, then hands
//! the ticket back to `run_ai_turn`. A ticket taken before a restart or a
//! return to the menu is stale and does nothing.

use std::time::Duration;

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::ai::{decide_turn, AiDecision, MatchFirstPolicy, OpponentPolicy};
use crate::cards::{Card, CardId, Suit};
use crate::core::{EngineConfig, GameRngState, InvariantError, Participant};
use crate::engine::{Engine, GameState, Intent, Status};
use crate::rules::valid_cards;

use super::observer::GameObserver;

/// Proof that a computer turn was scheduled against a particular snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiTurnTicket {
    generation: u64,
    status: Status,
    turn: Participant,
    turn_number: u32,
}

impl AiTurnTicket {
    fn is_current(&self, generation: u64, state: &GameState) -> bool {
        self.generation == generation
            && self.status == state.status
            && self.turn == state.turn
            && self.turn_number == state.turn_number
    }
}

/// A human-vs-computer game in progress.
pub struct GameSession {
    engine: Engine,
    state: GameState,
    policy: Box<dyn OpponentPolicy>,
    observers: Vec<Box<dyn GameObserver>>,
    /// Bumped whenever the current game is discarded.
    generation: u64,
}

impl GameSession {
    /// Create a session at the menu with the built-in opponent.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_policy(config, Box::new(MatchFirstPolicy))
    }

    /// Create a session with a custom opponent.
    #[must_use]
    pub fn with_policy(config: EngineConfig, policy: Box<dyn OpponentPolicy>) -> Self {
        Self {
            engine: Engine::new(config),
            state: GameState::menu(),
            policy,
            observers: Vec::new(),
            generation: 0,
        }
    }

    /// Resume a checkpointed game.
    pub fn restore(
        config: EngineConfig,
        bytes: &[u8],
        rng: &GameRngState,
    ) -> Result<Self, crate::core::SnapshotError> {
        let mut session = Self::new(config);
        session.state = GameState::from_bytes(bytes)?;
        // Tickets do not survive a checkpoint.
        session.state.is_ai_thinking = false;
        session.engine.restore_rng(rng);
        Ok(session)
    }

    /// Register an observer.
    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// The live snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The engine's RNG position, for checkpointing alongside the snapshot.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.engine.rng_state()
    }

    /// How long to wait between `schedule_ai_turn` and `run_ai_turn`.
    #[must_use]
    pub fn ai_think_delay(&self) -> Duration {
        self.engine.config().ai_think_delay
    }

    /// Apply an intent to the live snapshot.
    pub fn dispatch(&mut self, intent: Intent) -> Result<&GameState, InvariantError> {
        let next = self.engine.dispatch(&self.state, &intent)?;
        if intent.resets_game() {
            self.generation += 1;
        }

        let finished = next.status == Status::Over && self.state.status != Status::Over;
        self.state = next;

        if finished {
            if let Some(winner) = self.state.winner {
                for observer in &mut self.observers {
                    observer.on_game_over(winner, &self.state);
                }
            }
        }
        Ok(&self.state)
    }

    pub fn start(&mut self) -> Result<&GameState, InvariantError> {
        self.dispatch(Intent::StartGame)
    }

    pub fn return_to_menu(&mut self) -> Result<&GameState, InvariantError> {
        self.dispatch(Intent::ReturnToMenu)
    }

    pub fn play(&mut self, card: CardId) -> Result<&GameState, InvariantError> {
        self.dispatch(Intent::PlayerPlays(card))
    }

    pub fn draw(&mut self) -> Result<&GameState, InvariantError> {
        self.dispatch(Intent::Draw(Participant::Player))
    }

    pub fn skip(&mut self) -> Result<&GameState, InvariantError> {
        self.dispatch(Intent::Skip(Participant::Player))
    }

    pub fn declare_suit(&mut self, suit: Suit) -> Result<&GameState, InvariantError> {
        self.dispatch(Intent::DeclareSuit(suit))
    }

    /// Cards the human may click right now.
    #[must_use]
    pub fn playable_cards(&self) -> SmallVec<[Card; 8]> {
        let state = &self.state;
        if !state.is_playing() || state.turn != Participant::Player || state.awaiting_suit_choice {
            return SmallVec::new();
        }
        valid_cards(&state.player_hand, state.top_card(), state.declared_suit)
    }

    /// Mark the computer as thinking and hand out a ticket for its turn.
    ///
    /// Returns `None` if it is not the computer's turn or a turn is
    /// already scheduled.
    pub fn schedule_ai_turn(&mut self) -> Result<Option<AiTurnTicket>, InvariantError> {
        let state = &self.state;
        if !state.is_playing()
            || state.turn != Participant::Ai
            || state.awaiting_suit_choice
            || state.is_ai_thinking
        {
            return Ok(None);
        }

        self.dispatch(Intent::SetAiThinking(true))?;
        let ticket = AiTurnTicket {
            generation: self.generation,
            status: self.state.status,
            turn: self.state.turn,
            turn_number: self.state.turn_number,
        };
        trace!(?ticket, "ai turn scheduled");
        Ok(Some(ticket))
    }

    /// Run a scheduled computer turn.
    ///
    /// Returns the decision taken, or `None` if the ticket is stale.
    pub fn run_ai_turn(&mut self, ticket: AiTurnTicket) -> Result<Option<AiDecision>, InvariantError> {
        if !ticket.is_current(self.generation, &self.state) {
            trace!(?ticket, "stale ai turn ignored");
            return Ok(None);
        }

        let Some(decision) = decide_turn(self.policy.as_ref(), &self.state, self.engine.rng_mut()) else {
            self.dispatch(Intent::SetAiThinking(false))?;
            return Ok(None);
        };
        let decision = self.checked_decision(decision);
        debug!(?decision, "ai turn");

        for intent in decision.intents() {
            self.dispatch(intent)?;
        }
        if self.state.is_ai_thinking {
            self.dispatch(Intent::SetAiThinking(false))?;
        }
        Ok(Some(decision))
    }

    /// Replace a decision the engine would reject with the built-in one.
    ///
    /// An Ace without a suit gets a random suit.
    fn checked_decision(&mut self, decision: AiDecision) -> AiDecision {
        let accepted = decision
            .intents()
            .first()
            .is_some_and(|intent| Engine::is_legal(&self.state, intent));

        match decision {
            AiDecision::Play(mut mv) if accepted => {
                if mv.card.is_ace() && mv.declare.is_none() {
                    let rng = self.engine.rng_mut();
                    mv.declare = Some(Suit::ALL[rng.gen_range_usize(0..Suit::ALL.len())]);
                }
                if !mv.card.is_ace() {
                    mv.declare = None;
                }
                AiDecision::Play(mv)
            }
            _ if accepted => decision,
            _ => {
                warn!(?decision, "opponent policy chose a rejected move");
                decide_turn(&MatchFirstPolicy, &self.state, self.engine.rng_mut()).unwrap_or(decision)
            }
        }
    }

    /// Schedule and immediately run the computer's turn, skipping the pause.
    pub fn play_ai_turn(&mut self) -> Result<Option<AiDecision>, InvariantError> {
        match self.schedule_ai_turn()? {
            Some(ticket) => self.run_ai_turn(ticket),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AiMove;
    use crate::cards::ordered_deck;
    use crate::core::GameRng;

    fn session() -> GameSession {
        GameSession::new(EngineConfig::new().with_seed(7))
    }

    /// Computer to move, hands and top card picked by ordered-deck id.
    fn staged(player: &[u8], ai: &[u8], top: u8) -> GameState {
        let deck = ordered_deck();
        let dealt = [player, ai, &[top][..]].concat();
        let pick = |ids: &[u8]| -> im::Vector<Card> {
            ids.iter().map(|&id| deck[usize::from(id)]).collect()
        };

        let mut state = GameState::menu();
        state.status = Status::Playing;
        state.turn = Participant::Ai;
        state.player_hand = pick(player);
        state.ai_hand = pick(ai);
        state.discard_pile = pick(&[top]);
        state.draw_pile = deck
            .iter()
            .filter(|c| !dealt.contains(&c.id.raw()))
            .copied()
            .collect();
        state
    }

    /// Plays its first Ace and leaves the suit to someone else.
    struct AceWithoutSuit;

    impl OpponentPolicy for AceWithoutSuit {
        fn choose_move(&self, hand: &[Card], _: Option<&Card>, _: Option<Suit>, _: &mut GameRng) -> Option<AiMove> {
            let card = *hand.iter().find(|card| card.is_ace())?;
            Some(AiMove { card, declare: None })
        }
    }

    /// Always plays its first card, legal or not.
    struct FirstCard;

    impl OpponentPolicy for FirstCard {
        fn choose_move(&self, hand: &[Card], _: Option<&Card>, _: Option<Suit>, _: &mut GameRng) -> Option<AiMove> {
            hand.first().map(|&card| AiMove { card, declare: None })
        }
    }

    #[test]
    fn test_starts_at_menu() {
        let session = session();
        assert_eq!(session.state().status, Status::Menu);
        assert!(session.playable_cards().is_empty());
    }

    #[test]
    fn test_no_ticket_on_player_turn() {
        let mut session = session();
        session.start().unwrap();
        assert!(session.schedule_ai_turn().unwrap().is_none());
        assert!(!session.state().is_ai_thinking);
    }

    #[test]
    fn test_ticket_stale_after_restart() {
        let mut session = session();
        session.start().unwrap();
        session.state.turn = Participant::Ai;

        let ticket = session.schedule_ai_turn().unwrap().unwrap();
        assert!(session.state().is_ai_thinking);
        assert!(session.schedule_ai_turn().unwrap().is_none());

        session.return_to_menu().unwrap();
        assert_eq!(session.run_ai_turn(ticket).unwrap(), None);
        assert_eq!(session.state().status, Status::Menu);
    }

    #[test]
    fn test_ai_turn_passes_back() {
        let mut session = session();
        session.start().unwrap();
        session.state.turn = Participant::Ai;

        let decision = session.play_ai_turn().unwrap();
        assert!(decision.is_some());
        assert_eq!(session.state().turn, Participant::Player);
        assert!(!session.state().is_ai_thinking);
        assert!(!session.state().awaiting_suit_choice);
    }

    #[test]
    fn test_restore_clears_scheduled_turn() {
        let mut session = session();
        session.start().unwrap();
        session.state.turn = Participant::Ai;
        session.schedule_ai_turn().unwrap().unwrap();

        let bytes = session.state().to_bytes().unwrap();
        let mut restored = GameSession::restore(EngineConfig::new(), &bytes, &session.rng_state()).unwrap();
        assert!(!restored.state().is_ai_thinking);
        assert_eq!(restored.state().turn, Participant::Ai);

        let ticket = restored.schedule_ai_turn().unwrap();
        assert!(ticket.is_some());
        assert!(restored.run_ai_turn(ticket.unwrap()).unwrap().is_some());
        assert_eq!(restored.state().turn, Participant::Player);
    }

    #[test]
    fn test_ace_without_suit_still_ends_turn() {
        let mut session = GameSession::with_policy(EngineConfig::new().with_seed(1), Box::new(AceWithoutSuit));
        // Diamond Ace plus diamonds 2-8 against the King of clubs.
        session.state = staged(&[1, 2, 3, 4, 5, 6, 7, 8], &[13, 14, 15, 16, 17, 18, 19, 20], 38);

        let decision = session.play_ai_turn().unwrap();
        let Some(AiDecision::Play(mv)) = decision else {
            panic!("expected a play, got {decision:?}");
        };
        assert_eq!(mv.card.id, CardId::new(13));
        assert!(mv.declare.is_some());

        let state = session.state();
        assert_eq!(state.top_card().map(|c| c.id), Some(CardId::new(13)));
        assert_eq!(state.declared_suit, mv.declare);
        assert!(!state.awaiting_suit_choice);
        assert!(!state.is_ai_thinking);
        assert_eq!(state.turn, Participant::Player);
        assert!(state.validate_invariants().is_ok());
    }

    #[test]
    fn test_illegal_policy_move_falls_back() {
        let mut session = GameSession::with_policy(EngineConfig::new().with_seed(1), Box::new(FirstCard));
        // Diamonds 2-9 against the King of clubs: nothing playable.
        session.state = staged(&[1, 2, 3, 4, 5, 6, 7, 8], &[14, 15, 16, 17, 18, 19, 20, 21], 38);

        assert_eq!(session.play_ai_turn().unwrap(), Some(AiDecision::Draw));
        assert_eq!(session.state().ai_hand.len(), 9);
        assert_eq!(session.state().turn, Participant::Player);
        assert!(!session.state().is_ai_thinking);

        // The drawn King of spades is the fallback's next play.
        session.draw().unwrap();
        assert_eq!(session.state().turn, Participant::Ai);
        let decision = session.play_ai_turn().unwrap();
        assert!(matches!(decision, Some(AiDecision::Play(mv)) if mv.card.id == CardId::new(51)));
        assert_eq!(session.state().turn, Participant::Player);
        assert!(!session.state().is_ai_thinking);
    }

    #[test]
    fn test_ai_delay_from_config() {
        let session = GameSession::new(EngineConfig::new().with_ai_think_delay(Duration::from_millis(5)));
        assert_eq!(session.ai_think_delay(), Duration::from_millis(5));
    }
}
