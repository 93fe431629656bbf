//! Computer opponent move selection.
//!
//! The policy is trait-based so a different opponent can be plugged into a
//! session:
//! - `OpponentPolicy`: picks a card (and a suit for an Ace) from a hand
//! - `MatchFirstPolicy`: the built-in opponent
//!
//! `MatchFirstPolicy` ranks its options strictly:
//! 1. A random non-Ace card that matches suit or rank
//! 2. An Ace, naming a random suit
//! 3. Nothing (the caller draws, or skips when the pile is empty)

use smallvec::SmallVec;

use crate::cards::{Card, Suit};
use crate::core::{GameRng, Participant};
use crate::engine::{GameState, Intent, Status};
use crate::rules::is_valid_move;

/// A card the computer has chosen to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiMove {
    pub card: Card,
    /// Suit to declare; set exactly when `card` is an Ace.
    pub declare: Option<Suit>,
}

/// What the computer does with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiDecision {
    Play(AiMove),
    Draw,
    Skip,
}

impl AiDecision {
    /// The intents that carry out this decision, in order.
    ///
    /// An Ace play is followed by the suit declaration as part of the same
    /// move.
    #[must_use]
    pub fn intents(&self) -> SmallVec<[Intent; 2]> {
        let mut out = SmallVec::new();
        match *self {
            AiDecision::Play(mv) => {
                out.push(Intent::AiPlays(mv.card.id));
                if let Some(suit) = mv.declare {
                    out.push(Intent::DeclareSuit(suit));
                }
            }
            AiDecision::Draw => out.push(Intent::Draw(Participant::Ai)),
            AiDecision::Skip => out.push(Intent::Skip(Participant::Ai)),
        }
        out
    }
}

/// Strategy for the computer seat.
pub trait OpponentPolicy: Send + Sync {
    /// Pick a legal card from `hand`, or `None` when nothing is playable.
    fn choose_move(
        &self,
        hand: &[Card],
        top_card: Option<&Card>,
        declared_suit: Option<Suit>,
        rng: &mut GameRng,
    ) -> Option<AiMove>;
}

/// The built-in opponent: free matches first, Aces as a fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchFirstPolicy;

impl OpponentPolicy for MatchFirstPolicy {
    fn choose_move(
        &self,
        hand: &[Card],
        top_card: Option<&Card>,
        declared_suit: Option<Suit>,
        rng: &mut GameRng,
    ) -> Option<AiMove> {
        let matches: SmallVec<[Card; 8]> = hand
            .iter()
            .filter(|card| !card.is_ace() && is_valid_move(card, top_card, declared_suit))
            .copied()
            .collect();

        if let Some(&card) = rng.choose(&matches) {
            return Some(AiMove { card, declare: None });
        }

        let ace = hand.iter().find(|card| card.is_ace())?;
        let suit = Suit::ALL[rng.gen_range_usize(0..Suit::ALL.len())];
        Some(AiMove {
            card: *ace,
            declare: Some(suit),
        })
    }
}

/// [`MatchFirstPolicy::choose_move`] as a free function.
///
/// ```
/// use crazy_aces::ai::choose_move;
/// use crazy_aces::cards::{Card, CardId, Rank, Suit};
/// use crazy_aces::core::GameRng;
///
/// let top = Card::new(CardId::new(0), Suit::Hearts, Rank::King);
/// let hand = [
///     Card::new(CardId::new(1), Suit::Spades, Rank::Ace),
///     Card::new(CardId::new(2), Suit::Hearts, Rank::Two),
/// ];
///
/// let mv = choose_move(&hand, Some(&top), None, &mut GameRng::new(1)).unwrap();
/// assert_eq!(mv.card.id, CardId::new(2));
/// assert_eq!(mv.declare, None);
/// ```
#[must_use]
pub fn choose_move(
    hand: &[Card],
    top_card: Option<&Card>,
    declared_suit: Option<Suit>,
    rng: &mut GameRng,
) -> Option<AiMove> {
    MatchFirstPolicy.choose_move(hand, top_card, declared_suit, rng)
}

/// Decide the computer's whole turn for `state`.
///
/// Returns `None` unless the game is in progress, it is the computer's
/// turn, and no suit choice is pending.
#[must_use]
pub fn decide_turn(
    policy: &dyn OpponentPolicy,
    state: &GameState,
    rng: &mut GameRng,
) -> Option<AiDecision> {
    if state.status != Status::Playing || state.turn != Participant::Ai || state.awaiting_suit_choice {
        return None;
    }

    let hand: Vec<Card> = state.ai_hand.iter().copied().collect();
    let decision = match policy.choose_move(&hand, state.top_card(), state.declared_suit, rng) {
        Some(mv) => AiDecision::Play(mv),
        None if state.draw_pile.is_empty() => AiDecision::Skip,
        None => AiDecision::Draw,
    };
    Some(decision)
}
