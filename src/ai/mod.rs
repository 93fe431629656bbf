//! Computer opponent.

pub mod policy;

pub use policy::{choose_move, decide_turn, AiDecision, AiMove, MatchFirstPolicy, OpponentPolicy};
