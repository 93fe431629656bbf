//! Rules of play.
//!
//! Pure functions over cards; the engine and the computer opponent both
//! call into these so their notion of a legal play is identical.

pub mod legality;

pub use legality::{has_valid_move, is_valid_move, valid_cards};
