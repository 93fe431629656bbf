//! Session driver and observers for the presentation layer.

pub mod driver;
pub mod observer;

pub use driver::{AiTurnTicket, GameSession};
pub use observer::{GameObserver, Scoreboard};
