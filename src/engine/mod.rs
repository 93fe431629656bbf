//! Game engine: snapshot, intents, and the transition function.
//!
//! The presentation layer submits [`Intent`]s to [`Engine::dispatch`] and
//! renders the [`GameState`] it gets back.

pub mod intent;
pub mod reducer;
pub mod state;

pub use intent::Intent;
pub use reducer::Engine;
pub use state::{GameState, Status};
