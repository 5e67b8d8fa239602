//! Rules engine for a human-versus-bot game of Battleship: placement
//! validation, autonomous bot strategies, turn resolution and win
//! detection. Persistence and any transport or rendering layers live
//! outside this crate, behind the [`GameStore`] trait.

mod board;
mod bot;
mod common;
mod config;
mod engine;
mod game;
mod logging;
mod placement;
mod ship;
mod store;

pub use board::*;
pub use bot::*;
pub use common::*;
pub use config::*;
pub use engine::*;
pub use game::*;
pub use logging::init_logging;
pub use placement::*;
pub use ship::*;
pub use store::*;
