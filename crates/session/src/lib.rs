//! Session driver: the boundary between the engine and the outside world.
//!
//! A session owns one engine instance and drives it with a fixed-interval
//! tick timer. Each tick it samples one aggregated vote snapshot from the
//! panel, resolves it, advances the simulation, and publishes the resulting
//! frame. There is exactly one mutator (the tick loop) and one reader (the
//! panel), invoked strictly after the tick's mutations complete, so no
//! locking is needed.
//!
//! The concrete transport behind the panel (a chat service, a terminal, a
//! test script) is out of scope here; it plugs in through [`VotePanel`].

pub mod highscore;
pub mod runner;

pub use vote_tetris_core as core;
pub use vote_tetris_input as input;
pub use vote_tetris_types as types;

pub use highscore::HighScoreStore;
pub use runner::{Session, VotePanel};
