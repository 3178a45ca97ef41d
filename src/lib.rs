//! Vote Tetris (workspace facade crate).
//!
//! This package keeps a stable `vote_tetris::{core,input,session,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use vote_tetris_core as core;
pub use vote_tetris_input as input;
pub use vote_tetris_session as session;
pub use vote_tetris_term as term;
pub use vote_tetris_types as types;
