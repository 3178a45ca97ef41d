//! Simulation core - pure, deterministic, and testable.
//!
//! This crate contains the whole falling-block simulation: shape catalog,
//! piece geometry, occupancy queries, and the per-tick engine. It has
//! **zero dependencies** on UI, networking, or I/O.
//!
//! # Module Structure
//!
//! - [`shapes`]: static piece geometry catalog (cell offsets plus pivot)
//! - [`piece`]: one live block cluster with pure geometric transforms
//! - [`playfield`]: derived occupancy/validity queries over the live pieces
//! - [`game`]: the tick engine, scoring, and loss detection
//! - [`rng`]: small LCG for shape and color selection
//! - [`snapshot`]: read-only board projection for renderers
//!
//! # Design
//!
//! There is no stored occupancy grid. Settled pieces are never merged into
//! a static stack: every spawned piece stays a distinct mutable object,
//! keeps falling every tick, and can be destroyed cell-by-cell when lines
//! clear. Occupancy is always derived on demand from the live piece
//! sequence, first match in sequence order wins, so the piece list is the
//! single source of truth.
//!
//! # Example
//!
//! ```
//! use vote_tetris_core::{Game, GameStatus};
//! use vote_tetris_types::ResolvedAction;
//!
//! let mut game = Game::new(12345);
//! let status = game.tick(ResolvedAction {
//!     shift: -1,
//!     rotation: None,
//!     hard_drop: false,
//! });
//! assert_eq!(status, GameStatus::Running);
//! assert!(game.stats().score > 0); // gravity awards points every tick
//! ```

pub mod game;
pub mod piece;
pub mod playfield;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use vote_tetris_types as types;

pub use game::{Game, GameStatus};
pub use piece::{CellSet, Piece};
pub use playfield::Playfield;
pub use rng::SimpleRng;
pub use shapes::{shape, Shape};
pub use snapshot::Snapshot;
