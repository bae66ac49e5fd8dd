//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management.
//! It has **zero dependencies** on timers, UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Every rule is a plain method call
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`grid`]: toroidal `cols x rows` grid of [`types::CellValue`]s
//! - [`game_state`]: snake, direction, rotation lock, speed and score
//! - [`rng`]: deterministic LCG used for food placement
//! - [`snapshot`]: read-only copy handed to renderers
//!
//! # Game Rules
//!
//! - **Wrap-around**: leaving one edge re-enters on the opposite edge
//! - **Growth**: eating a burger adds one body segment and speeds movement up by 50ms,
//!   never below 250ms
//! - **Collision**: moving onto the body ends the game; only a restart leaves game over
//! - **Turning**: no reversals, no same-direction turns, and no new turn while the
//!   head rotation animation runs
//! - **Food**: one random cell per attempt; occupied cells are skipped, not retried
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, GameAction, Position};
//!
//! let mut game = GameState::new(15, 15, 12345);
//!
//! game.apply_action(GameAction::Turn(Direction::Right));
//! game.tick();
//! assert_eq!(game.head(), Position::new(8, 7));
//!
//! // Reversing is ignored
//! game.finish_rotation();
//! assert!(!game.apply_action(GameAction::Turn(Direction::Left)));
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, TickOutcome};
pub use grid::Grid;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
