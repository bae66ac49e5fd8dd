//! Engine module - timers, input and rendering seams around the core
//!
//! The core [`GameState`](core::GameState) knows the rules but not the clock.
//! This crate supplies the clock and the plumbing:
//!
//! - [`scheduler`]: the [`Scheduler`] trait and the deterministic [`TimerQueue`]
//! - [`engine`]: [`Engine`], which owns the state and its timer handles
//! - [`io`]: [`InputSource`] and [`SnapshotSink`], the injected collaborators
//! - [`runner`]: the single-threaded loop that serializes all entry points
//! - [`config`]: [`EngineConfig`] read from environment variables
//!
//! # Timing
//!
//! | Timer | Kind | Interval |
//! |-------|------|----------|
//! | Move | one-shot, re-armed after each tick | current speed (1000ms down to 250ms) |
//! | Food | repeating | 3000ms |
//! | Rotation | one-shot after an accepted turn | 500ms |
//!
//! # Example
//!
//! ```
//! use tui_snake_engine::{Engine, EngineConfig, TimerQueue};
//! use tui_snake_engine::types::{Direction, GameAction, Position};
//!
//! let mut engine = Engine::with_config(&EngineConfig::default(), TimerQueue::new());
//! engine.handle_action(GameAction::Turn(Direction::Right));
//! engine.advance_to(1000);
//! assert_eq!(engine.state().head(), Position::new(8, 7));
//! ```

pub mod config;
pub mod engine;
pub mod io;
pub mod runner;
pub mod scheduler;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use config::EngineConfig;
pub use engine::Engine;
pub use io::{InputEvent, InputSource, SnapshotSink};
pub use runner::run;
pub use scheduler::{Scheduler, TimerHandle, TimerKind, TimerQueue};
