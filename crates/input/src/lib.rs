//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and wraps the
//! terminal event queue as an [`engine::InputSource`](crate::engine::InputSource).

pub mod map;
pub mod source;

pub use tui_snake_engine as engine;
pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{translate_event, CrosstermInput};
