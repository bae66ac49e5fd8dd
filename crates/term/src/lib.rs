//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a plain
//! framebuffer ([`fb`]) by a pure view ([`game_view`]) and flushed to the
//! terminal as cell diffs ([`renderer`]). [`TerminalSink`] ties the three
//! together behind the engine's [`SnapshotSink`](engine::SnapshotSink) seam.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sink;

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{head_glyph, AnchorY, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sink::TerminalSink;
