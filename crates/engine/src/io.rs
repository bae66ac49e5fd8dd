//! Seams between the engine and the outside world.
//!
//! The engine depends on these traits only, so it runs the same against a
//! real terminal, a scripted test double or a headless recorder.

use std::time::Duration;

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::types::GameAction;

/// A discrete event from the input side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    /// The output surface changed (e.g. terminal resize); redraw everything.
    Redraw,
    Quit,
}

/// Source of input events.
pub trait InputSource {
    /// Wait up to `timeout` for the next event.
    ///
    /// Returns `Ok(None)` on timeout or for input that maps to nothing.
    fn poll(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;
}

/// Consumer of post-mutation snapshots (the renderer).
pub trait SnapshotSink {
    fn present(&mut self, snap: &GameSnapshot) -> Result<()>;

    /// Forget any cached output so the next `present` is a full redraw.
    fn invalidate(&mut self) {}
}

impl<T: SnapshotSink + ?Sized> SnapshotSink for &mut T {
    fn present(&mut self, snap: &GameSnapshot) -> Result<()> {
        (**self).present(snap)
    }

    fn invalidate(&mut self) {
        (**self).invalidate()
    }
}
