//! [`SnapshotSink`] that draws to the real terminal.

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::engine::SnapshotSink;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Fallback when the terminal size can't be queried.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub struct TerminalSink {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalSink {
    pub fn new(view: GameView) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
        }
    }

    /// Raw mode plus alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal. Call on every exit path.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new(GameView::default())
    }
}

impl SnapshotSink for TerminalSink {
    fn present(&mut self, snap: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
        self.view.render_into(snap, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    fn invalidate(&mut self) {
        self.renderer.invalidate();
    }
}
