//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a status line (`Speed:<ms>  Burgers:<n>`), the
//! bordered grid, and a controls hint. Each grid cell is two columns wide to
//! compensate for the usual terminal glyph aspect ratio.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::CellValue;

pub const CONTROLS_HINT: &str = "Use ← → ↑ ↓ or W S A D to move";
pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const RESTART_HINT: &str = "Press SPACE to restart.";

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the pieces of the layout landed, in terminal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub status_y: u16,
    /// Top-left corner of the border.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub hint_y: u16,
}

/// A lightweight terminal renderer for the snake game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Compute where a grid of `cols x rows` sits inside `viewport`.
    pub fn layout(&self, cols: u16, rows: u16, viewport: Viewport) -> Layout {
        let frame_w = cols.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = rows.saturating_mul(self.cell_h).saturating_add(2);
        // Status line above the frame, hint line below it.
        let total_h = frame_h.saturating_add(2);

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let status_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        let frame_y = status_y.saturating_add(1);
        Layout {
            status_y,
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            hint_y: frame_y.saturating_add(frame_h),
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let l = self.layout(snap.cols, snap.rows, viewport);

        self.draw_status(fb, snap, &l);

        let field = CellStyle::new(Rgb::new(80, 80, 90), FIELD_BG);
        fb.fill_rect(
            l.frame_x + 1,
            l.frame_y + 1,
            l.frame_w.saturating_sub(2),
            l.frame_h.saturating_sub(2),
            ' ',
            field,
        );
        self.draw_border(
            fb,
            l.frame_x,
            l.frame_y,
            l.frame_w,
            l.frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG),
        );

        for y in 0..snap.rows {
            for x in 0..snap.cols {
                match snap.cell(x, y) {
                    CellValue::Empty => {}
                    CellValue::Food => {
                        let style = CellStyle::new(Rgb::new(230, 170, 60), FIELD_BG).bold();
                        self.draw_glyph(fb, &l, x, y, '●', style);
                    }
                    CellValue::SnakeBody => {
                        let style = CellStyle::new(Rgb::new(90, 200, 110), FIELD_BG);
                        self.fill_cell_rect(fb, &l, x, y, '█', style);
                    }
                    CellValue::SnakeHead => self.draw_head(fb, snap, &l, x, y),
                }
            }
        }

        let hint = CellStyle::new(Rgb::new(150, 150, 160), SCREEN_BG);
        self.put_centered(fb, &l, l.hint_y, CONTROLS_HINT, hint);

        if snap.game_over {
            self.draw_game_over(fb, &l);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: &Layout) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let x = fb.put_str(l.frame_x, l.status_y, "Speed:", label);
        let x = fb.put_u32(x, l.status_y, snap.speed_ms, value);
        let x = fb.put_str(x, l.status_y, "  Burgers:", label);
        fb.put_u32(x, l.status_y, snap.burgers, value);
    }

    fn draw_head(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: &Layout, x: u16, y: u16) {
        let mut style = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(120, 230, 140)).bold();
        if snap.is_rotating {
            style.bg = Rgb::new(240, 240, 120);
        }
        if snap.game_over {
            style.bg = Rgb::new(220, 80, 80);
        }
        self.fill_cell_rect(fb, l, x, y, ' ', style);
        self.draw_glyph(fb, l, x, y, head_glyph(snap.dir_angle), style);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, l: &Layout) {
        let title = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let hint = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG);
        let mid_y = l.frame_y.saturating_add(l.frame_h / 2);
        self.put_centered(fb, l, mid_y.saturating_sub(1), GAME_OVER_TEXT, title);
        self.put_centered(fb, l, mid_y, RESTART_HINT, hint);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn cell_origin(&self, l: &Layout, cell_x: u16, cell_y: u16) -> (u16, u16) {
        (
            (l.frame_x + 1).saturating_add(cell_x.saturating_mul(self.cell_w)),
            (l.frame_y + 1).saturating_add(cell_y.saturating_mul(self.cell_h)),
        )
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        l: &Layout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(l, cell_x, cell_y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// One glyph at the top-left of a cell, rest of the cell left as is.
    fn draw_glyph(
        &self,
        fb: &mut FrameBuffer,
        l: &Layout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(l, cell_x, cell_y);
        fb.put_char(px, py, ch, style);
    }

    fn put_centered(&self, fb: &mut FrameBuffer, l: &Layout, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = if text_w <= l.frame_w {
            l.frame_x + (l.frame_w - text_w) / 2
        } else {
            (fb.width().saturating_sub(text_w)) / 2
        };
        fb.put_str(x, y, text, style);
    }
}

/// Arrow for the head, from its rotation angle in degrees (0 = up, clockwise).
pub fn head_glyph(angle: i32) -> char {
    match angle.rem_euclid(360) {
        0..=44 | 315..=359 => '^',
        45..=134 => '>',
        135..=224 => 'v',
        _ => '<',
    }
}
