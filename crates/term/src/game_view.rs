//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a `score:` line, a `lives:` line, then the maze in
//! a single-line box. One maze cell is one terminal column.

use crate::core::{GameSnapshot, SnapshotCell};
use crate::fb::{palette, CellStyle, FrameBuffer};
use crate::types::Tile;

/// Rows used by the HUD above the maze frame.
const HUD_ROWS: u16 = 2;

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

#[derive(Debug, Clone, Copy)]
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Top,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Smallest viewport that shows the whole frame.
    pub fn required_size(snap: &GameSnapshot) -> Viewport {
        let (frame_w, frame_h) = frame_size(snap);
        Viewport::new(frame_w, frame_h + HUD_ROWS)
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = frame_size(snap);
        let total_h = frame_h + HUD_ROWS;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        self.draw_counter(fb, start_x, start_y, "score:", snap.score);
        self.draw_counter(fb, start_x, start_y + 1, "lives:", snap.lives);

        let frame_y = start_y + HUD_ROWS;
        self.draw_border(fb, start_x, frame_y, frame_w, frame_h);

        for (y, row) in snap.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = glyph(*cell);
                fb.put_char(start_x + 1 + x as u16, frame_y + 1 + y as u16, ch, style);
            }
        }

        if snap.is_won() {
            self.draw_overlay_text(fb, start_x, frame_y, frame_w, frame_h, " YOU WIN ");
        }
    }

    fn draw_counter(&self, fb: &mut FrameBuffer, x: u16, y: u16, label: &str, value: u32) {
        let after = fb.put_str(x, y, label, CellStyle::default().bold());
        fb.put_str(after + 1, y, &value.to_string(), CellStyle::fg(palette::VALUE));
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::default().bold();

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

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, CellStyle::fg(palette::ACTOR).bold());
    }
}

fn frame_size(snap: &GameSnapshot) -> (u16, u16) {
    let w = u16::try_from(snap.width.max(0)).unwrap_or(u16::MAX - 2);
    let h = u16::try_from(snap.height.max(0)).unwrap_or(u16::MAX - 2);
    (w.saturating_add(2), h.saturating_add(2))
}

/// Character and style for one maze cell.
pub fn glyph(cell: SnapshotCell) -> (char, CellStyle) {
    match cell {
        SnapshotCell::Actor => ('@', CellStyle::fg(palette::ACTOR).bold()),
        SnapshotCell::Tile(tile) => match tile {
            Tile::Wall => ('█', CellStyle::fg(palette::WALL)),
            Tile::Gate => ('⎼', CellStyle::fg(palette::GATE)),
            Tile::Point => ('·', CellStyle::fg(palette::POINT)),
            Tile::PowerPellet => ('o', CellStyle::fg(palette::POINT)),
            Tile::Open => (' ', CellStyle::default()),
        },
    }
}
