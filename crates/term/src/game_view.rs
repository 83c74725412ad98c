//! GameView: maps a `core::GridSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GridSnapshot;
use crate::fb::{digit_count, CellStyle, FrameBuffer, Rgb};
use crate::types::Outcome;

/// Default tile width in terminal columns.
pub const TILE_WIDTH: u16 = 6;

/// Default tile height in terminal rows.
pub const TILE_HEIGHT: u16 = 3;

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

const FRAME_BG: Rgb = Rgb::new(0, 0, 0);
const EMPTY_BG: Rgb = Rgb::new(40, 40, 40);

/// Tile backgrounds, cycled by exponent starting at 2.
const PALETTE: [Rgb; 6] = [
    Rgb::new(205, 49, 49),  // red
    Rgb::new(13, 188, 121), // green
    Rgb::new(229, 229, 16), // yellow
    Rgb::new(36, 114, 200), // blue
    Rgb::new(188, 63, 188), // magenta
    Rgb::new(17, 168, 205), // cyan
];

/// Background color for a tile value (2 red, 4 green, ... 64 cyan, then repeat).
pub fn tile_color(value: u32) -> Rgb {
    let exp = value.max(2).trailing_zeros() as usize;
    PALETTE[(exp - 1) % PALETTE.len()]
}

/// A lightweight terminal renderer for the 2048 grid.
pub struct GameView {
    tile_w: u16,
    tile_h: u16,
    /// Columns/rows between neighbouring tiles.
    gap: u16,
    legend: &'static [(&'static str, &'static str)],
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(TILE_WIDTH, TILE_HEIGHT)
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            gap: 1,
            legend: &[],
        }
    }

    /// Key help printed in the side panel.
    pub fn with_legend(mut self, legend: &'static [(&'static str, &'static str)]) -> Self {
        self.legend = legend;
        self
    }

    /// Outer size (border included) of the grid frame for `snap`.
    pub fn frame_size(&self, snap: &GridSnapshot) -> (u16, u16) {
        let cols = snap.width() as u16;
        let rows = snap.height() as u16;
        let w = cols * self.tile_w + cols.saturating_sub(1) * self.gap + 2;
        let h = rows * self.tile_h + rows.saturating_sub(1) * self.gap + 2;
        (w, h)
    }

    /// Top-left terminal position of tile (row, col) relative to the frame origin.
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: usize, col: usize) -> (u16, u16) {
        let x = start_x + 1 + (col as u16) * (self.tile_w + self.gap);
        let y = start_y + 1 + (row as u16) * (self.tile_h + self.gap);
        (x, y)
    }

    /// Render the grid into an existing framebuffer.
    pub fn render_into(
        &self,
        snap: &GridSnapshot,
        outcome: Outcome,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), FRAME_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (row, cells) in snap.rows().enumerate() {
            for (col, tile) in cells.iter().enumerate() {
                let (x, y) = self.tile_origin(start_x, start_y, row, col);
                match tile {
                    Some(value) => self.draw_tile(fb, x, y, *value),
                    None => {
                        let style = CellStyle::new(EMPTY_BG, EMPTY_BG);
                        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);
                    }
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match outcome {
            Outcome::Won => self.draw_banner(fb, start_x, start_y, frame_w, frame_h, "YOU WIN"),
            Outcome::Lost => self.draw_banner(fb, start_x, start_y, frame_w, frame_h, "GAME OVER"),
            Outcome::Continuing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GridSnapshot, outcome: Outcome, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, outcome, viewport, &mut fb);
        fb
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

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, value: u32) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), tile_color(value)).bold();
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);

        // Extra space goes after the number.
        let pad = self.tile_w.saturating_sub(digit_count(value)) / 2;
        fb.put_u32(x + pad, y + self.tile_h / 2, value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GridSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), FRAME_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "2048", label);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MAX", label);
        y = y.saturating_add(1);
        match snap.max_tile() {
            Some(max) => {
                fb.put_u32(panel_x, y, max, value);
            }
            None => fb.put_str(panel_x, y, "-", value),
        }
        y = y.saturating_add(2);

        if self.legend.is_empty() {
            return;
        }
        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        let dim = value.dim();
        for (keys, action) in self.legend {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, keys, value);
            fb.put_str(panel_x + 5, y, action, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_banner(
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
        let style = CellStyle::new(Rgb::new(255, 255, 255), FRAME_BG).bold();
        // Blank margin so the text reads over coloured tiles.
        fb.fill_rect(x.saturating_sub(1), mid_y, text_w + 2, 1, ' ', style);
        fb.put_str(x, mid_y, text, style);
    }
}
