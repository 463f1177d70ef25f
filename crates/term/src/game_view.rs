//! GameView: maps a `GameSnapshot` (plus the in-flight animation) into a
//! terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: title with BEST/SCORE boxes, the 4x4 board, a win
//! banner row and the key hints. Each board cell is `cell_w` x `cell_h`
//! terminal cells with a one-cell gutter.

use crate::core::{AnimationFrame, EffectKind, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Pos, GRID_SIZE};

const BACKGROUND: Rgb = Rgb::new(0xfa, 0xf8, 0xef);
const BOARD: Rgb = Rgb::new(0xbb, 0xad, 0xa0);
const EMPTY_CELL: Rgb = Rgb::new(0xcd, 0xc1, 0xb4);
const TEXT_LIGHT: Rgb = Rgb::new(0xf9, 0xf6, 0xf2);
const TEXT_DARK: Rgb = Rgb::new(0x77, 0x6e, 0x65);
const OVERLAY: Rgb = Rgb::new(238, 228, 218);
const TILE_SUPER: Rgb = Rgb::new(0x3c, 0x3a, 0x32);

const HEADER_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 2;
const BOX_W: u16 = 8;

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

/// Background color of a tile.
pub fn tile_color(value: u32) -> Rgb {
    match value {
        2 => Rgb::new(0xee, 0xe4, 0xda),
        4 => Rgb::new(0xed, 0xe0, 0xc8),
        8 => Rgb::new(0xf2, 0xb1, 0x79),
        16 => Rgb::new(0xf5, 0x95, 0x63),
        32 => Rgb::new(0xf6, 0x7c, 0x5f),
        64 => Rgb::new(0xf6, 0x5e, 0x3b),
        128 => Rgb::new(0xed, 0xcf, 0x72),
        256 => Rgb::new(0xed, 0xcc, 0x61),
        512 => Rgb::new(0xed, 0xc8, 0x50),
        1024 => Rgb::new(0xed, 0xc5, 0x3f),
        2048 => Rgb::new(0xed, 0xc2, 0x2e),
        _ => TILE_SUPER,
    }
}

/// Digit color: dark on the two lightest tiles.
pub fn text_color(value: u32) -> Rgb {
    if value <= 4 {
        TEXT_DARK
    } else {
        TEXT_LIGHT
    }
}

/// Screen placement of one frame, computed from the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    x: u16,
    y: u16,
    board_x: u16,
    board_y: u16,
    board_w: u16,
    board_h: u16,
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 roughly squares a tile with typical glyph aspect ratios and
        // leaves room for six digits.
        Self { cell_w: 7, cell_h: 3 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Total columns and rows the view needs.
    pub fn content_size(&self) -> (u16, u16) {
        let (w, h) = self.board_size();
        (w, HEADER_ROWS + h + FOOTER_ROWS)
    }

    fn board_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        (n * self.cell_w + n + 1, n * self.cell_h + n + 1)
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let (content_w, content_h) = self.content_size();
        let (board_w, board_h) = self.board_size();
        let x = viewport.width.saturating_sub(content_w) / 2;
        let y = viewport.height.saturating_sub(content_h) / 2;
        Layout {
            x,
            y,
            board_x: x,
            board_y: y + HEADER_ROWS,
            board_w,
            board_h,
        }
    }

    /// Top-left terminal cell of the tile slot at `pos`.
    pub fn cell_origin(&self, viewport: Viewport, pos: Pos) -> (u16, u16) {
        let l = self.layout(viewport);
        (
            l.board_x + 1 + pos.col as u16 * (self.cell_w + 1),
            l.board_y + 1 + pos.row as u16 * (self.cell_h + 1),
        )
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// `frame` is the sampled animation when a move is in flight; `loading`
    /// is the loader progress while assets are still loading, in which case
    /// the board is replaced by a progress bar.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        frame: Option<&AnimationFrame>,
        loading: Option<f32>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT_DARK, BACKGROUND).into_cell(' '));

        let l = self.layout(viewport);
        self.draw_header(fb, snap, &l);

        let board = CellStyle::new(TEXT_LIGHT, BOARD);
        fb.fill_rect(l.board_x, l.board_y, l.board_w, l.board_h, ' ', board);

        if let Some(progress) = loading {
            self.draw_loading(fb, &l, progress);
            return;
        }

        for row in 0..GRID_SIZE as u8 {
            for col in 0..GRID_SIZE as u8 {
                let (x, y) = self.cell_origin(viewport, Pos::new(row, col));
                let empty = CellStyle::new(TEXT_DARK, EMPTY_CELL);
                fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', empty);
            }
        }

        match frame {
            None => self.draw_settled_tiles(fb, snap, &l),
            Some(frame) => self.draw_animated_tiles(fb, snap, frame, &l),
        }

        self.draw_footer(fb, snap, &l);

        if snap.lost {
            self.draw_game_over(fb, snap, &l);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        frame: Option<&AnimationFrame>,
        loading: Option<f32>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, frame, loading, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: &Layout) {
        let title = CellStyle::new(TEXT_DARK, BACKGROUND).bold();
        fb.put_str(l.x, l.y + 1, "2048", title);

        let score_x = l.x + l.board_w.saturating_sub(BOX_W);
        let best_x = score_x.saturating_sub(BOX_W + 1);
        self.draw_score_box(fb, best_x, l.y, "BEST", snap.best_score);
        self.draw_score_box(fb, score_x, l.y, "SCORE", snap.score);
    }

    fn draw_score_box(&self, fb: &mut FrameBuffer, x: u16, y: u16, label: &str, value: u32) {
        let style = CellStyle::new(TEXT_LIGHT, BOARD).bold();
        fb.fill_rect(x, y, BOX_W, 2, ' ', style);
        fb.put_str_centered(x, y, BOX_W, label, style);
        fb.put_u32_centered(x, y + 1, BOX_W, value, style);
    }

    fn draw_settled_tiles(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: &Layout) {
        for (r, row) in snap.board.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value != 0 {
                    self.draw_tile(fb, l, r as f32, c as f32, value, 1.0);
                }
            }
        }
    }

    /// Draw a move in flight.
    ///
    /// Slide destinations and effect cells are owned by the animation, so
    /// their settled values are hidden. A merge whose partner did not move has
    /// a single arrival; the stationary partner keeps showing until the pulse
    /// takes over. Spawned tiles stay hidden until they start growing.
    fn draw_animated_tiles(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        frame: &AnimationFrame,
        l: &Layout,
    ) {
        for (r, row) in snap.board.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let pos = Pos::new(r as u8, c as u8);
                let arrivals = frame.arrivals(pos);
                match frame.effect_at(pos) {
                    Some(e) if e.kind == EffectKind::Pulse && !e.started && arrivals == 1 => {
                        self.draw_tile(fb, l, r as f32, c as f32, e.value / 2, 1.0);
                    }
                    Some(_) => {}
                    None if arrivals > 0 => {}
                    None => self.draw_tile(fb, l, r as f32, c as f32, value, 1.0),
                }
            }
        }

        for s in &frame.slides {
            self.draw_tile(fb, l, s.row, s.col, s.value, 1.0);
        }

        for e in frame.effects.iter().filter(|e| e.started) {
            self.draw_tile(fb, l, e.cell.row as f32, e.cell.col as f32, e.value, e.scale);
        }
    }

    /// Draw a tile at a fractional cell position, scaled about its center.
    fn draw_tile(&self, fb: &mut FrameBuffer, l: &Layout, row: f32, col: f32, value: u32, scale: f32) {
        let w = (self.cell_w as f32 * scale).round() as i32;
        let h = (self.cell_h as f32 * scale).round() as i32;
        if w <= 0 || h <= 0 {
            return;
        }

        let base_x = (l.board_x + 1) as f32 + col * (self.cell_w + 1) as f32;
        let base_y = (l.board_y + 1) as f32 + row * (self.cell_h + 1) as f32;
        let x = (base_x + (self.cell_w as f32 - w as f32) / 2.0).round() as i32;
        let y = (base_y + (self.cell_h as f32 - h as f32) / 2.0).round() as i32;

        let style = CellStyle::new(text_color(value), tile_color(value)).bold();
        fb.fill_rect_clipped(x, y, w, h, ' ', style);

        let mut digits = [0u8; 10];
        let text = crate::fb::format_u32(value, &mut digits);
        if text.len() as i32 > w || x < 0 || y < 0 {
            return;
        }
        fb.put_str_centered(x as u16, (y + h / 2) as u16, w as u16, text, style);
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: &Layout) {
        let banner_y = l.board_y + l.board_h;
        if snap.won && !snap.lost {
            let banner = CellStyle::new(TEXT_LIGHT, tile_color(2048)).bold();
            fb.fill_rect(l.board_x, banner_y, l.board_w, 1, ' ', banner);
            fb.put_str_centered(l.board_x, banner_y, l.board_w, "You Win! Keep going", banner);
        }

        let hint = CellStyle::new(TEXT_DARK, BACKGROUND);
        fb.put_str_centered(
            l.board_x,
            banner_y + 1,
            l.board_w,
            "Arrows/WASD/HJKL move, q quit",
            hint,
        );
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: &Layout) {
        let style = CellStyle::new(TEXT_DARK, OVERLAY).bold();
        let panel_h = 5;
        let panel_y = l.board_y + (l.board_h - panel_h) / 2;
        fb.fill_rect(l.board_x, panel_y, l.board_w, panel_h, ' ', style);

        let headline = if snap.won { "You Win!" } else { "Game Over!" };
        fb.put_str_centered(l.board_x, panel_y + 1, l.board_w, headline, style);
        fb.put_str_centered(
            l.board_x,
            panel_y + 3,
            l.board_w,
            "Press Enter to Restart",
            style,
        );
    }

    fn draw_loading(&self, fb: &mut FrameBuffer, l: &Layout, progress: f32) {
        let text = CellStyle::new(TEXT_LIGHT, BOARD).bold();
        let mid = l.board_y + l.board_h / 2;
        fb.put_str_centered(l.board_x, mid - 1, l.board_w, "Loading...", text);

        let bar_w = l.board_w.saturating_sub(6);
        let bar_x = l.board_x + 3;
        let filled = (progress.clamp(0.0, 1.0) * bar_w as f32).round() as u16;
        let done = CellStyle::new(tile_color(2048), BOARD);
        let todo = CellStyle::new(EMPTY_CELL, BOARD);
        fb.fill_rect(bar_x, mid + 1, filled, 1, '█', done);
        fb.fill_rect(bar_x + filled, mid + 1, bar_w - filled, 1, '░', todo);
    }
}
