//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. It also answers the
//! reverse question for mouse input: which card sits under a screen cell.

use crate::core::{GameSnapshot, TileSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::TileState;

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

/// Where the board frame lands for a given snapshot and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub start_x: u16,
    pub start_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    columns: u16,
    tiles: usize,
}

const FRAME_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the memory board.
pub struct GameView {
    /// Card width in terminal columns (border included).
    card_w: u16,
    /// Card height in terminal rows (border included).
    card_h: u16,
    /// Blank cells between neighbouring cards.
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 reads roughly square with typical terminal glyph aspect ratio.
        Self {
            card_w: 7,
            card_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardLayout {
        let columns = snap.columns.max(1) as u16;
        let rows = snap.rows() as u16;
        let grid_w = columns * self.card_w + columns.saturating_sub(1) * self.gap;
        let grid_h = rows * self.card_h + rows.saturating_sub(1) * self.gap;
        // Border plus one cell of padding on every side.
        let frame_w = grid_w + 4;
        let frame_h = grid_h + 4;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            start_x,
            start_y,
            frame_w,
            frame_h,
            columns,
            tiles: snap.tiles.len(),
        }
    }

    /// Top-left screen cell of the card at `index`.
    fn card_origin(&self, layout: &BoardLayout, index: usize) -> (u16, u16) {
        let col = (index % layout.columns as usize) as u16;
        let row = (index / layout.columns as usize) as u16;
        (
            layout.start_x + 2 + col * (self.card_w + self.gap),
            layout.start_y + 2 + row * (self.card_h + self.gap),
        )
    }

    /// The card drawn at screen cell (x, y), if any. Gaps and the frame hit nothing.
    pub fn tile_at(&self, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) -> Option<usize> {
        let layout = self.layout(snap, viewport);
        (0..layout.tiles).find(|&index| {
            let (cx, cy) = self.card_origin(&layout, index);
            x >= cx && x < cx + self.card_w && y >= cy && y < cy + self.card_h
        })
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(snap, viewport);
        let bg = CellStyle::new(Rgb::new(80, 80, 90), FRAME_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            layout.start_x + 1,
            layout.start_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            bg,
        );
        fb.draw_box(layout.start_x, layout.start_y, layout.frame_w, layout.frame_h, border);

        for tile in &snap.tiles {
            let (x, y) = self.card_origin(&layout, tile.index);
            self.draw_card(fb, x, y, tile, cursor == Some(tile.index));
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        if snap.won() {
            self.draw_win_overlay(fb, snap, &layout);
        }
        if let Some(message) = &snap.congratulations {
            let style = CellStyle::new(Rgb::new(255, 215, 0), PANEL_BG).bold();
            let y = layout.start_y.saturating_add(layout.frame_h);
            fb.put_str_centered(0, y, viewport.width, message, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, cursor: Option<usize>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, tile: &TileSnapshot, highlighted: bool) {
        let (edge, face_style, fill) = match tile.state {
            TileState::FaceDown => (
                CellStyle::new(Rgb::new(110, 110, 130), FRAME_BG),
                CellStyle::new(Rgb::new(90, 90, 110), FRAME_BG).dim(),
                '░',
            ),
            TileState::FaceUp => (
                CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(50, 60, 110)).bold(),
                CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(50, 60, 110)).bold(),
                ' ',
            ),
            TileState::Matched => (
                CellStyle::new(Rgb::new(100, 220, 120), FRAME_BG),
                CellStyle::new(Rgb::new(100, 220, 120), FRAME_BG),
                ' ',
            ),
        };
        let edge = if highlighted {
            CellStyle {
                fg: Rgb::new(255, 215, 0),
                ..edge
            }
            .bold()
        } else {
            edge
        };

        fb.fill_rect(x + 1, y + 1, self.card_w - 2, self.card_h - 2, fill, face_style);
        fb.draw_box(x, y, self.card_w, self.card_h, edge);

        if let Some(glyph) = tile.face {
            let cx = x + self.card_w / 2;
            let cy = y + self.card_h / 2;
            fb.put_char(cx, cy, glyph, face_style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: &BoardLayout) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let help = value.dim();

        let mut y = layout.start_y;
        for (title, text) in [
            ("MOVES", snap.moves.to_string()),
            ("TIME", snap.timer.clone()),
            ("PAIRS", snap.pairs_text()),
        ] {
            fb.put_str(panel_x, y, title, label);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, &text, value);
            y = y.saturating_add(2);
        }

        for line in ["arrows  move", "enter   flip", "r       restart", "q       quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_win_overlay(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
        let summary = format!(" {} moves in {} ", snap.moves, snap.timer);

        fb.put_str_centered(layout.start_x, mid_y.saturating_sub(1), layout.frame_w, " YOU WON! ", style);
        fb.put_str_centered(layout.start_x, mid_y, layout.frame_w, &summary, style);
        fb.put_str_centered(
            layout.start_x,
            mid_y.saturating_add(1),
            layout.frame_w,
            " press r to play again ",
            style,
        );
    }
}
