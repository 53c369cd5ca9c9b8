//! TerminalRenderer: presents framebuffers on the real terminal.
//!
//! A flip repaints one card, i.e. a narrow strip on a few rows, and the timer
//! repaints a handful of cells in the side panel. Frames are therefore
//! compared row by row and only the span between the first and last changed
//! cell of each row is rewritten. A size change forces a full repaint.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
    QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    out: Stdout,
    /// What the terminal currently shows.
    front: Option<FrameBuffer>,
    scratch: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            front: None,
            scratch: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor and mouse reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.scratch.clear();
        self.scratch
            .queue(EnterAlternateScreen)?
            .queue(Hide)?
            .queue(DisableLineWrap)?
            .queue(EnableMouseCapture)?;
        self.flush()
    }

    /// Undo everything [`Self::enter`] did.
    pub fn exit(&mut self) -> Result<()> {
        self.scratch.clear();
        self.scratch
            .queue(DisableMouseCapture)?
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(EnableLineWrap)?
            .queue(Show)?
            .queue(LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next frame (after a resize).
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// Show `fb`, writing only what differs from the previous frame.
    ///
    /// The presented frame is kept for the next diff and `fb` receives the
    /// previous allocation, so callers keep a single buffer alive.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.scratch.clear();
        match &self.front {
            Some(front) => encode_diff_into(front, fb, &mut self.scratch)?,
            None => encode_full_into(fb, &mut self.scratch)?,
        }
        if !self.scratch.is_empty() {
            self.flush()?;
        }

        let back = self
            .front
            .take()
            .unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        self.front = Some(std::mem::replace(fb, back));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.scratch)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Clear the screen and paint every cell of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(Clear(ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            pen.print(out, cell.ch, cell.style)?;
        }
    }
    pen.finish(out)
}

/// Paint the changed span of each row of `next` into `out`.
///
/// Emits nothing when the frames are identical. Frames of different sizes
/// fall back to a full repaint.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let Some((start, end)) = changed_span(prev, next, y) else {
            continue;
        };
        out.queue(MoveTo(start, y))?;
        for x in start..end {
            let cell = next.get(x, y).unwrap_or_default();
            pen.print(out, cell.ch, cell.style)?;
        }
    }
    pen.finish(out)
}

/// `[start, end)` covering every cell of row `y` that differs, if any.
fn changed_span(prev: &FrameBuffer, next: &FrameBuffer, y: u16) -> Option<(u16, u16)> {
    let differs = |x: u16| prev.get(x, y) != next.get(x, y);
    let start = (0..next.width()).find(|&x| differs(x))?;
    let last = (start..next.width()).rev().find(|&x| differs(x))?;
    Some((start, last + 1))
}

/// Remembers the terminal's active style so unchanged styles are not re-sent.
#[derive(Default)]
struct Pen {
    active: Option<CellStyle>,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, ch: char, style: CellStyle) -> Result<()> {
        match self.active {
            Some(active) if active == style => {}
            Some(active) if active.bold == style.bold && active.dim == style.dim => {
                out.queue(SetColors(colors(style)))?;
            }
            _ => {
                // Attribute::Reset also clears colors, so colors go last.
                out.queue(SetAttribute(Attribute::Reset))?;
                if style.bold {
                    out.queue(SetAttribute(Attribute::Bold))?;
                }
                if style.dim {
                    out.queue(SetAttribute(Attribute::Dim))?;
                }
                out.queue(SetColors(colors(style)))?;
            }
        }
        self.active = Some(style);
        out.queue(Print(ch))?;
        Ok(())
    }

    /// Leave the terminal in its default style if anything was printed.
    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.active.is_some() {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn colors(style: CellStyle) -> Colors {
    Colors::new(rgb(style.fg), rgb(style.bg))
}

fn rgb(c: Rgb) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}
