/// Rendering layer — all terminal I/O lives here.
///
/// The simulation only ever talks to a `Surface`: clear it, fill
/// rectangles on it, present it. `TerminalSurface` is the crossterm one.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Print},
    terminal, QueueableCommand,
};

use crate::entities::{Color, Entity, GameState, Sprite};

pub trait Surface {
    /// Wipe the `width` × `height` pixel region at the origin.
    fn clear(&mut self, width: f32, height: f32) -> std::io::Result<()>;
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color)
        -> std::io::Result<()>;
    /// Make everything drawn since the last clear visible.
    fn present(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// ── Entity drawing ────────────────────────────────────────────────────────────

impl Sprite {
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> std::io::Result<()> {
        surface.fill_rect(self.x, self.y, self.width(), self.height(), self.color)
    }
}

impl Entity {
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> std::io::Result<()> {
        self.sprite().draw(surface)
    }
}

/// Render one complete frame. Entities draw in list order, so later ones
/// end up on top.
pub fn render<S: Surface + ?Sized>(surface: &mut S, state: &GameState) -> std::io::Result<()> {
    surface.clear(state.width, state.height)?;
    for entity in &state.entities {
        entity.draw(surface)?;
    }
    surface.present()
}

// ── Terminal surface ──────────────────────────────────────────────────────────

const FILL: &str = "█";

fn terminal_color(color: Color) -> style::Color {
    match color {
        Color::Blue => style::Color::Blue,
        Color::Green => style::Color::Green,
    }
}

/// A pixel surface over a grid of `cols` × `rows` character cells, each
/// covering `cell_width` × `cell_height` pixels.
pub struct TerminalSurface<W: Write> {
    out: W,
    cell_width: f32,
    cell_height: f32,
    cols: u16,
    rows: u16,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, cell_width: f32, cell_height: f32, cols: u16, rows: u16) -> Self {
        assert!(
            cell_width > 0.0 && cell_height > 0.0,
            "cell size must be positive, got {cell_width}x{cell_height}"
        );
        Self {
            out,
            cell_width,
            cell_height,
            cols,
            rows,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Cells touched by the pixel span `[start, start + len)`, clipped to
    /// `[0, limit)`.
    fn cell_span(start: f32, len: f32, cell: f32, limit: u16) -> (u16, u16) {
        let first = (start / cell).floor().max(0.0);
        let last = ((start + len) / cell).ceil().min(limit as f32);
        if last <= first {
            return (0, 0);
        }
        (first as u16, last as u16)
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self, _width: f32, _height: f32) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> std::io::Result<()> {
        let (col0, col1) = Self::cell_span(x, width, self.cell_width, self.cols);
        let (row0, row1) = Self::cell_span(y, height, self.cell_height, self.rows);
        if col0 == col1 || row0 == row1 {
            return Ok(());
        }

        let line = FILL.repeat((col1 - col0) as usize);
        self.out.queue(style::SetForegroundColor(terminal_color(color)))?;
        for row in row0..row1 {
            self.out.queue(cursor::MoveTo(col0, row))?;
            self.out.queue(Print(&line))?;
        }
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}
