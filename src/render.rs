use crate::error::Result;
use crate::grid::Grid;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{stdout, Stdout, Write};

/// A display sink for generations.
pub trait Renderer {
    /// Replaces whatever was displayed with `grid`.
    fn render(&mut self, generation: usize, grid: &Grid) -> Result<()>;
}

fn header(generation: usize, grid: &Grid) -> String {
    format!(
        "Generation: {}\nAlive: {}\n\n",
        generation,
        grid.population()
    )
}

/// Draws to the console, clearing it before every frame.
///
/// The cursor is left visible so that an interrupted run never leaves the terminal without one.
pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
    color: Color,
}

impl TerminalRenderer<Stdout> {
    pub fn new() -> TerminalRenderer<Stdout> {
        TerminalRenderer::with_writer(stdout())
    }
}

impl Default for TerminalRenderer<Stdout> {
    fn default() -> Self {
        TerminalRenderer::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> TerminalRenderer<W> {
        TerminalRenderer {
            out,
            color: Color::Green,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, generation: usize, grid: &Grid) -> Result<()> {
        queue!(
            self.out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(header(generation, grid)),
            SetForegroundColor(self.color),
            Print(grid),
            SetForegroundColor(Color::Reset)
        )?;

        self.out.flush()?;
        Ok(())
    }
}

/// Writes frames as plain text, one after the other.
pub struct TextRenderer<W: Write> {
    writer: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W) -> TextRenderer<W> {
        TextRenderer { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, generation: usize, grid: &Grid) -> Result<()> {
        write!(self.writer, "{}{}", header(generation, grid), grid)?;
        self.writer.flush()?;
        Ok(())
    }
}
