//! Crossterm-backed surface
//! Queues cursor, colour, and print commands on a writer

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{
        Attribute, Color as CrosstermColor, Print, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
};
use std::io::Write;

use crate::color::ColorStyle;
use crate::constants::errors::RENDER_FAILED;
use crate::error::{ErrorType, Result, RiftError};
use crate::term::Surface;

fn render_error(e: impl std::fmt::Display) -> RiftError {
    RiftError::new(ErrorType::Renderer, RENDER_FAILED, e.to_string())
}

fn cell_coord(n: usize) -> Result<u16> {
    u16::try_from(n).map_err(|_| render_error(format!("Coordinate {n} out of range")))
}

/// Surface writing crossterm commands to `W`
///
/// Commands are only queued; call [`CrosstermSurface::flush`] once a frame
/// is complete.
pub struct CrosstermSurface<W: Write> {
    out: W,
    /// Style of the last painted cell, to skip redundant colour changes
    current: Option<ColorStyle>,
}

impl<W: Write> CrosstermSurface<W> {
    pub fn new(out: W) -> Self {
        CrosstermSurface { out, current: None }
    }

    /// Push queued commands to the writer
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(render_error)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn apply_style(&mut self, style: ColorStyle) -> Result<()> {
        if self.current == Some(style) {
            return Ok(());
        }
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(style.fg.map_or(CrosstermColor::Reset, Into::into)),
            SetBackgroundColor(style.bg.map_or(CrosstermColor::Reset, Into::into)),
        )
        .map_err(render_error)?;
        for attr in style.attributes() {
            queue!(self.out, SetAttribute(attr)).map_err(render_error)?;
        }
        self.current = Some(style);
        Ok(())
    }
}

impl<W: Write> Surface for CrosstermSurface<W> {
    fn set_cell(&mut self, x: usize, y: usize, ch: char, style: ColorStyle) -> Result<()> {
        let (col, row) = (cell_coord(x)?, cell_coord(y)?);
        self.apply_style(style)?;
        queue!(self.out, MoveTo(col, row), Print(ch)).map_err(render_error)
    }

    fn show_cursor(&mut self, x: usize, y: usize) -> Result<()> {
        let (col, row) = (cell_coord(x)?, cell_coord(y)?);
        queue!(self.out, MoveTo(col, row), Show).map_err(render_error)
    }

    fn hide_cursor(&mut self) -> Result<()> {
        queue!(self.out, Hide).map_err(render_error)
    }
}
