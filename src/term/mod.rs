//! Terminal surface abstraction
//!
//! A rendering is painted cell by cell onto a `Surface`. The surface decides
//! how cells reach the screen; the crossterm-backed one queues escape
//! sequences on any writer.

//! ## term/ Invariants
//!
//! - Painting never reads or changes the document.
//! - Surfaces are addressed in screen cells, origin top-left.
//! - Every cell of every emitted row is painted; nothing else is.

pub mod crossterm;

pub use self::crossterm::CrosstermSurface;

use crate::color::ColorStyle;
use crate::error::Result;
use crate::viewport::Rendering;

/// Something cells can be painted onto
pub trait Surface {
    /// Put `ch` at column `x` of row `y`
    fn set_cell(&mut self, x: usize, y: usize, ch: char, style: ColorStyle) -> Result<()>;

    /// Place the visible cursor at (`x`, `y`)
    fn show_cursor(&mut self, x: usize, y: usize) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;
}

/// Paint every row of `rendering`, then place or hide the cursor
pub fn paint<S: Surface + ?Sized>(rendering: Rendering, surface: &mut S) -> Result<()> {
    let cursor = rendering.cursor();
    for row in rendering {
        for (x, (&ch, &style)) in row.content.iter().zip(&row.styles).enumerate() {
            surface.set_cell(x, row.row, ch, style)?;
        }
    }
    match cursor {
        Some((x, y)) => surface.show_cursor(x, y),
        None => surface.hide_cursor(),
    }
}
