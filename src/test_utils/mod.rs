//! Test utilities
//! Shared testing helpers and mocks

use std::collections::BTreeMap;

use crate::buffer::LineBuffer;
use crate::color::ColorStyle;
use crate::config::Config;
use crate::error::Result;
use crate::term::Surface;

/// Document with the default configuration holding `lines`
pub fn buffer_from(lines: &[&str]) -> LineBuffer {
    LineBuffer::from_lines(
        lines.iter().map(|l| l.chars().collect()).collect(),
        Config::default(),
    )
}

/// Every line of `buffer` as a string
pub fn lines_of(buffer: &LineBuffer) -> Vec<String> {
    (0..buffer.line_count())
        .filter_map(|n| buffer.line_string(n))
        .collect()
}

/// Surface that records painted cells instead of drawing them
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub cells: BTreeMap<(usize, usize), (char, ColorStyle)>,
    pub cursor: Option<(usize, usize)>,
    pub writes: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters painted on row `y`, left to right
    pub fn row_text(&self, y: usize) -> String {
        self.cells
            .iter()
            .filter(|((_, row), _)| *row == y)
            .map(|(_, (ch, _))| *ch)
            .collect()
    }

    pub fn style_at(&self, x: usize, y: usize) -> Option<ColorStyle> {
        self.cells.get(&(x, y)).map(|(_, style)| *style)
    }
}

impl Surface for RecordingSurface {
    fn set_cell(&mut self, x: usize, y: usize, ch: char, style: ColorStyle) -> Result<()> {
        self.cells.insert((x, y), (ch, style));
        self.writes += 1;
        Ok(())
    }

    fn show_cursor(&mut self, x: usize, y: usize) -> Result<()> {
        self.cursor = Some((x, y));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.cursor = None;
        Ok(())
    }
}
