//! Render output

use crate::color::ColorStyle;

/// One terminal row produced by a render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Exactly `width` cells
    pub content: Vec<char>,
    /// Style of each cell in `content`
    pub styles: Vec<ColorStyle>,
    /// Buffer line this row belongs to
    pub buffer_line: usize,
    /// Which wrapped fragment of `buffer_line` this is
    pub fragment: usize,
    /// Screen row, counted from the top of the viewport
    pub row: usize,
}

impl RenderedRow {
    #[must_use]
    pub fn text(&self) -> String {
        self.content.iter().collect()
    }
}

/// Rows of one frame, handed out once in top-to-bottom order
#[derive(Debug)]
pub struct Rendering {
    rows: std::vec::IntoIter<RenderedRow>,
    cursor: Option<(usize, usize)>,
}

impl Rendering {
    pub(crate) fn new(rows: Vec<RenderedRow>, cursor: Option<(usize, usize)>) -> Self {
        Rendering {
            rows: rows.into_iter(),
            cursor,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(Vec::new(), None)
    }

    /// Screen `(x, y)` of the cursor, if it is on one of the rows
    #[must_use]
    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }
}

impl Iterator for Rendering {
    type Item = RenderedRow;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for Rendering {}
