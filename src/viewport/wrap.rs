//! Tab expansion and soft-wrapping of a single buffer line

use crate::color::ColorStyle;
use crate::highlight::StyleProvider;

/// A buffer line after tab expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedLine {
    /// Rendered cells
    pub cells: Vec<char>,
    /// Style of every rendered cell
    pub styles: Vec<ColorStyle>,
    /// Rendered column where each buffer column starts; one extra entry for
    /// the end-of-line position
    pub columns: Vec<usize>,
}

impl ExpandedLine {
    /// Rendered column of buffer column `col`, clamped to the end of line
    #[must_use]
    pub fn rendered_col(&self, col: usize) -> usize {
        let last = self.columns.len() - 1;
        self.columns[col.min(last)]
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.len()
    }
}

/// Expand every tab to `tab_size` blank cells and look up styles
///
/// A tab's blank cells all carry the style of the tab itself.
#[must_use]
pub fn expand_tabs(
    runes: &[char],
    line: usize,
    tab_size: usize,
    styles: &dyn StyleProvider,
) -> ExpandedLine {
    let mut expanded = ExpandedLine {
        cells: Vec::with_capacity(runes.len()),
        styles: Vec::with_capacity(runes.len()),
        columns: Vec::with_capacity(runes.len() + 1),
    };

    for (col, &rune) in runes.iter().enumerate() {
        expanded.columns.push(expanded.cells.len());
        let style = styles.get_style(line, col);
        if rune == '\t' {
            for _ in 0..tab_size {
                expanded.cells.push(' ');
                expanded.styles.push(style);
            }
        } else {
            expanded.cells.push(rune);
            expanded.styles.push(style);
        }
    }
    expanded.columns.push(expanded.cells.len());
    expanded
}

/// Rows a line of `len` cells occupies at `width`; empty lines still take one
#[must_use]
pub fn fragment_count(len: usize, width: usize) -> usize {
    len.div_ceil(width).max(1)
}

/// One screen row's worth of a wrapped line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub cells: Vec<char>,
    pub styles: Vec<ColorStyle>,
}

/// Cut an expanded line into rows of exactly `width` cells, padding the last
#[must_use]
pub fn wrap(expanded: &ExpandedLine, width: usize) -> Vec<Fragment> {
    let len = expanded.width();
    (0..fragment_count(len, width))
        .map(|i| {
            let start = i * width;
            let end = (start + width).min(len);
            let mut cells = expanded.cells[start.min(len)..end].to_vec();
            let mut styles = expanded.styles[start.min(len)..end].to_vec();
            cells.resize(width, ' ');
            styles.resize(width, ColorStyle::plain());
            Fragment { cells, styles }
        })
        .collect()
}

/// Fragment index and in-fragment column of rendered column `rendered`
///
/// The end-of-line position of a line that exactly fills its last row stays
/// on that row, in its last cell.
#[must_use]
pub fn locate(rendered: usize, len: usize, width: usize) -> (usize, usize) {
    if rendered > 0 && rendered == len && rendered % width == 0 {
        return (rendered / width - 1, width - 1);
    }
    (rendered / width, rendered % width)
}
