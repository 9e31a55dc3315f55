//! Viewport: projects a window of the document onto the screen
//!
//! Every render scans a bounded window of buffer lines around the top line,
//! soft-wraps them, emits the rows that fit, and derives the scroll anchors
//! used by the next cursor-driven scroll or page jump.
//!
//! ## viewport/ Invariants
//!
//! - The viewport never mutates buffer contents.
//! - Every emitted row is exactly `width` cells wide.
//! - At most `height` rows are emitted per render.
//! - Anchors are buffer lines, never screen rows.
//! - A page jump or teleport is not overridden by the next render's
//!   autoscroll.

pub mod render;
pub mod wrap;

pub use render::{RenderedRow, Rendering};

use crate::buffer::LineBuffer;
use crate::highlight::StyleProvider;
use crate::history::Position;
use tracing::debug;

/// Buffer lines the viewport's top line jumps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollAnchors {
    /// New top when the cursor moves above the view
    pub scroll_up: usize,
    /// New top when the cursor moves below `bottom_limit`
    pub scroll_down: usize,
    /// Last buffer line still inside the view
    pub bottom_limit: usize,
    pub page_up: usize,
    pub page_down: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Above the top line
    Before,
    /// Upper half of the view
    FirstHalf,
    /// Lower half of the view
    SecondHalf,
    /// Below the view
    After,
}

/// Rows contributed by each line scanned above the view, oldest first
#[derive(Debug, Default)]
struct RowHistory {
    rows: Vec<usize>,
}

impl RowHistory {
    fn push(&mut self, rows: usize) {
        self.rows.push(rows);
    }

    /// How many of the most recent lines it takes to cover `wanted` rows
    fn count_backwards(&self, wanted: usize) -> Option<usize> {
        let mut sum = 0;
        for (count, rows) in self.rows.iter().rev().enumerate() {
            sum += rows;
            if sum >= wanted {
                return Some(count + 1);
            }
        }
        None
    }
}

/// Scroll state of one window onto a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    top_line: usize,
    anchors: Option<ScrollAnchors>,
    suppress_auto_scroll: bool,
}

impl Viewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer line at the top of the view
    #[must_use]
    pub fn start(&self) -> usize {
        self.top_line
    }

    #[must_use]
    pub fn anchors(&self) -> Option<ScrollAnchors> {
        self.anchors
    }

    #[must_use]
    pub fn scroll_up_line(&self) -> Option<usize> {
        self.anchors.map(|a| a.scroll_up)
    }

    #[must_use]
    pub fn scroll_down_line(&self) -> Option<usize> {
        self.anchors.map(|a| a.scroll_down)
    }

    #[must_use]
    pub fn bottom_limit_line(&self) -> Option<usize> {
        self.anchors.map(|a| a.bottom_limit)
    }

    #[must_use]
    pub fn page_up_line(&self) -> Option<usize> {
        self.anchors.map(|a| a.page_up)
    }

    #[must_use]
    pub fn page_down_line(&self) -> Option<usize> {
        self.anchors.map(|a| a.page_down)
    }

    /// Jump one page up; the next render keeps this top line
    pub fn page_up(&mut self) -> usize {
        if let Some(anchors) = self.anchors {
            self.top_line = anchors.page_up;
            self.suppress_auto_scroll = true;
        }
        debug!(top = self.top_line, "page up");
        self.top_line
    }

    /// Jump one page down; the next render keeps this top line
    pub fn page_down(&mut self) -> usize {
        if let Some(anchors) = self.anchors {
            self.top_line = anchors.page_down;
            self.suppress_auto_scroll = true;
        }
        debug!(top = self.top_line, "page down");
        self.top_line
    }

    /// Bring `line` to the top unless it is already in view
    pub fn teleport(&mut self, line: usize) {
        let bottom = self.anchors.map_or(self.top_line, |a| a.bottom_limit);
        if line < self.top_line || line > bottom {
            debug!(from = self.top_line, to = line, "teleport");
            self.top_line = line;
            self.suppress_auto_scroll = true;
        }
    }

    /// Move the top line so that the cursor line is in view
    fn check_translation(&mut self, cursor_line: usize, height: usize) {
        if let Some(anchors) = self.anchors {
            if cursor_line < self.top_line {
                self.top_line = anchors.scroll_up;
            } else if cursor_line > anchors.bottom_limit {
                self.top_line = anchors.scroll_down;
            }
        }

        // Far jumps the half-page anchors cannot reach
        if cursor_line < self.top_line {
            self.top_line = cursor_line;
        } else if cursor_line >= self.top_line + height {
            self.top_line = cursor_line - height / 2;
        }
    }

    /// Render one frame
    ///
    /// Returns at most `height` rows of exactly `width` cells, plus the
    /// screen position of `cursor` when it lands on one of them.
    pub fn render(
        &mut self,
        buffer: &LineBuffer,
        width: usize,
        height: usize,
        cursor: Position,
        styles: &dyn StyleProvider,
    ) -> Rendering {
        if width == 0 || height == 0 {
            return Rendering::empty();
        }

        if self.suppress_auto_scroll {
            self.suppress_auto_scroll = false;
        } else {
            self.check_translation(cursor.line, height);
        }

        let line_count = buffer.line_count();
        let last = line_count - 1;
        let top = self.top_line.min(last);
        self.top_line = top;

        let scan_start = top.saturating_sub(height);
        let scan_end = line_count.min(top + 2 * height + 1);

        let mut state = ScanState::Before;
        let mut history = RowHistory::default();
        let mut rows: Vec<RenderedRow> = Vec::with_capacity(height);
        let mut screen_cursor = None;
        let mut in_view_rows = 0usize;

        let mut scroll_up = 0;
        let mut page_up = 0;
        let mut scroll_down = None;
        let mut page_down = None;

        for line in scan_start..scan_end {
            let runes = buffer.line(line).unwrap_or_default();
            let expanded = wrap::expand_tabs(&runes, line, buffer.tab_size(), styles);

            if state == ScanState::Before {
                if line < top {
                    history.push(wrap::fragment_count(expanded.width(), width));
                    continue;
                }
                state = ScanState::FirstHalf;
                scroll_up = history
                    .count_backwards(height / 2)
                    .map_or(0, |n| top - n);
                page_up = history.count_backwards(height).map_or(0, |n| top - n);
            }

            // A single wrapped line can carry the view past both the half and
            // the full screen mark
            if state == ScanState::FirstHalf && line > top && in_view_rows >= height / 2 {
                state = ScanState::SecondHalf;
                scroll_down = Some(line);
            }
            if in_view_rows >= height {
                state = ScanState::After;
                page_down = Some(line);
                break;
            }

            if line == cursor.line {
                let rendered = expanded.rendered_col(cursor.col);
                let (fragment, x) = wrap::locate(rendered, expanded.width(), width);
                let y = in_view_rows + fragment;
                if y < height {
                    screen_cursor = Some((x, y));
                }
            }

            for (fragment, piece) in wrap::wrap(&expanded, width).into_iter().enumerate() {
                if in_view_rows < height {
                    rows.push(RenderedRow {
                        content: piece.cells,
                        styles: piece.styles,
                        buffer_line: line,
                        fragment,
                        row: in_view_rows,
                    });
                }
                in_view_rows += 1;
            }
        }

        let (bottom_limit, page_down) = match page_down {
            Some(line) => (line - 1, line),
            None => (last + height.saturating_sub(in_view_rows), last),
        };
        let scroll_down = scroll_down.unwrap_or(top + height / 2);
        let anchors = ScrollAnchors {
            scroll_up,
            scroll_down: scroll_down.max(top + 1).min(last),
            bottom_limit,
            page_up,
            page_down: page_down.max(top + 1).min(last),
        };
        self.anchors = Some(anchors);

        debug!(
            width,
            height,
            top,
            scroll_up = anchors.scroll_up,
            scroll_down = anchors.scroll_down,
            bottom_limit = anchors.bottom_limit,
            page_up = anchors.page_up,
            page_down = anchors.page_down,
            ?state,
            "render"
        );

        Rendering::new(rows, screen_cursor)
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
