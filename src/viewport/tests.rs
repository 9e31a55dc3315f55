use super::*;
use crate::color::{Color, ColorStyle};
use crate::config::Config;
use crate::highlight::PlainStyle;
use crate::test_utils::buffer_from;

fn plain() -> PlainStyle {
    PlainStyle::default()
}

fn numbered(count: usize) -> LineBuffer {
    let lines: Vec<Vec<char>> = (0..count)
        .map(|n| format!("line {n}").chars().collect())
        .collect();
    LineBuffer::from_lines(lines, Config::default())
}

fn texts(rendering: Rendering) -> Vec<String> {
    rendering.map(|row| row.text()).collect()
}

/// Styles the first rune of every line
struct FirstColumn;

impl StyleProvider for FirstColumn {
    fn get_style(&self, _line: usize, col: usize) -> ColorStyle {
        if col == 0 {
            ColorStyle::fg(Color::Red)
        } else {
            ColorStyle::plain()
        }
    }
}

// =============================================================================
// Row production
// =============================================================================

#[test]
fn test_render_zero_dimensions() {
    let buffer = buffer_from(&["abc"]);
    let mut viewport = Viewport::new();

    let rendering = viewport.render(&buffer, 0, 10, Position::new(0, 0), &plain());
    assert_eq!(rendering.len(), 0);
    assert_eq!(rendering.cursor(), None);

    let rendering = viewport.render(&buffer, 10, 0, Position::new(0, 0), &plain());
    assert_eq!(rendering.len(), 0);
    assert_eq!(viewport.anchors(), None);
}

#[test]
fn test_render_short_document() {
    let buffer = buffer_from(&["a", "bb"]);
    let mut viewport = Viewport::new();
    let rendering = viewport.render(&buffer, 5, 4, Position::new(1, 1), &plain());

    assert_eq!(rendering.cursor(), Some((1, 1)));
    let rows: Vec<RenderedRow> = rendering.collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].text(), "a    ");
    assert_eq!(rows[1].text(), "bb   ");
    assert_eq!(rows[1].buffer_line, 1);
    assert_eq!(rows[1].row, 1);

    assert_eq!(
        viewport.anchors(),
        Some(ScrollAnchors {
            scroll_up: 0,
            scroll_down: 1,
            bottom_limit: 3,
            page_up: 0,
            page_down: 1,
        })
    );
}

#[test]
fn test_wrap_two_and_a_half_widths() {
    let buffer = buffer_from(&["abcdefghij"]);
    let mut viewport = Viewport::new();
    let rows: Vec<RenderedRow> = viewport
        .render(&buffer, 4, 5, Position::new(0, 0), &plain())
        .collect();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].text(), "abcd");
    assert_eq!(rows[1].text(), "efgh");
    assert_eq!(rows[2].text(), "ij  ");
    assert!(rows.iter().all(|r| r.buffer_line == 0));
    assert_eq!(
        rows.iter().map(|r| r.fragment).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
}

#[test]
fn test_empty_line_is_one_blank_row() {
    let buffer = buffer_from(&["", "x"]);
    let mut viewport = Viewport::new();
    let rendering = viewport.render(&buffer, 3, 5, Position::new(0, 0), &plain());
    assert_eq!(rendering.cursor(), Some((0, 0)));
    assert_eq!(texts(rendering), vec!["   ", "x  "]);
}

#[test]
fn test_tabs_expand_to_tab_size() {
    let buffer = buffer_from(&["\tx", "a\tb"]);
    let mut viewport = Viewport::new();
    let rendering = viewport.render(&buffer, 8, 5, Position::new(0, 1), &plain());
    assert_eq!(rendering.cursor(), Some((4, 0)));
    assert_eq!(texts(rendering), vec!["    x   ", "a    b  "]);

    let buffer = LineBuffer::from_lines(
        vec!["\t\tz".chars().collect()],
        Config::new().with_tab_size(2),
    );
    let rendering = viewport.render(&buffer, 6, 5, Position::new(0, 2), &plain());
    assert_eq!(rendering.cursor(), Some((4, 0)));
    assert_eq!(texts(rendering), vec!["    z "]);
}

#[test]
fn test_cursor_on_wrapped_line() {
    let buffer = buffer_from(&["abcdefgh", "abcd"]);
    let mut viewport = Viewport::new();

    let rendering = viewport.render(&buffer, 4, 5, Position::new(0, 5), &plain());
    assert_eq!(rendering.cursor(), Some((1, 1)));

    // End of a line that fills its last row exactly
    let rendering = viewport.render(&buffer, 4, 5, Position::new(1, 4), &plain());
    assert_eq!(rendering.cursor(), Some((3, 2)));
    let rendering = viewport.render(&buffer, 4, 5, Position::new(0, 8), &plain());
    assert_eq!(rendering.cursor(), Some((3, 1)));
}

#[test]
fn test_rows_never_exceed_height() {
    let long = "x".repeat(100);
    let buffer = buffer_from(&[long.as_str(), "after"]);
    let mut viewport = Viewport::new();
    let rendering = viewport.render(&buffer, 10, 3, Position::new(0, 95), &plain());
    assert_eq!(rendering.cursor(), None);
    assert_eq!(rendering.len(), 3);
}

#[test]
fn test_styles_follow_buffer_columns() {
    let buffer = buffer_from(&["\tab"]);
    let mut viewport = Viewport::new();
    let rows: Vec<RenderedRow> = viewport
        .render(&buffer, 8, 2, Position::new(0, 0), &FirstColumn)
        .collect();

    let red = ColorStyle::fg(Color::Red);
    assert_eq!(&rows[0].styles[..4], &[red; 4]);
    assert!(rows[0].styles[4..].iter().all(ColorStyle::is_plain));
    assert_eq!(rows[0].styles.len(), 8);
}

// =============================================================================
// Scroll anchors
// =============================================================================

#[test]
fn test_anchors_on_long_document() {
    let buffer = numbered(100);
    let mut viewport = Viewport::new();
    let rendering = viewport.render(&buffer, 10, 10, Position::new(0, 0), &plain());

    let rows: Vec<RenderedRow> = rendering.collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].buffer_line, 0);
    assert_eq!(rows[9].buffer_line, 9);

    assert_eq!(viewport.scroll_up_line(), Some(0));
    assert_eq!(viewport.scroll_down_line(), Some(5));
    assert_eq!(viewport.bottom_limit_line(), Some(9));
    assert_eq!(viewport.page_up_line(), Some(0));
    assert_eq!(viewport.page_down_line(), Some(10));
}

#[test]
fn test_anchors_before_first_render() {
    let viewport = Viewport::new();
    assert_eq!(viewport.start(), 0);
    assert_eq!(viewport.scroll_up_line(), None);
    assert_eq!(viewport.page_down_line(), None);
}

#[test]
fn test_anchors_count_wrapped_rows() {
    let long = "y".repeat(25);
    let buffer = buffer_from(&[long.as_str(); 4]);
    let mut viewport = Viewport::new();
    let rendering = viewport.render(&buffer, 10, 6, Position::new(0, 0), &plain());
    assert_eq!(rendering.len(), 6);

    assert_eq!(viewport.scroll_down_line(), Some(1));
    assert_eq!(viewport.bottom_limit_line(), Some(1));
    assert_eq!(viewport.page_down_line(), Some(2));
}

#[test]
fn test_scroll_down_anchor_when_one_line_fills_the_view() {
    let long = "x".repeat(200);
    let mut lines = vec!["a".to_string(), long];
    lines.extend((2..30).map(|n| format!("l{n}")));
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let buffer = buffer_from(&refs);

    let mut viewport = Viewport::new();
    viewport.render(&buffer, 10, 10, Position::new(0, 0), &plain());
    assert_eq!(viewport.bottom_limit_line(), Some(1));
    assert_eq!(viewport.page_down_line(), Some(2));
    // Never beyond the page-down anchor
    assert_eq!(viewport.scroll_down_line(), Some(2));
}

#[test]
fn test_cursor_below_view_scrolls_half_page() {
    let buffer = numbered(100);
    let mut viewport = Viewport::new();
    viewport.render(&buffer, 10, 10, Position::new(0, 0), &plain());

    let rendering = viewport.render(&buffer, 10, 10, Position::new(10, 0), &plain());
    assert_eq!(viewport.start(), 5);
    assert_eq!(rendering.cursor(), Some((0, 5)));
    assert_eq!(viewport.scroll_up_line(), Some(0));
    assert_eq!(viewport.scroll_down_line(), Some(10));
    assert_eq!(viewport.bottom_limit_line(), Some(14));
    assert_eq!(viewport.page_down_line(), Some(15));
}

#[test]
fn test_cursor_above_view_scrolls_half_page() {
    let buffer = numbered(100);
    let mut viewport = Viewport::new();
    viewport.teleport(40);
    viewport.render(&buffer, 10, 10, Position::new(40, 0), &plain());
    assert_eq!(viewport.start(), 40);
    assert_eq!(viewport.scroll_up_line(), Some(35));
    assert_eq!(viewport.page_up_line(), Some(30));

    let rendering = viewport.render(&buffer, 10, 10, Position::new(39, 0), &plain());
    assert_eq!(viewport.start(), 35);
    assert_eq!(rendering.cursor(), Some((0, 4)));
}

#[test]
fn test_cursor_inside_view_does_not_scroll() {
    let buffer = numbered(100);
    let mut viewport = Viewport::new();
    for line in 0..10 {
        viewport.render(&buffer, 10, 10, Position::new(line, 0), &plain());
        assert_eq!(viewport.start(), 0);
    }
}

#[test]
fn test_far_jump_recentres() {
    let buffer = numbered(100);
    let mut viewport = Viewport::new();
    viewport.render(&buffer, 10, 10, Position::new(0, 0), &plain());

    let rendering = viewport.render(&buffer, 10, 10, Position::new(60, 0), &plain());
    assert_eq!(viewport.start(), 55);
    assert_eq!(rendering.cursor(), Some((0, 5)));

    let rendering = viewport.render(&buffer, 10, 10, Position::new(3, 0), &plain());
    assert_eq!(viewport.start(), 3);
    assert_eq!(rendering.cursor(), Some((0, 0)));
}

#[test]
fn test_page_down_then_up() {
    let buffer = numbered(100);
    let mut viewport = Viewport::new();
    viewport.render(&buffer, 10, 10, Position::new(0, 0), &plain());

    assert_eq!(viewport.page_down(), 10);
    // The cursor is left behind, yet the page jump sticks
    let rendering = viewport.render(&buffer, 10, 10, Position::new(0, 0), &plain());
    assert_eq!(viewport.start(), 10);
    assert_eq!(rendering.cursor(), None);
    assert_eq!(viewport.page_up_line(), Some(0));

    assert_eq!(viewport.page_up(), 0);
    viewport.render(&buffer, 10, 10, Position::new(10, 0), &plain());
    assert_eq!(viewport.start(), 0);
}

#[test]
fn test_page_down_near_end_clamps() {
    let buffer = numbered(12);
    let mut viewport = Viewport::new();
    viewport.render(&buffer, 10, 10, Position::new(0, 0), &plain());
    assert_eq!(viewport.page_down_line(), Some(10));

    viewport.page_down();
    let rendering = viewport.render(&buffer, 10, 10, Position::new(10, 0), &plain());
    assert_eq!(rendering.len(), 2);
    assert_eq!(viewport.page_down_line(), Some(11));
    assert_eq!(viewport.bottom_limit_line(), Some(19));
}

#[test]
fn test_page_without_render_keeps_top() {
    let mut viewport = Viewport::new();
    assert_eq!(viewport.page_down(), 0);
    assert_eq!(viewport.page_up(), 0);
}

#[test]
fn test_teleport_only_moves_when_out_of_view() {
    let buffer = numbered(100);
    let mut viewport = Viewport::new();
    viewport.render(&buffer, 10, 10, Position::new(0, 0), &plain());

    viewport.teleport(7);
    assert_eq!(viewport.start(), 0);
    // Not suppressed, so the cursor still drives the next render
    viewport.render(&buffer, 10, 10, Position::new(12, 0), &plain());
    assert_eq!(viewport.start(), 5);

    viewport.teleport(50);
    assert_eq!(viewport.start(), 50);
    viewport.render(&buffer, 10, 10, Position::new(12, 0), &plain());
    assert_eq!(viewport.start(), 50);
}

#[test]
fn test_top_line_clamped_to_document() {
    let buffer = numbered(100);
    let mut viewport = Viewport::new();
    viewport.teleport(500);
    let rendering = viewport.render(&buffer, 10, 10, Position::new(99, 0), &plain());
    assert_eq!(viewport.start(), 99);
    assert_eq!(rendering.len(), 1);
    assert_eq!(rendering.cursor(), Some((0, 0)));
}

#[test]
fn test_row_history_counts_backwards() {
    let mut history = RowHistory::default();
    assert_eq!(history.count_backwards(1), None);
    history.push(1);
    history.push(3);
    history.push(2);
    assert_eq!(history.count_backwards(2), Some(1));
    assert_eq!(history.count_backwards(4), Some(2));
    assert_eq!(history.count_backwards(6), Some(3));
    assert_eq!(history.count_backwards(7), None);
}

// =============================================================================
// Wrapping helpers
// =============================================================================

#[test]
fn test_fragment_count() {
    assert_eq!(wrap::fragment_count(0, 4), 1);
    assert_eq!(wrap::fragment_count(4, 4), 1);
    assert_eq!(wrap::fragment_count(5, 4), 2);
    assert_eq!(wrap::fragment_count(10, 4), 3);
}

#[test]
fn test_expanded_columns() {
    let runes: Vec<char> = "a\tb".chars().collect();
    let expanded = wrap::expand_tabs(&runes, 0, 4, &plain());
    assert_eq!(expanded.columns, vec![0, 1, 5, 6]);
    assert_eq!(expanded.rendered_col(2), 5);
    assert_eq!(expanded.rendered_col(99), 6);
}
