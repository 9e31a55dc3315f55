use super::*;
use crate::color::Color;
use crate::test_utils::buffer_from;

fn keyword_style() -> ColorStyle {
    ColorStyle::fg(Color::Magenta).bold()
}

fn number_style() -> ColorStyle {
    ColorStyle::fg(Color::Yellow)
}

fn comment_style() -> ColorStyle {
    ColorStyle::plain().dim()
}

#[test]
fn test_plain_style_is_constant() {
    let provider = PlainStyle(ColorStyle::fg(Color::Green));
    assert_eq!(provider.get_style(0, 0), ColorStyle::fg(Color::Green));
    assert_eq!(provider.get_style(999, 999), ColorStyle::fg(Color::Green));
    assert!(PlainStyle::default().get_style(3, 1).is_plain());
}

#[test]
fn test_empty_rules_give_plain_provider() {
    let buffer = buffer_from(&["let x = 1;"]);
    let rules = HighlightRules::new();
    assert!(rules.is_empty());
    let provider = rules.provider(&buffer).unwrap();
    assert!(provider.get_style(0, 0).is_plain());
}

#[test]
fn test_keyword_matches_whole_words_only() {
    let buffer = buffer_from(&["let letter = let_it(let);", "  let"]);
    let rules = HighlightRules::new().keyword("let", keyword_style(), 1);
    let provider = rules.provider(&buffer).unwrap();

    for col in 0..3 {
        assert_eq!(provider.get_style(0, col), keyword_style());
    }
    // "letter" and "let_it" are different words
    assert!(provider.get_style(0, 4).is_plain());
    assert!(provider.get_style(0, 13).is_plain());
    // "(let)" is delimited by punctuation
    assert_eq!(provider.get_style(0, 20), keyword_style());
    assert_eq!(provider.get_style(1, 2), keyword_style());
    assert!(provider.get_style(1, 1).is_plain());
}

#[test]
fn test_pattern_rule() {
    let buffer = buffer_from(&["x = 42 + 7"]);
    let highlighter = HighlightRules::new()
        .pattern("[0-9]+", number_style(), 1)
        .highlighter(&buffer)
        .unwrap();

    assert!(highlighter.get_style(0, 0).is_plain());
    assert_eq!(highlighter.get_style(0, 4), number_style());
    assert_eq!(highlighter.get_style(0, 5), number_style());
    assert!(highlighter.get_style(0, 6).is_plain());
    assert_eq!(highlighter.get_style(0, 9), number_style());
}

#[test]
fn test_higher_priority_wins() {
    let buffer = buffer_from(&["let # let 12"]);
    let highlighter = HighlightRules::new()
        .pattern("#.*", comment_style(), 2)
        .keyword("let", keyword_style(), 1)
        .pattern("[0-9]+", number_style(), 1)
        .highlighter(&buffer)
        .unwrap();

    assert_eq!(highlighter.get_style(0, 0), keyword_style());
    for col in 4..12 {
        assert_eq!(highlighter.get_style(0, col), comment_style());
    }
}

#[test]
fn test_equal_priority_earlier_match_wins() {
    let buffer = buffer_from(&["abcdef"]);
    let mut highlighter = PatternHighlighter::new();
    highlighter.keyword("abcdef", comment_style(), 1).unwrap();
    highlighter.pattern("cd", number_style(), 1).unwrap();
    highlighter.analyze(&buffer);

    for col in 0..6 {
        assert_eq!(highlighter.get_style(0, col), comment_style());
    }
}

#[test]
fn test_zero_priority_is_rejected() {
    let buffer = buffer_from(&["abc"]);
    let err = HighlightRules::new()
        .keyword("abc", keyword_style(), 0)
        .provider(&buffer)
        .err()
        .unwrap();
    assert_eq!(err.code, "INVALID_PRIORITY");

    let mut highlighter = PatternHighlighter::new();
    assert!(highlighter.pattern("a", number_style(), 0).is_err());
    assert!(highlighter.keyword("", number_style(), 1).is_err());
}

#[test]
fn test_incremental_updates() {
    let buffer = buffer_from(&["fn one", "two", "fn three"]);
    let mut highlighter = HighlightRules::new()
        .keyword("fn", keyword_style(), 1)
        .highlighter(&buffer)
        .unwrap();
    assert_eq!(highlighter.line_count(), 3);
    assert!(highlighter.get_style(1, 0).is_plain());

    highlighter.modify_line(1, &"fn two".chars().collect::<Vec<_>>());
    assert_eq!(highlighter.get_style(1, 0), keyword_style());

    highlighter.insert_line(0, &"// fn".chars().collect::<Vec<_>>());
    assert_eq!(highlighter.line_count(), 4);
    assert_eq!(highlighter.get_style(0, 3), keyword_style());
    assert_eq!(highlighter.get_style(1, 0), keyword_style());

    highlighter.delete_line(0);
    highlighter.delete_line(0);
    assert_eq!(highlighter.line_count(), 2);
    assert_eq!(highlighter.get_style(0, 0), keyword_style());
    assert_eq!(highlighter.get_style(1, 0), keyword_style());

    // Out of range lookups fall back to the default style
    assert!(highlighter.get_style(7, 0).is_plain());
    assert!(highlighter.get_style(0, 99).is_plain());
}

#[test]
fn test_pattern_group_styles_only_the_group() {
    let buffer = buffer_from(&[r#"name = "value" # "x""#]);
    let string_body = ColorStyle::fg(Color::Green);
    let highlighter = HighlightRules::new()
        .pattern_group(r#""([^"]*)""#, 1, string_body, 1)
        .highlighter(&buffer)
        .unwrap();

    // Quotes stay plain, the body is styled
    assert!(highlighter.get_style(0, 7).is_plain());
    for col in 8..13 {
        assert_eq!(highlighter.get_style(0, col), string_body);
    }
    assert!(highlighter.get_style(0, 13).is_plain());
    assert_eq!(highlighter.get_style(0, 18), string_body);
    assert!(highlighter.get_style(0, 17).is_plain());
}

#[test]
fn test_pattern_group_zero_is_whole_match() {
    let buffer = buffer_from(&["a=42;"]);
    let highlighter = HighlightRules::new()
        .pattern_group("=([0-9]+);", 0, number_style(), 1)
        .highlighter(&buffer)
        .unwrap();
    assert!(highlighter.get_style(0, 0).is_plain());
    for col in 1..5 {
        assert_eq!(highlighter.get_style(0, col), number_style());
    }
}

#[test]
fn test_pattern_group_smartcase() {
    let buffer = buffer_from(&["TODO: x", "todo: y"]);
    let highlighter = HighlightRules::new()
        .pattern_group("(todo):", 1, keyword_style(), 1)
        .pattern_group("(DONE):", 1, number_style(), 1)
        .highlighter(&buffer)
        .unwrap();
    assert_eq!(highlighter.get_style(0, 0), keyword_style());
    assert_eq!(highlighter.get_style(1, 3), keyword_style());
    assert!(highlighter.get_style(0, 4).is_plain());
}

#[test]
fn test_pattern_group_must_exist() {
    let mut highlighter = PatternHighlighter::new();
    let err = highlighter
        .pattern_group("a(b)c", 2, number_style(), 1)
        .err()
        .unwrap();
    assert_eq!(err.code, "INVALID_CAPTURE_GROUP");
    assert!(highlighter.pattern_group("a(b", 1, number_style(), 1).is_err());
    assert!(highlighter.pattern_group("a(b)c", 1, number_style(), 0).is_err());
}

#[test]
fn test_equal_priority_ignores_rule_order() {
    let buffer = buffer_from(&["abcdef"]);
    let mut highlighter = PatternHighlighter::new();
    highlighter.pattern("cd", number_style(), 1).unwrap();
    highlighter.keyword("abcdef", comment_style(), 1).unwrap();
    highlighter.analyze(&buffer);

    // The later rule starts earlier on the line, so it takes every column
    for col in 0..6 {
        assert_eq!(highlighter.get_style(0, col), comment_style());
    }
}

#[test]
fn test_higher_priority_overrides_earlier_match() {
    let buffer = buffer_from(&["abcdef"]);
    let mut highlighter = PatternHighlighter::new();
    highlighter.pattern("abcd", number_style(), 1).unwrap();
    highlighter.pattern("cdef", comment_style(), 2).unwrap();
    highlighter.analyze(&buffer);

    // Starting later on the line does not stop a stronger match
    assert_eq!(highlighter.get_style(0, 0), number_style());
    assert_eq!(highlighter.get_style(0, 1), number_style());
    for col in 2..6 {
        assert_eq!(highlighter.get_style(0, col), comment_style());
    }
}
