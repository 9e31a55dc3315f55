//! Pattern-driven highlighter
//!
//! Styles are computed per line and cached, one slot per rune. A slot keeps
//! the priority and starting column of the match that styled it so later
//! matches can decide whether they override it.

use super::StyleProvider;
use crate::buffer::LineBuffer;
use crate::color::ColorStyle;
use crate::constants::errors::{
    INVALID_CAPTURE_GROUP, INVALID_KEYWORD, INVALID_PRIORITY, REGEX_COMPILE_ERROR,
    REGEX_PARSE_ERROR,
};
use crate::error::{ErrorType, Result, RiftError};
use monster_regex::{parse_rift_format, Regex};
use tracing::debug;

enum Matcher {
    Pattern(Regex),
    /// Styles capture group `group` of every match
    Group { re: regex::Regex, group: usize },
    Keyword(Vec<char>),
}

struct Mapping {
    matcher: Matcher,
    style: ColorStyle,
    priority: u8,
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    /// Zero while unstyled
    priority: u8,
    begin: usize,
    style: ColorStyle,
}

/// Highlighter over regular expressions and keywords
#[derive(Default)]
pub struct PatternHighlighter {
    mappings: Vec<Mapping>,
    styles: Vec<Vec<Slot>>,
}

fn check_priority(priority: u8) -> Result<()> {
    if priority == 0 {
        return Err(RiftError::new(
            ErrorType::Settings,
            INVALID_PRIORITY,
            "Highlight priority cannot be zero",
        ));
    }
    Ok(())
}

fn is_word_rune(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl PatternHighlighter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular expression rule styling the whole match
    pub fn pattern(&mut self, pattern: &str, style: ColorStyle, priority: u8) -> Result<&mut Self> {
        check_priority(priority)?;
        let (pattern, flags) = parse_rift_format(&format!("{pattern}/")).map_err(|e| {
            RiftError::new(ErrorType::Parse, REGEX_PARSE_ERROR, format!("{:?}", e))
        })?;
        let re = Regex::new(&pattern, flags).map_err(|e| {
            RiftError::new(ErrorType::Parse, REGEX_COMPILE_ERROR, format!("{:?}", e))
        })?;
        self.mappings.push(Mapping {
            matcher: Matcher::Pattern(re),
            style,
            priority,
        });
        Ok(self)
    }

    /// Add a regular expression rule styling only capture group `group`
    ///
    /// Group 0 is the whole match and behaves like [`Self::pattern`]. A
    /// pattern without uppercase letters matches case-insensitively. Matches
    /// in which the group does not participate style nothing.
    pub fn pattern_group(
        &mut self,
        pattern: &str,
        group: usize,
        style: ColorStyle,
        priority: u8,
    ) -> Result<&mut Self> {
        if group == 0 {
            return self.pattern(pattern, style, priority);
        }
        check_priority(priority)?;
        let re = regex::RegexBuilder::new(pattern)
            .case_insensitive(!pattern.chars().any(char::is_uppercase))
            .build()
            .map_err(|e| RiftError::new(ErrorType::Parse, REGEX_COMPILE_ERROR, e.to_string()))?;
        if group >= re.captures_len() {
            return Err(RiftError::new(
                ErrorType::Settings,
                INVALID_CAPTURE_GROUP,
                format!("Pattern {pattern} has no capture group {group}"),
            ));
        }
        self.mappings.push(Mapping {
            matcher: Matcher::Group { re, group },
            style,
            priority,
        });
        Ok(self)
    }

    /// Add a keyword rule; the keyword only matches between non-word runes
    pub fn keyword(&mut self, keyword: &str, style: ColorStyle, priority: u8) -> Result<&mut Self> {
        check_priority(priority)?;
        let word: Vec<char> = keyword.chars().collect();
        if word.is_empty() {
            return Err(RiftError::new(
                ErrorType::Settings,
                INVALID_KEYWORD,
                "Keyword cannot be empty",
            ));
        }
        self.mappings.push(Mapping {
            matcher: Matcher::Keyword(word),
            style,
            priority,
        });
        Ok(self)
    }

    /// Recompute every line of `buffer`
    pub fn analyze(&mut self, buffer: &LineBuffer) {
        self.styles = (0..buffer.line_count())
            .map(|n| self.analyze_line(&buffer.line(n).unwrap_or_default()))
            .collect();
        debug!(
            lines = self.styles.len(),
            rules = self.mappings.len(),
            "analyzed highlighting"
        );
    }

    /// Line `line` now holds `runes`
    pub fn modify_line(&mut self, line: usize, runes: &[char]) {
        if line < self.styles.len() {
            self.styles[line] = self.analyze_line(runes);
        }
    }

    /// A new line holding `runes` was inserted at `line`
    pub fn insert_line(&mut self, line: usize, runes: &[char]) {
        let slots = self.analyze_line(runes);
        self.styles.insert(line.min(self.styles.len()), slots);
    }

    /// Line `line` was removed
    pub fn delete_line(&mut self, line: usize) {
        if line < self.styles.len() {
            self.styles.remove(line);
        }
    }

    /// Number of analyzed lines
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.styles.len()
    }

    fn analyze_line(&self, runes: &[char]) -> Vec<Slot> {
        let mut slots = vec![Slot::default(); runes.len()];
        let text: String = runes.iter().collect();

        for mapping in &self.mappings {
            match &mapping.matcher {
                Matcher::Pattern(re) => {
                    for m in re.find_all(&text) {
                        // Match offsets are bytes
                        let begin = char_offset(&text, m.start);
                        let end = char_offset(&text, m.end);
                        apply(&mut slots, begin, end, mapping);
                    }
                }
                Matcher::Group { re, group } => {
                    for caps in re.captures_iter(&text) {
                        if let Some(m) = caps.get(*group) {
                            let begin = char_offset(&text, m.start());
                            let end = char_offset(&text, m.end());
                            apply(&mut slots, begin, end, mapping);
                        }
                    }
                }
                Matcher::Keyword(word) => {
                    for begin in keyword_hits(runes, word) {
                        apply(&mut slots, begin, begin + word.len(), mapping);
                    }
                }
            }
        }
        slots
    }
}

fn char_offset(text: &str, byte: usize) -> usize {
    text.get(..byte).map_or(byte, |prefix| prefix.chars().count())
}

/// Start columns of every free-standing occurrence of `word`
fn keyword_hits(runes: &[char], word: &[char]) -> Vec<usize> {
    if runes.len() < word.len() {
        return Vec::new();
    }
    (0..=runes.len() - word.len())
        .filter(|&i| runes[i..i + word.len()] == *word)
        .filter(|&i| i == 0 || !is_word_rune(runes[i - 1]))
        .filter(|&i| runes.get(i + word.len()).map_or(true, |&c| !is_word_rune(c)))
        .collect()
}

/// Style columns `begin..end` unless a stronger match already owns them
fn apply(slots: &mut [Slot], begin: usize, end: usize, mapping: &Mapping) {
    let end = end.min(slots.len());
    for slot in &mut slots[begin.min(end)..end] {
        let wins = slot.priority == 0
            || mapping.priority > slot.priority
            || (mapping.priority == slot.priority && begin < slot.begin);
        if wins {
            *slot = Slot {
                priority: mapping.priority,
                begin,
                style: mapping.style,
            };
        }
    }
}

impl StyleProvider for PatternHighlighter {
    fn get_style(&self, line: usize, col: usize) -> ColorStyle {
        self.styles
            .get(line)
            .and_then(|slots| slots.get(col))
            .filter(|slot| slot.priority > 0)
            .map_or_else(ColorStyle::plain, |slot| slot.style)
    }
}
