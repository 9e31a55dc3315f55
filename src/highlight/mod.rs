//! Highlighting
//!
//! The viewport asks a `StyleProvider` for the style of every rendered
//! column. Which provider a document gets is decided once, when it is
//! opened: without any rules it is a constant `PlainStyle`, otherwise an
//! analyzed `PatternHighlighter`.

pub mod pattern;

pub use pattern::PatternHighlighter;

use crate::buffer::LineBuffer;
use crate::color::ColorStyle;
use crate::error::Result;

/// Style lookup by buffer position
pub trait StyleProvider {
    /// Style of the rune at (`line`, `col`); positions the provider knows
    /// nothing about get the default style
    fn get_style(&self, line: usize, col: usize) -> ColorStyle;
}

/// Provider that styles every position the same
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainStyle(pub ColorStyle);

impl StyleProvider for PlainStyle {
    fn get_style(&self, _line: usize, _col: usize) -> ColorStyle {
        self.0
    }
}

/// A regular expression and the style of what it matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRule {
    pub pattern: String,
    /// Capture group to style; 0 styles the whole match
    pub group: usize,
    pub style: ColorStyle,
    pub priority: u8,
}

/// A literal word, styled only where it stands alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub keyword: String,
    pub style: ColorStyle,
    pub priority: u8,
}

/// Highlighting rules for one kind of document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightRules {
    pub patterns: Vec<PatternRule>,
    pub keywords: Vec<KeywordRule>,
}

impl HighlightRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pattern(self, pattern: &str, style: ColorStyle, priority: u8) -> Self {
        self.pattern_group(pattern, 0, style, priority)
    }

    /// Pattern rule that styles only capture group `group` of each match
    #[must_use]
    pub fn pattern_group(
        mut self,
        pattern: &str,
        group: usize,
        style: ColorStyle,
        priority: u8,
    ) -> Self {
        self.patterns.push(PatternRule {
            pattern: pattern.to_string(),
            group,
            style,
            priority,
        });
        self
    }

    #[must_use]
    pub fn keyword(mut self, keyword: &str, style: ColorStyle, priority: u8) -> Self {
        self.keywords.push(KeywordRule {
            keyword: keyword.to_string(),
            style,
            priority,
        });
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty() && self.keywords.is_empty()
    }

    /// Build the style provider for `buffer`
    pub fn provider(&self, buffer: &LineBuffer) -> Result<Box<dyn StyleProvider>> {
        if self.is_empty() {
            return Ok(Box::new(PlainStyle::default()));
        }
        Ok(Box::new(self.highlighter(buffer)?))
    }

    /// Compile every rule and analyze `buffer`
    pub fn highlighter(&self, buffer: &LineBuffer) -> Result<PatternHighlighter> {
        let mut highlighter = PatternHighlighter::new();
        for rule in &self.patterns {
            highlighter.pattern_group(&rule.pattern, rule.group, rule.style, rule.priority)?;
        }
        for rule in &self.keywords {
            highlighter.keyword(&rule.keyword, rule.style, rule.priority)?;
        }
        highlighter.analyze(buffer);
        Ok(highlighter)
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
