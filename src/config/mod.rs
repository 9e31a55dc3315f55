//! Editing configuration
//!
//! `Config` is an explicit value handed to a `LineBuffer` at construction.
//! Options can be changed by name through a declarative descriptor table, the
//! same way a `:set tabsize=8` command would.
//!
//! ## config/ Invariants
//!
//! - `tab_size` is always within `1..=MAX_TAB_SIZE`.
//! - Word delimiters are never empty.

pub mod descriptor;
pub mod registry;

pub use descriptor::{SettingDescriptor, SettingError, SettingSetter, SettingType, SettingValue};
pub use registry::SettingsRegistry;

use crate::constants::text::{DEFAULT_TAB_SIZE, DEFAULT_WORD_DELIMITERS, MAX_TAB_SIZE};

/// Tab and word-boundary behaviour of a document
///
/// Fields only change through the builders and [`Config::set`], which keep
/// them valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Columns a tab expands to when rendered, and spaces removed by detabulation
    tab_size: usize,
    /// Whether the Tab key inserts spaces instead of a tab rune
    expand_tabs: bool,
    /// Runes separating words
    word_delimiters: Vec<char>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tab_size: DEFAULT_TAB_SIZE,
            expand_tabs: false,
            word_delimiters: DEFAULT_WORD_DELIMITERS.chars().collect(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style tab size override
    #[must_use]
    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size.clamp(1, MAX_TAB_SIZE);
        self
    }

    #[must_use]
    pub fn with_expand_tabs(mut self, expand_tabs: bool) -> Self {
        self.expand_tabs = expand_tabs;
        self
    }

    /// Builder-style delimiter override
    #[must_use]
    pub fn with_word_delimiters(mut self, delimiters: &str) -> Self {
        if !delimiters.is_empty() {
            self.word_delimiters = delimiters.chars().collect();
        }
        self
    }

    #[must_use]
    pub fn tab_size(&self) -> usize {
        self.tab_size
    }

    #[must_use]
    pub fn expand_tabs(&self) -> bool {
        self.expand_tabs
    }

    #[must_use]
    pub fn word_delimiters(&self) -> &[char] {
        &self.word_delimiters
    }

    #[must_use]
    pub fn is_word_delimiter(&self, c: char) -> bool {
        self.word_delimiters.contains(&c)
    }

    /// Runes the Tab key should insert
    #[must_use]
    pub fn indent_runes(&self) -> Vec<char> {
        if self.expand_tabs {
            vec![' '; self.tab_size]
        } else {
            vec!['\t']
        }
    }

    /// Change an option by name (canonical, alias, or unique prefix)
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), SettingError> {
        settings_registry().apply(self, name, value)
    }
}

fn set_tab_size(config: &mut Config, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Integer(n) => {
            config.tab_size = n;
            Ok(())
        }
        _ => Err(SettingError::ValidationError(
            "Expected integer".to_string(),
        )),
    }
}

fn set_expand_tabs(config: &mut Config, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Bool(b) => {
            config.expand_tabs = b;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected boolean".to_string())),
    }
}

fn set_word_delimiters(config: &mut Config, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Text(s) => {
            config.word_delimiters = s.chars().collect();
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected text".to_string())),
    }
}

static CONFIG_SETTINGS: &[SettingDescriptor<Config>] = &[
    SettingDescriptor {
        name: "tabsize",
        aliases: &["ts"],
        ty: SettingType::Integer {
            min: Some(1),
            max: Some(MAX_TAB_SIZE),
        },
        set: set_tab_size,
    },
    SettingDescriptor {
        name: "expandtabs",
        aliases: &["et"],
        ty: SettingType::Boolean,
        set: set_expand_tabs,
    },
    SettingDescriptor {
        name: "worddelimiters",
        aliases: &["wd"],
        ty: SettingType::Text { allow_empty: false },
        set: set_word_delimiters,
    },
];

/// Registry over every `Config` option
#[must_use]
pub fn settings_registry() -> SettingsRegistry<Config> {
    SettingsRegistry::new(CONFIG_SETTINGS)
}
