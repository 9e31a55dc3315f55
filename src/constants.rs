//! Global constants for the editing core

pub mod text {
    /// Columns a tab occupies when no configuration overrides it
    pub const DEFAULT_TAB_SIZE: usize = 4;

    /// Largest accepted tab size
    pub const MAX_TAB_SIZE: usize = 16;

    /// Runes that separate words for jumping and word deletion
    pub const DEFAULT_WORD_DELIMITERS: &str = " \t=&|,./(){}[]#+*%'-:?!'\"";
}

pub mod gap {
    /// Storage slots allocated for a fresh line
    pub const DEFAULT_CAPACITY: usize = 32;

    /// Minimum number of slots added whenever the gap runs out
    pub const GROWTH_INCREMENT: usize = 32;

    /// Filler for slots inside the gap
    pub const GAP_FILL: char = '\0';
}

pub mod errors {
    // Error Codes
    pub const INVALID_CURSOR: &str = "INVALID_CURSOR";
    pub const EMPTY_DELETE: &str = "EMPTY_DELETE";
    pub const INVALID_LINE: &str = "INVALID_LINE";
    pub const INVALID_COLUMN: &str = "INVALID_COLUMN";
    pub const SAVE_FAILED: &str = "SAVE_FAILED";
    pub const LOAD_FAILED: &str = "LOAD_FAILED";
    pub const REGEX_PARSE_ERROR: &str = "REGEX_PARSE_ERROR";
    pub const REGEX_COMPILE_ERROR: &str = "REGEX_COMPILE_ERROR";
    pub const INVALID_PRIORITY: &str = "INVALID_PRIORITY";
    pub const INVALID_KEYWORD: &str = "INVALID_KEYWORD";
    pub const INVALID_CAPTURE_GROUP: &str = "INVALID_CAPTURE_GROUP";
    pub const RENDER_FAILED: &str = "RENDER_FAILED";
    pub const SETTING_PARSE_ERROR: &str = "SETTING_PARSE_ERROR";
    pub const SETTING_VALIDATION_ERROR: &str = "SETTING_VALIDATION_ERROR";
    pub const UNKNOWN_SETTING: &str = "UNKNOWN_SETTING";
}
