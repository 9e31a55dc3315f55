//! Rift core - text storage and screen projection for a terminal text editor

pub mod buffer;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod gap_buffer;
pub mod highlight;
pub mod history;
pub mod term;
pub mod viewport;

#[cfg(test)]
pub mod test_utils;

pub use buffer::{Action, LineBuffer, SearchLimit};
pub use history::Position;
pub use viewport::Viewport;
