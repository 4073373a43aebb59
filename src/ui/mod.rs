//! Terminal user interface: banner, file table, progress bar, and prompts.

pub mod display;
pub mod progress;
pub mod prompt;
