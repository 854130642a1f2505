//! Icons and emoji constants used throughout the UI.

// Spinner animation frames (braille characters)
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// UI elements
pub const BULLET: &str = "•";
pub const SEPARATOR_CHAR: &str = "─";
