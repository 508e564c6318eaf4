//! Color palette
//!
//! ANSI SGR sequences used by the report.

/// Base file name in the header
pub const PURPLE: &str = "\x1b[0;35m";
/// Background for added content
pub const GREEN_BACK: &str = "\x1b[0;42m";
/// Background for removed content
pub const RED_BACK: &str = "\x1b[0;41m";
/// Ends any colorized span
pub const END_COLOR: &str = "\x1b[0m";

/// Escape sequences handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: &'static str,
    pub insertion: &'static str,
    pub deletion: &'static str,
    pub reset: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: PURPLE,
            insertion: GREEN_BACK,
            deletion: RED_BACK,
            reset: END_COLOR,
        }
    }
}
