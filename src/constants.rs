//! Report constants
//!
//! Centralized definitions for markers, rule widths and display limits.

/// Width of the `=====` / `-----` rules
pub const SEP_WIDTH: usize = 5;

/// Character used for the opening and closing rules
pub const RULE_CHAR: char = '=';

/// Character used for the rule between blocks of changes
pub const SEPARATOR_CHAR: char = '-';

/// Appended to lines cut at the terminal width
pub const END_LONG_LINE: &str = "...";

/// Shown when no candidate differs from the base
pub const NO_DIFF: &str = "(no diff)";

/// Maximum number of change groups shown per position and kind
///
/// When every candidate disagrees at the same spot, only the most widely
/// shared variants are listed.
pub const MAX_GROUPS: usize = 2;

/// Terminal width used when it cannot be detected
pub const DEFAULT_WIDTH: usize = 80;

/// Characters that appear in diff lines and emphasis masks
pub mod markers {
    /// Line only present in the candidate
    pub const MINUS: char = '-';
    /// Line only present in the base
    pub const PLUS: char = '+';
    /// Character-level change
    pub const HAT: char = '^';
    /// No emphasis / common line prefix
    pub const SPACE: char = ' ';
    /// Leading character of an intraline guide line
    pub const GUIDE: char = '?';
}

/// Character-similarity threshold for pairing lines inside a changed run
pub const DEFAULT_CUTOFF: f32 = 0.75;
