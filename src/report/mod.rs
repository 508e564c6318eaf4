//! Report rendering
//!
//! Turns the change index into display lines:
//!
//! ```text
//! Comparing base.eb with a.eb, b.eb
//! =====
//! 1 - baz (2/2)
//! 1 + bar (1/2), a.eb
//!
//! -----
//!
//! =====
//! ```

mod colorize;
pub mod theme;

pub use colorize::{colorize, limit};
pub use theme::Palette;

use crate::constants::{DEFAULT_WIDTH, NO_DIFF, RULE_CHAR, SEP_WIDTH, SEPARATOR_CHAR};
use crate::engine::{ChangeIndex, groups_for};
use crate::model::{ChangeKind, Document};

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Emit ANSI escapes (and hide raw masks)
    pub colored: bool,
    /// Maximum display width of change lines
    pub width: usize,
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            colored: true,
            width: DEFAULT_WIDTH,
            palette: Palette::default(),
        }
    }
}

impl RenderConfig {
    /// Uncolored output with the default width
    pub fn plain() -> Self {
        Self {
            colored: false,
            ..Self::default()
        }
    }

    pub fn with_colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.colored {
            format!("{color}{text}{}", self.palette.reset)
        } else {
            text.to_string()
        }
    }

    fn cap(&self, line: &str) -> String {
        let reset = self.colored.then_some(self.palette.reset);
        limit(line, self.width, reset)
    }
}

/// Lines for a single base position, separator included when it closes a block
pub fn render_position(
    index: &ChangeIndex,
    position: usize,
    total: usize,
    config: &RenderConfig,
) -> Vec<String> {
    let mut out = Vec::new();

    for kind in ChangeKind::ALL {
        for group in groups_for(index, position, kind, total) {
            let text = if config.colored {
                colorize(&group.line, group.mask.as_deref(), &config.palette)
            } else {
                group.line.clone()
            };

            let mut line = format!("{position} {text} ({}/{total})", group.count());
            if let Some(names) = group.partial_candidates(total) {
                line.push_str(", ");
                line.push_str(&names.join(", "));
            }
            out.push(line);

            if let (false, Some(mask)) = (config.colored, &group.mask) {
                let pad = position.to_string().len() + 1;
                out.push(format!("{:pad$}{mask}", ""));
            }
        }
    }

    if index.has_changes(position) && !index.has_changes(position + 1) {
        out.push(String::new());
        out.push(rule(SEPARATOR_CHAR));
        out.push(String::new());
    }

    out
}

/// Render the full report as display lines
pub fn render_lines(
    base: &Document,
    candidates: &[Document],
    index: &ChangeIndex,
    config: &RenderConfig,
) -> Vec<String> {
    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
    let mut out = vec![
        format!(
            "Comparing {} with {}",
            config.paint(&base.name, config.palette.base),
            names.join(", ")
        ),
        rule(RULE_CHAR),
    ];

    let mut found = false;
    for position in index.positions().take_while(|&p| p <= base.len()) {
        let lines = render_position(index, position, candidates.len(), config);
        if lines.is_empty() {
            continue;
        }
        found = true;
        out.extend(lines.iter().map(|line| config.cap(line)));
    }

    if !found {
        out.push(NO_DIFF.to_string());
    }
    out.push(rule(RULE_CHAR));

    out
}

fn rule(c: char) -> String {
    std::iter::repeat_n(c, SEP_WIDTH).collect()
}
