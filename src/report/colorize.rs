//! Intraline highlighting and line capping

use super::theme::Palette;
use crate::constants::{END_LONG_LINE, markers};

/// Starts every ANSI escape sequence
const ESCAPE: char = '\x1b';
/// Final byte of an SGR sequence
const SGR_END: char = 'm';

/// Escape for a mask character, if it starts a colored span
fn color_for(mask_char: char, line: &str, palette: &Palette) -> Option<&'static str> {
    match mask_char {
        markers::HAT if line.starts_with(markers::MINUS) => Some(palette.deletion),
        markers::HAT => Some(palette.insertion),
        markers::MINUS => Some(palette.deletion),
        markers::PLUS => Some(palette.insertion),
        _ => None,
    }
}

/// Insert color escapes into a diff line according to its emphasis mask
///
/// Without a mask the whole line takes the color of its kind marker.
/// With a mask, every change of mask character closes the current span and
/// opens a new one when the character is a marker; the masked span always
/// ends with a reset.
pub fn colorize(line: &str, mask: Option<&str>, palette: &Palette) -> String {
    let Some(mask) = mask.filter(|m| !m.is_empty()) else {
        let color = line
            .chars()
            .next()
            .and_then(|c| match c {
                markers::PLUS => Some(palette.insertion),
                markers::MINUS => Some(palette.deletion),
                _ => None,
            })
            .unwrap_or("");
        return format!("{color}{line}{}", palette.reset);
    };

    let mut out = String::with_capacity(line.len() + 8 * palette.reset.len());
    let mut chars = line.chars();
    let mut flag = markers::SPACE;

    for m in mask.chars() {
        if m != flag {
            out.push_str(palette.reset);
            if let Some(color) = color_for(m, line, palette) {
                out.push_str(color);
            }
            flag = m;
        }
        if let Some(c) = chars.next() {
            out.push(c);
        }
    }
    out.push_str(palette.reset);
    out.extend(chars);
    out
}

/// Cap a display line at `width` characters
///
/// Cut lines end with [`END_LONG_LINE`]; in color mode a reset precedes it
/// so no color leaks past the cut. Widths below the ellipsis length keep
/// only as many dots as fit.
pub fn limit(text: &str, width: usize, reset: Option<&str>) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width < END_LONG_LINE.len() {
        return END_LONG_LINE.chars().take(width).collect();
    }
    let mut out = cut_before_escape(text, width - END_LONG_LINE.len()).to_string();
    if let Some(reset) = reset {
        out.push_str(reset);
    }
    out.push_str(END_LONG_LINE);
    out
}

/// First `keep` characters of `text`, shortened so no escape sequence is split
fn cut_before_escape(text: &str, keep: usize) -> &str {
    let end = text.char_indices().nth(keep).map_or(text.len(), |(i, _)| i);
    let head = &text[..end];
    match head.rfind(ESCAPE) {
        Some(esc) if !head[esc..].contains(SGR_END) => &head[..esc],
        _ => head,
    }
}
