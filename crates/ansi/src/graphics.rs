//! SGR (select graphic rendition) sequence builders.
//!
//! Every builder returns a complete `ESC[...m` sequence.

use crate::codes::ESC;

/// Build a graphics mode sequence from one or more SGR parameters.
///
/// # Examples
///
/// ```
/// use ansi::graphics::graphics_mode;
///
/// assert_eq!(graphics_mode(&[1]), "\u{1b}[1m");
/// assert_eq!(graphics_mode(&[38, 5, 208]), "\u{1b}[38;5;208m");
/// ```
pub fn graphics_mode(codes: &[u8]) -> String {
    let params: Vec<String> = codes.iter().map(|code| code.to_string()).collect();
    format!("{}[{}m", ESC, params.join(";"))
}

/// Sequence enabling a text attribute by its SGR code.
pub fn text_attribute(code: u8) -> String {
    graphics_mode(&[code])
}

/// Sequence selecting one of the eight standard colors as foreground.
///
/// `index` is a palette index in `0..=7`.
pub fn foreground_color(index: u8) -> String {
    graphics_mode(&[30u8.saturating_add(index)])
}

/// Sequence selecting one of the eight standard colors as background.
///
/// `index` is a palette index in `0..=7`.
pub fn background_color(index: u8) -> String {
    graphics_mode(&[40u8.saturating_add(index)])
}

/// Sequence selecting a 256-color palette entry as foreground.
pub fn foreground_color_256(index: u8) -> String {
    graphics_mode(&[38, 5, index])
}

/// Sequence selecting a 256-color palette entry as background.
pub fn background_color_256(index: u8) -> String {
    graphics_mode(&[48, 5, index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_colors() {
        assert_eq!(foreground_color(0), "\u{1b}[30m");
        assert_eq!(foreground_color(3), "\u{1b}[33m");
        assert_eq!(background_color(1), "\u{1b}[41m");
        assert_eq!(background_color(7), "\u{1b}[47m");
    }

    #[test]
    fn palette_colors() {
        assert_eq!(foreground_color_256(0), "\u{1b}[38;5;0m");
        assert_eq!(background_color_256(255), "\u{1b}[48;5;255m");
    }

    #[test]
    fn attributes() {
        assert_eq!(text_attribute(4), "\u{1b}[4m");
        assert_eq!(text_attribute(24), "\u{1b}[24m");
    }

    #[test]
    fn empty_parameter_list() {
        assert_eq!(graphics_mode(&[]), "\u{1b}[m");
    }
}
