//! Static attribute tables.
//!
//! These tables are the complete set of names the registry understands. Colors
//! map to their palette index (0-7), text attributes map to the SGR code that
//! enables them, and the disable table maps each text attribute to the SGR code
//! that turns that one attribute off again.
//!
//! ```text
//! red      -> ESC[31m ... ESC[39m
//! on_red   -> ESC[41m ... ESC[49m
//! bold     -> ESC[1m  ... ESC[21m
//! ```
//!
//! `TEXT_DISABLE_ATTRIBUTES` must be kept in step with `TEXT_ATTRIBUTES` by
//! hand. A missing entry only breaks the affected attribute.

use phf::phf_ordered_map;

/// The escape character that starts every control sequence.
pub const ESC: &str = "\u{1b}";

/// Resets the foreground to the terminal's default color.
pub const DEFAULT_FOREGROUND_COLOR: &str = "\u{1b}[39m";

/// Resets the background to the terminal's default color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "\u{1b}[49m";

/// Prefix distinguishing background selectors from foreground ones.
pub const BACKGROUND_PREFIX: &str = "on_";

/// Color names and their palette index.
pub static COLORS: phf::OrderedMap<&'static str, u8> = phf_ordered_map! {
    "black" => 0,
    "red" => 1,
    "green" => 2,
    "yellow" => 3,
    "blue" => 4,
    "magenta" => 5,
    "cyan" => 6,
    "white" => 7,
};

/// Text attribute names and the SGR code that enables them.
pub static TEXT_ATTRIBUTES: phf::OrderedMap<&'static str, u8> = phf_ordered_map! {
    "bold" => 1,
    "underline" => 4,
    "blink" => 5,
    "reverse" => 7,
    "hidden" => 8,
};

/// Text attribute names and the SGR code that disables them.
pub static TEXT_DISABLE_ATTRIBUTES: phf::OrderedMap<&'static str, u8> = phf_ordered_map! {
    "bold" => 21,
    "underline" => 24,
    "blink" => 25,
    "reverse" => 27,
    "hidden" => 28,
};
