//! Nesting-aware sequence wrapping.
//!
//! Wrapping text that already contains the close sequence of the same family
//! would end the outer effect early:
//!
//! ```text
//! BLUE [ RED x DEFAULT ] y DEFAULT
//!                  ^ outer blue stops here, `y` renders in the default color
//! ```
//!
//! [`wrap`] therefore rewrites every interior close into the outer open
//! before adding the envelope:
//!
//! ```text
//! BLUE [ RED x BLUE ] y DEFAULT
//! ```
//!
//! Only the exact close fragment is rewritten, so attributes of another family
//! pass through untouched.

use crate::error::Result;
use crate::registry::AttributeRegistry;

/// Wrap `text` in `open` and `close`, rewriting interior `close` fragments.
///
/// `open` and `close` must be distinct, non-empty sequences.
///
/// # Examples
///
/// ```
/// use ansi::wrap;
///
/// let red = wrap("x", "\u{1b}[31m", "\u{1b}[39m");
/// let text = format!("{}y", red);
/// assert_eq!(
///     wrap(&text, "\u{1b}[34m", "\u{1b}[39m"),
///     "\u{1b}[34m\u{1b}[31mx\u{1b}[34my\u{1b}[39m"
/// );
/// ```
pub fn wrap(text: &str, open: &str, close: &str) -> String {
    debug_assert!(!close.is_empty(), "close sequence must not be empty");
    debug_assert_ne!(open, close, "open and close sequences must differ");

    let interior = text.matches(close).count();
    if interior > 0 {
        log::trace!("wrap: reopening {} interior close sequence(s)", interior);
    }

    let replaced = text.replace(close, open);
    let mut out = String::with_capacity(open.len() + replaced.len() + close.len());
    out.push_str(open);
    out.push_str(&replaced);
    out.push_str(close);
    out
}

/// Wrap `text` in the standard attribute named `name`.
///
/// # Examples
///
/// ```
/// assert_eq!(ansi::apply("yellow", "example").unwrap(), "\u{1b}[33mexample\u{1b}[39m");
/// assert!(ansi::apply("chartreuse", "example").is_err());
/// ```
pub fn apply(name: &str, text: &str) -> Result<String> {
    AttributeRegistry::standard().apply(name, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FG_RED: &str = "\u{1b}[31m";
    const FG_BLUE: &str = "\u{1b}[34m";
    const FG_DEFAULT: &str = "\u{1b}[39m";
    const BOLD: &str = "\u{1b}[1m";
    const NO_BOLD: &str = "\u{1b}[21m";

    #[test]
    fn plain_text() {
        assert_eq!(wrap("hello", FG_RED, FG_DEFAULT), "\u{1b}[31mhello\u{1b}[39m");
    }

    #[test]
    fn empty_text() {
        assert_eq!(wrap("", BOLD, NO_BOLD), "\u{1b}[1m\u{1b}[21m");
    }

    #[test]
    fn interior_close_is_reopened() {
        let inner = format!("{}x{}y", FG_RED, FG_DEFAULT);
        assert_eq!(
            wrap(&inner, FG_BLUE, FG_DEFAULT),
            format!("{}{}x{}y{}", FG_BLUE, FG_RED, FG_BLUE, FG_DEFAULT)
        );
    }

    #[test]
    fn every_interior_close_is_reopened() {
        let text = format!("a{c}b{c}c{c}", c = FG_DEFAULT);
        let wrapped = wrap(&text, FG_RED, FG_DEFAULT);
        assert_eq!(wrapped.matches(FG_DEFAULT).count(), 1);
        assert!(wrapped.ends_with(FG_DEFAULT));
        assert_eq!(wrapped.matches(FG_RED).count(), 4);
    }

    #[test]
    fn other_families_pass_through() {
        let bold = wrap("x", BOLD, NO_BOLD);
        let wrapped = wrap(&bold, FG_RED, FG_DEFAULT);
        assert_eq!(wrapped, format!("{}{}x{}{}", FG_RED, BOLD, NO_BOLD, FG_DEFAULT));
    }

    #[test]
    fn apply_unknown_name() {
        assert!(apply("purple", "x").is_err());
    }
}
