//! ANSI styling sequences with nesting-aware wrapping.
//!
//! This crate wraps text in terminal control sequences for a foreground color,
//! a background color or a text attribute such as bold or underline.
//!
//! # Overview
//!
//! Attributes are selected by name:
//!
//! - `red`, `green`, ... - foreground colors, closed by `ESC[39m`
//! - `on_red`, `on_green`, ... - background colors, closed by `ESC[49m`
//! - `bold`, `underline`, `blink`, `reverse`, `hidden` - text attributes, each
//!   closed by its own disable sequence
//!
//! Wrapping rewrites any close sequence of the same attribute already inside
//! the text into the new open sequence, so an outer color or style is never
//! cut short by an inner one. Attributes of other families are left alone.
//!
//! This crate always emits sequences. Deciding whether the output is a
//! terminal is up to the caller.
//!
//! # Usage
//!
//! ```
//! use ansi::{AttributeRegistry, Escaper, wrap};
//!
//! // One-shot by name
//! assert_eq!(ansi::apply("on_red", "example").unwrap(), "\u{1b}[41mexample\u{1b}[49m");
//!
//! // Resolved attributes
//! let bold = AttributeRegistry::standard().lookup("bold").unwrap();
//! assert_eq!(bold.wrap("example"), "\u{1b}[1mexample\u{1b}[21m");
//!
//! // Raw sequences
//! assert_eq!(wrap("", "\u{1b}[4m", "\u{1b}[24m"), "\u{1b}[4m\u{1b}[24m");
//!
//! // Chained
//! let text = Escaper::new("example").red().unwrap().underline().unwrap();
//! assert_eq!(text.as_str(), "\u{1b}[4m\u{1b}[31mexample\u{1b}[39m\u{1b}[24m");
//! ```

pub mod codes;
pub mod error;
pub mod escaper;
pub mod graphics;
pub mod registry;
pub mod wrap;

// Re-export main types at crate root
pub use error::{AnsiError, Result};
pub use escaper::{Color, Escaper, TextAttribute};
pub use registry::{Attribute, AttributeRegistry, Family, Tables};
pub use wrap::{apply, wrap};
