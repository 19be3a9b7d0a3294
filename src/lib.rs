//! Terminal text styling.
//!
//! Re-exports the [`ansi`] crate and adds the pieces an application needs
//! around it: a crate-level error type and a file logger for tracing lookups.
//!
//! ```
//! use termwrap::{Escaper, apply};
//!
//! assert_eq!(apply("bold", "example")?, "\u{1b}[1mexample\u{1b}[21m");
//! let styled = Escaper::new("example").on_red()?;
//! assert_eq!(styled.as_str(), "\u{1b}[41mexample\u{1b}[49m");
//! # Ok::<(), termwrap::TermwrapError>(())
//! ```

pub mod error;
pub mod log_init;

pub use ansi::{
    AnsiError, Attribute, AttributeRegistry, Color, Escaper, Family, TextAttribute, apply,
    codes, graphics, wrap,
};
pub use error::{Result, TermwrapError};
pub use log_init::init_logger;

// Re-export the log crate so users can use termwrap::log::info!, etc.
pub use log;
