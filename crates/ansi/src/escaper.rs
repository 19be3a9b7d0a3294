//! Chainable styling over an owned string.
//!
//! [`Escaper`] takes the text to style explicitly and applies one attribute per
//! call. Each call goes through the registry lookup and [`wrap`], so nesting
//! the same family twice never leaves a premature close in the middle.
//!
//! ```
//! use ansi::{Color, Escaper};
//!
//! let styled = Escaper::new("example").yellow()?.on_blue()?.bold()?;
//! assert_eq!(
//!     styled.as_str(),
//!     "\u{1b}[1m\u{1b}[44m\u{1b}[33mexample\u{1b}[39m\u{1b}[49m\u{1b}[21m"
//! );
//!
//! let typed = Escaper::new("example").foreground(Color::Yellow)?;
//! assert_eq!(typed.into_string(), "\u{1b}[33mexample\u{1b}[39m");
//! # Ok::<(), ansi::AnsiError>(())
//! ```

use std::fmt;

use crate::codes::{DEFAULT_BACKGROUND_COLOR, DEFAULT_FOREGROUND_COLOR};
use crate::error::Result;
use crate::graphics;
use crate::registry::{AttributeRegistry, Family};
use crate::wrap::wrap;

/// The eight standard terminal colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// The registry name of this color.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text attributes with their own disable sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAttribute {
    Bold,
    Underline,
    Blink,
    Reverse,
    Hidden,
}

impl TextAttribute {
    pub const ALL: [TextAttribute; 5] = [
        TextAttribute::Bold,
        TextAttribute::Underline,
        TextAttribute::Blink,
        TextAttribute::Reverse,
        TextAttribute::Hidden,
    ];

    /// The registry name of this attribute.
    pub fn name(self) -> &'static str {
        match self {
            TextAttribute::Bold => "bold",
            TextAttribute::Underline => "underline",
            TextAttribute::Blink => "blink",
            TextAttribute::Reverse => "reverse",
            TextAttribute::Hidden => "hidden",
        }
    }
}

impl fmt::Display for TextAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Owned text plus the registry used to style it.
#[derive(Clone, Debug)]
pub struct Escaper {
    text: String,
    registry: &'static AttributeRegistry,
}

macro_rules! color_methods {
    ($($color:ident => $fg:ident, $bg:ident;)*) => {
        $(
            #[doc = concat!("Wrap in the `", stringify!($fg), "` foreground color.")]
            pub fn $fg(self) -> Result<Self> {
                self.foreground(Color::$color)
            }

            #[doc = concat!("Wrap in the `", stringify!($fg), "` background color.")]
            pub fn $bg(self) -> Result<Self> {
                self.background(Color::$color)
            }
        )*
    };
}

macro_rules! text_attribute_methods {
    ($($attr:ident => $method:ident;)*) => {
        $(
            #[doc = concat!("Wrap in the `", stringify!($method), "` text attribute.")]
            pub fn $method(self) -> Result<Self> {
                self.style(TextAttribute::$attr)
            }
        )*
    };
}

impl Escaper {
    /// Start styling `text` with the standard registry.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_registry(text, AttributeRegistry::standard())
    }

    /// Start styling `text` with a custom registry.
    pub fn with_registry(text: impl Into<String>, registry: &'static AttributeRegistry) -> Self {
        Self {
            text: text.into(),
            registry,
        }
    }

    /// Wrap in the attribute selected by `name` (`red`, `on_red`, `bold`).
    pub fn apply(self, name: &str) -> Result<Self> {
        let attr = self.registry.lookup(name)?;
        Ok(self.wrapped(attr.open(), attr.close()))
    }

    pub fn foreground(self, color: Color) -> Result<Self> {
        let attr = self.registry.lookup_in(Family::Foreground, color.name())?;
        Ok(self.wrapped(attr.open(), attr.close()))
    }

    pub fn background(self, color: Color) -> Result<Self> {
        let attr = self.registry.lookup_in(Family::Background, color.name())?;
        Ok(self.wrapped(attr.open(), attr.close()))
    }

    pub fn style(self, attribute: TextAttribute) -> Result<Self> {
        let attr = self.registry.lookup_in(Family::TextStyle, attribute.name())?;
        Ok(self.wrapped(attr.open(), attr.close()))
    }

    /// Wrap in a 256-color palette entry as foreground.
    ///
    /// Closes with the default foreground reset, so it nests with the named
    /// foreground colors.
    #[must_use]
    pub fn foreground_256(self, index: u8) -> Self {
        let open = graphics::foreground_color_256(index);
        self.wrapped(&open, DEFAULT_FOREGROUND_COLOR)
    }

    /// Wrap in a 256-color palette entry as background.
    #[must_use]
    pub fn background_256(self, index: u8) -> Self {
        let open = graphics::background_color_256(index);
        self.wrapped(&open, DEFAULT_BACKGROUND_COLOR)
    }

    color_methods! {
        Black => black, on_black;
        Red => red, on_red;
        Green => green, on_green;
        Yellow => yellow, on_yellow;
        Blue => blue, on_blue;
        Magenta => magenta, on_magenta;
        Cyan => cyan, on_cyan;
        White => white, on_white;
    }

    text_attribute_methods! {
        Bold => bold;
        Underline => underline;
        Blink => blink;
        Reverse => reverse;
        Hidden => hidden;
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    fn wrapped(self, open: &str, close: &str) -> Self {
        Self {
            text: wrap(&self.text, open, close),
            registry: self.registry,
        }
    }
}

impl fmt::Display for Escaper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Escaper> for String {
    fn from(escaper: Escaper) -> Self {
        escaper.text
    }
}
