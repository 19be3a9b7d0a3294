//! Attribute registry.
//!
//! Resolves symbolic attribute names to the open/close sequence pair used by
//! [`wrap`](crate::wrap::wrap). Three families exist:
//!
//! - Foreground colors (`red`) close with the shared default foreground reset.
//! - Background colors (`on_red`) close with the shared default background reset.
//! - Text styles (`bold`) each close with their own disable sequence.
//!
//! Lookup is exact. There is no case folding, no partial match and no
//! fallback: a name outside the tables is an [`AnsiError::InvalidAttribute`].

use std::fmt;

use crate::codes::{
    BACKGROUND_PREFIX, COLORS, DEFAULT_BACKGROUND_COLOR, DEFAULT_FOREGROUND_COLOR,
    TEXT_ATTRIBUTES, TEXT_DISABLE_ATTRIBUTES,
};
use crate::error::{AnsiError, Result};
use crate::graphics;

type CodeTable = phf::OrderedMap<&'static str, u8>;

/// The group an attribute belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Text color.
    Foreground,
    /// Cell background color.
    Background,
    /// Bold, underline and the other independently revocable styles.
    TextStyle,
}

impl Family {
    /// The close sequence shared by every member of the family.
    ///
    /// Text styles have no shared close; each one owns its own.
    pub fn shared_close(self) -> Option<&'static str> {
        match self {
            Family::Foreground => Some(DEFAULT_FOREGROUND_COLOR),
            Family::Background => Some(DEFAULT_BACKGROUND_COLOR),
            Family::TextStyle => None,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Foreground => "foreground",
            Family::Background => "background",
            Family::TextStyle => "text style",
        };
        f.write_str(name)
    }
}

/// A resolved attribute: its family and the sequences that open and close it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    family: Family,
    open: String,
    close: String,
}

impl Attribute {
    /// The selector this attribute was resolved from, e.g. `on_blue`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Sequence that starts the effect.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// Sequence that ends this effect, not necessarily a full reset.
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Wrap `text` in this attribute, rewriting interior closes.
    pub fn wrap(&self, text: &str) -> String {
        crate::wrap::wrap(text, &self.open, &self.close)
    }
}

/// The static tables a registry is built from.
#[derive(Clone, Copy)]
pub struct Tables {
    /// Color name to palette index.
    pub colors: &'static CodeTable,
    /// Text attribute name to enable code.
    pub text_attributes: &'static CodeTable,
    /// Text attribute name to disable code.
    pub text_disable_attributes: &'static CodeTable,
}

/// Read-only lookup from attribute names to [`Attribute`]s.
#[derive(Clone, Copy)]
pub struct AttributeRegistry {
    tables: Tables,
}

static STANDARD: AttributeRegistry = AttributeRegistry::new(Tables {
    colors: &COLORS,
    text_attributes: &TEXT_ATTRIBUTES,
    text_disable_attributes: &TEXT_DISABLE_ATTRIBUTES,
});

impl AttributeRegistry {
    /// Create a registry over custom tables.
    pub const fn new(tables: Tables) -> Self {
        Self { tables }
    }

    /// The registry over the built-in color and text attribute tables.
    pub fn standard() -> &'static AttributeRegistry {
        &STANDARD
    }

    /// Resolve a selector: `red`, `on_red` or `bold`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ansi::{AttributeRegistry, Family};
    ///
    /// let registry = AttributeRegistry::standard();
    /// let attr = registry.lookup("on_blue").unwrap();
    /// assert_eq!(attr.family(), Family::Background);
    /// assert_eq!(attr.open(), "\u{1b}[44m");
    /// assert_eq!(attr.close(), "\u{1b}[49m");
    ///
    /// assert!(registry.lookup("Blue").is_err());
    /// ```
    pub fn lookup(&self, name: &str) -> Result<Attribute> {
        if let Some(color) = name.strip_prefix(BACKGROUND_PREFIX) {
            if self.tables.colors.contains_key(color) {
                return self.lookup_in(Family::Background, color);
            }
        }

        if self.tables.colors.contains_key(name) {
            return self.lookup_in(Family::Foreground, name);
        }

        if self.tables.text_attributes.contains_key(name) {
            return self.lookup_in(Family::TextStyle, name);
        }

        log::debug!("unknown attribute: {:?}", name);
        Err(AnsiError::InvalidAttribute(name.to_string()))
    }

    /// Resolve a bare name within one family.
    ///
    /// Background names are given without the `on_` prefix.
    pub fn lookup_in(&self, family: Family, name: &str) -> Result<Attribute> {
        match family {
            Family::Foreground => {
                let index = self.color_index(name)?;
                Ok(Attribute {
                    name: name.to_string(),
                    family,
                    open: graphics::foreground_color(index),
                    close: DEFAULT_FOREGROUND_COLOR.to_string(),
                })
            }
            Family::Background => {
                let index = self.color_index(name)?;
                Ok(Attribute {
                    name: format!("{}{}", BACKGROUND_PREFIX, name),
                    family,
                    open: graphics::background_color(index),
                    close: DEFAULT_BACKGROUND_COLOR.to_string(),
                })
            }
            Family::TextStyle => {
                let Some(&code) = self.tables.text_attributes.get(name) else {
                    log::debug!("unknown text attribute: {:?}", name);
                    return Err(AnsiError::InvalidAttribute(name.to_string()));
                };
                let Some(&disable) = self.tables.text_disable_attributes.get(name) else {
                    log::debug!("text attribute {:?} has no disable code", name);
                    return Err(AnsiError::MissingDisableCode(name.to_string()));
                };
                Ok(Attribute {
                    name: name.to_string(),
                    family,
                    open: graphics::text_attribute(code),
                    close: graphics::text_attribute(disable),
                })
            }
        }
    }

    pub fn foreground(&self, name: &str) -> Result<Attribute> {
        self.lookup_in(Family::Foreground, name)
    }

    pub fn background(&self, name: &str) -> Result<Attribute> {
        self.lookup_in(Family::Background, name)
    }

    pub fn text_style(&self, name: &str) -> Result<Attribute> {
        self.lookup_in(Family::TextStyle, name)
    }

    /// Look up `name` and wrap `text` in it.
    pub fn apply(&self, name: &str, text: &str) -> Result<String> {
        Ok(self.lookup(name)?.wrap(text))
    }

    /// Every supported selector: foreground colors, then backgrounds, then
    /// text styles, each in table order.
    pub fn names(&self) -> impl Iterator<Item = String> + '_ {
        let foregrounds = self.tables.colors.keys().map(|name| name.to_string());
        let backgrounds = self
            .tables
            .colors
            .keys()
            .map(|name| format!("{}{}", BACKGROUND_PREFIX, name));
        let styles = self.tables.text_attributes.keys().map(|name| name.to_string());
        foregrounds.chain(backgrounds).chain(styles)
    }

    /// Resolve every supported selector.
    pub fn attributes(&self) -> impl Iterator<Item = Result<Attribute>> + '_ {
        self.names().map(move |name| self.lookup(&name))
    }

    fn color_index(&self, name: &str) -> Result<u8> {
        match self.tables.colors.get(name) {
            Some(&index) => Ok(index),
            None => {
                log::debug!("unknown color: {:?}", name);
                Err(AnsiError::InvalidAttribute(name.to_string()))
            }
        }
    }
}

impl fmt::Debug for AttributeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeRegistry")
            .field("colors", &self.tables.colors.len())
            .field("text_attributes", &self.tables.text_attributes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phf::phf_ordered_map;

    static PARTIAL_DISABLE: CodeTable = phf_ordered_map! {
        "bold" => 21,
    };

    fn partial_registry() -> AttributeRegistry {
        AttributeRegistry::new(Tables {
            colors: &COLORS,
            text_attributes: &TEXT_ATTRIBUTES,
            text_disable_attributes: &PARTIAL_DISABLE,
        })
    }

    #[test]
    fn lookup_foreground() {
        let attr = AttributeRegistry::standard().lookup("yellow").unwrap();
        assert_eq!(attr.name(), "yellow");
        assert_eq!(attr.family(), Family::Foreground);
        assert_eq!(attr.open(), "\u{1b}[33m");
        assert_eq!(attr.close(), "\u{1b}[39m");
    }

    #[test]
    fn lookup_background() {
        let attr = AttributeRegistry::standard().lookup("on_red").unwrap();
        assert_eq!(attr.name(), "on_red");
        assert_eq!(attr.family(), Family::Background);
        assert_eq!(attr.open(), "\u{1b}[41m");
        assert_eq!(attr.close(), "\u{1b}[49m");
    }

    #[test]
    fn lookup_text_style() {
        let attr = AttributeRegistry::standard().lookup("bold").unwrap();
        assert_eq!(attr.family(), Family::TextStyle);
        assert_eq!(attr.open(), "\u{1b}[1m");
        assert_eq!(attr.close(), "\u{1b}[21m");
    }

    #[test]
    fn lookup_in_matches_prefixed_lookup() {
        let registry = AttributeRegistry::standard();
        assert_eq!(
            registry.lookup_in(Family::Background, "cyan").unwrap(),
            registry.lookup("on_cyan").unwrap()
        );
        assert_eq!(
            registry.background("cyan").unwrap(),
            registry.lookup("on_cyan").unwrap()
        );
    }

    #[test]
    fn lookup_in_wrong_family_fails() {
        let registry = AttributeRegistry::standard();
        assert_eq!(
            registry.text_style("red"),
            Err(AnsiError::InvalidAttribute("red".into()))
        );
        assert_eq!(
            registry.foreground("bold"),
            Err(AnsiError::InvalidAttribute("bold".into()))
        );
        assert_eq!(
            registry.background("on_red"),
            Err(AnsiError::InvalidAttribute("on_red".into()))
        );
    }

    #[test]
    fn lookup_rejects_near_misses() {
        let registry = AttributeRegistry::standard();
        for name in ["", "Red", "RED", " red", "re", "on_", "on_bold", "bright_red", "on_on_red"] {
            assert_eq!(
                registry.lookup(name),
                Err(AnsiError::InvalidAttribute(name.to_string())),
                "{:?} should not resolve",
                name
            );
        }
    }

    #[test]
    fn missing_disable_code_only_affects_that_style() {
        let registry = partial_registry();
        assert!(registry.lookup("bold").is_ok());
        assert!(registry.lookup("red").is_ok());
        assert_eq!(
            registry.lookup("underline"),
            Err(AnsiError::MissingDisableCode("underline".into()))
        );
    }

    #[test]
    fn family_shared_close() {
        assert_eq!(Family::Foreground.shared_close(), Some("\u{1b}[39m"));
        assert_eq!(Family::Background.shared_close(), Some("\u{1b}[49m"));
        assert_eq!(Family::TextStyle.shared_close(), None);
    }

    #[test]
    fn names_are_ordered_by_family() {
        let names: Vec<String> = AttributeRegistry::standard().names().collect();
        assert_eq!(names.len(), 8 + 8 + 5);
        assert_eq!(names[0], "black");
        assert_eq!(names[8], "on_black");
        assert_eq!(names[16], "bold");
        assert_eq!(names.last().map(String::as_str), Some("hidden"));
    }
}
