//! Font identifiers.
//!
//! A font is named the way the text backend expects it: either a bare family
//! (`"Liberation Sans"`) or a family with a style suffix (`"Liberation Sans:style=Bold"`).
//! Parsing here is purely syntactic; whether a font can actually be measured is a question for
//! [`crate::FontTable`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const STYLE_SEPARATOR: &str = ":style=";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub const ALL: [FontStyle; 4] = [
        FontStyle::Regular,
        FontStyle::Bold,
        FontStyle::Italic,
        FontStyle::BoldItalic,
    ];

    /// Index used by font-metrics tables (`0..=3`).
    pub fn index(self) -> u8 {
        match self {
            FontStyle::Regular => 0,
            FontStyle::Bold => 1,
            FontStyle::Italic => 2,
            FontStyle::BoldItalic => 3,
        }
    }

    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(Error::InvalidStyleIndex { index })
    }

    /// Name used after `:style=`; `None` for the regular face, which carries no suffix.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            FontStyle::Regular => None,
            FontStyle::Bold => Some("Bold"),
            FontStyle::Italic => Some("Italic"),
            FontStyle::BoldItalic => Some("Bold Italic"),
        }
    }

    fn from_suffix(raw: &str) -> Result<Self> {
        match raw.trim() {
            "Bold" => Ok(FontStyle::Bold),
            "Italic" => Ok(FontStyle::Italic),
            "Bold Italic" => Ok(FontStyle::BoldItalic),
            other => Err(Error::InvalidStyle {
                style: other.to_string(),
            }),
        }
    }
}

impl TryFrom<u8> for FontStyle {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        Self::from_index(index)
    }
}

impl From<FontStyle> for u8 {
    fn from(style: FontStyle) -> Self {
        style.index()
    }
}

/// A syntactically valid font identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FontId {
    family: String,
    style: FontStyle,
}

impl FontId {
    pub fn new(family: impl Into<String>, style: FontStyle) -> Result<Self> {
        let family = family.into();
        let trimmed = family.trim();
        if trimmed.is_empty() || trimmed.contains(':') {
            return Err(Error::InvalidFontId { raw: family });
        }
        Ok(Self {
            family: trimmed.to_string(),
            style,
        })
    }

    pub fn parse(raw: &str) -> Result<Self> {
        match raw.split_once(STYLE_SEPARATOR) {
            Some((family, style)) => {
                let style = FontStyle::from_suffix(style)?;
                Self::new(family, style).map_err(|_| Error::InvalidFontId {
                    raw: raw.to_string(),
                })
            }
            None => Self::new(raw, FontStyle::Regular),
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style.suffix() {
            Some(suffix) => write!(f, "{}{STYLE_SEPARATOR}{suffix}", self.family),
            None => f.write_str(&self.family),
        }
    }
}

impl FromStr for FontId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FontId {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl From<FontId> for String {
    fn from(font: FontId) -> Self {
        font.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_family_is_regular() {
        let font = FontId::parse("Liberation Sans").unwrap();
        assert_eq!(font.family(), "Liberation Sans");
        assert_eq!(font.style(), FontStyle::Regular);
        assert_eq!(font.to_string(), "Liberation Sans");
    }

    #[test]
    fn style_suffix_round_trips_through_display() {
        for raw in [
            "Liberation Sans:style=Bold",
            "Liberation Sans:style=Italic",
            "Liberation Sans:style=Bold Italic",
        ] {
            assert_eq!(FontId::parse(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn unknown_style_is_rejected() {
        let err = FontId::parse("Liberation Sans:style=Oblique").unwrap_err();
        assert!(matches!(err, Error::InvalidStyle { ref style } if style == "Oblique"));
    }

    #[test]
    fn empty_family_is_rejected() {
        assert!(matches!(
            FontId::parse("   "),
            Err(Error::InvalidFontId { .. })
        ));
        assert!(matches!(
            FontId::parse(":style=Bold"),
            Err(Error::InvalidFontId { .. })
        ));
    }

    #[test]
    fn style_index_matches_table_layout() {
        for style in FontStyle::ALL {
            assert_eq!(FontStyle::from_index(style.index()).unwrap(), style);
        }
        assert!(FontStyle::from_index(4).is_err());
    }
}
