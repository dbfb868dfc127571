use crate::error::{Error, Result, check_non_negative, check_positive};
use narwhal_metrics::FontId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Horizontal justification of lines within their block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
        }
    }

    /// Stack shift along X for a block of the given width.
    pub fn x_shift(self, width: f64) -> f64 {
        match self {
            HorizontalAlign::Left => -width / 2.0,
            HorizontalAlign::Center => 0.0,
            HorizontalAlign::Right => width / 2.0,
        }
    }
}

impl FromStr for HorizontalAlign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(HorizontalAlign::Left),
            "center" => Ok(HorizontalAlign::Center),
            "right" => Ok(HorizontalAlign::Right),
            other => Err(Error::InvalidAlignment {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for HorizontalAlign {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<HorizontalAlign> for String {
    fn from(align: HorizontalAlign) -> Self {
        align.as_str().to_string()
    }
}

impl fmt::Display for HorizontalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writing direction handed to the text backend. Layout here is always left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WritingDirection {
    #[default]
    Ltr,
    Rtl,
    Ttb,
    Btt,
}

impl WritingDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            WritingDirection::Ltr => "ltr",
            WritingDirection::Rtl => "rtl",
            WritingDirection::Ttb => "ttb",
            WritingDirection::Btt => "btt",
        }
    }
}

impl FromStr for WritingDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ltr" => Ok(WritingDirection::Ltr),
            "rtl" => Ok(WritingDirection::Rtl),
            "ttb" => Ok(WritingDirection::Ttb),
            "btt" => Ok(WritingDirection::Btt),
            other => Err(Error::InvalidDirection {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for WritingDirection {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<WritingDirection> for String {
    fn from(direction: WritingDirection) -> Self {
        direction.as_str().to_string()
    }
}

/// Parameters that change the measured size of a line.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: FontId,
    pub size: f64,
    /// Extrusion thickness along Z.
    pub height: f64,
    pub pad: f64,
    /// Multiplier applied to every glyph advance.
    pub spacing: f64,
}

impl TextStyle {
    pub fn new(font: FontId) -> Self {
        Self {
            font,
            size: 10.0,
            height: 1.0,
            pad: 0.0,
            spacing: 1.0,
        }
    }

    pub fn with_size(&self, size: f64) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// Checks the numeric parameters. Font measurability is checked against the metrics
    /// adapter by the boundary functions.
    pub fn validate(&self) -> Result<()> {
        check_positive("size", self.size)?;
        check_positive("height", self.height)?;
        check_non_negative("pad", self.pad)?;
        check_non_negative("spacing", self.spacing)?;
        Ok(())
    }
}
