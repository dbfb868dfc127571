//! Text options and their defaults.
//!
//! Defaults are fixed; per-call overrides arrive as a JSON object with camelCase keys and are
//! deep-merged over the defaults, so a caller can change `size` without restating the rest.

use crate::error::{Result, check_non_negative, check_positive};
use crate::style::{HorizontalAlign, TextStyle, WritingDirection};
use narwhal_metrics::FontId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextOptions {
    pub font: String,
    pub size: f64,
    pub height: f64,
    pub pad: f64,
    pub line_spacing: f64,
    /// Character spacing multiplier.
    pub spacing: f64,
    pub halign: HorizontalAlign,
    pub direction: WritingDirection,
    pub language: String,
    pub script: String,
    pub debug_bounding: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            font: "Liberation Sans".to_string(),
            size: 10.0,
            height: 1.0,
            pad: 0.0,
            line_spacing: 0.5,
            spacing: 1.0,
            halign: HorizontalAlign::Left,
            direction: WritingDirection::Ltr,
            language: "en".to_string(),
            script: "latin".to_string(),
            debug_bounding: false,
        }
    }
}

impl TextOptions {
    /// Returns a copy with `overrides` merged in. `self` is left untouched.
    pub fn with_overrides(&self, overrides: &Value) -> Result<Self> {
        let mut merged = serde_json::to_value(self)?;
        deep_merge_value(&mut merged, overrides);
        let out: Self = serde_json::from_value(merged)?;
        out.validate()?;
        Ok(out)
    }

    pub fn validate(&self) -> Result<()> {
        FontId::parse(&self.font)?;
        check_positive("size", self.size)?;
        check_positive("height", self.height)?;
        check_non_negative("pad", self.pad)?;
        check_non_negative("line_spacing", self.line_spacing)?;
        check_non_negative("spacing", self.spacing)?;
        Ok(())
    }

    pub fn font_id(&self) -> Result<FontId> {
        Ok(FontId::parse(&self.font)?)
    }

    pub fn style(&self) -> Result<TextStyle> {
        self.validate()?;
        Ok(TextStyle {
            font: self.font_id()?,
            size: self.size,
            height: self.height,
            pad: self.pad,
            spacing: self.spacing,
        })
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}
