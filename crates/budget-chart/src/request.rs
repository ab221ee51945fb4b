// File: crates/budget-chart/src/request.rs
// Summary: JSON payload model shared by the HTTP server and the CLI.
// Notes:
// - Field names accept both the English names and the Portuguese names used by
//   existing clients (`insumos`, `personalizacao`, `valor_verde`, ...).
// - Item values and integer settings are kept as raw JSON so a bad record maps
//   to a typed error instead of an opaque deserialization failure.
// - Integer settings take integers, floats (truncated) and numeric strings.

use base64::Engine as _;
use serde::Deserialize;
use serde_json::Value;

use crate::color::ColorSpec;
use crate::error::{ChartError, ChartResult};
use crate::model::Item;
use crate::settings::ChartSettings;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChartRequest {
    #[serde(default, alias = "insumos")]
    pub items: Vec<ItemPayload>,
    #[serde(default, alias = "personalizacao")]
    pub settings: SettingsPayload,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ItemPayload {
    #[serde(default, alias = "titulo")]
    pub title: Option<Value>,
    #[serde(default, alias = "valor_verde")]
    pub value_primary: Option<Value>,
    #[serde(default, alias = "valor_amarelo")]
    pub value_secondary: Option<Value>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SettingsPayload {
    #[serde(default, alias = "largura")]
    pub width: Option<Value>,
    #[serde(default, alias = "altura")]
    pub height: Option<Value>,
    #[serde(default, alias = "cor_verde")]
    pub color_primary: Option<String>,
    #[serde(default, alias = "cor_amarelo")]
    pub color_secondary: Option<String>,
    #[serde(default, alias = "legenda")]
    pub show_legend: Option<bool>,
    #[serde(default)]
    pub x: Option<Value>,
    #[serde(default)]
    pub y: Option<Value>,
    /// Base64 image, optionally as a `data:` URL.
    #[serde(default, alias = "background_b64")]
    pub background: Option<String>,
    #[serde(default)]
    pub label_primary: Option<String>,
    #[serde(default)]
    pub label_secondary: Option<String>,
}

impl ChartRequest {
    /// Validate the payload and split it into pipeline inputs.
    pub fn into_parts(self) -> ChartResult<(Vec<Item>, ChartSettings)> {
        let items = self
            .items
            .into_iter()
            .enumerate()
            .map(|(i, it)| it.into_item(i))
            .collect::<ChartResult<Vec<_>>>()?;
        let settings = self.settings.into_settings()?;
        Ok((items, settings))
    }
}

impl ItemPayload {
    pub fn into_item(self, index: usize) -> ChartResult<Item> {
        let title = match self.title {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Null) | None => return Err(ChartError::malformed(index, "missing title")),
            Some(other) => return Err(ChartError::malformed(index, format!("title must be a string, got {other}"))),
        };
        let primary = number(index, "value_primary", self.value_primary)?.unwrap_or(0.0);
        let secondary = number(index, "value_secondary", self.value_secondary)?;
        Item::try_new(index, title, primary, secondary)
    }
}

fn number(index: usize, field: &str, v: Option<Value>) -> ChartResult<Option<f64>> {
    match v {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| ChartError::malformed(index, format!("{field} is out of range"))),
        Some(other) => Err(ChartError::malformed(index, format!("{field} must be a number, got {other}"))),
    }
}

impl SettingsPayload {
    pub fn into_settings(self) -> ChartResult<ChartSettings> {
        let defaults = ChartSettings::default();
        let width = integer("width", self.width)?.unwrap_or(i64::from(defaults.width_px));
        let height = integer("height", self.height)?.unwrap_or(i64::from(defaults.height_px));
        let x = integer("x", self.x)?.unwrap_or(0);
        let y = integer("y", self.y)?.unwrap_or(0);
        let (width_px, height_px) = match (i32::try_from(width), i32::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
            _ => return Err(ChartError::InvalidDimensions { width, height }),
        };

        let background = match self.background.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(b64) => Some(decode_background(b64)?),
        };

        Ok(ChartSettings {
            width_px,
            height_px,
            color_primary: self.color_primary.map(ColorSpec::from).unwrap_or(defaults.color_primary),
            color_secondary: self.color_secondary.map(ColorSpec::from).unwrap_or(defaults.color_secondary),
            show_legend: self.show_legend.unwrap_or(defaults.show_legend),
            offset_x: clamp_i32(x),
            offset_y: clamp_i32(y),
            background,
            label_primary: self.label_primary.unwrap_or(defaults.label_primary),
            label_secondary: self.label_secondary.unwrap_or(defaults.label_secondary),
            draw_labels: defaults.draw_labels,
        })
    }
}

fn integer(field: &str, v: Option<Value>) -> ChartResult<Option<i64>> {
    match v {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok(Some(i)),
            (None, Some(f)) if f.is_finite() => Ok(Some(f.trunc() as i64)),
            _ => Err(ChartError::setting(field, format!("{n} is not an integer"))),
        },
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ChartError::setting(field, format!("{s:?} is not an integer"))),
        Some(other) => Err(ChartError::setting(field, format!("expected an integer, got {other}"))),
    }
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Decode a base64 background, accepting a `data:<mime>;base64,` prefix.
pub fn decode_background(b64: &str) -> ChartResult<Vec<u8>> {
    let body = match b64.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => b64,
    };
    base64::engine::general_purpose::STANDARD
        .decode(body.trim())
        .map_err(|e| ChartError::background(format!("base64: {e}")))
}
