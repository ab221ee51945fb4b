// File: crates/budget-chart/src/color.rs
// Summary: Resolves caller color strings (hex, rgb(), named) into drawable colors.

use skia_safe as skia;

use crate::error::{ChartError, ChartResult};

/// A color after parsing. Hex values are always `#rrggbb` in lowercase;
/// RGB components are fractions in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Hex(String),
    Rgb(f32, f32, f32),
    Named(String),
}

/// Input accepted by [`resolve`]: a raw string or an already resolved color.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorSpec {
    Raw(String),
    Resolved(Color),
}

impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_owned())
    }
}

impl From<String> for ColorSpec {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<Color> for ColorSpec {
    fn from(c: Color) -> Self {
        Self::Resolved(c)
    }
}

/// Normalize a color specification. Idempotent on resolved colors.
pub fn resolve(spec: impl Into<ColorSpec>) -> ChartResult<Color> {
    match spec.into() {
        ColorSpec::Resolved(c) => Ok(c),
        ColorSpec::Raw(s) => parse(&s),
    }
}

fn parse(s: &str) -> ChartResult<Color> {
    if s.starts_with("rgb") {
        return parse_rgb(s);
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(s, hex);
    }
    Ok(Color::Named(s.to_owned()))
}

fn parse_rgb(s: &str) -> ChartResult<Color> {
    let inner = s.trim_start_matches("rgb").replace(['(', ')'], "");
    let parts = inner
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ChartError::invalid_color(s))?;
    match parts.as_slice() {
        &[r, g, b] => Ok(Color::Rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )),
        _ => Err(ChartError::invalid_color(s)),
    }
}

fn parse_hex(original: &str, hex: &str) -> ChartResult<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ChartError::invalid_color(original));
    }
    let expanded = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => hex.to_owned(),
        _ => return Err(ChartError::invalid_color(original)),
    };
    Ok(Color::Hex(format!("#{}", expanded.to_ascii_lowercase())))
}

impl Color {
    /// Convert to a Skia color; opaque except for `none` and `transparent`.
    pub fn to_skia(&self) -> ChartResult<skia::Color> {
        match self {
            Color::Hex(h) => {
                let v = u32::from_str_radix(h.trim_start_matches('#'), 16)
                    .map_err(|_| ChartError::invalid_color(h.as_str()))?;
                Ok(skia::Color::from_argb(255, (v >> 16) as u8, (v >> 8) as u8, v as u8))
            }
            Color::Rgb(r, g, b) => Ok(skia::Color::from_argb(255, unit_to_u8(*r), unit_to_u8(*g), unit_to_u8(*b))),
            Color::Named(name) => named(name).ok_or_else(|| ChartError::invalid_color(name.as_str())),
        }
    }
}

fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// CSS named colors (the full CSS4 keyword set) plus `none`.
fn named(name: &str) -> Option<skia::Color> {
    let name = name.trim().to_ascii_lowercase();
    if name == "none" {
        return Some(skia::Color::TRANSPARENT);
    }
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let [r, g, b, a] = csscolorparser::parse(&name).ok()?.to_rgba8();
    Some(skia::Color::from_argb(a, r, g, b))
}
