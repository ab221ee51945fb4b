// File: crates/budget-chart/src/settings.rs
// Summary: Per-call render configuration with defaults and validation.

use skia_safe as skia;

use crate::color::{resolve, ColorSpec};
use crate::error::{ChartError, ChartResult};
use crate::types::{HEIGHT, WIDTH};

pub const DEFAULT_PRIMARY: &str = "#25ad60";
pub const DEFAULT_SECONDARY: &str = "#f4cb33";

/// Immutable configuration for one render call.
#[derive(Clone, Debug)]
pub struct ChartSettings {
    pub width_px: i32,
    pub height_px: i32,
    pub color_primary: ColorSpec,
    pub color_secondary: ColorSpec,
    pub show_legend: bool,
    pub offset_x: i32,
    pub offset_y: i32,
    /// Encoded background image (any format the `image` crate decodes).
    pub background: Option<Vec<u8>>,
    /// Legend entry for the primary series.
    pub label_primary: String,
    /// Legend entry for the secondary series.
    pub label_secondary: String,
    /// When false no text is drawn at all (deterministic pixel output).
    pub draw_labels: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width_px: WIDTH,
            height_px: HEIGHT,
            color_primary: ColorSpec::from(DEFAULT_PRIMARY),
            color_secondary: ColorSpec::from(DEFAULT_SECONDARY),
            show_legend: true,
            offset_x: 0,
            offset_y: 0,
            background: None,
            label_primary: "Verde".to_string(),
            label_secondary: "Amarelo".to_string(),
            draw_labels: true,
        }
    }
}

/// Series fill colors after resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: skia::Color,
    pub secondary: skia::Color,
}

impl ChartSettings {
    pub fn with_size(mut self, width_px: i32, height_px: i32) -> Self {
        self.width_px = width_px;
        self.height_px = height_px;
        self
    }

    pub fn with_offset(mut self, x: i32, y: i32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    pub fn with_background(mut self, bytes: Vec<u8>) -> Self {
        self.background = Some(bytes);
        self
    }

    /// Fail with `InvalidDimensions` unless both sides are positive.
    pub fn validate(&self) -> ChartResult<()> {
        if self.width_px <= 0 || self.height_px <= 0 {
            return Err(ChartError::InvalidDimensions {
                width: i64::from(self.width_px),
                height: i64::from(self.height_px),
            });
        }
        Ok(())
    }

    /// Resolve both series colors into drawable values.
    pub fn palette(&self) -> ChartResult<Palette> {
        Ok(Palette {
            primary: resolve(self.color_primary.clone())?.to_skia()?,
            secondary: resolve(self.color_secondary.clone())?.to_skia()?,
        })
    }
}
