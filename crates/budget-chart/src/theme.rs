// File: crates/budget-chart/src/theme.rs
// Summary: Overlay palette: light strokes and text meant for a transparent canvas
// composited onto dark branded backgrounds.

use skia_safe as skia;

use crate::text::LabelStyle;
use crate::types::pt_to_px;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Canvas clear color. Must stay fully transparent for overlays.
    pub background: skia::Color,
    pub grid: skia::Color,
    pub grid_dash: [f32; 2],
    pub axis_line: skia::Color,
    pub axis_line_width: f32,
    pub tick: skia::Color,
    pub tick_len: f32,
    pub tick_label: LabelStyle,
    pub x_label: LabelStyle,
    pub x_label_rotation: f32,
    pub value_label: LabelStyle,
    pub total_label: LabelStyle,
    pub legend_label: LabelStyle,
}

impl Theme {
    pub fn overlay() -> Self {
        let white = skia::Color::from_argb(255, 255, 255, 255);
        Self {
            name: "overlay",
            background: skia::Color::TRANSPARENT,
            // white at alpha 0.4
            grid: skia::Color::from_argb(102, 255, 255, 255),
            grid_dash: [3.7, 1.6],
            axis_line: white,
            axis_line_width: 1.2,
            tick: white,
            tick_len: 4.9,
            tick_label: LabelStyle { size: pt_to_px(13.0), color: white, bold: false },
            x_label: LabelStyle { size: pt_to_px(12.0), color: white, bold: false },
            x_label_rotation: 20.0,
            value_label: LabelStyle { size: pt_to_px(11.0), color: white, bold: true },
            total_label: LabelStyle { size: pt_to_px(13.0), color: white, bold: true },
            legend_label: LabelStyle { size: pt_to_px(13.0), color: white, bold: false },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::overlay()
    }
}
