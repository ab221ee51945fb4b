// File: crates/budget-chart/src/text.rs
// Summary: Text measurement seam and the Skia textlayout shaper used to draw labels.

use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

/// Measured size of a single-line label, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// Anything that can size a label. Layout depends only on this, so it can be
/// driven by a fixed-metric implementation where fonts are unavailable.
pub trait TextMeasure {
    fn measure(&self, text: &str, size_px: f32, bold: bool) -> TextExtent;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// How a label is placed relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPlacement {
    pub h: HAlign,
    pub v: VAlign,
    /// Counter-clockwise rotation around the anchor, in degrees.
    pub rotation_deg: f32,
}

impl TextPlacement {
    pub const fn new(h: HAlign, v: VAlign) -> Self {
        Self { h, v, rotation_deg: 0.0 }
    }

    pub const fn rotated(mut self, deg: f32) -> Self {
        self.rotation_deg = deg;
        self
    }
}

/// Font size, color and weight of one kind of label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Arial", "Helvetica", "Roboto", "Segoe UI", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// False when no usable system font was found (glyphs would be empty).
    pub fn has_fonts(&self) -> bool {
        self.measure("0", 12.0, false).width > 0.0
    }

    /// Draw `text` at `anchor` according to `placement`.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        anchor: (f32, f32),
        style: LabelStyle,
        placement: TextPlacement,
    ) {
        if text.is_empty() {
            return;
        }
        let p = self.layout(text, style.size, style.color, style.bold);
        let w = p.longest_line();
        let h = p.height();
        let dx = match placement.h {
            HAlign::Left => 0.0,
            HAlign::Center => -w * 0.5,
            HAlign::Right => -w,
        };
        let dy = match placement.v {
            VAlign::Top => 0.0,
            VAlign::Center => -h * 0.5,
            VAlign::Bottom => -h,
        };
        canvas.save();
        canvas.translate(anchor);
        if placement.rotation_deg != 0.0 {
            canvas.rotate(-placement.rotation_deg, None);
        }
        p.paint(canvas, (dx, dy));
        canvas.restore();
    }
}

impl TextMeasure for TextShaper {
    fn measure(&self, text: &str, size_px: f32, bold: bool) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }
        let p = self.layout(text, size_px, skia::Color::from_argb(0, 0, 0, 0), bold);
        TextExtent { width: p.longest_line(), height: p.height() }
    }
}
