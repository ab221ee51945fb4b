// File: crates/budget-chart/src/render.rs
// Summary: Rasterizes a laid-out chart onto a request-scoped Skia CPU surface and
// reads it back as straight-alpha RGBA.

use image::RgbaImage;
use skia_safe as skia;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::layout::{Layout, PlotFrame, SeriesKind, Tick};
use crate::model::ChartModel;
use crate::settings::{ChartSettings, Palette};
use crate::text::{HAlign, TextPlacement, TextShaper, VAlign};
use crate::theme::Theme;

const TICK_LABEL_PAD: f32 = 3.5;

/// Drawing state for exactly one render call. Nothing here outlives the call,
/// so concurrent renders never observe each other's surface or fonts.
pub struct RenderContext {
    surface: skia::Surface,
    shaper: TextShaper,
    theme: Theme,
    width: i32,
    height: i32,
}

impl RenderContext {
    pub fn new(width: i32, height: i32, theme: Theme) -> ChartResult<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| ChartError::render(format!("failed to create {width}x{height} raster surface")))?;
        Ok(Self { surface, shaper: TextShaper::new(), theme, width, height })
    }

    pub fn shaper(&self) -> &TextShaper {
        &self.shaper
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Draw every chart element, back to front.
    pub fn draw(&mut self, model: &ChartModel, layout: &Layout, settings: &ChartSettings, palette: Palette) {
        let theme = self.theme;
        let shaper = &self.shaper;
        let canvas = self.surface.canvas();

        canvas.clear(theme.background);

        draw_grid(canvas, &theme, &layout.frame, &layout.yticks);
        draw_bars(canvas, layout, palette, SeriesKind::Primary);
        if model.stacked {
            draw_bars(canvas, layout, palette, SeriesKind::Secondary);
        }
        if settings.draw_labels {
            draw_value_labels(canvas, shaper, &theme, layout);
        }
        draw_ticks(canvas, shaper, &theme, layout, settings.draw_labels);
        draw_spines(canvas, &theme, &layout.frame);
        draw_legend(canvas, shaper, &theme, layout, palette, settings.draw_labels);
    }

    /// Read the surface back as unpremultiplied RGBA8 and release it.
    pub fn finish(mut self) -> ChartResult<RgbaImage> {
        let (w, h) = (self.width, self.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut px = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut px, row_bytes, (0, 0)) {
            return Err(ChartError::render("surface pixel readback failed"));
        }
        RgbaImage::from_raw(w as u32, h as u32, px)
            .ok_or_else(|| ChartError::render("pixel buffer does not match surface size"))
    }
}

/// Render `layout` into a fresh transparent raster of the configured size.
pub fn render(model: &ChartModel, layout: &Layout, settings: &ChartSettings) -> ChartResult<RgbaImage> {
    settings.validate()?;
    let palette = settings.palette()?;
    let mut ctx = RenderContext::new(settings.width_px, settings.height_px, Theme::default())?;
    ctx.draw(model, layout, settings, palette);
    let img = ctx.finish()?;
    debug!(width = img.width(), height = img.height(), bars = layout.bars.len(), "chart rasterized");
    Ok(img)
}

// ---- helpers ----------------------------------------------------------------

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, theme: &Theme, frame: &PlotFrame, ticks: &[Tick]) {
    let mut paint = stroke(theme.grid, 0.8);
    paint.set_path_effect(skia::PathEffect::dash(&theme.grid_dash, 0.0));
    for t in ticks {
        let y = frame.y.to_px(t.value);
        canvas.draw_line((frame.rect.left, y), (frame.rect.right, y), &paint);
    }
}

fn draw_bars(canvas: &skia::Canvas, layout: &Layout, palette: Palette, kind: SeriesKind) {
    let paint = fill(match kind {
        SeriesKind::Primary => palette.primary,
        SeriesKind::Secondary => palette.secondary,
    });
    for seg in layout.bars.iter().flat_map(|b| b.segments()).filter(|s| s.kind == kind) {
        if seg.pixel_height <= 0.0 {
            continue;
        }
        let r = seg.rect;
        canvas.draw_rect(skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom), &paint);
    }
}

fn draw_value_labels(canvas: &skia::Canvas, shaper: &TextShaper, theme: &Theme, layout: &Layout) {
    let centered = TextPlacement::new(HAlign::Center, VAlign::Center);
    for bar in &layout.bars {
        for seg in bar.segments().filter(|s| s.show_label) {
            let anchor = (seg.rect.center_x(), seg.rect.center_y());
            shaper.draw(canvas, &seg.label, anchor, theme.value_label, centered);
        }
        if let Some(total) = &bar.total_label {
            let above = TextPlacement::new(HAlign::Center, VAlign::Bottom);
            shaper.draw(canvas, &total.text, total.anchor, theme.total_label, above);
        }
    }
}

fn draw_ticks(canvas: &skia::Canvas, shaper: &TextShaper, theme: &Theme, layout: &Layout, labels: bool) {
    let frame = &layout.frame;
    let paint = stroke(theme.tick, 1.0);

    let y_label = TextPlacement::new(HAlign::Right, VAlign::Center);
    for t in &layout.yticks {
        let y = frame.y.to_px(t.value);
        canvas.draw_line((frame.rect.left - theme.tick_len, y), (frame.rect.left, y), &paint);
        if labels {
            let anchor = (frame.rect.left - theme.tick_len - TICK_LABEL_PAD, y);
            shaper.draw(canvas, &t.label, anchor, theme.tick_label, y_label);
        }
    }

    let x_label = TextPlacement::new(HAlign::Right, VAlign::Top).rotated(theme.x_label_rotation);
    let bottom = frame.rect.bottom;
    for (bar, text) in layout.bars.iter().zip(&layout.xlabels) {
        canvas.draw_line((bar.center_x, bottom), (bar.center_x, bottom + theme.tick_len), &paint);
        if labels {
            let anchor = (bar.center_x, bottom + theme.tick_len + TICK_LABEL_PAD);
            shaper.draw(canvas, text, anchor, theme.x_label, x_label);
        }
    }
}

/// Bottom and left spines only; top and right stay hidden.
fn draw_spines(canvas: &skia::Canvas, theme: &Theme, frame: &PlotFrame) {
    let paint = stroke(theme.axis_line, theme.axis_line_width);
    let r = frame.rect;
    canvas.draw_line((r.left, r.bottom), (r.right, r.bottom), &paint);
    canvas.draw_line((r.left, r.top), (r.left, r.bottom), &paint);
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    layout: &Layout,
    palette: Palette,
    labels: bool,
) {
    let Some(legend) = &layout.legend else { return };
    let placement = TextPlacement::new(HAlign::Left, VAlign::Center);
    for entry in &legend.entries {
        let paint = fill(match entry.kind {
            SeriesKind::Primary => palette.primary,
            SeriesKind::Secondary => palette.secondary,
        });
        let s = entry.swatch;
        canvas.draw_rect(skia::Rect::from_ltrb(s.left, s.top, s.right, s.bottom), &paint);
        if labels {
            shaper.draw(canvas, &entry.label, entry.label_anchor, theme.legend_label, placement);
        }
    }
}
