// File: crates/budget-chart/src/lib.rs
// Summary: Library entry point; exposes the render-and-composite pipeline that turns
// labeled values into a PNG bar chart, optionally placed over a background.

pub mod color;
pub mod compose;
pub mod error;
pub mod format;
pub mod layout;
pub mod model;
pub mod render;
pub mod request;
pub mod scale;
pub mod settings;
pub mod text;
pub mod theme;
pub mod types;

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use tracing::{debug, instrument};

pub use color::{resolve, Color, ColorSpec};
pub use compose::compose;
pub use error::{ChartError, ChartResult};
pub use layout::{Layout, LayoutEngine, Tick};
pub use model::{ChartModel, Item};
pub use render::{render, RenderContext};
pub use request::ChartRequest;
pub use settings::ChartSettings;
pub use text::{TextMeasure, TextShaper};
pub use theme::Theme;

/// Render `items` with `settings` and return the final raster: the chart alone,
/// or the background with the chart composited at `(offset_x, offset_y)`.
///
/// Validation (dimensions, items, colors, background decoding) happens before
/// any drawing, so a failed call never yields a partial image.
#[instrument(skip_all, fields(items = items.len(), width = settings.width_px, height = settings.height_px))]
pub fn render_chart_raster(items: &[Item], settings: &ChartSettings) -> ChartResult<RgbaImage> {
    settings.validate()?;
    model::validate_items(items)?;
    let palette = settings.palette()?;
    let background = settings.background.as_deref().map(decode_background).transpose()?;

    let model = ChartModel::build(items);
    let mut ctx = RenderContext::new(settings.width_px, settings.height_px, Theme::default())?;
    let layout = LayoutEngine::new(*ctx.theme()).layout(&model, settings, ctx.shaper());
    debug!(max_total = model.max_total, stacked = model.stacked, "layout ready");

    ctx.draw(&model, &layout, settings, palette);
    let chart = ctx.finish()?;

    Ok(compose(chart, background, settings.offset_x, settings.offset_y))
}

/// [`render_chart_raster`] encoded as PNG bytes.
pub fn render_chart(items: &[Item], settings: &ChartSettings) -> ChartResult<Vec<u8>> {
    let out = render_chart_raster(items, settings)?;
    encode_png(&out)
}

/// Decode any supported image format into straight-alpha RGBA.
pub fn decode_background(bytes: &[u8]) -> ChartResult<RgbaImage> {
    let img = image::load_from_memory(bytes).map_err(ChartError::background)?;
    Ok(img.to_rgba8())
}

pub fn encode_png(img: &RgbaImage) -> ChartResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(ChartError::encode)?;
    Ok(buf)
}
