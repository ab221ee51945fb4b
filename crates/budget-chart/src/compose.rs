// File: crates/budget-chart/src/compose.rs
// Summary: Source-over compositing of the chart raster onto an optional background.
// Notes:
// - Both rasters are straight (unpremultiplied) RGBA8.
// - The background is never resized; chart pixels outside it are clipped.

use image::{Rgba, RgbaImage};
use tracing::debug;

pub type Rgba8 = [u8; 4];

/// Straight-alpha "over": `src` on top of `dst`.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }
    let sa = f32::from(src[3]) / 255.0;
    let da = f32::from(dst[3]) / 255.0;
    let oa = sa + da * (1.0 - sa);

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = (f32::from(src[i]) * sa + f32::from(dst[i]) * da * (1.0 - sa)) / oa;
        out[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (oa * 255.0).round().clamp(0.0, 255.0) as u8;
    out
}

/// Place `chart` with its top-left corner at `(x, y)` of `background`.
/// Without a background the chart is returned untouched; with one, the
/// output always has the background's dimensions.
pub fn compose(chart: RgbaImage, background: Option<RgbaImage>, x: i32, y: i32) -> RgbaImage {
    let Some(mut out) = background else {
        return chart;
    };

    let (bw, bh) = (i64::from(out.width()), i64::from(out.height()));
    let (cw, ch) = (i64::from(chart.width()), i64::from(chart.height()));
    let (x, y) = (i64::from(x), i64::from(y));

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + cw).min(bw);
    let y1 = (y + ch).min(bh);
    if x0 >= x1 || y0 >= y1 {
        debug!(x, y, "chart lies entirely outside the background");
        return out;
    }

    for by in y0..y1 {
        for bx in x0..x1 {
            let src = chart.get_pixel((bx - x) as u32, (by - y) as u32).0;
            let dst = out.get_pixel_mut(bx as u32, by as u32);
            *dst = Rgba(over(dst.0, src));
        }
    }
    out
}
