// File: crates/budget-chart/src/layout.rs
// Summary: Turns a ChartModel into device-space geometry: plot frame, ticks, bar
// segments, label visibility and legend placement.
// Notes:
// - The plot frame (scales + rect) computed here is the one the renderer draws
//   with; label suppression is decided on exactly the same transform.
// - Vertical insets are fixed, so bar geometry never depends on legend or
//   x-label visibility.

use tracing::trace;

use crate::format::{millions, money};
use crate::model::ChartModel;
use crate::scale::{CategoryScale, ValueScale};
use crate::settings::ChartSettings;
use crate::text::TextMeasure;
use crate::theme::Theme;
use crate::types::{Insets, RectF};

/// Inline labels need a segment strictly taller than this many pixels.
pub const INTERNAL_LABEL_MIN_PX: f32 = 30.0;
pub const Y_TICK_COUNT: usize = 4;
/// Value axis upper limit as a multiple of the largest total.
pub const Y_HEADROOM: f64 = 1.05;
/// Bar width as a fraction of one category slot.
pub const BAR_WIDTH: f64 = 0.8;
/// Gap between a bar top and its total label, as a fraction of the largest total.
pub const TOTAL_LABEL_OFFSET: f64 = 0.02;

const TICK_LABEL_PAD: f32 = 6.0;
const LEFT_MARGIN: f32 = 8.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Data-to-pixel transforms plus the plot rectangle they map into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotFrame {
    pub rect: RectF,
    pub x: CategoryScale,
    pub y: ValueScale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Primary,
    Secondary,
}

/// One stacked piece of a bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub kind: SeriesKind,
    pub bottom: f64,
    pub top: f64,
    pub value: f64,
    pub rect: RectF,
    pub pixel_height: f32,
    pub show_label: bool,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TotalLabel {
    pub text: String,
    /// Bottom-center of the label.
    pub anchor: (f32, f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub index: usize,
    pub center_x: f32,
    pub primary: Segment,
    /// Present on every bar of a stacked chart.
    pub secondary: Option<Segment>,
    pub total: f64,
    pub total_label: Option<TotalLabel>,
}

impl BarLayout {
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        std::iter::once(&self.primary).chain(self.secondary.as_ref())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub kind: SeriesKind,
    pub swatch: RectF,
    pub label: String,
    /// Left-center of the label.
    pub label_anchor: (f32, f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub bounds: RectF,
    pub entries: Vec<LegendEntry>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub frame: PlotFrame,
    pub yticks: [Tick; Y_TICK_COUNT],
    pub xlabels: Vec<String>,
    pub bars: Vec<BarLayout>,
    pub legend: Option<LegendLayout>,
}

impl Layout {
    /// Inline-label decision per segment, bar by bar (primary before secondary).
    pub fn show_internal_label(&self) -> Vec<bool> {
        self.bars.iter().flat_map(|b| b.segments().map(|s| s.show_label)).collect()
    }

    /// Pixel x of each category tick (bar centers).
    pub fn xtick_positions(&self) -> Vec<f32> {
        self.bars.iter().map(|b| b.center_x).collect()
    }
}

/// Y ticks `k * max_total / 3` for k = 0..3, labeled in millions.
pub fn y_ticks(max_total: f64) -> [Tick; Y_TICK_COUNT] {
    let step = max_total / (Y_TICK_COUNT - 1) as f64;
    std::array::from_fn(|k| {
        let value = if k == Y_TICK_COUNT - 1 { max_total } else { step * k as f64 };
        Tick { value, label: millions(value) }
    })
}

pub struct LayoutEngine {
    pub theme: Theme,
    pub insets: Insets,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self { theme: Theme::default(), insets: Insets::default() }
    }
}

impl LayoutEngine {
    pub fn new(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    pub fn layout(&self, model: &ChartModel, settings: &ChartSettings, measure: &dyn TextMeasure) -> Layout {
        let yticks = y_ticks(model.max_total);
        let frame = self.frame(model, settings, &yticks, measure);

        let half_bar = frame.x.len_px(BAR_WIDTH) * 0.5;
        let bars = (0..model.len())
            .map(|i| {
                let center_x = frame.x.to_px(i as f64);
                let primary = segment(&frame, SeriesKind::Primary, i, center_x, half_bar, 0.0, model.primary[i]);
                let secondary = model.stacked.then(|| {
                    segment(&frame, SeriesKind::Secondary, i, center_x, half_bar, model.primary[i], model.secondary[i])
                });
                let total = model.totals[i];
                let total_label = (total > 0.0).then(|| TotalLabel {
                    text: money(total),
                    anchor: (center_x, frame.y.to_px(total + model.max_total * TOTAL_LABEL_OFFSET)),
                });
                BarLayout { index: i, center_x, primary, secondary, total, total_label }
            })
            .collect();

        let xlabels = if settings.show_legend {
            model.labels.clone()
        } else {
            vec![String::new(); model.len()]
        };

        let legend = settings
            .show_legend
            .then(|| self.legend(model, settings, &frame, measure));

        Layout { frame, yticks, xlabels, bars, legend }
    }

    fn frame(
        &self,
        model: &ChartModel,
        settings: &ChartSettings,
        yticks: &[Tick; Y_TICK_COUNT],
        measure: &dyn TextMeasure,
    ) -> PlotFrame {
        let style = self.theme.tick_label;
        let widest = yticks
            .iter()
            .map(|t| measure.measure(&t.label, style.size, style.bold).width)
            .fold(0.0_f32, f32::max);
        let left = self.insets.left.max(LEFT_MARGIN + widest + TICK_LABEL_PAD + self.theme.tick_len);

        let w = settings.width_px as f32;
        let h = settings.height_px as f32;
        let right = (w - self.insets.right).max(left + 1.0);
        let bottom = (h - self.insets.bottom).max(self.insets.top + 1.0);
        let rect = RectF::from_ltrb(left, self.insets.top, right, bottom);

        PlotFrame {
            rect,
            x: CategoryScale::fit(rect.left, rect.right, model.len()),
            y: ValueScale::new(rect.top, rect.bottom, 0.0, model.max_total * Y_HEADROOM),
        }
    }

    fn legend(
        &self,
        model: &ChartModel,
        settings: &ChartSettings,
        frame: &PlotFrame,
        measure: &dyn TextMeasure,
    ) -> LegendLayout {
        let style = self.theme.legend_label;
        let fs = style.size;
        let pad = 0.5 * fs;
        let swatch_w = 2.0 * fs;
        let swatch_h = 0.7 * fs;
        let gap = 0.8 * fs;

        let mut rows = vec![(SeriesKind::Primary, settings.label_primary.clone())];
        if model.stacked {
            rows.push((SeriesKind::Secondary, settings.label_secondary.clone()));
        }
        let sizes: Vec<_> = rows.iter().map(|(_, l)| measure.measure(l, fs, style.bold)).collect();
        let text_w = sizes.iter().map(|s| s.width).fold(0.0_f32, f32::max);
        let row_h = sizes.iter().map(|s| s.height).fold(fs * 1.2, f32::max);

        let width = swatch_w + gap + text_w;
        let height = row_h * rows.len() as f32 + pad * (rows.len() as f32 - 1.0);
        let right = frame.rect.right - pad;
        let top = frame.rect.top + pad;
        let bounds = RectF::from_ltwh(right - width, top, width, height);

        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(i, (kind, label))| {
                let cy = top + row_h * (i as f32 + 0.5) + pad * i as f32;
                let swatch = RectF::from_ltwh(bounds.left, cy - swatch_h * 0.5, swatch_w, swatch_h);
                LegendEntry { kind, swatch, label, label_anchor: (swatch.right + gap, cy) }
            })
            .collect();

        LegendLayout { bounds, entries }
    }
}

fn segment(
    frame: &PlotFrame,
    kind: SeriesKind,
    index: usize,
    center_x: f32,
    half_bar: f32,
    bottom: f64,
    value: f64,
) -> Segment {
    let top = bottom + value;
    let y_top = frame.y.to_px(top);
    let y_bottom = frame.y.to_px(bottom);
    let pixel_height = frame.y.span_px(bottom, top);
    let show_label = pixel_height > INTERNAL_LABEL_MIN_PX;
    if !show_label && value > 0.0 {
        trace!(index, ?kind, pixel_height, "inline label suppressed");
    }
    Segment {
        kind,
        bottom,
        top,
        value,
        rect: RectF::from_ltrb(center_x - half_bar, y_top, center_x + half_bar, y_bottom),
        pixel_height,
        show_label,
        label: money(value),
    }
}

/// Lay out with the default theme and insets.
pub fn layout(model: &ChartModel, settings: &ChartSettings, measure: &dyn TextMeasure) -> Layout {
    LayoutEngine::default().layout(model, settings, measure)
}
