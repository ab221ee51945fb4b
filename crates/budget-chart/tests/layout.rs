// File: crates/budget-chart/tests/layout.rs
// Purpose: Axis ticks, bar geometry, label suppression and legend placement,
// measured with fixed text metrics so results do not depend on system fonts.

use budget_chart::layout::{layout, SeriesKind, BAR_WIDTH, INTERNAL_LABEL_MIN_PX};
use budget_chart::text::{TextExtent, TextMeasure};
use budget_chart::{ChartModel, ChartSettings, Item};

struct FixedMetrics;

impl TextMeasure for FixedMetrics {
    fn measure(&self, text: &str, size_px: f32, _bold: bool) -> TextExtent {
        TextExtent { width: text.chars().count() as f32 * size_px * 0.6, height: size_px * 1.2 }
    }
}

fn stacked(values: &[(&str, f64, f64)]) -> Vec<Item> {
    values.iter().map(|&(t, p, s)| Item::stacked(t, p, s)).collect()
}

#[test]
fn four_ticks_span_zero_to_max_total() {
    let model = ChartModel::build(&stacked(&[("A", 2_000_000.0, 1_000_000.0), ("B", 500.0, 0.0)]));
    let l = layout(&model, &ChartSettings::default(), &FixedMetrics);

    let values: Vec<f64> = l.yticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![0.0, 1_000_000.0, 2_000_000.0, 3_000_000.0]);
    let labels: Vec<&str> = l.yticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["R$ 0,0 Mi", "R$ 1,0 Mi", "R$ 2,0 Mi", "R$ 3,0 Mi"]);
    assert!(values.windows(2).all(|w| w[0] <= w[1]));

    // axis headroom: the top tick sits below the top of the plot
    assert!((l.frame.y.vmax - 3_000_000.0 * 1.05).abs() < 1e-6);
    assert!(l.frame.y.to_px(3_000_000.0) > l.frame.rect.top);
}

#[test]
fn all_zero_totals_clamp_max_to_one() {
    let model = ChartModel::build(&stacked(&[("A", 0.0, 0.0), ("B", 0.0, 0.0)]));
    assert_eq!(model.max_total, 1.0);

    let l = layout(&model, &ChartSettings::default(), &FixedMetrics);
    assert_eq!(l.yticks[3].value, 1.0);
    for t in &l.yticks {
        assert_eq!(t.label, "R$ 0,0 Mi");
    }
    assert!(l.bars.iter().all(|b| b.total_label.is_none()));
    assert!(l.show_internal_label().iter().all(|s| !s));
}

#[test]
fn empty_items_produce_an_empty_chart() {
    let model = ChartModel::build(&[]);
    assert!(model.is_empty());
    assert_eq!(model.max_total, 1.0);
    assert!(!model.stacked);

    let l = layout(&model, &ChartSettings::default(), &FixedMetrics);
    assert!(l.bars.is_empty());
    assert!(l.xlabels.is_empty());
    assert_eq!(l.yticks[3].value, 1.0);
}

#[test]
fn model_derives_totals_and_stacking_flag() {
    let items = vec![Item::stacked("A", 100.0, 50.0), Item::single("B", 20.0)];
    let model = ChartModel::build(&items);
    assert_eq!(model.labels, vec!["A", "B"]);
    assert_eq!(model.secondary, vec![50.0, 0.0]);
    assert_eq!(model.totals, vec![150.0, 20.0]);
    assert_eq!(model.max_total, 150.0);
    assert!(model.stacked);

    let single = ChartModel::build(&[Item::single("A", 3.0)]);
    assert!(!single.stacked);
}

#[test]
fn secondary_segment_stacks_on_primary() {
    let model = ChartModel::build(&stacked(&[("A", 100.0, 50.0)]));
    let l = layout(&model, &ChartSettings::default(), &FixedMetrics);
    let bar = &l.bars[0];
    let sec = bar.secondary.as_ref().expect("stacked bar");

    assert_eq!(bar.primary.kind, SeriesKind::Primary);
    assert_eq!((bar.primary.bottom, bar.primary.top), (0.0, 100.0));
    assert_eq!((sec.bottom, sec.top), (100.0, 150.0));
    assert!((sec.rect.bottom - bar.primary.rect.top).abs() < 1e-3);

    let slot = l.frame.x.slot_px;
    assert!((bar.primary.rect.width() - slot * BAR_WIDTH as f32).abs() < 1e-3);
    assert!((bar.center_x - bar.primary.rect.center_x()).abs() < 1e-3);

    assert_eq!(bar.primary.label, "R$ 100,00");
    assert_eq!(sec.label, "R$ 50,00");
    let total = bar.total_label.as_ref().expect("total label");
    assert_eq!(total.text, "R$ 150,00");
    assert!(total.anchor.1 < sec.rect.top, "total label sits above the bar");
}

#[test]
fn single_series_bars_have_no_secondary_segment() {
    let model = ChartModel::build(&[Item::single("A", 10.0), Item::single("B", 5.0)]);
    let l = layout(&model, &ChartSettings::default(), &FixedMetrics);
    assert!(l.bars.iter().all(|b| b.secondary.is_none()));
    assert_eq!(l.show_internal_label().len(), 2);
    assert_eq!(l.legend.as_ref().map(|g| g.entries.len()), Some(1));
}

#[test]
fn inline_label_threshold_depends_on_height() {
    let model = ChartModel::build(&stacked(&[("A", 90.0, 10.0)]));

    let short = layout(&model, &ChartSettings::default(), &FixedMetrics);
    let sec = short.bars[0].secondary.as_ref().unwrap();
    assert!(sec.pixel_height <= INTERNAL_LABEL_MIN_PX, "{}", sec.pixel_height);
    assert_eq!(short.show_internal_label(), vec![true, false]);

    let tall = layout(&model, &ChartSettings::default().with_size(1200, 600), &FixedMetrics);
    let sec = tall.bars[0].secondary.as_ref().unwrap();
    assert!(sec.pixel_height > INTERNAL_LABEL_MIN_PX, "{}", sec.pixel_height);
    assert_eq!(tall.show_internal_label(), vec![true, true]);
}

#[test]
fn inline_label_threshold_depends_on_max_total() {
    // same segment value, taller neighbour compresses it below the threshold
    let alone = ChartModel::build(&stacked(&[("A", 30.0, 20.0)]));
    let crowded = ChartModel::build(&stacked(&[("A", 30.0, 20.0), ("B", 500.0, 0.0)]));
    let settings = ChartSettings::default();

    let a = layout(&alone, &settings, &FixedMetrics);
    let c = layout(&crowded, &settings, &FixedMetrics);
    assert!(a.bars[0].secondary.as_ref().unwrap().show_label);
    assert!(!c.bars[0].secondary.as_ref().unwrap().show_label);
}

#[test]
fn pixel_height_uses_the_drawing_transform() {
    let model = ChartModel::build(&stacked(&[("A", 40.0, 25.0)]));
    let l = layout(&model, &ChartSettings::default(), &FixedMetrics);
    for seg in l.bars[0].segments() {
        assert!((seg.pixel_height - seg.rect.height()).abs() < 1e-3);
        let expect = (l.frame.y.to_px(seg.bottom) - l.frame.y.to_px(seg.top)).abs();
        assert!((seg.pixel_height - expect).abs() < 1e-6);
    }
}

#[test]
fn hidden_legend_blanks_labels_but_keeps_positions() {
    let items = stacked(&[("Obra", 100.0, 50.0), ("Projeto", 10.0, 5.0), ("Custeio", 0.0, 7.0)]);
    let model = ChartModel::build(&items);
    let with = layout(&model, &ChartSettings::default(), &FixedMetrics);
    let without = layout(&model, &ChartSettings { show_legend: false, ..ChartSettings::default() }, &FixedMetrics);

    assert_eq!(with.xlabels, vec!["Obra", "Projeto", "Custeio"]);
    assert_eq!(without.xlabels, vec!["", "", ""]);
    assert_eq!(with.xtick_positions(), without.xtick_positions());
    assert_eq!(with.frame, without.frame);
    for (a, b) in with.bars.iter().zip(&without.bars) {
        assert_eq!(a.primary.rect, b.primary.rect);
        assert_eq!(a.secondary, b.secondary);
    }
    assert!(with.legend.is_some());
    assert!(without.legend.is_none());
}

#[test]
fn legend_sits_top_right_inside_plot() {
    let model = ChartModel::build(&stacked(&[("A", 1.0, 1.0)]));
    let settings = ChartSettings {
        label_primary: "Green".into(),
        label_secondary: "Yellow".into(),
        ..ChartSettings::default()
    };
    let l = layout(&model, &settings, &FixedMetrics);
    let legend = l.legend.expect("legend shown");
    let labels: Vec<&str> = legend.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Green", "Yellow"]);
    assert!(legend.bounds.right <= l.frame.rect.right);
    assert!(legend.bounds.top >= l.frame.rect.top);
    assert!(legend.bounds.left > l.frame.rect.center_x());
    assert!(legend.entries[0].swatch.top < legend.entries[1].swatch.top);
}

#[test]
fn left_inset_grows_with_tick_label_width() {
    let small = ChartModel::build(&[Item::single("A", 10.0)]);
    let huge = ChartModel::build(&[Item::single("A", 9.0e12)]);
    let s = layout(&small, &ChartSettings::default(), &FixedMetrics);
    let h = layout(&huge, &ChartSettings::default(), &FixedMetrics);
    assert!(h.frame.rect.left > s.frame.rect.left);
    assert_eq!(h.frame.rect.top, s.frame.rect.top);
    assert_eq!(h.frame.rect.bottom, s.frame.rect.bottom);
}
