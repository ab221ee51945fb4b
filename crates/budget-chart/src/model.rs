// File: crates/budget-chart/src/model.rs
// Summary: Item records and the derived per-bar series used for axis scaling.

use crate::error::{ChartError, ChartResult};

/// One labeled bar. `value_secondary` is `None` for single-series charts.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub title: String,
    pub value_primary: f64,
    pub value_secondary: Option<f64>,
}

impl Item {
    /// Construct an item, rejecting negative or non-finite values.
    /// `index` is the item's position in the request and only feeds the error.
    pub fn try_new(
        index: usize,
        title: impl Into<String>,
        value_primary: f64,
        value_secondary: Option<f64>,
    ) -> ChartResult<Self> {
        check_value(index, "value_primary", value_primary)?;
        if let Some(v) = value_secondary {
            check_value(index, "value_secondary", v)?;
        }
        Ok(Self {
            title: title.into(),
            value_primary: unsigned_zero(value_primary),
            value_secondary: value_secondary.map(unsigned_zero),
        })
    }

    pub fn single(title: impl Into<String>, value: f64) -> Self {
        Self { title: title.into(), value_primary: value, value_secondary: None }
    }

    pub fn stacked(title: impl Into<String>, primary: f64, secondary: f64) -> Self {
        Self { title: title.into(), value_primary: primary, value_secondary: Some(secondary) }
    }

    pub fn total(&self) -> f64 {
        self.value_primary + self.value_secondary.unwrap_or(0.0)
    }
}

/// `-0.0` passes validation but must not surface as a signed label.
fn unsigned_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

fn check_value(index: usize, field: &str, v: f64) -> ChartResult<()> {
    if !v.is_finite() {
        return Err(ChartError::malformed(index, format!("{field} is not a finite number")));
    }
    if v < 0.0 {
        return Err(ChartError::malformed(index, format!("{field} is negative ({v})")));
    }
    Ok(())
}

/// Validate a whole item list; the first bad record aborts.
pub fn validate_items(items: &[Item]) -> ChartResult<()> {
    for (i, it) in items.iter().enumerate() {
        check_value(i, "value_primary", it.value_primary)?;
        if let Some(v) = it.value_secondary {
            check_value(i, "value_secondary", v)?;
        }
    }
    Ok(())
}

/// Column-oriented view of the items plus the axis maximum.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartModel {
    pub labels: Vec<String>,
    pub primary: Vec<f64>,
    pub secondary: Vec<f64>,
    pub totals: Vec<f64>,
    /// Largest total, never below 1.
    pub max_total: f64,
    /// True when any item carries a secondary value.
    pub stacked: bool,
}

impl ChartModel {
    pub fn build(items: &[Item]) -> Self {
        let labels = items.iter().map(|it| it.title.clone()).collect();
        let primary: Vec<f64> = items.iter().map(|it| it.value_primary).collect();
        let secondary: Vec<f64> = items.iter().map(|it| it.value_secondary.unwrap_or(0.0)).collect();
        let totals: Vec<f64> = primary.iter().zip(&secondary).map(|(p, s)| p + s).collect();
        let max = totals.iter().copied().fold(0.0_f64, f64::max);
        let max_total = if max > 0.0 { max } else { 1.0 };
        let stacked = items.iter().any(|it| it.value_secondary.is_some());
        Self { labels, primary, secondary, totals, max_total, stacked }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
