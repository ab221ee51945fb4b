// File: crates/budget-chart/src/scale.rs
// Summary: Data-to-device transforms for the category (X) and value (Y) axes.

/// Category coordinate (bar index; bar `i` is centered on `i as f64`).
pub type Logical = f64;
/// Value coordinate (money).
pub type Value = f64;

/// Horizontal category scale controlled via logical start and slot spacing (px per unit).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryScale {
    pub left_px: f32,
    pub start_logical: Logical,
    pub slot_px: f32,
}

impl CategoryScale {
    /// Fit `count` unit slots (`[-0.5, count - 0.5]`) into `[left_px, right_px]`.
    /// An empty chart still gets one slot so the transform stays finite.
    pub fn fit(left_px: f32, right_px: f32, count: usize) -> Self {
        let slots = count.max(1) as f32;
        Self {
            left_px,
            start_logical: -0.5,
            slot_px: ((right_px - left_px) / slots).max(0.01),
        }
    }

    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        self.left_px + ((x - self.start_logical) as f32) * self.slot_px
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> Logical {
        self.start_logical + ((px - self.left_px) / self.slot_px) as f64
    }

    /// Width in pixels of a span of `units` logical units.
    #[inline]
    pub fn len_px(&self, units: f64) -> f32 {
        units as f32 * self.slot_px
    }
}

/// Vertical linear value scale mapping `[vmin, vmax]` to `[bottom_px, top_px]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 {
            s.vmax = s.vmin + 1.0;
        }
        s
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = self.vmax - self.vmin;
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> Value {
        let span = self.vmax - self.vmin;
        self.vmin + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
    }

    /// Rendered height in pixels of the data interval `[y0, y1]`.
    #[inline]
    pub fn span_px(&self, y0: Value, y1: Value) -> f32 {
        (self.to_px(y0) - self.to_px(y1)).abs()
    }
}
