// File: crates/dlsplot-core/src/axis.rs
// Summary: Axis model and the widen-only bounds record used for auto-ranging.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

/// Mutable `{min, max}` record an axis auto-ranges with.
///
/// Contract: the `widen_*` methods only ever move `min` down and `max` up.
/// Comparisons are strict, so a NaN candidate never changes the bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Seed for auto-ranging: any finite value widens it.
    pub const fn empty() -> Self {
        Self { min: f64::INFINITY, max: f64::NEG_INFINITY }
    }

    /// True until something has widened both ends (or when either end is NaN).
    pub fn is_empty(&self) -> bool {
        !(self.min <= self.max)
    }

    pub fn widen_min(&mut self, v: f64) {
        if v < self.min {
            self.min = v;
        }
    }

    pub fn widen_max(&mut self, v: f64) {
        if v > self.max {
            self.max = v;
        }
    }

    pub fn widen(&mut self, lo: f64, hi: f64) {
        self.widen_min(lo);
        self.widen_max(hi);
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Axis {
    pub label: String,
    pub bounds: AxisBounds,
    #[serde(default)]
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), bounds: AxisBounds::new(min, max), kind: ScaleKind::Linear }
    }

    pub fn with_kind(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }

    /// Horizontal axis in seconds (raw ticks / 1000).
    pub fn default_x() -> Self {
        Self::new("Time", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 100.0)
    }
}
