// File: crates/dlsplot-core/src/scale.rs
// Summary: Data-to-pixel transforms (linear and log10) backing the host's scale functions.

use crate::axis::{Axis, AxisBounds, ScaleKind};

/// Maps a data interval onto a pixel interval.
///
/// `px_start` is where `bounds.min` lands; for a Y axis pass the bottom edge
/// so values grow upwards.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    px_start: f64,
    px_end: f64,
    kind: ScaleKind,
    // domain endpoints, already in log space when `kind` is Log10
    d_min: f64,
    d_max: f64,
}

impl AxisScale {
    pub fn linear(bounds: AxisBounds, px_start: f64, px_end: f64) -> Self {
        let (d_min, mut d_max) = (bounds.min, bounds.max);
        if (d_max - d_min).abs() < 1e-12 {
            d_max = d_min + 1.0;
        }
        Self { px_start, px_end, kind: ScaleKind::Linear, d_min, d_max }
    }

    pub fn log10(bounds: AxisBounds, px_start: f64, px_end: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        let vmin = if bounds.min <= eps { eps } else { bounds.min };
        let vmax = if bounds.max <= vmin { vmin * 10.0 } else { bounds.max };
        Self { px_start, px_end, kind: ScaleKind::Log10, d_min: vmin.log10(), d_max: vmax.log10() }
    }

    pub fn for_axis(axis: &Axis, px_start: f64, px_end: f64) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self::linear(axis.bounds, px_start, px_end),
            ScaleKind::Log10 => Self::log10(axis.bounds, px_start, px_end),
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let v = match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::Log10 => v.max(1e-12).log10(),
        };
        let span = (self.d_max - self.d_min).max(1e-12);
        self.px_start + (v - self.d_min) / span * (self.px_end - self.px_start)
    }
}
