// File: crates/dlsplot-core/src/range.rs
// Summary: Axis extent contributions of a block series (horizontal and vertical).

use log::trace;

use crate::axis::AxisBounds;
use crate::block::{Block, TIME_DIVISOR};

/// Widen `bounds` to the series' time extent, in axis units (ticks / 1000).
///
/// Only the first block's `start_time` and the last block's final sample are
/// read; series are expected in non-decreasing time order. An empty series
/// leaves `bounds` untouched, as does a trailing block without samples for
/// the upper end.
pub fn extend_horizontal_range(bounds: &mut AxisBounds, blocks: &[Block]) {
    let (Some(first), Some(last)) = (blocks.first(), blocks.last()) else {
        return;
    };
    bounds.widen_min(first.start_time / TIME_DIVISOR);
    match last.last_sample() {
        Some(s) => bounds.widen_max(s.t / TIME_DIVISOR),
        None => trace!("last block has no samples; upper time bound not extended"),
    }
}

/// Widen `bounds` to cover every sample value of every block, whatever its kind.
pub fn extend_vertical_range(bounds: &mut AxisBounds, blocks: &[Block]) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for s in blocks.iter().flat_map(|b| b.samples.iter()) {
        if s.v < lo { lo = s.v; }
        if s.v > hi { hi = s.v; }
    }
    // still at the seeds: nothing (comparable) was scanned
    if lo <= hi {
        bounds.widen(lo, hi);
    }
}
