// File: crates/dlsplot-core/src/render.rs
// Summary: Block series renderer: polylines for generic/min blocks, filled bands for min/max pairs.

use log::trace;

use crate::block::{find_envelope_max, Block, BlockKind, Sample, TIME_DIVISOR};
use crate::canvas::{DrawContext, LineJoin, SavedState};
use crate::options::SeriesOptions;

/// Host-supplied view of the plot area for one draw call.
///
/// The scale functions are treated as opaque and pure. `x_scale` receives
/// timestamps already divided by [`TIME_DIVISOR`].
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    pub x_scale: &'a dyn Fn(f64) -> f64,
    pub y_scale: &'a dyn Fn(f64) -> f64,
    pub width: f64,
    pub height: f64,
}

impl<'a> Frame<'a> {
    pub fn new(
        x_scale: &'a dyn Fn(f64) -> f64,
        y_scale: &'a dyn Fn(f64) -> f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self { x_scale, y_scale, width, height }
    }

    /// Pixel position of a sample.
    #[inline]
    pub fn project(&self, s: &Sample) -> (f64, f64) {
        ((self.x_scale)(s.t / TIME_DIVISOR), (self.y_scale)(s.v))
    }
}

/// Configure stroke style, plot the series, and put the context back the way
/// it was (also when a scale function panics).
pub fn draw<C: DrawContext + ?Sized>(ctx: &mut C, options: &SeriesOptions, frame: &Frame<'_>, blocks: &[Block]) {
    let mut ctx = SavedState::new(ctx);
    ctx.set_line_join(LineJoin::Round);
    ctx.set_line_width(options.line_width);
    ctx.set_stroke_style(options.stroke_color());
    plot(&mut *ctx, options, frame, blocks);
}

/// Paint every drawable block in series order.
///
/// Blocks without a kind or with fewer than two samples are skipped silently.
/// An `EnvelopeMax` block is never stroked on its own; it only closes the band
/// of the `EnvelopeMin` block with the same `start_time`. A closed band is
/// filled regardless of `options.fill`.
pub fn plot<C: DrawContext + ?Sized>(ctx: &mut C, options: &SeriesOptions, frame: &Frame<'_>, blocks: &[Block]) {
    if blocks.is_empty() {
        return;
    }
    let fill_style = options.fill_style();

    for (i, block) in blocks.iter().enumerate() {
        let Some(kind) = block.kind else {
            trace!("block {i}: no kind, skipped");
            continue;
        };
        if block.samples.len() <= 1 {
            trace!("block {i}: {} sample(s), skipped", block.samples.len());
            continue;
        }

        ctx.begin_path();
        match kind {
            BlockKind::Generic => trace_polyline(ctx, frame, &block.samples),
            BlockKind::EnvelopeMin => {
                trace_polyline(ctx, frame, &block.samples);
                match find_envelope_max(blocks, block.start_time) {
                    Some(upper) => {
                        // walk the upper curve backwards so the outline is one loop
                        for s in upper.samples.iter().rev() {
                            let (x, y) = frame.project(s);
                            ctx.line_to(x, y);
                        }
                        ctx.set_fill_style(fill_style);
                        ctx.close_path();
                        ctx.fill();
                    }
                    None => trace!("block {i}: no max half at start_time {}", block.start_time),
                }
            }
            BlockKind::EnvelopeMax => {}
        }
        ctx.stroke();
    }
}

fn trace_polyline<C: DrawContext + ?Sized>(ctx: &mut C, frame: &Frame<'_>, samples: &[Sample]) {
    let Some((first, rest)) = samples.split_first() else { return };
    let (x0, y0) = frame.project(first);
    ctx.move_to(x0, y0);
    for s in rest {
        let (x, y) = frame.project(s);
        ctx.line_to(x, y);
    }
}
