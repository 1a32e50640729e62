// File: crates/dlsplot-core/tests/render_blocks.rs
// Purpose: Drawing behaviour of the block series renderer, observed through a recording context.

use dlsplot_core::{
    draw, plot, Block, BlockKind, Color, DrawOp, Frame, LineJoin, RecordingContext, SeriesOptions,
};

fn identity(v: f64) -> f64 { v }

fn frame<'a>(fx: &'a dyn Fn(f64) -> f64, fy: &'a dyn Fn(f64) -> f64) -> Frame<'a> {
    Frame::new(fx, fy, 100.0, 100.0)
}

fn plot_blocks(blocks: &[Block]) -> RecordingContext {
    let mut rec = RecordingContext::new();
    plot(&mut rec, &SeriesOptions::visible(), &frame(&identity, &identity), blocks);
    rec
}

fn envelope_pair(start: f64) -> (Block, Block) {
    (
        Block::from_pairs(BlockKind::EnvelopeMin, start, &[(0.0, 1.0), (1000.0, 2.0), (2000.0, 1.0)]),
        Block::from_pairs(BlockKind::EnvelopeMax, start, &[(0.0, 3.0), (1000.0, 4.0), (2000.0, 3.0)]),
    )
}

#[test]
fn empty_series_draws_nothing() {
    let rec = plot_blocks(&[]);
    assert!(rec.ops().is_empty());
}

#[test]
fn short_blocks_are_skipped_without_error() {
    let blocks = vec![
        Block::from_pairs(BlockKind::Generic, 0.0, &[(0.0, 1.0)]),
        Block::from_pairs(BlockKind::EnvelopeMin, 0.0, &[]),
        Block { kind: None, start_time: 0.0, samples: Block::from_pairs(BlockKind::Generic, 0.0, &[(0.0, 1.0), (1.0, 2.0)]).samples },
        Block::from_pairs(BlockKind::Generic, 0.0, &[(0.0, 5.0), (1000.0, 6.0)]),
    ];
    let rec = plot_blocks(&blocks);
    let paths = rec.paths();
    assert_eq!(paths.len(), 1, "only the last block is drawable");
    assert_eq!(paths[0].points, vec![(0.0, 5.0), (1.0, 6.0)]);
    assert!(paths[0].stroked && !paths[0].filled);
}

#[test]
fn envelope_band_is_closed_through_reversed_max() {
    let (min, max) = envelope_pair(7.0);
    let rec = plot_blocks(&[min, max]);
    let paths = rec.paths();
    let band = &paths[0];
    assert_eq!(
        band.points,
        vec![(0.0, 1.0), (1.0, 2.0), (2.0, 1.0), (2.0, 3.0), (1.0, 4.0), (0.0, 3.0)]
    );
    assert!(band.closed && band.filled && band.stroked);
    // the max block contributes an empty path of its own
    assert!(paths[1].points.is_empty());
    // fill precedes the stroke, close precedes the fill
    let tail: Vec<&DrawOp> = rec.ops().iter().filter(|op| matches!(op, DrawOp::ClosePath | DrawOp::Fill | DrawOp::Stroke)).take(3).collect();
    assert_eq!(tail, vec![&DrawOp::ClosePath, &DrawOp::Fill, &DrawOp::Stroke]);
}

#[test]
fn max_half_may_precede_min_half() {
    let (min, max) = envelope_pair(1.0);
    let rec = plot_blocks(&[max, min]);
    let band = rec.paths().into_iter().find(|p| p.filled).expect("filled band");
    assert_eq!(band.points.len(), 6);
}

#[test]
fn unpaired_max_is_never_drawn() {
    let (_, max) = envelope_pair(1.0);
    let other = Block::from_pairs(BlockKind::EnvelopeMax, 2.0, &[(0.0, 1.0), (1.0, 1.0)]);
    let rec = plot_blocks(&[max, other]);
    assert_eq!(rec.segment_count(), 0);
    assert!(!rec.ops().contains(&DrawOp::Fill));
}

#[test]
fn unpaired_min_stays_an_open_polyline() {
    let (min, _) = envelope_pair(1.0);
    let (_, max_elsewhere) = envelope_pair(2.0);
    let rec = plot_blocks(&[min, max_elsewhere]);
    let line = &rec.paths()[0];
    assert_eq!(line.points.len(), 3);
    assert!(line.stroked && !line.closed && !line.filled);
}

#[test]
fn pairing_uses_first_matching_max_with_two_samples() {
    let min = Block::from_pairs(BlockKind::EnvelopeMin, 3.0, &[(0.0, 0.0), (1000.0, 0.0)]);
    let stub = Block::from_pairs(BlockKind::EnvelopeMax, 3.0, &[(0.0, 99.0)]);
    let first = Block::from_pairs(BlockKind::EnvelopeMax, 3.0, &[(0.0, 5.0), (1000.0, 5.0)]);
    let second = Block::from_pairs(BlockKind::EnvelopeMax, 3.0, &[(0.0, 8.0), (1000.0, 8.0)]);
    let rec = plot_blocks(&[min, stub, first, second]);
    let band = &rec.paths()[0];
    assert_eq!(&band.points[2..], &[(1.0, 5.0), (0.0, 5.0)]);
}

#[test]
fn band_is_filled_even_when_fill_option_is_off() {
    let (min, max) = envelope_pair(0.0);
    let red = Color::from_rgb(255, 0, 0);
    let opts = SeriesOptions { fill: false, fill_opacity: 0.5, ..SeriesOptions::visible().with_color(red) };
    let mut rec = RecordingContext::new();
    plot(&mut rec, &opts, &frame(&identity, &identity), &[min, max]);
    assert!(rec.ops().contains(&DrawOp::SetFillStyle(red.with_opacity(0.5))));
    assert!(rec.ops().contains(&DrawOp::Fill));
}

#[test]
fn only_timestamps_are_divided_before_scaling() {
    let xs = |x: f64| x * 10.0;
    let ys = |y: f64| y + 0.5;
    let block = Block::from_pairs(BlockKind::Generic, 0.0, &[(1000.0, 1000.0), (3000.0, 2000.0)]);
    let mut rec = RecordingContext::new();
    plot(&mut rec, &SeriesOptions::visible(), &frame(&xs, &ys), &[block]);
    assert_eq!(rec.paths()[0].points, vec![(10.0, 1000.5), (30.0, 2000.5)]);
}

#[test]
fn later_blocks_draw_after_earlier_ones() {
    let a = Block::from_pairs(BlockKind::Generic, 0.0, &[(0.0, 1.0), (1000.0, 1.0)]);
    let b = Block::from_pairs(BlockKind::Generic, 0.0, &[(0.0, 2.0), (1000.0, 2.0)]);
    let rec = plot_blocks(&[a, b]);
    let ys: Vec<f64> = rec.paths().iter().map(|p| p.points[0].1).collect();
    assert_eq!(ys, vec![1.0, 2.0]);
}

#[test]
fn draw_sets_style_and_restores() {
    let (min, max) = envelope_pair(0.0);
    let blue = Color::from_rgb(0, 0, 255);
    let opts = SeriesOptions { line_width: 3.0, ..SeriesOptions::visible().with_color(blue) };
    let mut rec = RecordingContext::new();
    draw(&mut rec, &opts, &frame(&identity, &identity), &[min, max]);
    let ops = rec.ops();
    assert_eq!(
        &ops[..4],
        &[DrawOp::Save, DrawOp::SetLineJoin(LineJoin::Round), DrawOp::SetLineWidth(3.0), DrawOp::SetStrokeStyle(blue)]
    );
    assert_eq!(ops.last(), Some(&DrawOp::Restore));
}

#[test]
fn draw_restores_when_a_scale_function_panics() {
    let boom = |_: f64| -> f64 { panic!("scale failed") };
    let block = Block::from_pairs(BlockKind::Generic, 0.0, &[(0.0, 1.0), (1000.0, 2.0)]);
    let mut rec = RecordingContext::new();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        draw(&mut rec, &SeriesOptions::visible(), &frame(&boom, &identity), std::slice::from_ref(&block));
    }));
    assert!(result.is_err(), "panic propagates to the caller");
    let saves = rec.ops().iter().filter(|op| **op == DrawOp::Save).count();
    let restores = rec.ops().iter().filter(|op| **op == DrawOp::Restore).count();
    assert_eq!((saves, restores), (1, 1));
}

#[test]
fn rendering_twice_yields_identical_calls() {
    let (min, max) = envelope_pair(4.0);
    let blocks = vec![
        Block::from_pairs(BlockKind::Generic, 0.0, &[(0.0, 0.0), (500.0, 1.0), (900.0, -1.0)]),
        min,
        max,
    ];
    let xs = |x: f64| x * 3.0 + 1.0;
    let ys = |y: f64| 50.0 - y;
    let opts = SeriesOptions::visible();
    let mut first = RecordingContext::new();
    draw(&mut first, &opts, &frame(&xs, &ys), &blocks);
    let mut second = RecordingContext::new();
    draw(&mut second, &opts, &frame(&xs, &ys), &blocks);
    assert_eq!(first.ops(), second.ops());
}

#[test]
fn input_blocks_are_not_mutated() {
    let (min, max) = envelope_pair(4.0);
    let blocks = vec![min, max];
    let before = blocks.clone();
    let _ = plot_blocks(&blocks);
    assert_eq!(blocks, before);
}
