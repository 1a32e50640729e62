// File: crates/dlsplot-core/src/record.rs
// Summary: Drawing context that records every primitive call as a serializable op list.

use serde::{Deserialize, Serialize};

use crate::canvas::{DrawContext, LineJoin};
use crate::color::Color;

/// One drawing primitive call, in call order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    Save,
    Restore,
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Stroke,
    Fill,
    SetLineWidth(f64),
    SetLineJoin(LineJoin),
    SetStrokeStyle(Color),
    SetFillStyle(Color),
}

/// A path as it stood when it was painted: vertices from `move_to`/`line_to`
/// since the last `begin_path`, and what was done with it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedPath {
    pub points: Vec<(f64, f64)>,
    pub closed: bool,
    pub filled: bool,
    pub stroked: bool,
}

#[derive(Clone, Debug, Default)]
pub struct RecordingContext {
    ops: Vec<DrawOp>,
}

impl RecordingContext {
    pub fn new() -> Self { Self::default() }

    pub fn ops(&self) -> &[DrawOp] { &self.ops }

    pub fn into_ops(self) -> Vec<DrawOp> { self.ops }

    pub fn clear(&mut self) { self.ops.clear(); }

    /// Number of `move_to`/`line_to` calls.
    pub fn segment_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::MoveTo { .. } | DrawOp::LineTo { .. })).count()
    }

    /// Group the op stream into one entry per `begin_path`.
    pub fn paths(&self) -> Vec<RecordedPath> {
        let mut out: Vec<RecordedPath> = Vec::new();
        for op in &self.ops {
            match *op {
                DrawOp::BeginPath => out.push(RecordedPath::default()),
                DrawOp::MoveTo { x, y } | DrawOp::LineTo { x, y } => {
                    if let Some(p) = out.last_mut() { p.points.push((x, y)); }
                }
                DrawOp::ClosePath => { if let Some(p) = out.last_mut() { p.closed = true; } }
                DrawOp::Fill => { if let Some(p) = out.last_mut() { p.filled = true; } }
                DrawOp::Stroke => { if let Some(p) = out.last_mut() { p.stroked = true; } }
                _ => {}
            }
        }
        out
    }
}

impl DrawContext for RecordingContext {
    fn save(&mut self) { self.ops.push(DrawOp::Save); }
    fn restore(&mut self) { self.ops.push(DrawOp::Restore); }
    fn begin_path(&mut self) { self.ops.push(DrawOp::BeginPath); }
    fn move_to(&mut self, x: f64, y: f64) { self.ops.push(DrawOp::MoveTo { x, y }); }
    fn line_to(&mut self, x: f64, y: f64) { self.ops.push(DrawOp::LineTo { x, y }); }
    fn close_path(&mut self) { self.ops.push(DrawOp::ClosePath); }
    fn stroke(&mut self) { self.ops.push(DrawOp::Stroke); }
    fn fill(&mut self) { self.ops.push(DrawOp::Fill); }
    fn set_line_width(&mut self, width: f64) { self.ops.push(DrawOp::SetLineWidth(width)); }
    fn set_line_join(&mut self, join: LineJoin) { self.ops.push(DrawOp::SetLineJoin(join)); }
    fn set_stroke_style(&mut self, color: Color) { self.ops.push(DrawOp::SetStrokeStyle(color)); }
    fn set_fill_style(&mut self, color: Color) { self.ops.push(DrawOp::SetFillStyle(color)); }
}
