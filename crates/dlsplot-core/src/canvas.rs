// File: crates/dlsplot-core/src/canvas.rs
// Summary: 2D drawing context abstraction the series types paint through, plus shared style state.

use serde::{Deserialize, Serialize};

use crate::color::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Path-based 2D drawing surface, modelled on the HTML canvas context.
///
/// `stroke` and `fill` paint the current path, which persists until the next
/// `begin_path`. `save`/`restore` bracket style changes; a `restore` without
/// a matching `save` is ignored.
pub trait DrawContext {
    fn save(&mut self);
    fn restore(&mut self);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);

    fn set_line_width(&mut self, width: f64);
    fn set_line_join(&mut self, join: LineJoin);
    fn set_stroke_style(&mut self, color: Color);
    fn set_fill_style(&mut self, color: Color);
}

/// Calls `save` now and `restore` when dropped, including during unwinding.
pub struct SavedState<'a, C: DrawContext + ?Sized> {
    ctx: &'a mut C,
}

impl<'a, C: DrawContext + ?Sized> SavedState<'a, C> {
    pub fn new(ctx: &'a mut C) -> Self {
        ctx.save();
        Self { ctx }
    }
}

impl<C: DrawContext + ?Sized> std::ops::Deref for SavedState<'_, C> {
    type Target = C;
    fn deref(&self) -> &C { &*self.ctx }
}

impl<C: DrawContext + ?Sized> std::ops::DerefMut for SavedState<'_, C> {
    fn deref_mut(&mut self) -> &mut C { &mut *self.ctx }
}

impl<C: DrawContext + ?Sized> Drop for SavedState<'_, C> {
    fn drop(&mut self) {
        self.ctx.restore();
    }
}

/// Style properties covered by `save`/`restore`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub line_width: f64,
    pub line_join: LineJoin,
    pub stroke: Color,
    pub fill: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self { line_width: 1.0, line_join: LineJoin::Miter, stroke: Color::BLACK, fill: Color::BLACK }
    }
}

/// Current style plus the saved stack; backends embed one to implement save/restore.
#[derive(Clone, Debug, Default)]
pub struct StyleStack {
    current: Style,
    saved: Vec<Style>,
}

impl StyleStack {
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    pub fn restore(&mut self) {
        if let Some(s) = self.saved.pop() {
            self.current = s;
        }
    }

    pub fn current(&self) -> &Style { &self.current }
    pub fn current_mut(&mut self) -> &mut Style { &mut self.current }
    pub fn depth(&self) -> usize { self.saved.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_pops_saved_style() {
        let mut st = StyleStack::default();
        st.save();
        st.current_mut().line_width = 4.0;
        assert_eq!(st.depth(), 1);
        st.restore();
        assert_eq!(st.current().line_width, 1.0);
        // unbalanced restore is a no-op
        st.restore();
        assert_eq!(st.depth(), 0);
    }
}
