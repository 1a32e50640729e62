// File: crates/dlsplot-core/src/chart.rs
// Summary: Headless host chart: auto-ranges axes through series type hooks and paints onto a DrawContext.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::axis::{Axis, AxisBounds};
use crate::block::Block;
use crate::canvas::{DrawContext, SavedState};
use crate::color::Color;
use crate::error::RegistryError;
use crate::geometry::{linspace, PlotRect};
use crate::options::SeriesOptions;
use crate::plugin::{BlockSeriesType, SeriesRegistry, SeriesType};
use crate::render::Frame;
use crate::scale::AxisScale;
use crate::theme::{self, Theme};
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Theme preset name, see [`theme::presets`].
    pub theme: String,
    pub draw_grid: bool,
    pub draw_axes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: "dark".to_string(),
            draw_grid: true,
            draw_axes: true,
        }
    }
}

impl RenderOptions {
    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }

    pub fn plot_rect(&self) -> PlotRect {
        PlotRect::inset(self.width, self.height, &self.insets)
    }
}

/// One series as the host stores it: which type draws it, its options, its blocks.
#[derive(Clone, Debug)]
pub struct SeriesEntry {
    pub type_name: String,
    pub options: SeriesOptions,
    pub blocks: Vec<Block>,
}

impl SeriesEntry {
    pub fn new(type_name: impl Into<String>, options: SeriesOptions, blocks: Vec<Block>) -> Self {
        Self { type_name: type_name.into(), options, blocks }
    }

    /// Visible block series with default options.
    pub fn blocks(blocks: Vec<Block>) -> Self {
        Self::new(BlockSeriesType::NAME, SeriesOptions::visible(), blocks)
    }

    pub fn with_options(mut self, options: SeriesOptions) -> Self {
        self.options = options;
        self
    }
}

pub struct Chart {
    pub series: Vec<SeriesEntry>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    registry: SeriesRegistry,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self::with_registry(SeriesRegistry::with_builtin())
    }

    pub fn with_registry(registry: SeriesRegistry) -> Self {
        Self { series: Vec::new(), x_axis: Axis::default_x(), y_axis: Axis::default_y(), registry }
    }

    pub fn registry(&self) -> &SeriesRegistry { &self.registry }

    pub fn registry_mut(&mut self) -> &mut SeriesRegistry { &mut self.registry }

    pub fn add_series(&mut self, series: SeriesEntry) {
        self.series.push(series);
    }

    pub fn add_blocks(&mut self, blocks: Vec<Block>) {
        self.add_series(SeriesEntry::blocks(blocks));
    }

    /// Recompute both axes from the visible series' range hooks.
    ///
    /// The y range is padded by `margin` (a fraction of its span). Empty or
    /// non-finite results fall back to `0..1`; zero spans are widened by one.
    pub fn autoscale_axes(&mut self, margin: f64) -> Result<(), RegistryError> {
        let mut x = AxisBounds::empty();
        let mut y = AxisBounds::empty();
        for (_, t, s) in self.visible()? {
            t.extend_x_range(&mut x, &s.blocks);
            t.extend_y_range(&mut y, &s.blocks);
        }
        self.x_axis.bounds = settle(x, 0.0);
        self.y_axis.bounds = settle(y, margin);
        debug!(
            "autoscale: x [{}, {}], y [{}, {}]",
            self.x_axis.bounds.min, self.x_axis.bounds.max, self.y_axis.bounds.min, self.y_axis.bounds.max
        );
        Ok(())
    }

    /// Paint background, grid, every visible series and the axis lines.
    ///
    /// Unknown series types are reported before anything is drawn.
    pub fn draw(&self, ctx: &mut dyn DrawContext, opts: &RenderOptions) -> Result<(), RegistryError> {
        let visible = self.visible()?;
        let theme = opts.theme();
        let rect = opts.plot_rect();

        fill_rect(ctx, &PlotRect::from_ltrb(0.0, 0.0, opts.width as f64, opts.height as f64), theme.background);
        if opts.draw_grid {
            draw_grid(ctx, &rect, theme.grid);
        }

        let xs = AxisScale::for_axis(&self.x_axis, rect.left, rect.right);
        let ys = AxisScale::for_axis(&self.y_axis, rect.bottom, rect.top);
        let fx = |x: f64| xs.to_px(x);
        let fy = |y: f64| ys.to_px(y);
        let frame = Frame::new(&fx, &fy, rect.width(), rect.height());

        for (index, t, s) in visible {
            let mut options = s.options.clone();
            if options.color.is_none() {
                options.color = Some(theme.series_color(index));
            }
            t.draw(ctx, &options, &frame, &s.blocks);
        }

        if opts.draw_axes {
            draw_axes(ctx, &rect, theme.axis_line);
        }
        Ok(())
    }

    /// Visible series with their palette index and resolved type.
    fn visible(&self) -> Result<Vec<(usize, &dyn SeriesType, &SeriesEntry)>, RegistryError> {
        self.series
            .iter()
            .enumerate()
            .filter(|(_, s)| s.options.show)
            .map(|(i, s)| self.registry.resolve(&s.type_name).map(|t| (i, t, s)))
            .collect()
    }
}

fn settle(mut b: AxisBounds, margin: f64) -> AxisBounds {
    if !b.min.is_finite() || !b.max.is_finite() {
        return AxisBounds::new(0.0, 1.0);
    }
    if b.span().abs() < 1e-9 {
        b.max = b.min + 1.0;
    }
    let m = b.span() * margin;
    AxisBounds::new(b.min - m, b.max + m)
}

// ---- helpers ----------------------------------------------------------------

fn fill_rect(ctx: &mut dyn DrawContext, r: &PlotRect, color: Color) {
    let mut ctx = SavedState::new(ctx);
    ctx.set_fill_style(color);
    ctx.begin_path();
    ctx.move_to(r.left, r.top);
    ctx.line_to(r.right, r.top);
    ctx.line_to(r.right, r.bottom);
    ctx.line_to(r.left, r.bottom);
    ctx.close_path();
    ctx.fill();
}

fn draw_grid(ctx: &mut dyn DrawContext, r: &PlotRect, color: Color) {
    let mut ctx = SavedState::new(ctx);
    ctx.set_stroke_style(color);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    // verticals
    for x in linspace(r.left, r.right, 10) {
        ctx.move_to(x, r.top);
        ctx.line_to(x, r.bottom);
    }
    // horizontals
    for y in linspace(r.top, r.bottom, 6) {
        ctx.move_to(r.left, y);
        ctx.line_to(r.right, y);
    }
    ctx.stroke();
}

fn draw_axes(ctx: &mut dyn DrawContext, r: &PlotRect, color: Color) {
    let mut ctx = SavedState::new(ctx);
    ctx.set_stroke_style(color);
    ctx.set_line_width(1.5);
    ctx.begin_path();
    ctx.move_to(r.left, r.top);
    ctx.line_to(r.left, r.bottom);
    ctx.line_to(r.right, r.bottom);
    ctx.stroke();
}
