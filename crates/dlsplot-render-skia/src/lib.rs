// File: crates/dlsplot-render-skia/src/lib.rs
// Summary: Skia renderer: DrawContext over a Skia canvas, plus headless PNG/RGBA output of a Chart.

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use dlsplot_core::{Chart, Color, DrawContext, LineJoin, RenderOptions, StyleStack};
use log::debug;
use skia_safe as skia;

/// Drawing context backed by a Skia canvas.
///
/// Skia has no "current path", so one is kept here and handed to
/// `draw_path` on `stroke`/`fill`. Style state follows `save`/`restore`
/// alongside the canvas' own save stack.
pub struct SkiaContext<'a> {
    canvas: &'a skia::Canvas,
    path: skia::Path,
    styles: StyleStack,
}

impl<'a> SkiaContext<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas, path: skia::Path::new(), styles: StyleStack::default() }
    }

    fn paint(&self, style: skia::paint::Style) -> skia::Paint {
        let st = self.styles.current();
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(style);
        match style {
            skia::paint::Style::Fill => {
                paint.set_color(to_skia(st.fill));
            }
            _ => {
                paint.set_color(to_skia(st.stroke));
                paint.set_stroke_width(st.line_width as f32);
                paint.set_stroke_join(match st.line_join {
                    LineJoin::Miter => skia::paint::Join::Miter,
                    LineJoin::Round => skia::paint::Join::Round,
                    LineJoin::Bevel => skia::paint::Join::Bevel,
                });
            }
        }
        paint
    }
}

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

impl DrawContext for SkiaContext<'_> {
    fn save(&mut self) {
        self.canvas.save();
        self.styles.save();
    }

    fn restore(&mut self) {
        // Skia ignores a restore below its initial save level, matching the trait contract
        self.canvas.restore();
        self.styles.restore();
    }

    fn begin_path(&mut self) { self.path = skia::Path::new(); }
    fn move_to(&mut self, x: f64, y: f64) { self.path.move_to((x as f32, y as f32)); }
    fn line_to(&mut self, x: f64, y: f64) { self.path.line_to((x as f32, y as f32)); }
    fn close_path(&mut self) { self.path.close(); }

    fn stroke(&mut self) {
        let paint = self.paint(skia::paint::Style::Stroke);
        self.canvas.draw_path(&self.path, &paint);
    }

    fn fill(&mut self) {
        let paint = self.paint(skia::paint::Style::Fill);
        self.canvas.draw_path(&self.path, &paint);
    }

    fn set_line_width(&mut self, width: f64) { self.styles.current_mut().line_width = width; }
    fn set_line_join(&mut self, join: LineJoin) { self.styles.current_mut().line_join = join; }
    fn set_stroke_style(&mut self, color: Color) { self.styles.current_mut().stroke = color; }
    fn set_fill_style(&mut self, color: Color) { self.styles.current_mut().fill = color; }
}

/// Headless raster output for [`Chart`] using a Skia CPU surface.
pub trait RenderSkia {
    /// Render to an unpremultiplied RGBA8 buffer: `(pixels, width, height, row_bytes)`.
    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)>;

    fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>>;

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()>;
}

impl RenderSkia for Chart {
    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        {
            let mut ctx = SkiaContext::new(surface.canvas());
            self.draw(&mut ctx, opts).context("drawing chart")?;
        }

        let (w, h) = (opts.width as u32, opts.height as u32);
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            bail!("failed to read back surface pixels");
        }
        debug!("rendered {w}x{h} chart with {} series", self.series.len());
        Ok((pixels, w, h, stride))
    }

    fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .context("encode PNG failed")?;
        Ok(out)
    }

    fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
