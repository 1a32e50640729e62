//! SVG canvas: turns drawing context calls into a standalone SVG document.

use std::fmt::Write as _;

use crate::canvas::{DrawContext, LineJoin, StyleStack};
use crate::color::Color;

pub struct SvgContext {
    width: f64,
    height: f64,
    body: String,
    path: String,
    styles: StyleStack,
}

impl SvgContext {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, body: String::new(), path: String::new(), styles: StyleStack::default() }
    }

    /// Wrap the painted elements in an `<svg>` root.
    pub fn finish(self) -> String {
        let (w, h) = (self.width, self.height);
        let mut svg = String::with_capacity(self.body.len() + 128);
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#
        ));
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }

    fn paint(&mut self, fill: Option<Color>, stroke: Option<Color>) {
        if self.path.is_empty() {
            return;
        }
        let style = *self.styles.current();
        let d = self.path.trim_end();
        let _ = write!(self.body, r#"<path d="{d}""#);
        match fill {
            Some(c) => { let _ = write!(self.body, r#" fill="{}"{}"#, c.to_rgb_hex(), opacity_attr("fill", c)); }
            None => self.body.push_str(r#" fill="none""#),
        }
        if let Some(c) = stroke {
            let _ = write!(
                self.body,
                r#" stroke="{}"{} stroke-width="{}" stroke-linejoin="{}""#,
                c.to_rgb_hex(),
                opacity_attr("stroke", c),
                style.line_width,
                join_name(style.line_join),
            );
        }
        self.body.push_str("/>");
    }
}

fn opacity_attr(prefix: &str, c: Color) -> String {
    if c.a == 255 { String::new() } else { format!(r#" {prefix}-opacity="{:.3}""#, c.opacity()) }
}

fn join_name(join: LineJoin) -> &'static str {
    match join {
        LineJoin::Miter => "miter",
        LineJoin::Round => "round",
        LineJoin::Bevel => "bevel",
    }
}

impl DrawContext for SvgContext {
    fn save(&mut self) { self.styles.save(); }
    fn restore(&mut self) { self.styles.restore(); }

    fn begin_path(&mut self) { self.path.clear(); }
    fn move_to(&mut self, x: f64, y: f64) { let _ = write!(self.path, "M{x:.2} {y:.2} "); }
    fn line_to(&mut self, x: f64, y: f64) { let _ = write!(self.path, "L{x:.2} {y:.2} "); }
    fn close_path(&mut self) { self.path.push_str("Z "); }

    fn stroke(&mut self) {
        let c = self.styles.current().stroke;
        self.paint(None, Some(c));
    }

    fn fill(&mut self) {
        let c = self.styles.current().fill;
        self.paint(Some(c), None);
    }

    fn set_line_width(&mut self, width: f64) { self.styles.current_mut().line_width = width; }
    fn set_line_join(&mut self, join: LineJoin) { self.styles.current_mut().line_join = join; }
    fn set_stroke_style(&mut self, color: Color) { self.styles.current_mut().stroke = color; }
    fn set_fill_style(&mut self, color: Color) { self.styles.current_mut().fill = color; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_stroked_and_filled_paths() {
        let mut svg = SvgContext::new(10.0, 10.0);
        svg.set_stroke_style(Color::from_rgb(255, 0, 0));
        svg.set_fill_style(Color::from_argb(128, 0, 0, 255));
        svg.begin_path();
        svg.move_to(0.0, 0.0);
        svg.line_to(5.0, 5.0);
        svg.close_path();
        svg.fill();
        svg.stroke();
        let doc = svg.finish();
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains(r##"d="M0.00 0.00 L5.00 5.00 Z" fill="#0000ff" fill-opacity="0.502""##));
        assert!(doc.contains(r##"stroke="#ff0000" stroke-width="1" stroke-linejoin="miter""##));
    }

    #[test]
    fn empty_path_paints_nothing() {
        let mut svg = SvgContext::new(10.0, 10.0);
        svg.begin_path();
        svg.stroke();
        assert!(!svg.finish().contains("<path"));
    }
}
