// File: crates/dlsplot-core/src/options.rs
// Summary: Per-series render options of the block series type.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Stroke colour used when neither the series nor the host assigned one.
pub const DEFAULT_STROKE: Color = Color::from_rgb(0x00, 0xa8, 0xf0);

/// Options recognised by the block series type.
///
/// `fill_border` and `steps` are accepted for compatibility with the host's
/// option schema and have no effect on drawing. `show` is evaluated by the
/// host before it calls `draw`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesOptions {
    pub show: bool,
    /// Stroke width in pixels.
    pub line_width: f64,
    /// Advisory only: a matched min/max band is filled whatever this says.
    pub fill: bool,
    pub fill_border: bool,
    pub fill_color: Option<Color>,
    /// Alpha multiplier for the fill, in `[0, 1]`.
    pub fill_opacity: f32,
    pub steps: bool,
    /// Stroke colour; the host assigns one from its palette when unset.
    pub color: Option<Color>,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            show: false,
            line_width: 1.0,
            fill: false,
            fill_border: false,
            fill_color: None,
            fill_opacity: 0.4,
            steps: false,
            color: None,
        }
    }
}

impl SeriesOptions {
    /// Defaults with `show` switched on.
    pub fn visible() -> Self {
        Self { show: true, ..Self::default() }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn stroke_color(&self) -> Color {
        self.color.unwrap_or(DEFAULT_STROKE)
    }

    /// `fill_color` (falling back to the stroke colour) faded by `fill_opacity`.
    pub fn fill_style(&self) -> Color {
        self.fill_color.unwrap_or_else(|| self.stroke_color()).with_opacity(self.fill_opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_series_type_schema() {
        let o = SeriesOptions::default();
        assert!(!o.show);
        assert_eq!(o.line_width, 1.0);
        assert!(!o.fill && !o.fill_border && !o.steps);
        assert_eq!(o.fill_color, None);
        assert_eq!(o.fill_opacity, 0.4);
    }

    #[test]
    fn fill_style_falls_back_to_stroke() {
        let red = Color::from_rgb(255, 0, 0);
        let o = SeriesOptions { fill_opacity: 1.0, ..SeriesOptions::visible().with_color(red) };
        assert_eq!(o.fill_style(), red);
        let green = Color::from_rgb(0, 255, 0);
        let o = SeriesOptions { fill_color: Some(green), fill_opacity: 0.0, ..o };
        assert_eq!(o.fill_style(), Color::from_argb(0, 0, 255, 0));
    }

    #[test]
    fn deserializes_partial_config() {
        let o: SeriesOptions =
            serde_json::from_str(r##"{"show": true, "line_width": 2.5, "fill_color": "#ff000080"}"##)
                .expect("options");
        assert!(o.show);
        assert_eq!(o.line_width, 2.5);
        assert_eq!(o.fill_color, Some(Color::from_argb(0x80, 0xff, 0, 0)));
        assert_eq!(o.fill_opacity, 0.4);
    }
}
