// File: crates/dlsplot-core/src/theme.rs
// Summary: Light/Dark theming for the host chart: background, grid, axes and series palette.

use crate::color::Color;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    /// Series colours, assigned in series order and cycled.
    pub palette: [Color; 5],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            grid: Color::from_argb(255, 40, 40, 45),
            axis_line: Color::from_argb(255, 180, 180, 190),
            palette: [
                Color::from_argb(255, 64, 160, 255),
                Color::from_argb(255, 40, 200, 120),
                Color::from_argb(255, 220, 80, 80),
                Color::from_argb(255, 255, 230, 70),
                Color::from_argb(255, 180, 120, 255),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            grid: Color::from_argb(255, 230, 230, 235),
            axis_line: Color::from_argb(255, 60, 60, 70),
            palette: [
                Color::from_rgb(0x00, 0xa8, 0xf0),
                Color::from_rgb(0xc0, 0xd8, 0x00),
                Color::from_rgb(0xcb, 0x4b, 0x4b),
                Color::from_rgb(0x4d, 0xa7, 0x4d),
                Color::from_rgb(0x94, 0x40, 0xed),
            ],
        }
    }

    /// Palette colour for the `index`-th series.
    pub fn series_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
