// File: crates/dlsplot-core/src/lib.rs
// Summary: Core library entry point; block series model, renderer, range extenders and host chart.

pub mod axis;
pub mod block;
pub mod canvas;
pub mod chart;
pub mod color;
pub mod error;
pub mod geometry;
pub mod options;
pub mod payload;
pub mod plugin;
pub mod range;
pub mod record;
pub mod render;
pub mod scale;
pub mod svg;
pub mod theme;
pub mod types;

pub use axis::{Axis, AxisBounds, ScaleKind};
pub use block::{Block, BlockKind, Sample, TIME_DIVISOR};
pub use canvas::{DrawContext, LineJoin, SavedState, Style, StyleStack};
pub use chart::{Chart, RenderOptions, SeriesEntry};
pub use color::Color;
pub use error::{ColorError, PayloadError, RegistryError};
pub use options::SeriesOptions;
pub use payload::{parse_blocks, read_blocks};
pub use plugin::{BlockSeriesType, SeriesRegistry, SeriesType};
pub use range::{extend_horizontal_range, extend_vertical_range};
pub use record::{DrawOp, RecordedPath, RecordingContext};
pub use render::{draw, plot, Frame};
pub use svg::SvgContext;
pub use theme::Theme;
