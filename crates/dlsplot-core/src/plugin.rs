// File: crates/dlsplot-core/src/plugin.rs
// Summary: Series type plugin contract, the built-in block series type, and a name-keyed registry.

use std::collections::BTreeMap;

use log::debug;

use crate::axis::AxisBounds;
use crate::block::Block;
use crate::canvas::DrawContext;
use crate::error::RegistryError;
use crate::options::SeriesOptions;
use crate::range::{extend_horizontal_range, extend_vertical_range};
use crate::render::{self, Frame};

/// A named series type the host can draw and auto-range.
///
/// The host calls the range hooks once per axis per redraw, then `draw` once
/// per visible series. Implementations hold no per-call state.
pub trait SeriesType: Send + Sync {
    fn name(&self) -> &'static str;

    /// Option set a series of this type starts from.
    fn default_options(&self) -> SeriesOptions {
        SeriesOptions::default()
    }

    fn draw(&self, ctx: &mut dyn DrawContext, options: &SeriesOptions, frame: &Frame<'_>, blocks: &[Block]);

    /// Widen the horizontal axis to cover `blocks`. Default: no contribution.
    fn extend_x_range(&self, _axis: &mut AxisBounds, _blocks: &[Block]) {}

    /// Widen the vertical axis to cover `blocks`. Default: no contribution.
    fn extend_y_range(&self, _axis: &mut AxisBounds, _blocks: &[Block]) {}
}

/// Decimated block series: polylines plus filled min/max envelope bands.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockSeriesType;

impl BlockSeriesType {
    pub const NAME: &'static str = "dls";
}

impl SeriesType for BlockSeriesType {
    fn name(&self) -> &'static str { Self::NAME }

    fn draw(&self, ctx: &mut dyn DrawContext, options: &SeriesOptions, frame: &Frame<'_>, blocks: &[Block]) {
        render::draw(ctx, options, frame, blocks);
    }

    fn extend_x_range(&self, axis: &mut AxisBounds, blocks: &[Block]) {
        extend_horizontal_range(axis, blocks);
    }

    fn extend_y_range(&self, axis: &mut AxisBounds, blocks: &[Block]) {
        extend_vertical_range(axis, blocks);
    }
}

/// Series types by name.
pub struct SeriesRegistry {
    types: BTreeMap<&'static str, Box<dyn SeriesType>>,
}

impl SeriesRegistry {
    /// Registry without any types.
    pub fn empty() -> Self {
        Self { types: BTreeMap::new() }
    }

    /// Registry holding the built-in block series type.
    pub fn with_builtin() -> Self {
        let mut r = Self::empty();
        r.types.insert(BlockSeriesType::NAME, Box::new(BlockSeriesType));
        r
    }

    pub fn register<T: SeriesType + 'static>(&mut self, series_type: T) -> Result<(), RegistryError> {
        let name = series_type.name();
        if self.types.contains_key(name) {
            return Err(RegistryError::Duplicate(name));
        }
        debug!("registered series type `{name}`");
        self.types.insert(name, Box::new(series_type));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn SeriesType> {
        self.types.get(name).map(|t| t.as_ref())
    }

    pub fn resolve(&self, name: &str) -> Result<&dyn SeriesType, RegistryError> {
        self.get(name).ok_or_else(|| RegistryError::Unknown(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.keys().copied()
    }
}

impl Default for SeriesRegistry {
    fn default() -> Self { Self::with_builtin() }
}
