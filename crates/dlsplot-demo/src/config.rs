// File: crates/dlsplot-demo/src/config.rs
// Summary: Demo configuration: optional file (TOML/JSON/YAML) layered with DLSPLOT_* environment variables.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dlsplot_core::{RenderOptions, SeriesOptions};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub render: RenderOptions,
    pub series: SeriesOptions,
    /// Fraction of the value span added above and below the data.
    pub y_margin: f64,
    pub out_dir: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            series: SeriesOptions::visible(),
            y_margin: 0.02,
            out_dir: PathBuf::from("target/out"),
        }
    }
}

/// Load `path` if given, else `./dlsplot.{toml,json,yaml}` when present, then
/// apply overrides such as `DLSPLOT_RENDER__WIDTH=800`.
pub fn load(path: Option<&Path>) -> Result<DemoConfig> {
    let file = match path {
        Some(p) => config::File::from(p).required(true),
        None => config::File::with_name("dlsplot").required(false),
    };
    let settings = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("DLSPLOT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("reading configuration")?;
    settings.try_deserialize().context("invalid configuration")
}
