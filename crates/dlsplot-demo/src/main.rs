// File: crates/dlsplot-demo/src/main.rs
// Summary: Demo loads a decimated block payload (JSON or CSV), auto-ranges and renders it to PNG and SVG.

mod config;
mod input;

use anyhow::{Context, Result};
use dlsplot_core::{BlockKind, Chart, SeriesEntry, SvgContext};
use dlsplot_render_skia::RenderSkia;
use log::{info, warn};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Usage: dlsplot-demo [input.json|input.csv] [config file]
    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| {
        concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_blocks.json").to_string()
    });
    let config_path = args.next().map(PathBuf::from);

    let cfg = config::load(config_path.as_deref())?;
    let path = Path::new(&raw);
    let blocks = input::load_blocks(path)
        .with_context(|| format!("failed to load blocks from '{}'", path.display()))?;
    info!("Loaded {} blocks from {}", blocks.len(), path.display());

    if blocks.is_empty() {
        anyhow::bail!("no blocks loaded; check the input format.");
    }
    let bands = blocks.iter().filter(|b| b.is_kind(BlockKind::EnvelopeMin)).count();
    let untagged = blocks.iter().filter(|b| b.kind.is_none()).count();
    if untagged > 0 {
        warn!("{untagged} block(s) carry no known kind and will not be drawn");
    }
    info!("{bands} envelope band(s), {} drawable block(s)", blocks.iter().filter(|b| b.is_drawable()).count());

    if !cfg.series.show {
        warn!("series.show is false in the configuration; the chart will contain no data");
    }
    let mut chart = Chart::new();
    chart.add_series(SeriesEntry::blocks(blocks).with_options(cfg.series.clone()));
    chart.autoscale_axes(cfg.y_margin)?;
    info!(
        "Time range: [{:.3}, {:.3}] s, value range: [{:.4}, {:.4}]",
        chart.x_axis.bounds.min, chart.x_axis.bounds.max, chart.y_axis.bounds.min, chart.y_axis.bounds.max
    );

    let out_png = out_name(path, &cfg.out_dir, "png");
    chart.render_to_png(&cfg.render, &out_png)?;
    info!("Wrote {}", out_png.display());

    let out_svg = out_png.with_extension("svg");
    let mut svg = SvgContext::new(cfg.render.width as f64, cfg.render.height as f64);
    chart.draw(&mut svg, &cfg.render)?;
    std::fs::write(&out_svg, svg.finish()).with_context(|| format!("writing {}", out_svg.display()))?;
    info!("Wrote {}", out_svg.display());

    Ok(())
}

/// Produce output file name like <out_dir>/chart_<stem>.<ext>
fn out_name(input: &Path, out_dir: &Path, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("blocks");
    out_dir.join(format!("chart_{stem}.{ext}"))
}
