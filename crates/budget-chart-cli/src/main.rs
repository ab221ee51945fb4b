// File: crates/budget-chart-cli/src/main.rs
// Summary: Renders a budget chart from a JSON or CSV file to a PNG.

mod input;

use std::path::PathBuf;

use anyhow::{Context, Result};
use budget_chart::{ChartSettings, ColorSpec};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "budget-chart", version)]
struct Args {
    /// Input file: a JSON request or a CSV with `title,value_primary,value_secondary`.
    input: PathBuf,

    /// Output PNG path. Defaults to target/out/chart_<stem>.png.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Background image to composite the chart onto.
    #[arg(long)]
    background: Option<PathBuf>,

    /// Chart left edge on the background.
    #[arg(long, allow_hyphen_values = true)]
    x: Option<i32>,

    /// Chart top edge on the background.
    #[arg(long, allow_hyphen_values = true)]
    y: Option<i32>,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,

    /// Hide the legend and the category labels.
    #[arg(long, default_value_t = false)]
    no_legend: bool,

    #[arg(long)]
    color_primary: Option<String>,

    #[arg(long)]
    color_secondary: Option<String>,
}

impl Args {
    /// Flags given on the command line win over values from the input file.
    fn apply(&self, mut settings: ChartSettings) -> Result<ChartSettings> {
        if let Some(w) = self.width {
            settings.width_px = w;
        }
        if let Some(h) = self.height {
            settings.height_px = h;
        }
        if let Some(x) = self.x {
            settings.offset_x = x;
        }
        if let Some(y) = self.y {
            settings.offset_y = y;
        }
        if self.no_legend {
            settings.show_legend = false;
        }
        if let Some(c) = &self.color_primary {
            settings.color_primary = ColorSpec::from(c.as_str());
        }
        if let Some(c) = &self.color_secondary {
            settings.color_secondary = ColorSpec::from(c.as_str());
        }
        if let Some(path) = &self.background {
            let bytes = std::fs::read(path).with_context(|| format!("reading background '{}'", path.display()))?;
            settings = settings.with_background(bytes);
        }
        Ok(settings)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let (path, used_alt) = input::resolve_path(&args.input)?;
    info!(input = %path.display(), used_alt, "loading chart input");

    let (items, settings) = input::load(&path)?;
    let settings = args.apply(settings)?;
    info!(items = items.len(), width = settings.width_px, height = settings.height_px, "rendering");

    let png = budget_chart::render_chart(&items, &settings)?;

    let out = args.out.clone().unwrap_or_else(|| input::out_name(&path));
    if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    std::fs::write(&out, png).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
