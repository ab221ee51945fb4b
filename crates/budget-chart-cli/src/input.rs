// File: crates/budget-chart-cli/src/input.rs
// Summary: Loads chart input from a JSON request file or a CSV of items.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use budget_chart::{ChartRequest, ChartSettings, Item};
use serde::Deserialize;

/// CSV row: `title,value_primary,value_secondary`. An empty secondary cell
/// keeps the item single-series.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(alias = "titulo")]
    title: String,
    #[serde(default, alias = "valor_verde")]
    value_primary: Option<f64>,
    #[serde(default, alias = "valor_amarelo")]
    value_secondary: Option<f64>,
}

/// Resolve path, trying the .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt).
pub fn resolve_path(raw: &Path) -> Result<(PathBuf, bool)> {
    if raw.exists() {
        return Ok((raw.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(raw) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", raw.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "csv" => Some(p.with_extension("cvs")),
        "cvs" => Some(p.with_extension("csv")),
        _ => None,
    }
}

fn is_csv(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref(),
        Some("csv" | "cvs")
    )
}

/// Load items and base settings from `path`. JSON files carry both; CSV
/// files only carry items and start from default settings.
pub fn load(path: &Path) -> Result<(Vec<Item>, ChartSettings)> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    if is_csv(path) {
        let items = items_from_csv(file).with_context(|| format!("reading CSV '{}'", path.display()))?;
        Ok((items, ChartSettings::default()))
    } else {
        request_from_json(file).with_context(|| format!("reading JSON '{}'", path.display()))
    }
}

pub fn request_from_json(rdr: impl Read) -> Result<(Vec<Item>, ChartSettings)> {
    let req: ChartRequest = serde_json::from_reader(rdr)?;
    Ok(req.into_parts()?)
}

pub fn items_from_csv(rdr: impl Read) -> Result<Vec<Item>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(rdr);
    let mut items = Vec::new();
    for (i, row) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = row.with_context(|| format!("row {}", i + 1))?;
        items.push(Item::try_new(i, row.title, row.value_primary.unwrap_or(0.0), row.value_secondary)?);
    }
    Ok(items)
}

/// Output file name like target/out/chart_<stem>.png
pub fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("chart_{stem}.png"))
}
