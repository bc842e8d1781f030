mod analysis;
mod app;
mod data;
mod state;
mod ui;

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use app::PeakScopeApp;
use eframe::egui;
use state::SessionState;

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: peakscope <spectrum file (.parquet / .json / .csv)>")?;

    let (lo, hi) = prompt_mass_range()?;

    let spectrum = data::loader::load_file(Path::new(&path))
        .with_context(|| format!("loading spectrum from {path}"))?;
    log::info!("Loaded {} points from {path}", spectrum.len());

    let window = analysis::select::select_range(&spectrum, lo, hi)?;
    log::info!("Selected {} points in mass range {lo}:{hi}", window.len());

    let session = SessionState::new(window, (lo, hi));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "PeakScope – m/z sum spectrum",
        options,
        Box::new(move |_cc| Ok(Box::new(PeakScopeApp::new(session)))),
    );
    if let Err(e) = result {
        bail!("failed to start UI: {e}");
    }
    Ok(())
}

/// Ask for the unit-mass range on stdout and read one line from stdin.
fn prompt_mass_range() -> Result<(i64, i64)> {
    print!("Type unit mass range in the format \"x:y\": ");
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading mass range from stdin")?;
    parse_mass_range(line.trim())
}

/// Parse a `"<int>:<int>"` range string.
fn parse_mass_range(input: &str) -> Result<(i64, i64)> {
    let (lo, hi) = input
        .split_once(':')
        .with_context(|| format!("invalid mass range '{input}': expected \"<min>:<max>\""))?;
    let lo = lo
        .trim()
        .parse::<i64>()
        .with_context(|| format!("invalid minimum mass '{}'", lo.trim()))?;
    let hi = hi
        .trim()
        .parse::<i64>()
        .with_context(|| format!("invalid maximum mass '{}'", hi.trim()))?;
    Ok((lo, hi))
}
