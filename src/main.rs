mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::WssBoxPlotApp;
use clap::Parser;
use config::PlotConfig;
use data::stats::format_table;
use eframe::egui;
use state::AppState;

/// Compare wall shear stress across simulation cases as a box plot.
#[derive(Parser, Debug)]
#[command(name = "wss-boxplot", version, about)]
struct Cli {
    /// Directory holding one subdirectory per case (overrides `root_dir`)
    root: Option<PathBuf>,

    /// JSON config file; missing keys take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Substring identifying the result file in each case directory
    #[arg(short, long)]
    marker: Option<String>,

    /// Case drawn first, whose mean becomes the reference line
    #[arg(short, long)]
    reference: Option<String>,

    /// Print the per-case statistics and exit without opening a window
    #[arg(long)]
    summary: bool,
}

impl Cli {
    fn plot_config(&self) -> Result<PlotConfig> {
        let mut config = match &self.config {
            Some(path) => PlotConfig::from_file(path)?,
            None => PlotConfig::default(),
        };
        if let Some(root) = &self.root {
            config.root_dir = root.clone();
        }
        if let Some(marker) = &self.marker {
            config.marker = marker.clone();
        }
        if let Some(reference) = &self.reference {
            config.reference_case = Some(reference.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.plot_config()?;

    let state = AppState::load(config).context("loading cases")?;

    if cli.summary {
        print!("{}", format_table(&state.summaries, state.reference_mean));
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(state.config.window_size())
            .with_min_inner_size([600.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wall shear stress",
        options,
        Box::new(|cc| Ok(Box::new(WssBoxPlotApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config_defaults() {
        let cli = Cli::parse_from([
            "wss-boxplot",
            "runs/11_back",
            "--marker",
            "p_rgh",
            "--reference",
            "baseline",
        ]);
        let config = cli.plot_config().unwrap();
        assert_eq!(config.root_dir, PathBuf::from("runs/11_back"));
        assert_eq!(config.marker, "p_rgh");
        assert_eq!(config.reference_case.as_deref(), Some("baseline"));
        assert!(!cli.summary);
    }

    #[test]
    fn cli_without_arguments_uses_defaults() {
        let cli = Cli::parse_from(["wss-boxplot"]);
        assert_eq!(cli.plot_config().unwrap(), PlotConfig::default());
    }

    #[test]
    fn cli_rejects_empty_marker() {
        let cli = Cli::parse_from(["wss-boxplot", "--marker", ""]);
        assert!(cli.plot_config().is_err());
    }
}
