use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Plot configuration
// ---------------------------------------------------------------------------

/// Everything that used to be a literal in the plotting code.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// { "root_dir": "runs/11_back", "reference_case": "baseline" }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlotConfig {
    #[serde(default = "root_dir_default")]
    pub root_dir: PathBuf,
    /// Substring identifying the result file inside each case directory.
    #[serde(default = "marker_default")]
    pub marker: String,
    /// Label of the case drawn first. When unset the last scanned case is
    /// used.
    #[serde(default)]
    pub reference_case: Option<String>,
    #[serde(default)]
    pub y_ticks: TickRange,
    /// Window size in figure units, `[width, height]`.
    #[serde(default = "figure_size_default")]
    pub figure_size: [f32; 2],
    #[serde(default = "pixels_per_unit_default")]
    pub pixels_per_unit: f32,
    #[serde(default = "font_size_default")]
    pub font_size: f32,
    #[serde(default = "y_label_default")]
    pub y_label: String,
    #[serde(default = "mean_line_width_default")]
    pub mean_line_width: f32,
    #[serde(default = "median_line_width_default")]
    pub median_line_width: f32,
}

/// Fixed y-axis tick positions: `start, start + step, ...` below `stop`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct TickRange {
    #[serde(default = "tick_start_default")]
    pub start: f64,
    #[serde(default = "tick_stop_default")]
    pub stop: f64,
    #[serde(default = "tick_step_default")]
    pub step: f64,
}

fn root_dir_default() -> PathBuf {
    PathBuf::from("../11_back")
}
fn marker_default() -> String {
    "wallShearStress".to_string()
}
fn figure_size_default() -> [f32; 2] {
    [20.0, 6.0]
}
fn pixels_per_unit_default() -> f32 {
    100.0
}
fn font_size_default() -> f32 {
    22.0
}
fn y_label_default() -> String {
    "Wall shear stress in Pa".to_string()
}
fn mean_line_width_default() -> f32 {
    3.0
}
fn median_line_width_default() -> f32 {
    2.0
}
fn tick_start_default() -> f64 {
    0.0
}
fn tick_stop_default() -> f64 {
    100.0
}
fn tick_step_default() -> f64 {
    10.0
}

impl Default for TickRange {
    fn default() -> Self {
        TickRange {
            start: tick_start_default(),
            stop: tick_stop_default(),
            step: tick_step_default(),
        }
    }
}

/// Upper limit on the number of y ticks; one grid mark per tick is built
/// every frame.
pub const MAX_TICKS: usize = 1000;

impl TickRange {
    /// Number of ticks, or `None` when it is not finite or above
    /// [`MAX_TICKS`].
    pub fn count(&self) -> Option<usize> {
        if !(self.step > 0.0) {
            return Some(0);
        }
        let count = ((self.stop - self.start) / self.step).ceil().max(0.0);
        if !count.is_finite() || count > MAX_TICKS as f64 {
            return None;
        }
        Some(count as usize)
    }

    /// Tick positions; `stop` itself is excluded. Capped at [`MAX_TICKS`].
    pub fn values(&self) -> Vec<f64> {
        let count = self.count().unwrap_or(MAX_TICKS);
        (0..count)
            .map(|i| self.start + i as f64 * self.step)
            .collect()
    }

    /// Lowest and highest tick, which the plot view always covers.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let ticks = self.values();
        Some((*ticks.first()?, *ticks.last()?))
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            root_dir: root_dir_default(),
            marker: marker_default(),
            reference_case: None,
            y_ticks: TickRange::default(),
            figure_size: figure_size_default(),
            pixels_per_unit: pixels_per_unit_default(),
            font_size: font_size_default(),
            y_label: y_label_default(),
            mean_line_width: mean_line_width_default(),
            median_line_width: median_line_width_default(),
        }
    }
}

impl PlotConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening config file {}", path.display()))?;
        let config: PlotConfig = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.marker.is_empty() {
            bail!("marker must not be empty");
        }
        if !(self.y_ticks.step > 0.0) {
            bail!("y_ticks.step must be positive, got {}", self.y_ticks.step);
        }
        if self.y_ticks.count().is_none() {
            bail!(
                "y_ticks from {} to {} in steps of {} gives more than {MAX_TICKS} ticks",
                self.y_ticks.start,
                self.y_ticks.stop,
                self.y_ticks.step
            );
        }
        if self.y_ticks.stop < self.y_ticks.start {
            log::warn!(
                "y_ticks.stop ({}) is below y_ticks.start ({}); no y ticks will be drawn",
                self.y_ticks.stop,
                self.y_ticks.start
            );
        }
        if self.figure_size.iter().any(|&v| !(v > 0.0)) || !(self.pixels_per_unit > 0.0) {
            bail!(
                "figure size must be positive, got {:?} at {} px per unit",
                self.figure_size,
                self.pixels_per_unit
            );
        }
        if !(self.font_size > 0.0) {
            bail!("font_size must be positive, got {}", self.font_size);
        }
        Ok(())
    }

    /// Initial window size in pixels.
    pub fn window_size(&self) -> [f32; 2] {
        [
            self.figure_size[0] * self.pixels_per_unit,
            self.figure_size[1] * self.pixels_per_unit,
        ]
    }
}
