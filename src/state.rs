use std::path::PathBuf;

use crate::color::CaseColors;
use crate::config::PlotConfig;
use crate::data::error::DataError;
use crate::data::model::CaseCollection;
use crate::data::scanner::load_cases;
use crate::data::stats::{summarize, CaseSummary};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct AppState {
    pub config: PlotConfig,

    /// Cases in scan order, as loaded.
    pub scanned: CaseCollection,

    /// Cases in plot order, reference case first.
    pub cases: CaseCollection,

    /// Box statistics for `cases`, same order.
    pub summaries: Vec<CaseSummary>,

    /// Height of the dashed reference line.
    pub reference_mean: f64,

    pub colors: CaseColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Run the whole pipeline for `config.root_dir`.
    pub fn load(config: PlotConfig) -> Result<Self, DataError> {
        let scanned = load_cases(&config.root_dir, &config.marker)?;
        let (cases, summaries, reference_mean) =
            present(&scanned, config.reference_case.as_deref())?;
        let colors = CaseColors::new(scanned.labels());

        Ok(AppState {
            config,
            scanned,
            cases,
            summaries,
            reference_mean,
            colors,
            status_message: None,
        })
    }

    /// Load a different root directory. On failure the current plot is kept
    /// and the error goes to the status line.
    pub fn open_root(&mut self, root: PathBuf) {
        let mut config = self.config.clone();
        config.root_dir = root;
        // A reference label from the old root rarely exists in the new one.
        if self.config.root_dir != config.root_dir {
            config.reference_case = None;
        }
        self.replace_with(AppState::load(config));
    }

    /// Re-read the current root directory from disk.
    pub fn reload(&mut self) {
        self.replace_with(AppState::load(self.config.clone()));
    }

    /// Draw `label` first and move the reference line to its mean.
    pub fn set_reference(&mut self, label: &str) {
        match present(&self.scanned, Some(label)) {
            Ok((cases, summaries, reference_mean)) => {
                self.config.reference_case = Some(label.to_string());
                self.cases = cases;
                self.summaries = summaries;
                self.reference_mean = reference_mean;
                self.status_message = None;
            }
            Err(e) => self.report(e),
        }
    }

    pub fn reference_label(&self) -> Option<&str> {
        self.cases.reference().map(|c| c.label.as_str())
    }

    fn replace_with(&mut self, loaded: Result<AppState, DataError>) {
        match loaded {
            Ok(state) => {
                log::info!(
                    "Showing {} cases from {}",
                    state.cases.len(),
                    state.config.root_dir.display()
                );
                *self = state;
            }
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, e: DataError) {
        log::error!("Failed to load cases: {e}");
        self.status_message = Some(format!("Error: {e}"));
    }
}

/// Order the scanned cases for display and compute what the plot needs.
fn present(
    scanned: &CaseCollection,
    reference: Option<&str>,
) -> Result<(CaseCollection, Vec<CaseSummary>, f64), DataError> {
    let cases = scanned.clone().ordered_for_display(reference)?;
    let reference_mean = cases.reference_mean()?;
    let summaries = summarize(&cases)?;
    Ok((cases, summaries, reference_mean))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use tempfile::tempdir;

    fn write_case(root: &Path, case: &str, content: &str) {
        let dir = root.join(case);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("wallShearStress"), content).unwrap();
    }

    fn config_for(root: &Path) -> PlotConfig {
        PlotConfig {
            root_dir: root.to_path_buf(),
            ..PlotConfig::default()
        }
    }

    #[test]
    fn load_orders_and_summarizes() {
        let tmp = tempdir().expect("create temp dir");
        write_case(tmp.path(), "caseA", "1.0 0.0 2.5");
        write_case(tmp.path(), "caseB", "0.0 0.0 3.0");

        let state = AppState::load(config_for(tmp.path())).unwrap();
        assert_eq!(state.scanned.labels(), vec!["caseA", "caseB"]);
        assert_eq!(state.cases.labels(), vec!["caseB", "caseA"]);
        assert_eq!(state.reference_mean, 3.0);
        assert_eq!(state.summaries.len(), 2);
        assert_eq!(state.summaries[1].stats.median, 1.75);
        assert_eq!(state.reference_label(), Some("caseB"));
    }

    #[test]
    fn configured_reference_wins_over_position() {
        let tmp = tempdir().expect("create temp dir");
        write_case(tmp.path(), "baseline", "10 20");
        write_case(tmp.path(), "variant", "30");

        let mut config = config_for(tmp.path());
        config.reference_case = Some("baseline".to_string());
        let state = AppState::load(config).unwrap();
        assert_eq!(state.cases.labels(), vec!["baseline", "variant"]);
        assert_eq!(state.reference_mean, 15.0);
    }

    #[test]
    fn set_reference_reorders_from_scan_order() {
        let tmp = tempdir().expect("create temp dir");
        write_case(tmp.path(), "a", "1");
        write_case(tmp.path(), "b", "2");
        write_case(tmp.path(), "c", "3");

        let mut state = AppState::load(config_for(tmp.path())).unwrap();
        assert_eq!(state.cases.labels(), vec!["c", "a", "b"]);

        state.set_reference("b");
        assert_eq!(state.cases.labels(), vec!["b", "a", "c"]);
        assert_eq!(state.reference_mean, 2.0);
        assert_eq!(state.config.reference_case.as_deref(), Some("b"));
    }

    #[test]
    fn failed_reload_keeps_previous_plot() {
        let tmp = tempdir().expect("create temp dir");
        write_case(tmp.path(), "a", "1 2");

        let mut state = AppState::load(config_for(tmp.path())).unwrap();
        state.open_root(tmp.path().join("missing"));

        assert_eq!(state.cases.labels(), vec!["a"]);
        assert_eq!(state.config.root_dir, tmp.path());
        assert!(state
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("not found")));
    }

    #[test]
    fn empty_case_fails_the_load() {
        let tmp = tempdir().expect("create temp dir");
        write_case(tmp.path(), "a", "1 2");
        write_case(tmp.path(), "b", "0 0");

        assert!(matches!(
            AppState::load(config_for(tmp.path())),
            Err(DataError::EmptyData { .. })
        ));
    }
}
