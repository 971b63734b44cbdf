use std::path::{Path, PathBuf};

use super::error::DataError;
use super::loader::load_samples;
use super::model::{Case, CaseCollection};

// ---------------------------------------------------------------------------
// Directory scan
// ---------------------------------------------------------------------------

/// A case directory and the result file picked from it.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseSource {
    pub label: String,
    pub file: PathBuf,
}

/// Find one result file per case directory under `root`.
///
/// Case directories are visited in name order, whatever order the
/// filesystem lists them in. Plain files directly under `root` are ignored.
/// Inside a case, the file is the last one (by name) whose name contains
/// `marker`; a case without such a file is an error.
pub fn scan_root(root: &Path, marker: &str) -> Result<Vec<CaseSource>, DataError> {
    if !root.is_dir() {
        return Err(DataError::not_found("root directory", root));
    }

    let mut sources = Vec::new();
    for dir in sorted_entries(root)? {
        if !dir.is_dir() {
            log::debug!("Skipping non-directory entry {}", dir.display());
            continue;
        }
        let label = file_name(&dir);
        let file = find_marker_file(&dir, marker)?;
        sources.push(CaseSource { label, file });
    }

    if sources.is_empty() {
        return Err(DataError::NoCases {
            root: root.to_path_buf(),
        });
    }
    Ok(sources)
}

fn find_marker_file(dir: &Path, marker: &str) -> Result<PathBuf, DataError> {
    let matches: Vec<PathBuf> = sorted_entries(dir)?
        .into_iter()
        .filter(|p| p.is_file() && file_name(p).contains(marker))
        .collect();

    match matches.as_slice() {
        [] => Err(DataError::not_found(
            format!("file containing '{marker}'"),
            dir,
        )),
        [only] => Ok(only.clone()),
        [.., last] => {
            log::warn!(
                "{} files in {} contain '{marker}'; using {}",
                matches.len(),
                dir.display(),
                last.display()
            );
            Ok(last.clone())
        }
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, DataError> {
    let read_err = |source: std::io::Error| DataError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = std::fs::read_dir(dir)
        .map_err(read_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_err)?;
    entries.sort();
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Scan + load
// ---------------------------------------------------------------------------

/// Scan `root` and load every case, in scan order. The first failing file
/// aborts the whole load.
pub fn load_cases(root: &Path, marker: &str) -> Result<CaseCollection, DataError> {
    let cases = scan_root(root, marker)?
        .into_iter()
        .map(|src| {
            let samples = load_samples(&src.file)?;
            Ok(Case::new(src.label, samples))
        })
        .collect::<Result<Vec<_>, DataError>>()?;

    let collection = CaseCollection::from_cases(cases);
    log::info!(
        "Loaded {} cases ({} samples) from {}: {:?}",
        collection.len(),
        collection.samples().iter().map(|s| s.len()).sum::<usize>(),
        root.display(),
        collection.labels()
    );
    Ok(collection)
}
