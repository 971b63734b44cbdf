use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Data-layer errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong between the root directory and the plot.
///
/// None of these are recovered from inside the pipeline; the first one
/// aborts the load and is reported to the user.
#[derive(Debug, Error)]
pub enum DataError {
    /// A path that must exist is missing, or is the wrong kind of entry.
    #[error("{what} not found: {}", path.display())]
    NotFound { what: String, path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A token in a sample file is not a finite number.
    #[error("{}:{line}: '{token}' is not a finite number", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    /// A case has no non-zero samples, so it has no mean and no box.
    #[error("case '{label}' has no non-zero samples")]
    EmptyData { label: String },

    #[error("no case directories under {}", root.display())]
    NoCases { root: PathBuf },

    #[error("no reference case: no cases are loaded")]
    NoReference,

    #[error("reference case '{label}' not found (available: {})", available.join(", "))]
    UnknownReference {
        label: String,
        available: Vec<String>,
    },
}

impl DataError {
    pub(crate) fn not_found(what: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        DataError::NotFound {
            what: what.into(),
            path: path.into(),
        }
    }
}
