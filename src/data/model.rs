use super::error::DataError;
use super::stats;

// ---------------------------------------------------------------------------
// Case – one simulation variant
// ---------------------------------------------------------------------------

/// One case directory: its name and the non-zero samples of its result file.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub label: String,
    pub samples: Vec<f64>,
}

impl Case {
    pub fn new(label: impl Into<String>, samples: Vec<f64>) -> Self {
        Case {
            label: label.into(),
            samples,
        }
    }

    /// Arithmetic mean of the samples.
    pub fn mean(&self) -> Result<f64, DataError> {
        stats::mean(&self.samples).ok_or_else(|| DataError::EmptyData {
            label: self.label.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// CaseCollection – ordered cases as they appear on the x-axis
// ---------------------------------------------------------------------------

/// Ordered cases. Labels and samples live in the same element, so every
/// reorder moves both together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseCollection {
    cases: Vec<Case>,
}

impl CaseCollection {
    pub fn from_cases(cases: Vec<Case>) -> Self {
        CaseCollection { cases }
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.cases.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn samples(&self) -> Vec<&[f64]> {
        self.cases.iter().map(|c| c.samples.as_slice()).collect()
    }

    /// The case drawn first; its mean is the reference line.
    pub fn reference(&self) -> Option<&Case> {
        self.cases.first()
    }

    pub fn reference_mean(&self) -> Result<f64, DataError> {
        match self.reference() {
            Some(case) => case.mean(),
            None => Err(DataError::NoReference),
        }
    }

    /// Move the last case to index 0. The others keep their relative order.
    pub fn move_last_to_front(&mut self) {
        if let Some(last) = self.cases.pop() {
            self.cases.insert(0, last);
        }
    }

    /// Move the case labelled `label` to index 0.
    pub fn promote(&mut self, label: &str) -> Result<(), DataError> {
        let idx = self
            .cases
            .iter()
            .position(|c| c.label == label)
            .ok_or_else(|| DataError::UnknownReference {
                label: label.to_string(),
                available: self.cases.iter().map(|c| c.label.clone()).collect(),
            })?;
        let case = self.cases.remove(idx);
        self.cases.insert(0, case);
        Ok(())
    }

    /// Presentation order: the named reference first, or, when none is
    /// configured, whichever case was scanned last.
    pub fn ordered_for_display(mut self, reference: Option<&str>) -> Result<Self, DataError> {
        match reference {
            Some(label) => self.promote(label)?,
            None => {
                self.move_last_to_front();
                if let Some(first) = self.reference() {
                    log::warn!(
                        "No reference case configured; using last scanned case '{}' as reference",
                        first.label
                    );
                }
            }
        }
        Ok(self)
    }
}
