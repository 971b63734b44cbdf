use super::error::DataError;
use super::model::CaseCollection;

// ---------------------------------------------------------------------------
// Box statistics
// ---------------------------------------------------------------------------

/// Everything needed to draw one box: the five-number spread plus the mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
}

/// Reach of the whiskers, in multiples of the interquartile range.
const WHISKER_REACH: f64 = 1.5;

impl BoxStats {
    /// `None` for an empty slice.
    ///
    /// Quartiles interpolate linearly between closest ranks. Whiskers end at
    /// the most extreme samples within `WHISKER_REACH * IQR` of the box and
    /// never inside the box itself.
    pub fn compute(samples: &[f64]) -> Option<BoxStats> {
        let mean = mean(samples)?;

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = percentile(&sorted, 0.25);
        let median = percentile(&sorted, 0.5);
        let q3 = percentile(&sorted, 0.75);
        let iqr = q3 - q1;

        let low_fence = q1 - WHISKER_REACH * iqr;
        let high_fence = q3 + WHISKER_REACH * iqr;

        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| v >= low_fence)
            .map_or(q1, |v| v.min(q1));
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_fence)
            .map_or(q3, |v| v.max(q3));

        Some(BoxStats {
            count: sorted.len(),
            mean,
            median,
            q1,
            q3,
            whisker_low,
            whisker_high,
        })
    }
}

pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Percentile `p` (in `[0, 1]`) of an ascending, non-empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let pos = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

// ---------------------------------------------------------------------------
// Per-case summaries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CaseSummary {
    pub label: String,
    pub stats: BoxStats,
}

/// Box statistics for every case, in collection order.
///
/// A case without samples cannot be drawn and fails the whole summary.
pub fn summarize(cases: &CaseCollection) -> Result<Vec<CaseSummary>, DataError> {
    cases
        .cases()
        .iter()
        .map(|case| {
            let stats = BoxStats::compute(&case.samples).ok_or_else(|| DataError::EmptyData {
                label: case.label.clone(),
            })?;
            Ok(CaseSummary {
                label: case.label.clone(),
                stats,
            })
        })
        .collect()
}

/// Plain-text table of the summaries, one row per case.
pub fn format_table(summaries: &[CaseSummary], reference_mean: f64) -> String {
    let width = summaries
        .iter()
        .map(|s| s.label.len())
        .chain(std::iter::once("case".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "{:<width$}  {:>8}  {:>10}  {:>10}  {:>10}  {:>10}\n",
        "case", "n", "mean", "q1", "median", "q3"
    );
    for s in summaries {
        let st = &s.stats;
        out.push_str(&format!(
            "{:<width$}  {:>8}  {:>10.3}  {:>10.3}  {:>10.3}  {:>10.3}\n",
            s.label, st.count, st.mean, st.q1, st.median, st.q3
        ));
    }
    out.push_str(&format!("reference mean: {reference_mean:.3}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Case;

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0, 6.0]), Some(3.0));
    }

    #[test]
    fn percentile_interpolates_linearly() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&sorted, 0.0), 1.0);
        assert_eq!(percentile(&sorted, 0.25), 1.75);
        assert_eq!(percentile(&sorted, 0.5), 2.5);
        assert_eq!(percentile(&sorted, 0.75), 3.25);
        assert_eq!(percentile(&sorted, 1.0), 4.0);
        assert_eq!(percentile(&[7.0], 0.5), 7.0);
    }

    #[test]
    fn box_stats_of_unsorted_input() {
        let stats = BoxStats::compute(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.q1, 1.75);
        assert_eq!(stats.q3, 3.25);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 4.0);
    }

    #[test]
    fn whiskers_stop_at_last_sample_inside_fence() {
        // q1 = 2, q3 = 4, fences at -1 and 7
        let stats = BoxStats::compute(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 4.0);
        assert_eq!(stats.mean, 22.0);
    }

    #[test]
    fn single_sample_collapses_the_box() {
        let stats = BoxStats::compute(&[3.0]).unwrap();
        assert_eq!(
            (stats.whisker_low, stats.q1, stats.median, stats.q3, stats.whisker_high),
            (3.0, 3.0, 3.0, 3.0, 3.0)
        );
    }

    #[test]
    fn summarize_fails_on_empty_case() {
        let cases = CaseCollection::from_cases(vec![
            Case::new("ok", vec![1.0]),
            Case::new("all_zero", vec![]),
        ]);
        match summarize(&cases) {
            Err(DataError::EmptyData { label }) => assert_eq!(label, "all_zero"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn summarize_keeps_collection_order() {
        let cases = CaseCollection::from_cases(vec![
            Case::new("b", vec![3.0]),
            Case::new("a", vec![1.0, 2.5]),
        ]);
        let summaries = summarize(&cases).unwrap();
        let labels: Vec<&str> = summaries.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a"]);
        assert_eq!(summaries[1].stats.mean, 1.75);
    }

    #[test]
    fn table_has_header_rows_and_reference() {
        let cases = CaseCollection::from_cases(vec![
            Case::new("caseB", vec![3.0]),
            Case::new("caseA", vec![1.0, 2.5]),
        ]);
        let table = format_table(&summarize(&cases).unwrap(), 3.0);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("case "));
        assert!(lines[1].starts_with("caseB"));
        assert!(lines[2].contains("1.750"));
        assert_eq!(lines[3], "reference mean: 3.000");
    }
}
