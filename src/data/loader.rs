use std::path::Path;

use super::error::DataError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the non-zero samples of one result file.
///
/// Expected layout: plain text, any number of floats per line separated by
/// whitespace. Anything after a `#` on a line is a comment:
///
/// ```text
/// # wallShearStress magnitude per face
/// 1.25 0 3.5
/// 0.0  7.75
/// ```
///
/// Zero entries are masked mesh cells, not measurements, and are dropped.
/// The test is exact equality with `0.0`; there is no tolerance.
pub fn load_samples(path: &Path) -> Result<Vec<f64>, DataError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = parse_samples(&text, path)?;
    log::debug!("{}: {} non-zero samples", path.display(), samples.len());
    Ok(samples)
}

/// Parse already-read file content. `path` is only used for error messages.
pub fn parse_samples(text: &str, path: &Path) -> Result<Vec<f64>, DataError> {
    let mut samples = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let content = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };

        for tok in content.split_whitespace() {
            let value = parse_token(tok).ok_or_else(|| DataError::Parse {
                path: path.to_path_buf(),
                line: line_no + 1,
                token: tok.to_string(),
            })?;
            if value != 0.0 {
                samples.push(value);
            }
        }
    }

    Ok(samples)
}

fn parse_token(tok: &str) -> Option<f64> {
    tok.parse::<f64>().ok().filter(|v| v.is_finite())
}
