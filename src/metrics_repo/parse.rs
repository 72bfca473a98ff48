// Parse Prometheus-style exposition text (`name{labels} value`) into a SampleSet.

use crate::error::SensorError;
use crate::models::SampleSet;

/// Comment marker; lines starting with it are skipped.
const COMMENT: char = '#';

/// Reads `text` into a zeroed copy of `counters`. The last line for a known name wins; unknown
/// names are ignored. Every non-comment line must be exactly `<name> <value>`; only values of
/// known names are parsed as numbers, and they must be finite.
pub fn parse_exposition<S: AsRef<str>>(
    text: &str,
    counters: &[S],
) -> Result<SampleSet, SensorError> {
    let mut samples = SampleSet::zeroed(counters);
    for (i, line) in text.lines().enumerate() {
        if line.starts_with(COMMENT) || line.trim().is_empty() {
            continue;
        }
        let malformed = || SensorError::MalformedLine {
            line_no: i + 1,
            line: line.to_string(),
        };
        let mut fields = line.split(' ');
        let (Some(name), Some(value), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(malformed());
        };
        if let Some(index) = samples.position(name) {
            let value: f64 = value.parse().map_err(|_| malformed())?;
            if !value.is_finite() {
                return Err(malformed());
            }
            samples.set_at(index, value);
        }
    }
    Ok(samples)
}
