// Raw counters as reported by the metrics source at one point in time.

use crate::error::SensorError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCounter {
    /// Metric name including any label qualifiers, e.g. `tailscaled_inbound_bytes_total{path="derp"}`.
    pub name: String,
    pub value: f64,
}

/// Ordered raw counters over a fixed name list. Channels address counters by position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleSet {
    samples: Vec<RawCounter>,
}

impl SampleSet {
    /// All known counters at zero, in the given order.
    pub fn zeroed<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            samples: names
                .iter()
                .map(|n| RawCounter {
                    name: n.as_ref().to_string(),
                    value: 0.0,
                })
                .collect(),
        }
    }

    pub fn from_counters(samples: Vec<RawCounter>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawCounter> {
        self.samples.iter()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.samples.iter().position(|s| s.name == name)
    }

    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.samples.iter().find(|s| s.name == name).map(|s| s.value)
    }

    /// Sum of the counters at `indices`. An index past the end is a configuration error.
    pub fn aggregate(&self, indices: &[usize]) -> Result<f64, SensorError> {
        indices.iter().try_fold(0.0, |acc, &i| {
            self.samples
                .get(i)
                .map(|s| acc + s.value)
                .ok_or_else(|| self.out_of_range(i))
        })
    }

    /// Sum of the counters in `other` that carry the same names as ours at `indices`.
    /// Names missing from `other` contribute 0.
    pub fn aggregate_matching(
        &self,
        indices: &[usize],
        other: &SampleSet,
    ) -> Result<f64, SensorError> {
        indices.iter().try_fold(0.0, |acc, &i| -> Result<f64, SensorError> {
            let name = &self
                .samples
                .get(i)
                .ok_or_else(|| self.out_of_range(i))?
                .name;
            Ok(acc + other.value_of(name).unwrap_or(0.0))
        })
    }

    fn out_of_range(&self, index: usize) -> SensorError {
        SensorError::ConfigMismatch(format!(
            "counter index {} out of range ({} counters)",
            index,
            self.samples.len()
        ))
    }

    pub(crate) fn set_at(&mut self, index: usize, value: f64) {
        if let Some(s) = self.samples.get_mut(index) {
            s.value = value;
        }
    }
}
