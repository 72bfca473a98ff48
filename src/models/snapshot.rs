// One run's persisted state: when it ran, what it read, what it reported.

use super::{Channel, SampleSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    pub samples: SampleSet,
    pub channels: Vec<Channel>,
}

impl Snapshot {
    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.name == name)
    }
}
