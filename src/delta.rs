// Delta engine: derive channel values from the current counters and the previous run's snapshot.
//
// Pure: the previous snapshot is only read, and the same inputs always give the same channels.

use crate::error::SensorError;
use crate::models::{Channel, ChannelKind, ChannelTable, ChannelValue, SampleSet, Snapshot};
use tracing::debug;

/// Speed deltas are divided by this before PRTG applies its SpeedNet conversion.
pub const SPEED_DIVISOR: f64 = 64.0;

/// Interval assumed when there is no previous snapshot.
pub const FIRST_RUN_INTERVAL_SECS: f64 = 300.0;

/// Seconds since the previous snapshot, or [`FIRST_RUN_INTERVAL_SECS`] on the first run.
/// Only logged; no channel divides by it.
pub fn interval_secs(now: f64, previous: Option<&Snapshot>) -> f64 {
    previous.map_or(FIRST_RUN_INTERVAL_SECS, |p| now - p.timestamp)
}

pub struct DeltaEngine {
    table: ChannelTable,
}

impl DeltaEngine {
    pub fn new(table: ChannelTable) -> Self {
        Self { table }
    }

    /// Computes every channel in table order.
    ///
    /// - count: truncated sum of the current counters.
    /// - volume: truncated current sum minus the channel's previous value (0 if it was
    ///   not a volume channel last run).
    /// - speed: (current sum - previous raw sum of the same counters) / [`SPEED_DIVISOR`].
    ///
    /// With no previous snapshot every previous value is 0. Counter resets yield negative
    /// volume/speed values, which pass through unchanged.
    pub fn update(
        &self,
        now: f64,
        current: &SampleSet,
        previous: Option<&Snapshot>,
    ) -> Result<Vec<Channel>, SensorError> {
        debug!(
            interval_secs = interval_secs(now, previous),
            first_run = previous.is_none(),
            "computing channels"
        );
        self.table
            .channels()
            .iter()
            .map(|def| -> Result<Channel, SensorError> {
                let channel = Channel::from_def(def);
                let aggregate = current.aggregate(&def.metrics)?;
                let value = match def.kind {
                    ChannelKind::Count => ChannelValue::Int(aggregate.trunc() as i64),
                    ChannelKind::Volume => {
                        let last = previous
                            .and_then(|p| p.channel(&def.name))
                            .filter(|c| c.kind == def.kind)
                            .map_or(0.0, |c| c.value.as_f64());
                        ChannelValue::Float(aggregate.trunc() - last)
                    }
                    ChannelKind::Speed => {
                        let last = match previous {
                            Some(p) => current.aggregate_matching(&def.metrics, &p.samples)?,
                            None => 0.0,
                        };
                        ChannelValue::Float((aggregate - last) / SPEED_DIVISOR)
                    }
                };
                Ok(channel.with_value(value))
            })
            .collect()
    }

    /// Builds the snapshot this run persists: `current` plus freshly computed channels.
    pub fn snapshot(
        &self,
        now: f64,
        current: SampleSet,
        previous: Option<&Snapshot>,
    ) -> Result<Snapshot, SensorError> {
        let channels = self.update(now, &current, previous)?;
        Ok(Snapshot {
            timestamp: now,
            samples: current,
            channels,
        })
    }
}
