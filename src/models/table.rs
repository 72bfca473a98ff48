// Declarative channel table: counter names plus channel definitions indexing into them.

use super::{ChannelDef, ChannelKind};
use crate::error::SensorError;
use std::collections::HashSet;

/// Counters read from `tailscale metrics`, in positional order.
pub const DEFAULT_COUNTERS: &[&str] = &[
    "tailscaled_advertised_routes",
    "tailscaled_approved_routes",
    "tailscaled_health_messages{type=\"warning\"}",
    "tailscaled_inbound_bytes_total{path=\"derp\"}",
    "tailscaled_inbound_bytes_total{path=\"direct_ipv4\"}",
    "tailscaled_inbound_bytes_total{path=\"direct_ipv6\"}",
    "tailscaled_inbound_dropped_packets_total{reason=\"acl\"}",
    "tailscaled_inbound_packets_total{path=\"derp\"}",
    "tailscaled_inbound_packets_total{path=\"direct_ipv4\"}",
    "tailscaled_inbound_packets_total{path=\"direct_ipv6\"}",
    "tailscaled_outbound_bytes_total{path=\"derp\"}",
    "tailscaled_outbound_bytes_total{path=\"direct_ipv4\"}",
    "tailscaled_outbound_bytes_total{path=\"direct_ipv6\"}",
    "tailscaled_outbound_dropped_packets_total{reason=\"error\"}",
    "tailscaled_outbound_packets_total{path=\"derp\"}",
    "tailscaled_outbound_packets_total{path=\"direct_ipv4\"}",
    "tailscaled_outbound_packets_total{path=\"direct_ipv6\"}",
];

/// Built-in PRTG channels over [`DEFAULT_COUNTERS`].
pub fn default_channels() -> Vec<ChannelDef> {
    vec![
        ChannelDef::new(
            "Traffic Total (Speed)",
            ChannelKind::Speed,
            &[3, 4, 5, 10, 11, 12],
        ),
        ChannelDef::new("Traffic In (Speed)", ChannelKind::Speed, &[3, 4, 5]),
        ChannelDef::new("Traffic Out (Speed)", ChannelKind::Speed, &[10, 11, 12]),
        ChannelDef::new("Advertised Routes", ChannelKind::Count, &[0]),
        ChannelDef::new("Approved Routes", ChannelKind::Count, &[1]),
    ]
}

/// Validated pairing of counter names and channel definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTable {
    counters: Vec<String>,
    channels: Vec<ChannelDef>,
}

impl ChannelTable {
    /// Rejects empty tables, channels without counters, out-of-range indices and duplicate names.
    pub fn new(counters: Vec<String>, channels: Vec<ChannelDef>) -> Result<Self, SensorError> {
        if counters.is_empty() {
            return Err(SensorError::ConfigMismatch("counter list is empty".into()));
        }
        if channels.is_empty() {
            return Err(SensorError::ConfigMismatch("channel list is empty".into()));
        }
        let mut seen_counters = HashSet::new();
        for name in &counters {
            if !seen_counters.insert(name.as_str()) {
                return Err(SensorError::ConfigMismatch(format!(
                    "counter {:?} listed twice",
                    name
                )));
            }
        }
        let mut seen_channels = HashSet::new();
        for def in &channels {
            if !seen_channels.insert(def.name.as_str()) {
                return Err(SensorError::ConfigMismatch(format!(
                    "channel {:?} defined twice",
                    def.name
                )));
            }
            if def.metrics.is_empty() {
                return Err(SensorError::ConfigMismatch(format!(
                    "channel {:?} has no counters",
                    def.name
                )));
            }
            if let Some(&bad) = def.metrics.iter().find(|&&i| i >= counters.len()) {
                return Err(SensorError::ConfigMismatch(format!(
                    "channel {:?} references counter {} but only {} counters are known",
                    def.name,
                    bad,
                    counters.len()
                )));
            }
        }
        Ok(Self { counters, channels })
    }

    pub fn counters(&self) -> &[String] {
        &self.counters
    }

    pub fn channels(&self) -> &[ChannelDef] {
        &self.channels
    }
}

impl Default for ChannelTable {
    fn default() -> Self {
        Self {
            counters: DEFAULT_COUNTERS.iter().map(|s| s.to_string()).collect(),
            channels: default_channels(),
        }
    }
}
