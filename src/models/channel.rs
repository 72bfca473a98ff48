// PRTG channels: derived values computed from one or more raw counters.

use serde::{Deserialize, Serialize};

/// How a channel derives its value; serializes lowercase ("count", "volume", "speed").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    /// Absolute sum of the current counters.
    Count,
    /// Current sum minus the channel's own previous value.
    Volume,
    /// Byte delta against the previous raw counters, scaled for PRTG's SpeedNet conversion.
    Speed,
}

/// PRTG `unit` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Count,
    BytesBandwidth,
    SpeedNet,
}

impl ChannelKind {
    pub fn unit(self) -> Unit {
        match self {
            ChannelKind::Count => Unit::Count,
            ChannelKind::Volume => Unit::BytesBandwidth,
            ChannelKind::Speed => Unit::SpeedNet,
        }
    }

    /// PRTG `size` tag; only count channels carry one.
    pub fn size(self) -> Option<String> {
        match self {
            ChannelKind::Count => Some("One".into()),
            ChannelKind::Volume | ChannelKind::Speed => None,
        }
    }

    /// PRTG `float` flag: 0 for integer channels, 1 otherwise.
    pub fn float_flag(self) -> u8 {
        match self {
            ChannelKind::Count => 0,
            ChannelKind::Volume | ChannelKind::Speed => 1,
        }
    }

    pub fn initial_value(self) -> ChannelValue {
        match self {
            ChannelKind::Count => ChannelValue::Int(0),
            ChannelKind::Volume | ChannelKind::Speed => ChannelValue::Float(0.0),
        }
    }
}

/// Channel value: integer for count channels, float otherwise. Untagged, so JSON stays a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelValue {
    Int(i64),
    Float(f64),
}

impl ChannelValue {
    pub fn as_f64(self) -> f64 {
        match self {
            ChannelValue::Int(v) => v as f64,
            ChannelValue::Float(v) => v,
        }
    }
}

impl Default for ChannelValue {
    fn default() -> Self {
        ChannelValue::Int(0)
    }
}

/// Static channel definition: what to compute and from which counter positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelDef {
    pub name: String,
    #[serde(rename = "ctype")]
    pub kind: ChannelKind,
    pub metrics: Vec<usize>,
}

impl ChannelDef {
    pub fn new(name: impl Into<String>, kind: ChannelKind, metrics: &[usize]) -> Self {
        Self {
            name: name.into(),
            kind,
            metrics: metrics.to_vec(),
        }
    }
}

/// A channel with its current value and PRTG display metadata, as persisted in the state file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    #[serde(rename = "ctype")]
    pub kind: ChannelKind,
    pub metrics: Vec<usize>,
    #[serde(default)]
    pub value: ChannelValue,
    pub unit: Unit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub float: u8,
}

impl Channel {
    /// Fresh channel at its kind's initial value.
    pub fn from_def(def: &ChannelDef) -> Self {
        Self {
            name: def.name.clone(),
            kind: def.kind,
            metrics: def.metrics.clone(),
            value: def.kind.initial_value(),
            unit: def.kind.unit(),
            size: def.kind.size(),
            float: def.kind.float_flag(),
        }
    }

    pub fn with_value(self, value: ChannelValue) -> Self {
        Self { value, ..self }
    }
}
