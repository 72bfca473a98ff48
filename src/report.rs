// PRTG EXE/Script Advanced JSON: {"prtg": {"result": [...]}}

use crate::error::SensorError;
use crate::models::{Channel, ChannelKind, ChannelValue, Unit};
use serde::Serialize;

/// PRTG `speedsize` for speed channels.
pub const SPEED_SIZE: &str = "MegaBit";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrtgReport {
    pub prtg: PrtgBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrtgBody {
    pub result: Vec<PrtgChannel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrtgChannel {
    pub channel: String,
    pub value: ChannelValue,
    pub unit: Unit,
    pub float: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speedsize: Option<&'static str>,
}

impl PrtgChannel {
    /// Count channels render as integers; everything else rounds to 2 decimals.
    pub fn from_channel(c: &Channel) -> Self {
        let value = match c.kind {
            ChannelKind::Count => ChannelValue::Int(c.value.as_f64().trunc() as i64),
            ChannelKind::Volume | ChannelKind::Speed => {
                ChannelValue::Float(round2(c.value.as_f64()))
            }
        };
        Self {
            channel: c.name.clone(),
            value,
            unit: c.unit,
            float: c.float,
            speedsize: (c.kind == ChannelKind::Speed).then_some(SPEED_SIZE),
        }
    }
}

impl PrtgReport {
    pub fn from_channels(channels: &[Channel]) -> Self {
        Self {
            prtg: PrtgBody {
                result: channels.iter().map(PrtgChannel::from_channel).collect(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, SensorError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Decimal rounding to 2 places, same digits as `{:.2}` formatting.
fn round2(v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    format!("{:.2}", v).parse().unwrap_or(v)
}
