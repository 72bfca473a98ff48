// Shared test helpers

#![allow(dead_code)]

use tailnet_prtg::models::*;

/// Default counters with the given (index, value) pairs set.
pub fn samples(values: &[(usize, f64)]) -> SampleSet {
    let counters: Vec<RawCounter> = DEFAULT_COUNTERS
        .iter()
        .enumerate()
        .map(|(i, name)| RawCounter {
            name: name.to_string(),
            value: values
                .iter()
                .find(|(idx, _)| *idx == i)
                .map_or(0.0, |(_, v)| *v),
        })
        .collect();
    SampleSet::from_counters(counters)
}

pub fn channel_value(channels: &[Channel], name: &str) -> ChannelValue {
    channels
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("channel {name} missing"))
        .value
}

/// Shell command that prints `text` on stdout, usable as a metrics source.
pub fn printf_source(text: &str) -> (String, Vec<String>) {
    (
        "/bin/sh".into(),
        vec!["-c".into(), format!("printf '%s' '{}'", text)],
    )
}
