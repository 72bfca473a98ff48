// Domain models: raw counters, channels, snapshots

mod channel;
mod sample;
mod snapshot;
mod table;

pub use channel::{Channel, ChannelDef, ChannelKind, ChannelValue, Unit};
pub use sample::{RawCounter, SampleSet};
pub use snapshot::Snapshot;
pub use table::{ChannelTable, DEFAULT_COUNTERS, default_channels};
