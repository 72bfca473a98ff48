// Tailscale daemon counters via `tailscale metrics`

mod parse;

pub use parse::parse_exposition;

use crate::config::SourceConfig;
use crate::error::SensorError;
use crate::models::SampleSet;
use tokio::process::Command;
use tracing::{debug, instrument};

pub struct MetricsRepo {
    command: String,
    args: Vec<String>,
    counters: Vec<String>,
}

impl MetricsRepo {
    pub fn new(command: impl Into<String>, args: Vec<String>, counters: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
            counters,
        }
    }

    pub fn from_config(source: &SourceConfig, counters: &[String]) -> Self {
        Self::new(source.command.clone(), source.args.clone(), counters.to_vec())
    }

    /// Runs the metrics command once and parses its stdout. No retry and no timeout.
    #[instrument(skip(self), fields(repo = "metrics", operation = "collect", command = %self.command))]
    pub async fn collect(&self) -> Result<SampleSet, SensorError> {
        let output = Command::new(&self.command)
            .args(&self.args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| SensorError::SourceUnavailable(format!("{}: {}", self.command, e)))?;

        if !output.status.success() {
            return Err(SensorError::SourceUnavailable(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let text = String::from_utf8(output.stdout).map_err(|e| {
            SensorError::SourceUnavailable(format!("{} printed non-UTF-8 output: {}", self.command, e))
        })?;
        debug!(bytes = text.len(), "metrics output received");
        parse_exposition(&text, &self.counters)
    }
}
