// Single-file JSON state: the previous run's snapshot.
// Each save replaces the whole file (temp file + fsync + rename); there is no history.

use crate::error::SensorError;
use crate::models::{Channel, SampleSet, Snapshot};
use serde::Deserialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// On-disk layout. `timestamp` may be null in files written before any successful poll.
#[derive(Deserialize)]
struct StateFile {
    timestamp: Option<f64>,
    #[serde(default)]
    samples: SampleSet,
    #[serde(default)]
    channels: Vec<Channel>,
}

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Previous snapshot, or `None` on the first run (no file, or a null timestamp).
    #[instrument(skip(self), fields(repo = "state", operation = "load", path = %self.path.display()))]
    pub fn load(&self) -> Result<Option<Snapshot>, SensorError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no state file, first run");
                return Ok(None);
            }
            Err(e) => return Err(self.io_err(e)),
        };
        let state: StateFile =
            serde_json::from_slice(&bytes).map_err(|e| SensorError::StateFormat {
                path: self.path.clone(),
                source: e,
            })?;
        let Some(timestamp) = state.timestamp else {
            debug!("state file has no timestamp, first run");
            return Ok(None);
        };
        Ok(Some(Snapshot {
            timestamp,
            samples: state.samples,
            channels: state.channels,
        }))
    }

    /// Writes `snapshot`, creating the parent directory if needed.
    #[instrument(skip(self, snapshot), fields(repo = "state", operation = "save", path = %self.path.display()))]
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), SensorError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }
        let json = serde_json::to_vec(snapshot)?;

        let tmp_path = self.tmp_path();
        let written = std::fs::File::create(&tmp_path).and_then(|mut file| {
            file.write_all(&json)?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|()| std::fs::rename(&tmp_path, &self.path)) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(self.io_err(e));
        }
        debug!(bytes = json.len(), "state saved");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_err(&self, source: std::io::Error) -> SensorError {
        SensorError::StateIo {
            path: self.path.clone(),
            source,
        }
    }
}
