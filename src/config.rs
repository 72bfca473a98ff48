use crate::models::{ChannelDef, ChannelTable, DEFAULT_COUNTERS, default_channels};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub state: StateConfig,
    /// Counter names in positional order; channel `metrics` index into this list.
    #[serde(default = "default_counters")]
    pub counters: Vec<String>,
    #[serde(default = "default_channels")]
    pub channels: Vec<ChannelDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateConfig {
    #[serde(default = "default_state_path")]
    pub path: String,
}

fn default_command() -> String {
    "/usr/bin/tailscale".into()
}

fn default_args() -> Vec<String> {
    vec!["metrics".into()]
}

fn default_state_path() -> String {
    "/var/prtg/scriptsxml/tailscale.json".into()
}

fn default_counters() -> Vec<String> {
    DEFAULT_COUNTERS.iter().map(|s| s.to_string()).collect()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: default_args(),
        }
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: default_state_path(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            state: StateConfig::default(),
            counters: default_counters(),
            channels: default_channels(),
        }
    }
}

impl AppConfig {
    /// Reads `CONFIG_FILE` if set; otherwise the built-in defaults apply.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => {
                let s = std::fs::read_to_string(&path)
                    .map_err(|e| anyhow::anyhow!("config file {}: {}", path, e))?;
                Self::load_from_str(&s)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Counter list and channel definitions, validated against each other.
    pub fn channel_table(&self) -> anyhow::Result<ChannelTable> {
        Ok(ChannelTable::new(
            self.counters.clone(),
            self.channels.clone(),
        )?)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.source.command.is_empty(),
            "source.command must be non-empty"
        );
        anyhow::ensure!(!self.state.path.is_empty(), "state.path must be non-empty");
        self.channel_table()?;
        Ok(())
    }
}
