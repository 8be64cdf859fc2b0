use crate::recognition::EngineKind;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub engine: EngineSettings,
    pub responder: ResponderSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Which engine to construct: "bridge", "scripted" or "none"
    pub kind: EngineKind,
    pub locale: String,
    pub continuous: bool,
    pub interim_results: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            kind: EngineKind::Scripted,
            locale: "en-US".to_string(),
            continuous: true,
            interim_results: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResponderSettings {
    /// Delay before the simulated reply is appended
    pub delay_ms: u64,
}

impl Default for ResponderSettings {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory for the named-key state files (auth session, theme)
    pub path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: "data".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file, falling back to defaults for anything
    /// (including the whole file) that is absent.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
