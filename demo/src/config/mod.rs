use codec::NotifierPolicy;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable naming the TOML file to load.
pub const CONFIG_PATH_ENV: &str = "CODEC_DEMO_CONFIG";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    /// Value pushed through both round trips.
    pub value: i32,
    pub diagnostics: NotifierPolicy,
}

impl DemoConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let parsed = toml::from_str::<Self>(&content)?;
        Ok(parsed)
    }

    /// Loads the file named by `CODEC_DEMO_CONFIG`, or the defaults when the
    /// variable is unset.
    pub fn load_from_env() -> anyhow::Result<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                log::info!("Loading demo configuration from '{}'", path);
                Self::load_from_file(&path)
            }
            Err(_) => {
                log::info!("{} not set, using built-in defaults", CONFIG_PATH_ENV);
                Ok(Self::default())
            }
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            value: 27,
            diagnostics: NotifierPolicy::ALL_ACTIVE,
        }
    }
}
