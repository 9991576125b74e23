/// Remote configuration
use crate::error::{RemoteError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use streamer_client::ClientConfig;
use streamer_control::Panel;
use streamer_core::SliderLevel;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "streamer.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_panel")]
    pub panel: PanelSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PanelSettings {
    /// Device to select whenever a refresh lists it
    #[serde(default)]
    pub default_device: Option<String>,

    /// Initial slider position (0-100)
    #[serde(default = "default_volume")]
    pub volume: u8,

    #[serde(default = "default_looping")]
    pub looping: bool,
}

impl RemoteConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `streamer.toml` is read if
    /// present. Environment variables prefixed `STREAMER_` override the file,
    /// with `__` between nested keys (e.g. `STREAMER_SERVER__URL`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("STREAMER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| RemoteError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| RemoteError::Config(e.to_string()))
    }

    /// Command-line flags win over file and environment
    pub fn apply_overrides(&mut self, server: Option<String>, default_device: Option<String>) {
        if let Some(url) = server {
            self.server.url = url;
        }
        if let Some(name) = default_device {
            self.panel.default_device = Some(name);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.url.trim().is_empty() {
            return Err(RemoteError::Config(
                "Server URL is required (set STREAMER_SERVER__URL or --server)".to_string(),
            ));
        }

        if self.server.timeout_secs == 0 {
            return Err(RemoteError::Config(
                "Request timeout must be at least one second".to_string(),
            ));
        }

        if self.panel.volume > SliderLevel::MAX {
            return Err(RemoteError::Config(format!(
                "Initial volume {} is out of range (0-100)",
                self.panel.volume
            )));
        }

        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.server.url.clone())
            .with_timeout(Duration::from_secs(self.server.timeout_secs))
    }

    /// Panel in its initial state
    pub fn initial_panel(&self) -> Panel {
        Panel::new(SliderLevel::new(self.panel.volume), self.panel.looping)
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        url: default_url(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_panel() -> PanelSettings {
    PanelSettings {
        default_device: None,
        volume: default_volume(),
        looping: default_looping(),
    }
}

fn default_volume() -> u8 {
    10
}

fn default_looping() -> bool {
    true
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            panel: default_panel(),
        }
    }
}
