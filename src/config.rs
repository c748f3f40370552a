//! Appliance configuration loading
//!
//! The config file is the appliance's persisted YAML (written by the web
//! configuration editor, consumed read-only here). A missing file is not an
//! error: the appliance boots on defaults before it is ever configured.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::playback::types::{AudioOutput, BackendPreference};

/// Default config file location on the appliance
pub const DEFAULT_CONFIG_PATH: &str = "/etc/crt-kitchen-tv/config.yaml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "CRT_CONFIG";

/// Player configuration
///
/// Only the keys this engine consumes are modeled; the config file carries
/// additional keys (menu, overscan, LED) owned by other services, which
/// deserialization ignores.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Audio output route
    pub audio_output: AudioOutput,

    /// Preferred mpv video backend
    pub mpv_backend: BackendPreference,

    /// Player binary name or path
    pub mpv_bin: String,

    /// Master volume percent, applied before each playback when set
    pub volume: Option<u32>,

    /// Minimum run time for an exit-0 launch to count as a real playback.
    ///
    /// Renderers that fail to initialize the display often still exit 0
    /// almost instantly. Note the flip side: legitimate media shorter than
    /// this is misclassified as a backend failure.
    pub min_play_seconds: f64,

    /// Attempt log sink, tailed by the web debug page
    pub mpv_log: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            audio_output: AudioOutput::Respeaker,
            mpv_backend: BackendPreference::Drm,
            mpv_bin: "mpv".to_string(),
            volume: None,
            min_play_seconds: 1.0,
            mpv_log: PathBuf::from("/tmp/crt-kitchen-tv-mpv.log"),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// A missing file yields defaults; a present but malformed file is an
    /// error (a half-applied config should be fixed, not guessed around).
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_yaml::from_str(&content)?)
    }
}

/// Resolve the config file path by priority:
/// 1. Command-line argument (highest priority)
/// 2. CRT_CONFIG environment variable
/// 3. Compiled default path
pub fn resolve_config_path(cli_arg: Option<&Path>) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    PathBuf::from(DEFAULT_CONFIG_PATH)
}
