//! Error types for crt-player
//!
//! Defines module-specific error types using thiserror for clear error propagation.

use thiserror::Error;

/// Main error type for the playback engine
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file loading or parsing errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The x11 backend was requested but no X11 session is available.
    ///
    /// The operator explicitly chose x11; silently substituting another
    /// backend would override that choice, so this is fatal to the request.
    #[error("no X11 session available (DISPLAY is not set) but mpv_backend is x11")]
    NoX11Session,

    /// The external player binary could not be located
    #[error("mpv is not installed or not in PATH")]
    PlayerNotInstalled,

    /// Every candidate backend was attempted and failed.
    ///
    /// Carries the diagnostic of the last candidate; the full per-backend
    /// history is in the attempt log, not here.
    #[error("all playback backends failed; last: {0}")]
    PlaybackFailed(String),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file deserialization errors
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

/// Convenience Result type using crt-player Error
pub type Result<T> = std::result::Result<T, Error>;
