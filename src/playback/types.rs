//! Playback types shared across modules

use serde::Deserialize;

/// Audio output route, from the `audio_output` config key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AudioOutput {
    /// Seeed ReSpeaker HAT (probed; falls back to player default if absent)
    Respeaker,
    /// HDMI audio (ALSA hw:0,0)
    Hdmi,
    /// Analog jack (ALSA hw:0,1)
    Analog,
}

/// Video backend preference, from the `mpv_backend` config key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    /// KMS/DRM direct rendering (console, no display server)
    Drm,
    /// X11 windowed output; requires a running X session
    X11,
    /// SDL framebuffer output
    Sdl,
    /// Let mpv pick
    Auto,
}

/// One mpv video backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Drm,
    X11,
    Sdl,
    /// No `--vo` argument; mpv's own default selection
    Auto,
}

impl Backend {
    pub fn name(self) -> &'static str {
        match self {
            Backend::Drm => "drm",
            Backend::X11 => "x11",
            Backend::Sdl => "sdl",
            Backend::Auto => "auto",
        }
    }

    /// The renderer-selection argument, if this backend pins one
    pub fn vo_arg(self) -> Option<String> {
        match self {
            Backend::Auto => None,
            other => Some(format!("--vo={}", other.name())),
        }
    }
}

/// One renderer option in a candidate plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendCandidate {
    pub backend: Backend,

    /// Backend-specific player arguments (the `--vo` pin, when any)
    pub extra_args: Vec<String>,

    /// Strip display/compositor environment variables before launch,
    /// forcing the console/framebuffer path even inside a graphical session
    pub isolate_display_env: bool,
}

impl BackendCandidate {
    /// Candidate launched with the display environment stripped
    pub fn isolated(backend: Backend) -> Self {
        Self {
            backend,
            extra_args: backend.vo_arg().into_iter().collect(),
            isolate_display_env: true,
        }
    }

    /// Candidate launched against the current display session
    pub fn windowed(backend: Backend) -> Self {
        Self {
            backend,
            extra_args: backend.vo_arg().into_iter().collect(),
            isolate_display_env: false,
        }
    }
}

/// Immutable input to a single playback request
#[derive(Debug, Clone)]
pub struct PlaybackRequest {
    /// Local file path or stream URL, passed through to the player opaquely
    pub source: String,
    pub audio_preference: AudioOutput,
    pub backend_preference: BackendPreference,
}

/// Classification of one launch attempt
#[derive(Debug, Clone)]
pub struct LaunchOutcome {
    pub backend: &'static str,
    pub succeeded: bool,
    pub elapsed_seconds: f64,
    /// Failure diagnostic, prefixed with the backend name; None on success
    pub diagnostic: Option<String>,
}

/// Terminal result of a successful playback request
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSuccess {
    /// Which backend actually rendered
    pub backend: &'static str,
    /// How long the player ran
    pub elapsed_seconds: f64,
}
