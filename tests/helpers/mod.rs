//! Shared test fixtures: scripted player and probe implementations
//!
//! Playback tests must run without a display, without ALSA, and without an
//! mpv binary, so the engine's two capability seams get scripted stand-ins.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crt_player::config::Config;
use crt_player::playback::launcher::{ExternalPlayer, LaunchError, LaunchReport, LaunchSpec};
use crt_player::playback::AudioProbe;

/// What a scripted backend does when launched
#[derive(Debug, Clone, Copy)]
pub enum Script {
    /// Exit with a code after a simulated run time
    Exit {
        code: i32,
        seconds: f64,
        stderr: &'static str,
    },
    /// The player binary is missing
    Missing,
    /// Spawn fails for an attempt-specific reason
    SpawnError,
}

/// Player whose behavior is scripted per backend name.
///
/// Unscripted backends fail with exit code 1 so a test only has to script
/// the candidates it cares about. Every launch spec is recorded for
/// argument/environment assertions.
pub struct ScriptedPlayer {
    scripts: HashMap<&'static str, Script>,
    pub launches: RefCell<Vec<LaunchSpec>>,
}

impl ScriptedPlayer {
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            launches: RefCell::new(Vec::new()),
        }
    }

    pub fn on(mut self, backend: &'static str, script: Script) -> Self {
        self.scripts.insert(backend, script);
        self
    }

    /// Script every backend the same way
    pub fn always(script: Script) -> Self {
        Self::new()
            .on("drm", script)
            .on("x11", script)
            .on("sdl", script)
            .on("auto", script)
    }

    pub fn launched_backends(&self) -> Vec<String> {
        self.launches
            .borrow()
            .iter()
            .map(|spec| backend_of(spec))
            .collect()
    }
}

/// Recover the backend name from an assembled argument vector
pub fn backend_of(spec: &LaunchSpec) -> String {
    spec.args
        .iter()
        .find_map(|arg| arg.strip_prefix("--vo="))
        .unwrap_or("auto")
        .to_string()
}

impl ExternalPlayer for ScriptedPlayer {
    fn launch(&self, spec: &LaunchSpec) -> Result<LaunchReport, LaunchError> {
        self.launches.borrow_mut().push(spec.clone());
        let backend = backend_of(spec);
        match self.scripts.get(backend.as_str()) {
            Some(Script::Exit {
                code,
                seconds,
                stderr,
            }) => Ok(LaunchReport {
                exit_code: Some(*code),
                stdout: String::new(),
                stderr: stderr.to_string(),
                elapsed: Duration::from_secs_f64(*seconds),
            }),
            Some(Script::Missing) => Err(LaunchError::BinaryNotFound),
            Some(Script::SpawnError) => Err(LaunchError::Spawn(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            ))),
            None => Ok(LaunchReport {
                exit_code: Some(1),
                stdout: String::new(),
                stderr: format!("unscripted backend {backend}"),
                elapsed: Duration::from_secs_f64(0.05),
            }),
        }
    }
}

/// Probe returning a fixed card listing, or an error when `None`
pub struct FixedCards(pub Option<&'static str>);

impl AudioProbe for FixedCards {
    fn sound_cards(&self) -> std::io::Result<String> {
        match self.0 {
            Some(listing) => Ok(listing.to_string()),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no /proc/asound",
            )),
        }
    }
}

/// Card listing with the ReSpeaker HAT present
pub const CARDS_WITH_HAT: &str = "\
 0 [ALSA           ]: bcm2835_alsa - bcm2835 ALSA
 1 [seeed2micvoicec]: seeed-2mic-voicecard - seeed-2mic-voicecard
";

/// Config pointing the attempt log into a test directory, volume unset so
/// no amixer call happens
pub fn test_config(log_dir: &Path) -> Config {
    let mut config = Config::default();
    config.mpv_log = log_dir.join("mpv.log");
    config.volume = None;
    config
}

/// Count log lines containing a marker such as "[attempt]"
pub fn count_lines(log_path: &Path, marker: &str) -> usize {
    match std::fs::read_to_string(log_path) {
        Ok(content) => content.lines().filter(|l| l.contains(marker)).count(),
        Err(_) => 0,
    }
}
