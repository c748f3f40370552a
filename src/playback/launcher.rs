//! External player process launching
//!
//! Spawns mpv synchronously with a fully-constructed argument vector and a
//! per-child environment overlay, capturing output and wall-clock elapsed
//! time for the outcome evaluator. The launch call blocks until the player
//! exits — either at end of media or immediately on a failed backend init.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

use crate::playback::types::BackendCandidate;

/// Launcher-level errors, distinct from the crate error type so the engine
/// can treat a missing binary and a per-candidate spawn failure differently
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The player executable could not be located; every candidate would
    /// fail identically, so the engine aborts the whole request
    #[error("player binary not found")]
    BinaryNotFound,

    /// Spawn failed for a reason specific to this attempt
    #[error("failed to spawn player: {0}")]
    Spawn(std::io::Error),
}

/// Environment edits applied to one child process.
///
/// Passed by value into the launcher; the parent process environment is
/// never mutated. Isolation strips the display/compositor identification
/// variables so a fallback backend cannot silently attach to a display
/// server the operator did not choose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentOverlay {
    pub remove: Vec<&'static str>,
    pub set: Vec<(&'static str, &'static str)>,
}

impl EnvironmentOverlay {
    /// No edits; the child inherits the caller's session as-is
    pub fn inherit() -> Self {
        Self::default()
    }

    /// Force the console/framebuffer path: no display server variables,
    /// SDL steered onto the framebuffer
    pub fn console() -> Self {
        Self {
            remove: vec!["DISPLAY", "WAYLAND_DISPLAY", "XDG_SESSION_TYPE"],
            set: vec![("SDL_VIDEODRIVER", "fbcon")],
        }
    }

    /// Overlay for a candidate per its isolation flag
    pub fn for_candidate(candidate: &BackendCandidate) -> Self {
        if candidate.isolate_display_env {
            Self::console()
        } else {
            Self::inherit()
        }
    }
}

/// Everything needed to spawn one player process
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    pub binary: String,
    pub args: Vec<String>,
    pub env: EnvironmentOverlay,
}

/// Player flags fixed for every launch on the appliance: quiet output,
/// fullscreen, no terminal control, keep above the menu surface
const FIXED_ARGS: &[&str] = &["--quiet", "--fs", "--no-terminal", "--ontop"];

impl LaunchSpec {
    /// Assemble the full argument vector for one candidate:
    /// fixed flags, then the candidate's renderer args, then audio routing,
    /// then the positional source.
    pub fn assemble(
        binary: &str,
        candidate: &BackendCandidate,
        audio_args: &[String],
        source: &str,
    ) -> Self {
        let mut args: Vec<String> = FIXED_ARGS.iter().map(|s| s.to_string()).collect();
        args.extend(candidate.extra_args.iter().cloned());
        args.extend(audio_args.iter().cloned());
        args.push(source.to_string());

        Self {
            binary: binary.to_string(),
            args,
            env: EnvironmentOverlay::for_candidate(candidate),
        }
    }
}

/// What one finished player process reported
#[derive(Debug, Clone)]
pub struct LaunchReport {
    /// Exit code; None when the process died on a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

/// Player process capability.
///
/// The real implementation spawns mpv; tests substitute a scripted player
/// so fallback behavior is exercised without a display or a binary.
pub trait ExternalPlayer {
    fn launch(&self, spec: &LaunchSpec) -> Result<LaunchReport, LaunchError>;
}

/// The real mpv process boundary
#[derive(Debug, Default)]
pub struct MpvProcess;

impl ExternalPlayer for MpvProcess {
    fn launch(&self, spec: &LaunchSpec) -> Result<LaunchReport, LaunchError> {
        let mut command = Command::new(&spec.binary);
        command
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for var in &spec.env.remove {
            command.env_remove(var);
        }
        for (var, value) in &spec.env.set {
            command.env(var, value);
        }

        debug!(binary = %spec.binary, args = ?spec.args, "launching player");

        let start = Instant::now();
        let output = command.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LaunchError::BinaryNotFound
            } else {
                LaunchError::Spawn(e)
            }
        })?;
        let elapsed = start.elapsed();

        Ok(LaunchReport {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            elapsed,
        })
    }
}
