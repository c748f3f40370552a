//! Playback orchestration
//!
//! Ties the planner, launcher, evaluator and attempt log together: resolve
//! audio routing, build the candidate plan, then attempt candidates in
//! order until one verifiably plays or the plan is exhausted. Each attempt
//! blocks until the player process exits; the appliance has exactly one
//! playback surface, so there is nothing to run concurrently.

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::playback::attempt_log::{AttemptLog, Phase};
use crate::playback::audio::{self, AudioProbe};
use crate::playback::evaluator::evaluate;
use crate::playback::launcher::{ExternalPlayer, LaunchError, LaunchSpec};
use crate::playback::policy;
use crate::playback::types::{LaunchOutcome, PlaybackRequest, PlaybackSuccess};

/// Playback engine over a player and an audio probe capability.
///
/// Real composition uses `MpvProcess` and `AlsaCards`; tests substitute
/// scripted implementations.
pub struct PlaybackEngine<P, A> {
    config: Config,
    player: P,
    probe: A,
    log: AttemptLog,
    /// Whether an X11 session is reachable, sampled at composition time
    display_available: bool,
}

impl<P: ExternalPlayer, A: AudioProbe> PlaybackEngine<P, A> {
    pub fn new(config: Config, player: P, probe: A, display_available: bool) -> Self {
        let log = AttemptLog::new(config.mpv_log.clone());
        Self {
            config,
            player,
            probe,
            log,
            display_available,
        }
    }

    /// The underlying player capability; tests inspect recorded launches
    /// through this
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Build a request for a source using the configured preferences
    pub fn request(&self, source: impl Into<String>) -> PlaybackRequest {
        PlaybackRequest {
            source: source.into(),
            audio_preference: self.config.audio_output,
            backend_preference: self.config.mpv_backend,
        }
    }

    /// Play one source to completion.
    ///
    /// Returns the first verified success in plan order, or the terminal
    /// error once candidates are exhausted. The per-candidate failure
    /// history goes to the attempt log, not the return value.
    pub fn play(&self, request: &PlaybackRequest) -> Result<PlaybackSuccess> {
        let audio_args = audio::resolve_audio_args(&self.probe, request.audio_preference);
        if let Some(percent) = self.config.volume {
            // Non-critical; a missing amixer must not block playback.
            let _ = audio::set_volume(percent);
        }

        let plan = policy::plan(request.backend_preference, self.display_available)?;
        info!(
            source = %request.source,
            candidates = ?plan.iter().map(|c| c.backend.name()).collect::<Vec<_>>(),
            "starting playback"
        );

        let mut last_failure: Option<LaunchOutcome> = None;
        for candidate in &plan {
            let backend = candidate.backend.name();
            let _ = self.log.record(Phase::Attempt, backend, &request.source);

            let spec = LaunchSpec::assemble(
                &self.config.mpv_bin,
                candidate,
                &audio_args,
                &request.source,
            );
            let report = match self.player.launch(&spec) {
                Ok(report) => report,
                Err(LaunchError::BinaryNotFound) => {
                    let _ = self.log.record(
                        Phase::NotFound,
                        backend,
                        "mpv is not installed or not in PATH",
                    );
                    // Every remaining candidate would fail the same way.
                    return Err(Error::PlayerNotInstalled);
                }
                Err(LaunchError::Spawn(e)) => {
                    let diagnostic = format!("{backend}: failed to launch: {e}");
                    warn!(backend, error = %e, "spawn failed");
                    let _ = self.log.record(Phase::Failure, backend, &diagnostic);
                    last_failure = Some(LaunchOutcome {
                        backend: candidate.backend.name(),
                        succeeded: false,
                        elapsed_seconds: 0.0,
                        diagnostic: Some(diagnostic),
                    });
                    continue;
                }
            };

            let outcome = evaluate(candidate.backend.name(), &report, self.config.min_play_seconds);
            if outcome.succeeded {
                let _ = self.log.record(
                    Phase::Success,
                    backend,
                    &format!("played for {:.1}s", outcome.elapsed_seconds),
                );
                info!(backend, elapsed = outcome.elapsed_seconds, "playback finished");
                return Ok(PlaybackSuccess {
                    backend: outcome.backend,
                    elapsed_seconds: outcome.elapsed_seconds,
                });
            }

            let diagnostic = outcome.diagnostic.clone().unwrap_or_default();
            warn!(backend, %diagnostic, "backend failed, trying next candidate");
            let _ = self.log.record(Phase::Failure, backend, &diagnostic);
            last_failure = Some(outcome);
        }

        let diagnostic = last_failure
            .and_then(|outcome| outcome.diagnostic)
            .unwrap_or_else(|| "no backend could be attempted".to_string());
        Err(Error::PlaybackFailed(diagnostic))
    }
}
