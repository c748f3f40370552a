//! Backend selection and launch engine
//!
//! The appliance plays media by driving an external mpv process. Several
//! mutually-incompatible video backends may or may not work depending on
//! how the box booted (bare console, X session, neither); this module picks
//! an ordered set of candidates, launches each with an isolated child
//! environment, verifies the launch genuinely rendered, and falls back
//! until one sticks.

pub mod attempt_log;
pub mod audio;
pub mod engine;
pub mod evaluator;
pub mod launcher;
pub mod policy;
pub mod types;

pub use attempt_log::{AttemptLog, Phase};
pub use audio::{AlsaCards, AudioProbe};
pub use engine::PlaybackEngine;
pub use launcher::{EnvironmentOverlay, ExternalPlayer, LaunchReport, LaunchSpec, MpvProcess};
pub use types::{
    AudioOutput, Backend, BackendCandidate, BackendPreference, LaunchOutcome, PlaybackRequest,
    PlaybackSuccess,
};
