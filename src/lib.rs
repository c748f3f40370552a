//! # CRT Player Library
//!
//! Playback core for the kitchen CRT appliance: chooses an mpv video
//! backend for the current boot environment, launches the player with an
//! isolated process environment, verifies the launch actually rendered,
//! and falls back across backends while logging every attempt.
//!
//! The menu UI, web configuration editor and LED indicator live in sibling
//! services; they call [`playback::PlaybackEngine::play`] and read the
//! attempt log.

pub mod config;
pub mod error;
pub mod playback;

pub use config::Config;
pub use error::{Error, Result};
pub use playback::PlaybackEngine;
