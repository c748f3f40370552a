//! CRT Player - Main entry point
//!
//! Thin CLI shell around the playback engine: parse arguments, load the
//! appliance config, compose the real collaborators (mpv process, ALSA
//! card probe), play one source, and map the outcome to an exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crt_player::config::{self, Config};
use crt_player::playback::{AlsaCards, AudioOutput, BackendPreference, MpvProcess, PlaybackEngine};

/// Command-line arguments for crt-player
#[derive(Parser, Debug)]
#[command(name = "crt-player")]
#[command(about = "Plays media on the CRT appliance via mpv with backend fallback")]
#[command(version)]
struct Args {
    /// Media source: local file path or stream URL
    source: String,

    /// Config file path
    #[arg(short, long, env = "CRT_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured video backend
    #[arg(long, value_enum)]
    backend: Option<BackendPreference>,

    /// Override the configured audio output
    #[arg(long, value_enum)]
    audio: Option<AudioOutput>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crt_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = config::resolve_config_path(args.config.as_deref());
    let mut config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    if let Some(backend) = args.backend {
        config.mpv_backend = backend;
    }
    if let Some(audio) = args.audio {
        config.audio_output = audio;
    }

    let display_available = std::env::var("DISPLAY")
        .map(|v| !v.is_empty())
        .unwrap_or(false);
    info!(
        backend = ?config.mpv_backend,
        audio = ?config.audio_output,
        display_available,
        "starting crt-player"
    );

    let engine = PlaybackEngine::new(config, MpvProcess, AlsaCards, display_available);
    let request = engine.request(args.source.as_str());
    let success = engine.play(&request)?;

    info!(
        backend = success.backend,
        elapsed = format!("{:.1}s", success.elapsed_seconds),
        "playback complete"
    );
    Ok(())
}
