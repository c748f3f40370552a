//! Audio route resolution
//!
//! Maps the configured audio output to concrete `--audio-device` arguments.
//! The ReSpeaker route needs a hardware probe (the HAT may be absent or its
//! driver unloaded); HDMI and analog are fixed ALSA device indices on this
//! board. Probe failure is never fatal — the resolver degrades to "let the
//! player choose".

use std::process::Command;

use tracing::{debug, warn};

use crate::playback::types::AudioOutput;

/// Card identifiers for the seeed voice-card driver family
pub const RESPEAKER_CARD_IDS: &[&str] = &["seeed-2mic-voicecard", "seeedvoicecard"];

/// Sound-card listing capability.
///
/// Real implementation reads the kernel's card table; tests substitute
/// canned listings. A probe error means "listing unavailable", not "no
/// cards" — callers treat both the same way.
pub trait AudioProbe {
    fn sound_cards(&self) -> std::io::Result<String>;
}

/// Probe backed by `/proc/asound/cards`
#[derive(Debug, Default)]
pub struct AlsaCards;

impl AudioProbe for AlsaCards {
    fn sound_cards(&self) -> std::io::Result<String> {
        std::fs::read_to_string("/proc/asound/cards")
    }
}

/// Find a ReSpeaker-family card in a card listing, returning its identifier
fn detect_respeaker_card(listing: &str) -> Option<&'static str> {
    for line in listing.lines() {
        let lower = line.to_lowercase();
        for card in RESPEAKER_CARD_IDS {
            if lower.contains(card) {
                return Some(card);
            }
        }
    }
    None
}

/// Resolve the configured audio route to player arguments.
///
/// Returns an empty list when the player should pick its own device: either
/// the ReSpeaker HAT is not present, or the card listing is unavailable.
pub fn resolve_audio_args<P: AudioProbe + ?Sized>(
    probe: &P,
    preference: AudioOutput,
) -> Vec<String> {
    match preference {
        AudioOutput::Respeaker => match probe.sound_cards() {
            Ok(listing) => match detect_respeaker_card(&listing) {
                Some(card) => {
                    debug!(card, "ReSpeaker card detected");
                    vec![format!("--audio-device=alsa/plughw:CARD={card}")]
                }
                None => {
                    debug!("no ReSpeaker card present, using player default device");
                    Vec::new()
                }
            },
            Err(e) => {
                warn!(error = %e, "sound card listing unavailable, using player default device");
                Vec::new()
            }
        },
        AudioOutput::Hdmi => vec!["--audio-device=alsa/hw:0,0".to_string()],
        AudioOutput::Analog => vec!["--audio-device=alsa/hw:0,1".to_string()],
    }
}

/// Set the ALSA master volume via amixer.
///
/// Non-critical: the caller is expected to discard the result. A missing
/// amixer or a failed set must never block playback.
pub fn set_volume(percent: u32) -> std::io::Result<()> {
    let status = Command::new("amixer")
        .args(["sset", "Master", &format!("{}%", percent.min(100))])
        .status()?;
    if !status.success() {
        warn!(percent, code = ?status.code(), "amixer exited non-zero");
    }
    Ok(())
}
