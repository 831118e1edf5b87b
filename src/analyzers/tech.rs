use std::fmt;
use std::path::Path;
use serde::Serialize;
use crate::audio::decoded::DecodedAudio;

/// Technical format of a recording, for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechInfo {
    pub suffix: String,
    pub channels: u16,
    pub sample_rate_hz: u32,
    pub bit_depth: u16,
    pub bitrate_kbps_approx: u32,
}

impl TechInfo {
    pub fn from_audio(audio: &impl DecodedAudio, source: &Path) -> Self {
        let suffix = source
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()))
            .unwrap_or_default();

        Self {
            suffix,
            channels: audio.channels(),
            sample_rate_hz: audio.sample_rate(),
            bit_depth: audio.bit_depth(),
            bitrate_kbps_approx: approximate_bitrate(
                audio.sample_rate(),
                audio.bit_depth(),
                audio.channels(),
            ),
        }
    }
}

/// Uncompressed PCM bitrate, rounded to the nearest kbps.
pub fn approximate_bitrate(sample_rate: u32, bit_depth: u16, channels: u16) -> u32 {
    let bits_per_second = sample_rate as f64 * bit_depth as f64 * channels as f64;
    (bits_per_second / 1000.0).round() as u32
}

impl fmt::Display for TechInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} ch | {} Hz | {} bits | ~{} kbps",
            if self.suffix.is_empty() { "?" } else { &self.suffix },
            self.channels,
            self.sample_rate_hz,
            self.bit_depth,
            self.bitrate_kbps_approx
        )
    }
}
