use std::fs;
use std::path::{Path, PathBuf};
use hound::{SampleFormat, WavSpec, WavWriter};
use log::{info, warn};
use crate::audio::decoded::{DecodedAudio, PcmAudio};
use crate::audio::decoder::AudioDecoder;
use crate::{Result, ScreenerError};

/// Sequences intro, main and outro segments into one final track.
///
/// No quality judgment happens here.
#[derive(Debug, Default)]
pub struct AudioAssembler;

impl AudioAssembler {
    pub fn new() -> Self {
        Self
    }

    pub fn assemble(
        &self,
        intro: Option<&Path>,
        main: &Path,
        outro: Option<&Path>,
        destination: &Path,
    ) -> Result<PathBuf> {
        if !main.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("main segment not found: {}", main.display()),
            )
            .into());
        }

        let segments: Vec<&Path> = [intro, Some(main), outro]
            .into_iter()
            .flatten()
            .filter(|segment| {
                let present = segment.is_file();
                if !present {
                    info!("Optional segment {} is absent, skipping", segment.display());
                }
                present
            })
            .collect();

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }

        if segments.len() > 1 && !has_wav_suffix(main) {
            warn!(
                "Cannot re-encode .{} output, keeping {} without intro/outro",
                suffix_of(main),
                main.display()
            );
        }
        if segments.len() == 1 || !has_wav_suffix(main) {
            fs::copy(main, destination)?;
            info!("Final audio is a copy of {}", main.display());
            return Ok(destination.to_path_buf());
        }

        let main_audio = AudioDecoder::decode_file(main)?;
        let layout = Layout::of(&main_audio);
        let mut main_audio = Some(main_audio);
        let mut samples = Vec::new();
        for segment in &segments {
            let reused = if *segment == main { main_audio.take() } else { None };
            let audio = match reused {
                Some(audio) => audio,
                None => AudioDecoder::decode_file(segment)?,
            };
            layout.ensure_matches(segment, &audio)?;
            samples.extend(audio.into_samples());
        }

        let combined = PcmAudio::new(samples, layout.channels, layout.sample_rate, layout.bit_depth);
        write_wav(&combined, destination)?;
        info!(
            "Assembled {} segments into {} ({} ms)",
            segments.len(),
            destination.display(),
            combined.duration_ms()
        );
        Ok(destination.to_path_buf())
    }
}

fn suffix_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn has_wav_suffix(path: &Path) -> bool {
    suffix_of(path) == "wav"
}

/// Stream layout of the main segment, which every other segment must share.
struct Layout {
    channels: u16,
    sample_rate: u32,
    bit_depth: u16,
}

impl Layout {
    fn of(audio: &PcmAudio) -> Self {
        Self {
            channels: audio.channels(),
            sample_rate: audio.sample_rate(),
            bit_depth: audio.bit_depth(),
        }
    }

    fn ensure_matches(&self, segment: &Path, audio: &PcmAudio) -> Result<()> {
        if audio.sample_rate() != self.sample_rate || audio.channels() != self.channels {
            return Err(ScreenerError::UnsupportedFormat(format!(
                "{} is {} Hz / {} ch but the main segment is {} Hz / {} ch",
                segment.display(),
                audio.sample_rate(),
                audio.channels(),
                self.sample_rate,
                self.channels
            )));
        }
        Ok(())
    }
}

pub fn write_wav(audio: &PcmAudio, destination: &Path) -> Result<()> {
    let bits = match audio.bit_depth() {
        8 | 16 | 24 | 32 => audio.bit_depth(),
        _ => 16,
    };
    let spec = WavSpec {
        channels: audio.channels(),
        sample_rate: audio.sample_rate(),
        bits_per_sample: bits,
        sample_format: SampleFormat::Int,
    };
    let full_scale = ((1i64 << (bits - 1)) - 1) as f64;

    let mut writer = WavWriter::create(destination, spec)?;
    for &sample in audio.samples() {
        let value = (sample.clamp(-1.0, 1.0) as f64 * full_scale).round() as i32;
        writer.write_sample(value)?;
    }
    writer.finalize()?;
    Ok(())
}
