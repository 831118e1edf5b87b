use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use log::{debug, info, warn};
use crate::audio::decoded::{DecodedAudio, PcmAudio};
use crate::{Result, ScreenerError};

/// Bit depth reported for codecs that do not carry one (MP3 decodes to 16-bit PCM).
const FALLBACK_BIT_DEPTH: u16 = 16;

/// Decodes audio containers into [`PcmAudio`] through symphonia.
pub struct AudioDecoder;

impl AudioDecoder {
    pub fn decode_file(path: impl AsRef<Path>) -> Result<PcmAudio> {
        let path = path.as_ref();
        let fail = |reason: String| ScreenerError::Decode {
            path: path.to_path_buf(),
            reason,
        };

        let file = std::fs::File::open(path)
            .map_err(|e| fail(format!("cannot open file: {}", e)))?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        // Create hint to help with format detection
        let mut hint = Hint::new();
        if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(extension);
        }

        let probed = symphonia::default::get_probe()
            .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
            .map_err(|e| fail(format!("probe: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| fail("no audio track found".into()))?;

        let track_id = track.id;
        let params = track.codec_params.clone();
        let sample_rate = params
            .sample_rate
            .ok_or_else(|| fail("unknown sample rate".into()))?;
        let mut channels = params.channels.map(|c| c.count() as u16).unwrap_or(0);
        let bit_depth = params
            .bits_per_sample
            .or(params.bits_per_coded_sample)
            .map(|b| b as u16)
            .unwrap_or(FALLBACK_BIT_DEPTH);

        debug!("Decoding {} ({} Hz, {} bits)", path.display(), sample_rate, bit_depth);

        let mut decoder = symphonia::default::get_codecs()
            .make(&params, &DecoderOptions::default())
            .map_err(|e| fail(format!("codec: {}", e)))?;

        let mut samples: Vec<f32> = Vec::new();

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => return Err(fail(format!("packet: {}", e))),
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(decoded) => decoded,
                Err(SymphoniaError::DecodeError(e)) => {
                    warn!("Skipping corrupt frame in {}: {}", path.display(), e);
                    continue;
                }
                Err(e) => return Err(fail(format!("decode: {}", e))),
            };

            let spec = *decoded.spec();
            if channels == 0 {
                channels = spec.channels.count() as u16;
            }
            let n_frames = decoded.frames();
            if n_frames == 0 {
                continue;
            }

            let mut buffer = SampleBuffer::<f32>::new(n_frames as u64, spec);
            buffer.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buffer.samples());
        }

        let audio = PcmAudio::new(samples, channels.max(1), sample_rate, bit_depth);
        info!(
            "Decoded {}: {} ch, {} Hz, {} bits, {} ms",
            path.display(),
            audio.channels(),
            audio.sample_rate(),
            audio.bit_depth(),
            audio.duration_ms()
        );
        Ok(audio)
    }
}
