#![allow(dead_code)]

use std::path::Path;
use hound::{SampleFormat, WavSpec, WavWriter};

pub const RATE: u32 = 8_000;

/// Speech-like fixture: each second is 750 ms of a square wave at
/// `level` followed by 250 ms of near silence (about -60 dBFS).
pub fn write_episode(path: &Path, seconds: u32, level: f32) {
    let spec = WavSpec {
        channels: 1,
        sample_rate: RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    let loud = (level * i16::MAX as f32).round() as i16;
    let quiet = (0.001 * i16::MAX as f32).round() as i16;
    for _ in 0..seconds {
        for i in 0..RATE {
            let magnitude = if i < RATE * 3 / 4 { loud } else { quiet };
            let sample = if i % 2 == 0 { magnitude } else { -magnitude };
            writer.write_sample(sample).unwrap();
        }
    }
    writer.finalize().unwrap();
}

/// Constant full-scale square wave: clipped, too loud, no quiet passage.
pub fn write_clipped(path: &Path, seconds: u32) {
    let spec = WavSpec {
        channels: 1,
        sample_rate: RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for i in 0..seconds * RATE {
        writer.write_sample(if i % 2 == 0 { i16::MAX } else { i16::MIN }).unwrap();
    }
    writer.finalize().unwrap();
}
