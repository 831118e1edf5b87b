use std::ops::Range;

/// Frame length used when estimating the noise floor.
pub const DEFAULT_FRAME_MS: u64 = 200;

/// A decoded signal that can be inspected for level in dBFS.
///
/// Windows are expressed in milliseconds from the start of the signal.
/// Silence is reported as `f64::NEG_INFINITY`, never as an error.
pub trait DecodedAudio {
    fn channels(&self) -> u16;
    fn sample_rate(&self) -> u32;
    fn bit_depth(&self) -> u16;
    fn duration_ms(&self) -> u64;

    /// RMS level of the window, in dBFS.
    fn average_dbfs(&self, window: Range<u64>) -> f64;

    /// Largest instantaneous sample magnitude of the window, in dBFS.
    fn peak_dbfs(&self, window: Range<u64>) -> f64;

    fn full_range(&self) -> Range<u64> {
        0..self.duration_ms()
    }

    /// Consecutive windows of `frame_ms` covering the signal, the last one
    /// possibly shorter. A signal shorter than one frame is a single window.
    fn frames(&self, frame_ms: u64) -> Vec<Range<u64>> {
        let duration = self.duration_ms();
        if frame_ms == 0 || duration < frame_ms {
            return vec![0..duration];
        }
        (0..duration)
            .step_by(frame_ms as usize)
            .map(|start| start..(start + frame_ms).min(duration))
            .collect()
    }
}

pub fn amplitude_to_dbfs(amplitude: f64) -> f64 {
    if amplitude <= 0.0 {
        f64::NEG_INFINITY
    } else {
        20.0 * amplitude.log10()
    }
}

/// Interleaved PCM samples normalised to `[-1.0, 1.0]`.
#[derive(Debug, Clone)]
pub struct PcmAudio {
    samples: Vec<f32>,
    channels: u16,
    sample_rate: u32,
    bit_depth: u16,
}

impl PcmAudio {
    pub fn new(samples: Vec<f32>, channels: u16, sample_rate: u32, bit_depth: u16) -> Self {
        Self {
            samples,
            channels: channels.max(1),
            sample_rate,
            bit_depth,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    pub fn frame_count(&self) -> u64 {
        (self.samples.len() / self.channels as usize) as u64
    }

    fn window_samples(&self, window: &Range<u64>) -> &[f32] {
        let frames = self.frame_count();
        let to_frame = |ms: u64| (ms * self.sample_rate as u64 / 1000).min(frames);
        let start = to_frame(window.start) as usize * self.channels as usize;
        let end = to_frame(window.end) as usize * self.channels as usize;
        if start >= end {
            return &[];
        }
        &self.samples[start..end]
    }
}

impl DecodedAudio for PcmAudio {
    fn channels(&self) -> u16 {
        self.channels
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn bit_depth(&self) -> u16 {
        self.bit_depth
    }

    fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        let rate = self.sample_rate as u64;
        (self.frame_count() * 1000 + rate / 2) / rate
    }

    fn average_dbfs(&self, window: Range<u64>) -> f64 {
        let samples = self.window_samples(&window);
        if samples.is_empty() {
            return f64::NEG_INFINITY;
        }
        let sum_sq: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
        amplitude_to_dbfs((sum_sq / samples.len() as f64).sqrt())
    }

    fn peak_dbfs(&self, window: Range<u64>) -> f64 {
        let peak = self
            .window_samples(&window)
            .iter()
            .fold(0.0f64, |max, &s| max.max((s as f64).abs()));
        amplitude_to_dbfs(peak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn constant(level: f32, seconds: u32, rate: u32) -> PcmAudio {
        PcmAudio::new(vec![level; (seconds * rate) as usize], 1, rate, 16)
    }

    #[test]
    fn silence_is_negative_infinity() {
        let audio = constant(0.0, 1, 8_000);
        assert_eq!(audio.average_dbfs(audio.full_range()), f64::NEG_INFINITY);
        assert_eq!(audio.peak_dbfs(audio.full_range()), f64::NEG_INFINITY);
    }

    #[test]
    fn half_scale_is_about_minus_six_dbfs() {
        let audio = constant(0.5, 1, 8_000);
        let level = audio.average_dbfs(audio.full_range());
        assert!((level + 6.0206).abs() < 1e-3, "got {level}");
        assert!((audio.peak_dbfs(audio.full_range()) - level).abs() < 1e-9);
    }

    #[test]
    fn duration_uses_frames_not_samples() {
        let audio = PcmAudio::new(vec![0.1; 2 * 44_100 * 3], 2, 44_100, 16);
        assert_eq!(audio.duration_ms(), 3_000);
        assert_eq!(audio.frame_count(), 132_300);
    }

    #[test]
    fn windows_only_see_their_samples() {
        let mut samples = vec![0.0f32; 1_000];
        samples.extend(vec![1.0f32; 1_000]);
        let audio = PcmAudio::new(samples, 1, 1_000, 16);
        assert_eq!(audio.peak_dbfs(0..1_000), f64::NEG_INFINITY);
        assert_eq!(audio.peak_dbfs(1_000..2_000), 0.0);
    }

    #[test]
    fn frames_cover_signal_with_short_tail() {
        let audio = constant(0.1, 1, 1_000);
        let frames = audio.frames(300);
        assert_eq!(frames, vec![0..300, 300..600, 600..900, 900..1_000]);
    }

    #[test]
    fn short_signal_is_a_single_frame() {
        let audio = PcmAudio::new(vec![0.1; 150], 1, 1_000, 16);
        assert_eq!(audio.frames(DEFAULT_FRAME_MS), vec![0..150]);
    }
}
