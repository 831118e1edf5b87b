use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use crate::analyzers::tech::TechInfo;
use crate::audio::decoded::{DecodedAudio, DEFAULT_FRAME_MS};
use crate::audio::decoder::AudioDecoder;
use crate::{Result, ScreenerError};

/// Editorial thresholds and penalties applied by [`QualityAnalyzer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityPolicy {
    pub min_duration_secs: u64,
    pub max_duration_secs: u64,
    pub min_loudness_dbfs: f64,
    pub max_loudness_dbfs: f64,
    pub max_peak_dbfs: f64,
    /// The noise floor must be strictly below this level.
    pub max_noise_floor_dbfs: f64,
    pub noise_frame_ms: u64,
    /// The noise floor is taken over the quietest `1 / quiet_divisor` of frames.
    pub quiet_divisor: usize,
    pub duration_penalty: u32,
    pub loudness_penalty: u32,
    pub peak_penalty: u32,
    pub noise_penalty: u32,
    pub ok_threshold: u8,
    pub review_threshold: u8,
}

impl Default for QualityPolicy {
    fn default() -> Self {
        Self {
            min_duration_secs: 240,
            max_duration_secs: 900,
            min_loudness_dbfs: -22.0,
            max_loudness_dbfs: -14.0,
            max_peak_dbfs: -1.0,
            max_noise_floor_dbfs: -45.0,
            noise_frame_ms: DEFAULT_FRAME_MS,
            quiet_divisor: 5,
            duration_penalty: 10,
            loudness_penalty: 15,
            peak_penalty: 20,
            noise_penalty: 20,
            ok_threshold: 80,
            review_threshold: 60,
        }
    }
}

impl QualityPolicy {
    pub fn validate(&self) -> Result<()> {
        if self.min_duration_secs > self.max_duration_secs {
            return Err(ScreenerError::Config("min_duration_secs exceeds max_duration_secs".into()));
        }
        if self.min_loudness_dbfs > self.max_loudness_dbfs {
            return Err(ScreenerError::Config("min_loudness_dbfs exceeds max_loudness_dbfs".into()));
        }
        if self.noise_frame_ms == 0 || self.quiet_divisor == 0 {
            return Err(ScreenerError::Config("noise_frame_ms and quiet_divisor must be non-zero".into()));
        }
        if self.review_threshold > self.ok_threshold || self.ok_threshold > 100 {
            return Err(ScreenerError::Config(
                "thresholds must satisfy review_threshold <= ok_threshold <= 100".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Duration,
    Loudness,
    Noise,
    Peak,
}

impl CheckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Duration => "duration",
            CheckKind::Loudness => "loudness",
            CheckKind::Noise => "noise",
            CheckKind::Peak => "peak",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityCheck {
    #[serde(skip)]
    pub kind: CheckKind,
    pub ok: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "A_REVOIR")]
    ARevoir,
    #[serde(rename = "REFUSE")]
    Refuse,
}

impl QualityStatus {
    /// Boundary scores land in the better bucket.
    pub fn from_score(score: u8, policy: &QualityPolicy) -> Self {
        if score >= policy.ok_threshold {
            QualityStatus::Ok
        } else if score >= policy.review_threshold {
            QualityStatus::ARevoir
        } else {
            QualityStatus::Refuse
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityStatus::Ok => "OK",
            QualityStatus::ARevoir => "A_REVOIR",
            QualityStatus::Refuse => "REFUSE",
        }
    }
}

impl fmt::Display for QualityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub duration_seconds: u64,
    pub loudness_dbfs: f64,
    pub peak_dbfs: f64,
    pub noise_floor_dbfs: f64,
    pub quality_score: u8,
    pub quality_status: QualityStatus,
    pub checks: BTreeMap<CheckKind, QualityCheck>,
    pub tech: TechInfo,
}

impl QualityReport {
    pub fn failed_checks(&self) -> impl Iterator<Item = &QualityCheck> {
        self.checks.values().filter(|c| !c.ok)
    }
}

pub struct QualityAnalyzer {
    policy: QualityPolicy,
}

impl Default for QualityAnalyzer {
    fn default() -> Self {
        Self::new(QualityPolicy::default())
    }
}

impl QualityAnalyzer {
    pub fn new(policy: QualityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &QualityPolicy {
        &self.policy
    }

    /// Decodes `path` and analyzes it. Decoding failures propagate untouched.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<QualityReport> {
        let path = path.as_ref();
        let audio = AudioDecoder::decode_file(path)?;
        Ok(self.analyze(&audio, path))
    }

    pub fn analyze(&self, audio: &impl DecodedAudio, source: &Path) -> QualityReport {
        let policy = &self.policy;
        let whole = audio.full_range();

        let duration_seconds = audio.duration_ms() / 1000;
        let loudness = audio.average_dbfs(whole.clone());
        let peak = audio.peak_dbfs(whole);
        let noise_floor = estimate_noise_floor(audio, policy.noise_frame_ms, policy.quiet_divisor);

        let outcomes = [
            self.check_duration(duration_seconds),
            self.check_loudness(loudness),
            self.check_peak(peak),
            self.check_noise(noise_floor),
        ];

        let penalty: u32 = outcomes
            .iter()
            .filter(|(check, _)| !check.ok)
            .fold(0u32, |total, (_, penalty)| total.saturating_add(*penalty));
        let score = (100i64 - penalty as i64).clamp(0, 100) as u8;
        let status = QualityStatus::from_score(score, policy);

        let checks: BTreeMap<CheckKind, QualityCheck> = outcomes
            .into_iter()
            .map(|(check, _)| {
                if !check.ok {
                    debug!("{} failed for {}: {:?}", check.kind, source.display(), check.message);
                }
                (check.kind, check)
            })
            .collect();

        info!("Quality of {}: {} ({}/100)", source.display(), status, score);

        QualityReport {
            duration_seconds,
            loudness_dbfs: loudness,
            peak_dbfs: peak,
            noise_floor_dbfs: noise_floor,
            quality_score: score,
            quality_status: status,
            checks,
            tech: TechInfo::from_audio(audio, source),
        }
    }

    fn check_duration(&self, seconds: u64) -> (QualityCheck, u32) {
        let (min, max) = (self.policy.min_duration_secs, self.policy.max_duration_secs);
        let ok = (min..=max).contains(&seconds);
        let message = if ok {
            format!("Duration {} s ({}) within {}-{} s", seconds, minutes(seconds), min, max)
        } else {
            format!("Duration {} s ({}) outside accepted range {}-{} s", seconds, minutes(seconds), min, max)
        };
        outcome(CheckKind::Duration, ok, message, self.policy.duration_penalty)
    }

    fn check_loudness(&self, loudness: f64) -> (QualityCheck, u32) {
        let (min, max) = (self.policy.min_loudness_dbfs, self.policy.max_loudness_dbfs);
        let ok = loudness >= min && loudness <= max;
        let message = if ok {
            format!("Average loudness {:.1} dBFS within [{:.1}, {:.1}]", loudness, min, max)
        } else if loudness < min {
            format!("Average loudness {:.1} dBFS too quiet, expected >= {:.1}", loudness, min)
        } else {
            format!("Average loudness {:.1} dBFS too loud, expected <= {:.1}", loudness, max)
        };
        outcome(CheckKind::Loudness, ok, message, self.policy.loudness_penalty)
    }

    fn check_peak(&self, peak: f64) -> (QualityCheck, u32) {
        let max = self.policy.max_peak_dbfs;
        let ok = peak <= max;
        let message = if ok {
            format!("Peak {:.1} dBFS leaves headroom below {:.1}", peak, max)
        } else {
            format!("Peak {:.1} dBFS above {:.1}, clipping risk", peak, max)
        };
        outcome(CheckKind::Peak, ok, message, self.policy.peak_penalty)
    }

    fn check_noise(&self, noise_floor: f64) -> (QualityCheck, u32) {
        let max = self.policy.max_noise_floor_dbfs;
        let ok = noise_floor < max;
        let message = if ok {
            format!("Noise floor {:.1} dBFS below {:.1}", noise_floor, max)
        } else {
            format!("Noise floor {:.1} dBFS too high, expected < {:.1}", noise_floor, max)
        };
        outcome(CheckKind::Noise, ok, message, self.policy.noise_penalty)
    }
}

fn outcome(kind: CheckKind, ok: bool, message: String, penalty: u32) -> (QualityCheck, u32) {
    (QualityCheck { kind, ok, message: Some(message) }, penalty)
}

fn minutes(seconds: u64) -> String {
    format!("{} min {:02} s", seconds / 60, seconds % 60)
}

/// Mean dBFS of the quietest `1 / quiet_divisor` of `frame_ms` frames
/// (at least one frame).
pub fn estimate_noise_floor(audio: &impl DecodedAudio, frame_ms: u64, quiet_divisor: usize) -> f64 {
    let mut levels: Vec<f64> = audio
        .frames(frame_ms)
        .into_iter()
        .map(|frame| audio.average_dbfs(frame))
        .collect();
    levels.sort_by(|a, b| a.total_cmp(b));

    let quiet = (levels.len() / quiet_divisor.max(1)).max(1);
    let subset = &levels[..quiet.min(levels.len())];
    if subset.is_empty() {
        return f64::NEG_INFINITY;
    }
    subset.iter().sum::<f64>() / subset.len() as f64
}
