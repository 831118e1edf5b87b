use std::path::PathBuf;

pub mod analyzers;
pub mod audio;
pub mod cli;
pub mod config;
pub mod indexing;
pub mod pipeline;
pub mod utils;

#[derive(Debug, thiserror::Error)]
pub enum ScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("WAV encoding error: {0}")]
    Wav(#[from] hound::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScreenerError>;

// Re-exports for convenience
pub use analyzers::quality::{CheckKind, QualityAnalyzer, QualityCheck, QualityPolicy, QualityReport, QualityStatus};
pub use analyzers::tech::TechInfo;
pub use audio::assembler::AudioAssembler;
pub use audio::decoded::{DecodedAudio, PcmAudio};
pub use audio::decoder::AudioDecoder;
pub use config::AppConfig;
pub use indexing::category::CategoryClassifier;
pub use indexing::cover::CoverMapper;
pub use indexing::keywords::KeywordExtractor;
pub use pipeline::episode::{Episode, EpisodePayload};
pub use pipeline::EpisodePipeline;
