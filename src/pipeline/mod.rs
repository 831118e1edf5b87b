pub mod contributors;
pub mod episode;
pub mod transcription;

use std::path::PathBuf;
use log::info;
use serde::Serialize;
use crate::analyzers::quality::{QualityAnalyzer, QualityReport};
use crate::audio::assembler::AudioAssembler;
use crate::config::AppConfig;
use crate::indexing::{IndexResult, Indexer};
use crate::utils::file_ops::FileManager;
use crate::Result;
use self::contributors::ContributorRegistry;
use self::episode::{provisional_title, validate_email, Episode, EpisodeStatus};
use self::transcription::Transcriber;

/// One submission to process.
#[derive(Debug, Clone)]
pub struct EpisodeRequest {
    pub upload: PathBuf,
    pub contributor_email: String,
    pub contributor_name: Option<String>,
    pub intro: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessedEpisode {
    pub episode: Episode,
    pub final_path: PathBuf,
    pub quality: QualityReport,
    pub index: IndexResult,
}

/// Staging, assembly, quality screening, transcription and indexing of one
/// episode, in that order. Quality is judged on the raw upload; the
/// transcript and the published audio come from the assembled track.
pub struct EpisodePipeline {
    files: FileManager,
    assembler: AudioAssembler,
    analyzer: QualityAnalyzer,
    indexer: Indexer,
    contributors: ContributorRegistry,
    transcriber: Box<dyn Transcriber>,
}

impl EpisodePipeline {
    pub fn new(config: &AppConfig, work_dir: impl Into<PathBuf>, transcriber: Box<dyn Transcriber>) -> Self {
        Self {
            files: FileManager::new(work_dir),
            assembler: AudioAssembler::new(),
            analyzer: QualityAnalyzer::new(config.quality.clone()),
            indexer: config.indexing.build_indexer(),
            contributors: ContributorRegistry::new(config.contributors.clone()),
            transcriber,
        }
    }

    pub fn files(&self) -> &FileManager {
        &self.files
    }

    pub fn process(&self, request: &EpisodeRequest) -> Result<ProcessedEpisode> {
        let contributor_email = validate_email(&request.contributor_email)?;
        let contributor_name = request
            .contributor_name
            .clone()
            .or_else(|| self.contributors.lookup(&contributor_email).map(|c| c.name.clone()));

        info!("Processing {} for {}", request.upload.display(), contributor_email);

        let raw_path = self.files.stage_raw(&request.upload)?;
        let final_path = self.files.final_path_for(&raw_path);
        // outro is left out of the current editorial format
        self.assembler
            .assemble(request.intro.as_deref(), &raw_path, None, &final_path)?;

        let quality = self.analyzer.analyze_file(&raw_path)?;
        let transcript = self.transcriber.transcribe(&final_path);
        let index = self.indexer.index(&transcript);

        let episode = Episode {
            title: provisional_title(contributor_name.as_deref()),
            audio_url: final_path.display().to_string(),
            duration: quality.duration_seconds,
            transcript,
            keywords: index.keywords.clone(),
            category: index.category.clone(),
            cover_image: index.cover_image.clone(),
            contributor_email,
            quality_status: quality.quality_status,
            quality_score: quality.quality_score,
            status: EpisodeStatus::Draft,
        };

        info!(
            "Episode ready: {} | {} | {} keywords",
            episode.quality_status,
            episode.category,
            episode.keywords.len()
        );

        Ok(ProcessedEpisode {
            episode,
            final_path,
            quality,
            index,
        })
    }

    pub fn payload_path(&self, request: &EpisodeRequest) -> PathBuf {
        self.files.payload_path_for(&request.upload)
    }
}
