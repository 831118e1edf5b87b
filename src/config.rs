use std::path::Path;
use log::info;
use serde::{Deserialize, Serialize};
use crate::analyzers::quality::QualityPolicy;
use crate::indexing::category::CategoryClassifier;
use crate::indexing::cover::CoverMapper;
use crate::indexing::keywords::{KeywordExtractor, DEFAULT_MAX_KEYWORDS};
use crate::indexing::lexicon::{CoverTable, Stopwords, ThemeLexicon, Vocabulary};
use crate::indexing::Indexer;
use crate::pipeline::contributors::Contributor;
use crate::{Result, ScreenerError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub quality: QualityPolicy,
    pub indexing: IndexingConfig,
    pub contributors: Vec<Contributor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexingConfig {
    pub max_keywords: usize,
    pub vocabulary: Vocabulary,
    pub stopwords: Stopwords,
    pub themes: ThemeLexicon,
    pub covers: CoverTable,
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            vocabulary: Vocabulary::default(),
            stopwords: Stopwords::default(),
            themes: ThemeLexicon::default(),
            covers: CoverTable::default(),
        }
    }
}

impl IndexingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_keywords == 0 {
            return Err(ScreenerError::Config("max_keywords must be at least 1".into()));
        }
        if self.themes.default_category.trim().is_empty() {
            return Err(ScreenerError::Config("default_category must not be empty".into()));
        }
        if self.covers.default_asset.trim().is_empty() {
            return Err(ScreenerError::Config("default cover asset must not be empty".into()));
        }
        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = self.vocabulary.0.iter().find(|p| !seen.insert(p.as_str())) {
            return Err(ScreenerError::Config(format!("duplicate curated phrase: {}", dup)));
        }
        Ok(())
    }

    pub fn build_indexer(&self) -> Indexer {
        Indexer::new(
            KeywordExtractor::new(&self.vocabulary, self.stopwords.clone(), self.max_keywords),
            CategoryClassifier::new(&self.themes),
            CoverMapper::new(&self.covers),
        )
    }
}

impl AppConfig {
    /// Reads a JSON configuration file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.quality.validate()?;
        self.indexing.validate()
    }
}
