use std::collections::HashSet;
use log::debug;
use crate::indexing::lexicon::ThemeLexicon;
use crate::indexing::normalize::TextNormalizer;

struct ScoredTheme {
    label: String,
    phrases: Vec<String>,
}

/// Picks the theme whose trigger phrases appear most often in a transcript.
///
/// Each phrase counts at most once. Ties go to the theme declared first.
/// Phrases are plain substrings, so a phrase nested in another (`leader` in
/// `leadership`) scores twice.
pub struct CategoryClassifier {
    normalizer: TextNormalizer,
    themes: Vec<ScoredTheme>,
    default_category: String,
}

impl CategoryClassifier {
    pub fn new(lexicon: &ThemeLexicon) -> Self {
        let normalizer = TextNormalizer::new();
        let themes = lexicon
            .themes
            .iter()
            .map(|theme| {
                let mut seen = HashSet::new();
                ScoredTheme {
                    label: theme.label.clone(),
                    phrases: theme
                        .phrases
                        .iter()
                        .map(|p| normalizer.normalize(p))
                        .filter(|p| !p.is_empty() && seen.insert(p.clone()))
                        .collect(),
                }
            })
            .collect();
        Self {
            normalizer,
            themes,
            default_category: lexicon.default_category.clone(),
        }
    }

    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    /// Number of distinct trigger phrases of each theme found in the text.
    pub fn scores(&self, transcript: &str) -> Vec<(&str, usize)> {
        let normalized = self.normalizer.normalize(transcript);
        self.themes
            .iter()
            .map(|theme| {
                let hits = theme
                    .phrases
                    .iter()
                    .filter(|phrase| normalized.contains(phrase.as_str()))
                    .count();
                (theme.label.as_str(), hits)
            })
            .collect()
    }

    pub fn classify(&self, transcript: &str) -> String {
        if transcript.is_empty() {
            return self.default_category.clone();
        }

        let mut best: Option<(&str, usize)> = None;
        for (label, hits) in self.scores(transcript) {
            // strictly greater, so the earliest theme keeps a tie
            if hits > best.map_or(0, |(_, b)| b) {
                best = Some((label, hits));
            }
        }

        match best {
            Some((label, hits)) => {
                debug!("Classified as {} with {} matching phrases", label, hits);
                label.to_string()
            }
            None => self.default_category.clone(),
        }
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new(&ThemeLexicon::default())
    }
}
