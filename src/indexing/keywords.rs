use std::collections::{HashMap, HashSet};
use log::debug;
use crate::indexing::lexicon::{Stopwords, Vocabulary};
use crate::indexing::normalize::TextNormalizer;

pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// Size of the frequency shortlist generic keywords are drawn from.
const FREQUENT_CANDIDATES: usize = 30;
const MIN_TOKEN_CHARS: usize = 3;
const MIN_GENERIC_CHARS: usize = 4;

/// Curated phrases first, then the most frequent remaining words.
pub struct KeywordExtractor {
    normalizer: TextNormalizer,
    /// Normalized curated phrases, in declaration order.
    vocabulary: Vec<String>,
    stopwords: Stopwords,
    max_keywords: usize,
}

impl KeywordExtractor {
    pub fn new(vocabulary: &Vocabulary, stopwords: Stopwords, max_keywords: usize) -> Self {
        let normalizer = TextNormalizer::new();
        let vocabulary = vocabulary
            .0
            .iter()
            .map(|phrase| normalizer.normalize(phrase))
            .collect();
        Self {
            normalizer,
            vocabulary,
            stopwords,
            max_keywords,
        }
    }

    pub fn max_keywords(&self) -> usize {
        self.max_keywords
    }

    pub fn extract(&self, transcript: &str) -> Vec<String> {
        self.extract_at_most(transcript, self.max_keywords)
    }

    pub fn extract_at_most(&self, transcript: &str, max_keywords: usize) -> Vec<String> {
        if transcript.is_empty() {
            return Vec::new();
        }

        let normalized = self.normalizer.normalize(transcript);
        let curated = self.curated_matches(&normalized);
        let frequent = self.frequent_tokens(&normalized);
        debug!("{} curated matches, {} frequent candidates", curated.len(), frequent.len());

        let mut seen = HashSet::new();
        curated
            .into_iter()
            .chain(frequent)
            .filter(|keyword| seen.insert(keyword.clone()))
            .take(max_keywords)
            .collect()
    }

    /// Contiguous substring matches against the whole normalized text.
    fn curated_matches(&self, normalized: &str) -> Vec<String> {
        self.vocabulary
            .iter()
            .filter(|phrase| !phrase.is_empty() && normalized.contains(phrase.as_str()))
            .cloned()
            .collect()
    }

    /// Most frequent tokens, ties kept in first-seen order.
    fn frequent_tokens(&self, normalized: &str) -> Vec<String> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for token in self.normalizer.tokens(normalized) {
            if token.chars().count() < MIN_TOKEN_CHARS || self.stopwords.contains(token) {
                continue;
            }
            match index.get(token) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(token, counts.len());
                    counts.push((token, 1));
                }
            }
        }

        // stable sort keeps first-seen order among equal counts
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        counts
            .into_iter()
            .take(FREQUENT_CANDIDATES)
            .map(|(token, _)| token)
            .filter(|token| token.chars().count() >= MIN_GENERIC_CHARS && !self.stopwords.contains(token))
            .map(str::to_string)
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(&Vocabulary::default(), Stopwords::default(), DEFAULT_MAX_KEYWORDS)
    }
}
