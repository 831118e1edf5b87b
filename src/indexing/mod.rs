pub mod category;
pub mod cover;
pub mod keywords;
pub mod lexicon;
pub mod normalize;

use serde::Serialize;
use self::category::CategoryClassifier;
use self::cover::CoverMapper;
use self::keywords::KeywordExtractor;

/// Everything derived from a transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexResult {
    pub keywords: Vec<String>,
    pub category: String,
    pub cover_image: String,
}

/// Keyword extraction, classification and cover lookup over one transcript.
#[derive(Default)]
pub struct Indexer {
    pub extractor: KeywordExtractor,
    pub classifier: CategoryClassifier,
    pub covers: CoverMapper,
}

impl Indexer {
    pub fn new(extractor: KeywordExtractor, classifier: CategoryClassifier, covers: CoverMapper) -> Self {
        Self {
            extractor,
            classifier,
            covers,
        }
    }

    pub fn index(&self, transcript: &str) -> IndexResult {
        let keywords = self.extractor.extract(transcript);
        let category = self.classifier.classify(transcript);
        let cover_image = self.covers.map_cover(&category).to_string();
        IndexResult {
            keywords,
            category,
            cover_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stress_transcript_end_to_end() {
        let result = Indexer::default().index(
            "Je sens beaucoup de stress et d'anxiété au travail, avec une forte charge mentale.",
        );
        assert_eq!(result.category, "Stress & émotions");
        assert_eq!(result.cover_image, "/covers/emotions.png");
        let stress = result.keywords.iter().position(|k| k == "stress").unwrap();
        let anxiety = result.keywords.iter().position(|k| k == "anxiété").unwrap();
        let generic = result.keywords.iter().position(|k| k == "travail").unwrap();
        assert!(stress < generic && anxiety < generic);
    }

    #[test]
    fn empty_transcript_end_to_end() {
        let result = Indexer::default().index("");
        assert_eq!(
            result,
            IndexResult {
                keywords: vec![],
                category: "Bien-être général".into(),
                cover_image: "/covers/general.png".into(),
            }
        );
    }
}
