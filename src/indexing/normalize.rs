use std::sync::Arc;
use regex::Regex;

/// Anything that is not a word character, a French accented letter,
/// an apostrophe or a hyphen.
const NON_WORD: &str = r"[^\w'\-àâäçéèêëîïôöùûüÿœæ]";

const TRIMMED: &[char] = &['\'', '-'];

/// Lowercases text and blanks out punctuation, one space per character.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    non_word: Arc<Regex>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            non_word: Arc::new(Regex::new(NON_WORD).unwrap()),
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        self.non_word.replace_all(&lowered, " ").into_owned()
    }

    /// Whitespace tokens of already normalized text, apostrophes and hyphens
    /// trimmed from both ends.
    pub fn tokens<'a>(&self, normalized: &'a str) -> impl Iterator<Item = &'a str> {
        normalized
            .split_whitespace()
            .map(|token| token.trim_matches(TRIMMED))
            .filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn punctuation_becomes_single_spaces() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize("Stress, travail!"), "stress  travail ");
    }

    #[test]
    fn accents_apostrophes_and_hyphens_survive() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize("D'Anxiété & Burn-Out"), "d'anxiété   burn-out");
    }

    #[test]
    fn newlines_turn_into_spaces() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize("charge\nmentale"), "charge mentale");
    }

    #[test]
    fn tokens_are_trimmed() {
        let n = TextNormalizer::new();
        let normalized = n.normalize("'bonjour' -- l'équipe- ");
        let tokens: Vec<&str> = n.tokens(&normalized).collect();
        assert_eq!(tokens, vec!["bonjour", "l'équipe"]);
    }
}
