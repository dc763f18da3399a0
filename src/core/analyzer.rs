//! Tone analyzer: per-text comparative scores and their mean
//!
//! comparative = sum of matched word weights / token count, which makes the
//! measure length-independent. The aggregate over a whole post set is the
//! arithmetic mean of the per-text comparatives.

use crate::core::lexicon::{tokenize, Lexicon};
use crate::types::{AnalyzeOptions, LexiconHit, TextScore};

/// Lexicon-backed tone analyzer
#[derive(Debug, Clone, Default)]
pub struct ToneAnalyzer {
    lexicon: Lexicon,
    language: Option<String>,
}

impl ToneAnalyzer {
    /// Analyzer over the base lexicon
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::new(),
            language: None,
        }
    }

    /// Analyzer with caller options applied
    pub fn with_options(options: AnalyzeOptions) -> Self {
        Self {
            lexicon: Lexicon::with_extra(options.extra_words),
            language: options.language,
        }
    }

    /// Language hint recorded for this analyzer, if any
    ///
    /// Carried through for callers that track it; scoring ignores it.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Score a single text sample
    pub fn analyze(&self, text: &str) -> TextScore {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return TextScore::empty();
        }

        let mut score = 0.0;
        let mut hits = Vec::new();
        for token in &tokens {
            if let Some(weight) = self.lexicon.weight(token) {
                score += weight;
                hits.push(LexiconHit {
                    word: token.clone(),
                    weight,
                });
            }
        }

        TextScore {
            score,
            comparative: score / tokens.len() as f64,
            tokens: tokens.len(),
            hits,
        }
    }

    /// Mean comparative score across a set of samples
    ///
    /// An empty set scores exactly 0 (neutral), never an error.
    pub fn aggregate<S: AsRef<str>>(&self, texts: &[S]) -> f64 {
        if texts.is_empty() {
            return 0.0;
        }

        let sum: f64 = texts
            .iter()
            .map(|text| self.analyze(text.as_ref()).comparative)
            .sum();
        sum / texts.len() as f64
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_text_scores_zero() {
        let analyzer = ToneAnalyzer::new();
        let result = analyzer.analyze("");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.comparative, 0.0);
        assert_eq!(result.tokens, 0);
    }

    #[test]
    fn test_punctuation_only_scores_zero() {
        let analyzer = ToneAnalyzer::new();
        let result = analyzer.analyze("?!?! ... ---");
        assert_eq!(result.comparative, 0.0);
        assert_eq!(result.tokens, 0);
    }

    #[test]
    fn test_non_ascii_contributes_nothing() {
        let analyzer = ToneAnalyzer::new();
        let result = analyzer.analyze("愛 schön apfelkuchen");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.tokens, 3);
        assert!(result.hits.is_empty());
    }

    #[test]
    fn test_comparative_is_length_normalized() {
        let analyzer = ToneAnalyzer::new();
        // "love" = 3, three tokens
        let result = analyzer.analyze("i love this");
        assert_eq!(result.score, 3.0);
        assert_eq!(result.tokens, 3);
        assert!((result.comparative - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_hits_record_matched_words() {
        let analyzer = ToneAnalyzer::new();
        let result = analyzer.analyze("what a great and terrible day");
        let words: Vec<&str> = result.hits.iter().map(|h| h.word.as_str()).collect();
        assert_eq!(words, vec!["great", "terrible"]);
        assert_eq!(result.score, 0.0); // 3 + (-3)
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        let analyzer = ToneAnalyzer::new();
        let texts: Vec<String> = Vec::new();
        assert_eq!(analyzer.aggregate(&texts), 0.0);
    }

    #[test]
    fn test_aggregate_is_mean_of_comparatives() {
        // Extra words give exact control over per-text comparatives
        let mut extra = HashMap::new();
        extra.insert("aa".to_string(), 2.0);
        extra.insert("bb".to_string(), -1.0);
        let analyzer = ToneAnalyzer::with_options(AnalyzeOptions {
            language: None,
            extra_words: extra,
        });

        // 2/5 = 0.4 and -1/5 = -0.2, mean = 0.1
        let texts = ["aa xx xx xx xx", "bb xx xx xx xx"];
        let score = analyzer.aggregate(&texts);
        assert!((score - 0.1).abs() < 1e-10, "expected 0.1, got {}", score);
    }

    #[test]
    fn test_language_hint_is_recorded_not_used() {
        let analyzer = ToneAnalyzer::with_options(AnalyzeOptions {
            language: Some("en".to_string()),
            extra_words: HashMap::new(),
        });
        assert_eq!(analyzer.language(), Some("en"));

        let plain = ToneAnalyzer::new();
        assert_eq!(
            analyzer.analyze("such a lovely day").comparative,
            plain.analyze("such a lovely day").comparative
        );
    }

    #[test]
    fn test_determinism() {
        let analyzer = ToneAnalyzer::new();
        let text = "happy happy joy joy but also a little sad";
        let a = analyzer.analyze(text).comparative;
        let b = analyzer.analyze(text).comparative;
        assert!((a - b).abs() < 1e-10, "same input should give same score");
    }
}
