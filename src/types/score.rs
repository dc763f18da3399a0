//! Per-text scoring results and analysis options

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One matched lexicon word and its weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconHit {
    pub word: String,
    pub weight: f64,
}

/// Score breakdown for a single text sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextScore {
    /// Sum of matched word weights
    pub score: f64,
    /// Length-normalized polarity: score / token count, 0 for empty text
    pub comparative: f64,
    /// Token count after punctuation stripping
    pub tokens: usize,
    /// Matched words with their weights
    pub hits: Vec<LexiconHit>,
}

impl TextScore {
    /// Score for a text with no usable tokens
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            comparative: 0.0,
            tokens: 0,
            hits: Vec::new(),
        }
    }
}

/// Caller options for one analysis pass
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Language hint, recorded but never used for scoring
    pub language: Option<String>,
    /// Extra word weights merged over the base lexicon
    pub extra_words: HashMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_score_is_zero() {
        let score = TextScore::empty();
        assert_eq!(score.score, 0.0);
        assert_eq!(score.comparative, 0.0);
        assert_eq!(score.tokens, 0);
        assert!(score.hits.is_empty());
    }
}
