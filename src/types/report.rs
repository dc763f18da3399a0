//! Report structure for terminal and JSON output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Tone;

/// Result of one full analysis pass over a set of posts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VibeReport {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Mean comparative score across the posts
    pub score: f64,
    /// Tone band the score falls in
    pub tone: Tone,
    /// Emoji for the score (finer-grained table than the tone bands)
    pub emoji: String,
    /// Number of posts analyzed
    pub post_count: usize,
}

impl VibeReport {
    /// Create new report
    pub fn new(score: f64, tone: Tone, emoji: String, post_count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            score,
            tone,
            emoji,
            post_count,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.tone.color_code();
        let reset = Tone::color_reset();

        format!(
            "{}{} score={:+.3} | tone={} | posts={}{}",
            color, self.emoji, self.score, self.tone, self.post_count, reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "score={:+.3} | tone={} | posts={}",
            self.score, self.tone, self.post_count
        )
    }
}
