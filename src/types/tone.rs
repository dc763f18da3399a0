//! Tone band definitions

use serde::{Deserialize, Serialize};

/// The nine tone bands, ordered from most negative to most positive
///
/// The ordering of the variants matches the threshold table order, so
/// comparisons like `tone >= Tone::Nice` follow the score axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tone {
    /// Scorched earth
    ExtremelyMean,
    /// Persistently harsh
    VeryMean,
    /// Leaning grumpy
    Mean,
    /// A faint sour tint
    SlightlyMean,
    /// No strong signal either way
    Neutral,
    /// A gentle warmth
    SlightlyNice,
    /// Genuinely pleasant
    Nice,
    /// Radiating positivity
    VeryNice,
    /// Pure joy
    ExtremelyNice,
}

impl Tone {
    /// All bands in table order
    pub const ALL: [Tone; 9] = [
        Tone::ExtremelyMean,
        Tone::VeryMean,
        Tone::Mean,
        Tone::SlightlyMean,
        Tone::Neutral,
        Tone::SlightlyNice,
        Tone::Nice,
        Tone::VeryNice,
        Tone::ExtremelyNice,
    ];

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            Tone::ExtremelyMean | Tone::VeryMean => "\x1b[31m", // Red
            Tone::Mean | Tone::SlightlyMean => "\x1b[33m",      // Orange/Yellow
            Tone::Neutral => "\x1b[90m",                        // Gray
            Tone::SlightlyNice | Tone::Nice => "\x1b[32m",      // Green
            Tone::VeryNice | Tone::ExtremelyNice => "\x1b[92m", // Bright green
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tone::ExtremelyMean => "EXTREMELY_MEAN",
            Tone::VeryMean => "VERY_MEAN",
            Tone::Mean => "MEAN",
            Tone::SlightlyMean => "SLIGHTLY_MEAN",
            Tone::Neutral => "NEUTRAL",
            Tone::SlightlyNice => "SLIGHTLY_NICE",
            Tone::Nice => "NICE",
            Tone::VeryNice => "VERY_NICE",
            Tone::ExtremelyNice => "EXTREMELY_NICE",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_matches_table_order() {
        for pair in Tone::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Tone::SlightlyNice).unwrap();
        assert_eq!(json, "\"SLIGHTLY_NICE\"");
        let back: Tone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tone::SlightlyNice);
    }
}
