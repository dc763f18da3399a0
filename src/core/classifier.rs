//! Tone classification: ordered threshold bands over the score line
//!
//! The table is data, not code: retuning the bot means editing the band
//! list, never the scan. Band count is small (nine), so a linear scan in
//! table order beats a binary search on both clarity and editability.

use crate::types::Tone;

/// One band: scores at or below `upper` (and above the previous band's
/// bound) map to `tone`
#[derive(Debug, Clone, Copy)]
pub struct ToneBand {
    pub upper: f64,
    pub tone: Tone,
}

/// Ordered band table partitioning the whole score line
#[derive(Debug, Clone)]
pub struct ToneTable {
    bands: Vec<ToneBand>,
}

impl ToneTable {
    /// Build from (upper bound, tone) pairs
    ///
    /// Panics unless bounds are strictly increasing and the final band is
    /// unbounded: a malformed table is a startup configuration defect, not
    /// a runtime condition.
    pub fn new(bands: Vec<ToneBand>) -> Self {
        assert!(!bands.is_empty(), "tone table must have at least one band");
        for pair in bands.windows(2) {
            assert!(
                pair[0].upper < pair[1].upper,
                "tone table bounds must be strictly increasing"
            );
        }
        assert!(
            bands.last().unwrap().upper.is_infinite(),
            "final tone band must be unbounded"
        );
        Self { bands }
    }

    /// First band whose upper bound is at or above the score
    ///
    /// A score exactly on a cut point belongs to the band carrying that
    /// bound, never the next one. Falls back to NEUTRAL if nothing matches,
    /// so classification is total over every float including NaN.
    pub fn classify(&self, score: f64) -> Tone {
        for band in &self.bands {
            if score <= band.upper {
                return band.tone;
            }
        }
        Tone::Neutral
    }

    /// The bands in scan order
    pub fn bands(&self) -> &[ToneBand] {
        &self.bands
    }
}

impl Default for ToneTable {
    /// Nine bands, tuned for comparative scores (roughly [-5, 5])
    fn default() -> Self {
        Self::new(vec![
            ToneBand { upper: -1.5, tone: Tone::ExtremelyMean },
            ToneBand { upper: -0.75, tone: Tone::VeryMean },
            ToneBand { upper: -0.25, tone: Tone::Mean },
            ToneBand { upper: -0.1, tone: Tone::SlightlyMean },
            ToneBand { upper: 0.1, tone: Tone::Neutral },
            ToneBand { upper: 0.25, tone: Tone::SlightlyNice },
            ToneBand { upper: 0.75, tone: Tone::Nice },
            ToneBand { upper: 1.5, tone: Tone::VeryNice },
            ToneBand { upper: f64::INFINITY, tone: Tone::ExtremelyNice },
        ])
    }
}

// =============================================================================
// TESTS
// =============================================================================
