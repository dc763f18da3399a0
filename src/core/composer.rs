//! Reply composition: emoji lookup, variant pools, score formatting
//!
//! The emoji table is deliberately finer-grained than the tone table and
//! its cut points do not align with the tone bands; the two are tuned
//! independently. Message and suggestion fragments are drawn independently
//! from their pools, so the same message can pair with any suggestion.

use rand::Rng;

use crate::types::Tone;

// =============================================================================
// VARIANT PICKER
// =============================================================================

/// Injectable index source for variant pool selection
///
/// Tests supply a fixed picker to pin exact reply text.
pub trait VariantPicker {
    /// Index in [0, len); only called with len > 1
    fn pick(&mut self, len: usize) -> usize;
}

/// Production picker backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RngPicker;

impl RngPicker {
    pub fn new() -> Self {
        Self
    }
}

impl VariantPicker for RngPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Picker that always returns the same index (reduced modulo pool length)
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl VariantPicker for FixedPicker {
    fn pick(&mut self, _len: usize) -> usize {
        self.0
    }
}

// =============================================================================
// EMOJI TABLE [C]
// =============================================================================

/// One emoji band
#[derive(Debug, Clone, Copy)]
pub struct EmojiBand {
    pub upper: f64,
    pub emoji: &'static str,
}

/// Emoji cut points, finer than the tone bands
pub const EMOJI_BANDS: &[EmojiBand] = &[
    EmojiBand { upper: -3.0, emoji: "🤬" },
    EmojiBand { upper: -2.0, emoji: "😡" },
    EmojiBand { upper: -1.0, emoji: "😠" },
    EmojiBand { upper: -0.5, emoji: "😒" },
    EmojiBand { upper: -0.15, emoji: "🙁" },
    EmojiBand { upper: 0.15, emoji: "😐" },
    EmojiBand { upper: 0.5, emoji: "🙂" },
    EmojiBand { upper: 1.0, emoji: "😊" },
    EmojiBand { upper: 2.0, emoji: "😄" },
    EmojiBand { upper: 3.0, emoji: "🤩" },
    EmojiBand { upper: f64::INFINITY, emoji: "🥰" },
];

/// Emoji for a score, scanned the same way the tone table is
pub fn emoji_for(score: f64) -> &'static str {
    for band in EMOJI_BANDS {
        if score <= band.upper {
            return band.emoji;
        }
    }
    "😐"
}

// =============================================================================
// TEMPLATE POOLS
// =============================================================================

/// Message and suggestion variants for one tone band
#[derive(Debug, Clone, Copy)]
pub struct TonePool {
    pub messages: &'static [&'static str],
    pub suggestions: &'static [&'static str],
}

/// Variant pool for a tone band
pub fn pool_for(tone: Tone) -> TonePool {
    match tone {
        Tone::ExtremelyMean => TonePool {
            messages: &[
                "Yikes. Your timeline has been absolutely scorched lately.",
                "That is some serious negativity radiating off your feed.",
                "Your recent posts read like a supervillain monologue.",
            ],
            suggestions: &[
                "Maybe log off and pet a dog for a while?",
                "A long walk outside might do wonders.",
                "Deep breaths. The timeline will survive without the flames.",
            ],
        },
        Tone::VeryMean => TonePool {
            messages: &[
                "Your recent posts have been pretty harsh.",
                "There's a storm cloud hanging over your feed.",
            ],
            suggestions: &[
                "Might be time for a short break from the discourse.",
                "Try sprinkling in something you actually enjoy.",
            ],
        },
        Tone::Mean => TonePool {
            messages: &[
                "Your feed is leaning grumpy lately.",
                "I'm detecting a bit of an edge in your recent posts.",
            ],
            suggestions: &[
                "A little kindness would brighten things up.",
                "Consider posting about something that made you smile.",
            ],
        },
        Tone::SlightlyMean => TonePool {
            messages: &[
                "Your posts have a faint gloomy tint.",
                "Things look ever so slightly sour on your timeline.",
            ],
            suggestions: &[
                "Nothing a good snack can't fix.",
                "You're one nice post away from neutral.",
            ],
        },
        Tone::Neutral => TonePool {
            messages: &[
                "Your feed is perfectly balanced.",
                "Steady as she goes. No strong vibes either way.",
            ],
            suggestions: &[
                "Feel free to shake things up a little.",
                "Keep doing whatever it is you're doing.",
            ],
        },
        Tone::SlightlyNice => TonePool {
            messages: &[
                "There's a gentle warmth coming off your posts.",
                "Your timeline is tilting pleasant.",
            ],
            suggestions: &[
                "Keep nudging it upward.",
                "Whatever you changed recently, it's working.",
            ],
        },
        Tone::Nice => TonePool {
            messages: &[
                "Your recent posts are genuinely pleasant.",
                "Good vibes detected across your feed.",
            ],
            suggestions: &[
                "Keep spreading it around.",
                "The timeline thanks you.",
            ],
        },
        Tone::VeryNice => TonePool {
            messages: &[
                "Your feed is a ray of sunshine.",
                "You have been radiating positivity lately.",
            ],
            suggestions: &[
                "Please teach the rest of us.",
                "Don't ever change.",
            ],
        },
        Tone::ExtremelyNice => TonePool {
            messages: &[
                "Off the charts! Your feed is pure joy.",
                "This is the most wholesome timeline I've scanned all day.",
                "Every single post is a warm hug.",
            ],
            suggestions: &[
                "Bottle that energy and sell it.",
                "Whatever you're on, the world needs more of it.",
                "Never log off.",
            ],
        },
    }
}

/// Startup invariant: every tone has non-empty message and suggestion pools
pub fn validate_pools() {
    for tone in Tone::ALL {
        let pool = pool_for(tone);
        assert!(!pool.messages.is_empty(), "empty message pool for {}", tone);
        assert!(
            !pool.suggestions.is_empty(),
            "empty suggestion pool for {}",
            tone
        );
    }
}

// =============================================================================
// SCORE FORMATTING
// =============================================================================

/// Format a score with a mandatory sign, two decimals max, and trailing
/// zeros stripped: +1.5, -2, +0
pub fn format_score(score: f64) -> String {
    // -0.0 renders as +0
    let score = if score == 0.0 { 0.0 } else { score };
    let fixed = format!("{:+.2}", score);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

// =============================================================================
// COMPOSER
// =============================================================================

/// Assembles the final reply string
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplyComposer;

impl ReplyComposer {
    /// Create new composer
    pub fn new() -> Self {
        Self
    }

    /// Build a reply for `handle` from a score, its tone band, and the
    /// number of posts analyzed
    ///
    /// Fragment order: emoji, greeting, message, detail, suggestion, joined
    /// by single spaces. Message and suggestion are drawn independently
    /// from the tone's pools via the injected picker.
    pub fn compose(
        &self,
        handle: &str,
        score: f64,
        tone: Tone,
        post_count: usize,
        picker: &mut dyn VariantPicker,
    ) -> String {
        let emoji = emoji_for(score);
        let pool = pool_for(tone);
        let message = pick_variant(pool.messages, picker);
        let suggestion = pick_variant(pool.suggestions, picker);

        format!(
            "{} Hey @{}! {} I read your last {} posts and your vibe score is {}. {}",
            emoji,
            handle,
            message,
            post_count,
            format_score(score),
            suggestion,
        )
    }
}

/// Draw one variant; single-entry pools never consume entropy
fn pick_variant(pool: &'static [&'static str], picker: &mut dyn VariantPicker) -> &'static str {
    if pool.len() <= 1 {
        return pool[0];
    }
    pool[picker.pick(pool.len()) % pool.len()]
}

// =============================================================================
// TESTS
// =============================================================================
