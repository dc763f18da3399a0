//! Integration tests for reply composition
//!
//! Tests the full path: texts → score → tone → ReplyComposer → reply string

use pretty_assertions::assert_eq;

use vibecheck::core::{
    emoji_for, format_score, pool_for, FixedPicker, ReplyComposer, ToneAnalyzer, ToneTable,
    VariantPicker,
};
use vibecheck::types::Tone;

/// End-to-end: positive posts produce a positive reply with the handle,
/// a positive-tier glyph, a pool message, and the formatted score
#[test]
fn test_end_to_end_positive_reply() {
    let analyzer = ToneAnalyzer::new();
    let table = ToneTable::default();
    let composer = ReplyComposer::new();

    let texts = ["I love this!", "This is great"];
    let score = analyzer.aggregate(&texts);
    let tone = table.classify(score);

    let reply = composer.compose("alice.test", score, tone, texts.len(), &mut FixedPicker(0));

    assert!(reply.contains("@alice.test"));
    assert!(reply.starts_with("😊"));
    assert!(reply.contains("your vibe score is +1."));
    assert!(reply.contains(pool_for(Tone::VeryNice).messages[0]));
    assert!(reply.contains("2 posts"));
}

/// Two calls with the same fixed picker produce byte-identical output
#[test]
fn test_reply_is_deterministic_under_fixed_picker() {
    let composer = ReplyComposer::new();

    let a = composer.compose("bob.test", -0.3, Tone::Mean, 15, &mut FixedPicker(0));
    let b = composer.compose("bob.test", -0.3, Tone::Mean, 15, &mut FixedPicker(0));

    assert_eq!(a, b);
}

/// Different picker indices change only the pooled fragments
#[test]
fn test_randomness_touches_only_fragments() {
    let composer = ReplyComposer::new();

    let replies: Vec<String> = (0..2)
        .map(|i| composer.compose("bob.test", -0.3, Tone::Mean, 15, &mut FixedPicker(i)))
        .collect();

    assert_ne!(replies[0], replies[1]);
    for reply in &replies {
        assert!(reply.starts_with(emoji_for(-0.3)));
        assert!(reply.contains("@bob.test"));
        assert!(reply.contains("your vibe score is -0.3."));
        assert!(reply.contains("15 posts"));
    }
}

/// The production picker stays inside the pools
#[test]
fn test_rng_picker_output_is_always_well_formed() {
    let composer = ReplyComposer::new();
    let mut picker = vibecheck::core::RngPicker::new();

    for _ in 0..50 {
        let reply = composer.compose("carol.test", 2.4, Tone::ExtremelyNice, 99, &mut picker);
        let pool = pool_for(Tone::ExtremelyNice);
        assert!(pool.messages.iter().any(|m| reply.contains(m)));
        assert!(pool.suggestions.iter().any(|s| reply.contains(s)));
    }
}

/// Score formatting rules: sign always, two decimals max, zeros stripped
#[test]
fn test_score_formatting_rules() {
    assert_eq!(format_score(1.5), "+1.5");
    assert_eq!(format_score(-2.0), "-2");
    assert_eq!(format_score(0.0), "+0");
    assert_eq!(format_score(0.5), "+0.5");
    assert_eq!(format_score(-0.25), "-0.25");
    assert_eq!(format_score(4.0), "+4");
}

/// Emoji and tone granularity are decoupled: a score can change glyph
/// without changing band, and vice versa
#[test]
fn test_emoji_and_tone_tables_are_independent() {
    let table = ToneTable::default();

    // 0.11 and 0.2 share a tone band but not an emoji
    assert_eq!(table.classify(0.11), table.classify(0.2));
    assert_ne!(emoji_for(0.11), emoji_for(0.2));

    // 0.2 and 0.3 share an emoji but not a tone band
    assert_ne!(table.classify(0.2), table.classify(0.3));
    assert_eq!(emoji_for(0.2), emoji_for(0.3));
}

/// A custom picker type plugs in through the trait object seam
#[test]
fn test_custom_picker_is_usable() {
    struct LastVariant;
    impl VariantPicker for LastVariant {
        fn pick(&mut self, len: usize) -> usize {
            len - 1
        }
    }

    let composer = ReplyComposer::new();
    let reply = composer.compose("dave.test", 0.0, Tone::Neutral, 3, &mut LastVariant);
    let pool = pool_for(Tone::Neutral);

    assert!(reply.contains(pool.messages[pool.messages.len() - 1]));
    assert!(reply.contains(pool.suggestions[pool.suggestions.len() - 1]));
}
