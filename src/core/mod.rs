//! Core modules for vibecheck

pub mod analyzer;
pub mod bot;
pub mod classifier;
pub mod client;
pub mod composer;
pub mod lexicon;

pub use analyzer::ToneAnalyzer;
pub use bot::{VibeBot, APOLOGY_TEXT};
pub use classifier::{ToneBand, ToneTable};
pub use client::{mention_facet, BskyClient, DEFAULT_SERVICE, PUBLIC_APPVIEW};
pub use composer::{
    emoji_for, format_score, pool_for, validate_pools, EmojiBand, FixedPicker, ReplyComposer,
    RngPicker, TonePool, VariantPicker, EMOJI_BANDS,
};
pub use lexicon::{tokenize, Lexicon, BASE_WORDS};
