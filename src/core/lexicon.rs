//! AFINN-derived polarity lexicon
//!
//! Word weights are integers in [-5, 5] from the AFINN word list, stored as
//! f64. Lookup is exact-token: text is lowercased, punctuation-stripped, and
//! split on whitespace before matching. Tokens the table doesn't know
//! contribute nothing.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Base word weights
pub const BASE_WORDS: &[(&str, f64)] = &[
    ("abandon", -2.0),
    ("abuse", -3.0),
    ("abusive", -3.0),
    ("accident", -2.0),
    ("ache", -2.0),
    ("admire", 3.0),
    ("adorable", 3.0),
    ("adore", 3.0),
    ("afraid", -2.0),
    ("aggressive", -2.0),
    ("agree", 1.0),
    ("alarm", -2.0),
    ("alive", 1.0),
    ("amazing", 4.0),
    ("anger", -3.0),
    ("angry", -3.0),
    ("annoy", -2.0),
    ("annoyed", -2.0),
    ("annoying", -2.0),
    ("anxious", -2.0),
    ("apology", -1.0),
    ("appreciate", 2.0),
    ("ashamed", -2.0),
    ("attack", -1.0),
    ("awesome", 4.0),
    ("awful", -3.0),
    ("awkward", -2.0),
    ("bad", -3.0),
    ("badly", -3.0),
    ("beautiful", 3.0),
    ("beloved", 3.0),
    ("benefit", 2.0),
    ("best", 3.0),
    ("betray", -3.0),
    ("better", 2.0),
    ("bitter", -2.0),
    ("bless", 2.0),
    ("blessing", 3.0),
    ("bored", -2.0),
    ("boring", -3.0),
    ("brave", 2.0),
    ("breathtaking", 5.0),
    ("bright", 1.0),
    ("brilliant", 4.0),
    ("broken", -1.0),
    ("bully", -2.0),
    ("calm", 2.0),
    ("care", 2.0),
    ("celebrate", 3.0),
    ("champion", 2.0),
    ("charming", 3.0),
    ("cheer", 2.0),
    ("cheerful", 2.0),
    ("clever", 2.0),
    ("comfort", 2.0),
    ("comfortable", 2.0),
    ("complain", -2.0),
    ("confident", 2.0),
    ("confused", -2.0),
    ("congrats", 2.0),
    ("congratulations", 2.0),
    ("cool", 1.0),
    ("crap", -3.0),
    ("crash", -2.0),
    ("creative", 2.0),
    ("cried", -2.0),
    ("cruel", -3.0),
    ("cry", -1.0),
    ("curious", 1.0),
    ("cute", 2.0),
    ("damage", -3.0),
    ("damn", -4.0),
    ("dead", -3.0),
    ("defeated", -2.0),
    ("delight", 3.0),
    ("delighted", 3.0),
    ("depressed", -2.0),
    ("despair", -3.0),
    ("destroy", -3.0),
    ("destroyed", -3.0),
    ("devastated", -2.0),
    ("die", -3.0),
    ("dirty", -2.0),
    ("disappoint", -2.0),
    ("disappointed", -2.0),
    ("disappointing", -2.0),
    ("disaster", -2.0),
    ("disgust", -3.0),
    ("disgusting", -3.0),
    ("dislike", -2.0),
    ("distress", -2.0),
    ("doomed", -2.0),
    ("doubt", -1.0),
    ("dread", -2.0),
    ("dream", 1.0),
    ("dull", -2.0),
    ("dumb", -3.0),
    ("eager", 2.0),
    ("easy", 1.0),
    ("ecstatic", 4.0),
    ("embarrassed", -2.0),
    ("empty", -1.0),
    ("encourage", 2.0),
    ("enemy", -2.0),
    ("energetic", 2.0),
    ("enjoy", 2.0),
    ("enjoyed", 2.0),
    ("enthusiastic", 3.0),
    ("evil", -3.0),
    ("excellent", 3.0),
    ("excited", 3.0),
    ("exciting", 3.0),
    ("exhausted", -2.0),
    ("fabulous", 4.0),
    ("fail", -2.0),
    ("failed", -2.0),
    ("failure", -2.0),
    ("fake", -3.0),
    ("fantastic", 4.0),
    ("fatigue", -2.0),
    ("fear", -2.0),
    ("fearless", 2.0),
    ("fine", 2.0),
    ("flawless", 5.0),
    ("fool", -2.0),
    ("forgive", 1.0),
    ("fraud", -4.0),
    ("free", 1.0),
    ("fresh", 1.0),
    ("friendly", 2.0),
    ("frustrated", -2.0),
    ("frustrating", -2.0),
    ("fun", 4.0),
    ("funny", 4.0),
    ("furious", -3.0),
    ("generous", 2.0),
    ("glad", 3.0),
    ("gloomy", -2.0),
    ("good", 3.0),
    ("gorgeous", 3.0),
    ("grateful", 3.0),
    ("great", 3.0),
    ("greed", -3.0),
    ("grief", -2.0),
    ("gross", -2.0),
    ("grumpy", -2.0),
    ("happy", 3.0),
    ("harass", -3.0),
    ("harm", -2.0),
    ("hate", -3.0),
    ("hated", -3.0),
    ("hateful", -3.0),
    ("hates", -3.0),
    ("heartbroken", -3.0),
    ("hell", -4.0),
    ("help", 2.0),
    ("helpful", 2.0),
    ("helpless", -2.0),
    ("hero", 2.0),
    ("hilarious", 2.0),
    ("honest", 2.0),
    ("hope", 2.0),
    ("hopeful", 2.0),
    ("hopeless", -2.0),
    ("horrible", -3.0),
    ("horrific", -3.0),
    ("hug", 2.0),
    ("hurt", -2.0),
    ("hurts", -2.0),
    ("idiot", -3.0),
    ("ignorant", -2.0),
    ("ignore", -1.0),
    ("impressed", 3.0),
    ("impressive", 3.0),
    ("improve", 2.0),
    ("inspire", 2.0),
    ("inspiring", 2.0),
    ("insult", -2.0),
    ("interesting", 2.0),
    ("jealous", -2.0),
    ("jerk", -3.0),
    ("joke", 2.0),
    ("joy", 3.0),
    ("joyful", 3.0),
    ("kill", -3.0),
    ("killed", -3.0),
    ("kind", 2.0),
    ("kudos", 3.0),
    ("lame", -2.0),
    ("laugh", 1.0),
    ("lazy", -1.0),
    ("liar", -3.0),
    ("like", 2.0),
    ("liked", 2.0),
    ("lonely", -2.0),
    ("lose", -3.0),
    ("loser", -3.0),
    ("loss", -3.0),
    ("lost", -3.0),
    ("love", 3.0),
    ("loved", 3.0),
    ("lovely", 3.0),
    ("loves", 3.0),
    ("loving", 2.0),
    ("lucky", 3.0),
    ("mad", -3.0),
    ("magnificent", 4.0),
    ("marvelous", 4.0),
    ("mean", -2.0),
    ("mess", -2.0),
    ("miserable", -3.0),
    ("miss", -2.0),
    ("missed", -2.0),
    ("mistake", -2.0),
    ("motivated", 2.0),
    ("murder", -2.0),
    ("nasty", -3.0),
    ("nervous", -2.0),
    ("nice", 3.0),
    ("noble", 2.0),
    ("nonsense", -2.0),
    ("optimistic", 2.0),
    ("outraged", -3.0),
    ("outstanding", 5.0),
    ("pain", -2.0),
    ("painful", -2.0),
    ("panic", -3.0),
    ("pathetic", -2.0),
    ("peace", 2.0),
    ("peaceful", 2.0),
    ("perfect", 3.0),
    ("pessimistic", -2.0),
    ("pleasant", 3.0),
    ("please", 1.0),
    ("pleased", 3.0),
    ("pleasure", 3.0),
    ("poor", -2.0),
    ("positive", 2.0),
    ("powerful", 2.0),
    ("praise", 3.0),
    ("pretty", 1.0),
    ("proud", 2.0),
    ("punish", -2.0),
    ("rage", -2.0),
    ("reject", -1.0),
    ("relax", 2.0),
    ("relaxed", 2.0),
    ("relief", 1.0),
    ("relieved", 2.0),
    ("resent", -2.0),
    ("respect", 2.0),
    ("rich", 2.0),
    ("ridiculous", -3.0),
    ("rotten", -3.0),
    ("rude", -2.0),
    ("ruin", -2.0),
    ("ruined", -2.0),
    ("sad", -2.0),
    ("sadness", -2.0),
    ("safe", 1.0),
    ("satisfied", 2.0),
    ("scam", -2.0),
    ("scandal", -3.0),
    ("scare", -2.0),
    ("scared", -2.0),
    ("scary", -2.0),
    ("selfish", -3.0),
    ("shame", -2.0),
    ("shameful", -2.0),
    ("shit", -4.0),
    ("shocked", -2.0),
    ("sick", -2.0),
    ("silly", -1.0),
    ("sincere", 2.0),
    ("smart", 1.0),
    ("smile", 2.0),
    ("smiling", 2.0),
    ("sorrow", -2.0),
    ("sorry", -1.0),
    ("spam", -2.0),
    ("spectacular", 5.0),
    ("splendid", 3.0),
    ("stink", -2.0),
    ("strange", -1.0),
    ("stressed", -2.0),
    ("strong", 2.0),
    ("struggle", -2.0),
    ("stupid", -2.0),
    ("success", 2.0),
    ("successful", 3.0),
    ("suck", -3.0),
    ("sucks", -3.0),
    ("suffer", -2.0),
    ("suffering", -2.0),
    ("super", 3.0),
    ("superb", 5.0),
    ("support", 2.0),
    ("sweet", 2.0),
    ("terrible", -3.0),
    ("terrific", 4.0),
    ("terrified", -3.0),
    ("thank", 2.0),
    ("thankful", 2.0),
    ("thanks", 2.0),
    ("threat", -2.0),
    ("thrilled", 5.0),
    ("tired", -2.0),
    ("toxic", -3.0),
    ("tragedy", -2.0),
    ("tragic", -2.0),
    ("trash", -2.0),
    ("triumph", 4.0),
    ("trouble", -2.0),
    ("true", 2.0),
    ("trust", 1.0),
    ("ugly", -3.0),
    ("unbelievable", -1.0),
    ("uncomfortable", -2.0),
    ("unfair", -2.0),
    ("unfortunate", -2.0),
    ("unhappy", -2.0),
    ("unsafe", -2.0),
    ("upset", -2.0),
    ("useful", 2.0),
    ("useless", -2.0),
    ("victim", -3.0),
    ("victory", 3.0),
    ("violence", -3.0),
    ("vulnerable", -2.0),
    ("want", 1.0),
    ("war", -2.0),
    ("warm", 1.0),
    ("waste", -1.0),
    ("weak", -2.0),
    ("weird", -2.0),
    ("welcome", 2.0),
    ("whine", -2.0),
    ("win", 4.0),
    ("winner", 4.0),
    ("winning", 4.0),
    ("wish", 1.0),
    ("wonderful", 4.0),
    ("worried", -3.0),
    ("worry", -3.0),
    ("worse", -3.0),
    ("worst", -3.0),
    ("worthless", -2.0),
    ("worthy", 2.0),
    ("wow", 4.0),
    ("wrong", -2.0),
    ("yes", 1.0),
    ("yummy", 3.0),
];

lazy_static! {
    // Everything that is not a letter, digit, apostrophe, or whitespace
    // becomes a space before tokenizing. Unicode words survive as tokens;
    // they just never match the table.
    static ref RE_STRIP: Regex = Regex::new(r"[^\p{L}\p{N}'\s]").unwrap();

    /// Base lexicon as a lookup map
    static ref BASE_LEXICON: HashMap<&'static str, f64> = BASE_WORDS.iter().copied().collect();
}

/// Word-polarity lexicon with optional caller-supplied extras
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    extra: HashMap<String, f64>,
}

impl Lexicon {
    /// Lexicon over the base table only
    pub fn new() -> Self {
        Self {
            extra: HashMap::new(),
        }
    }

    /// Merge extra word weights over the base table
    ///
    /// Extras shadow base entries of the same word; they never replace the
    /// table as a whole.
    pub fn with_extra(extra: HashMap<String, f64>) -> Self {
        Self { extra }
    }

    /// Weight for a token, if known
    pub fn weight(&self, token: &str) -> Option<f64> {
        if let Some(weight) = self.extra.get(token) {
            return Some(*weight);
        }
        BASE_LEXICON.get(token).copied()
    }

    /// Number of known words
    pub fn len(&self) -> usize {
        BASE_LEXICON.len() + self.extra.keys().filter(|k| !BASE_LEXICON.contains_key(k.as_str())).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lowercase, strip punctuation, split on whitespace
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = RE_STRIP.replace_all(&lowered, " ");
    stripped
        .split_whitespace()
        .map(|token| token.trim_matches('\'').to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
