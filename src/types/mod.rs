//! Core types for vibecheck

mod error;
mod feed;
mod report;
mod score;
mod tone;

pub use error::BotError;
pub use feed::{
    Author, AuthorFeed, CreateRecordRequest, Facet, FacetFeature, FacetIndex, FeedItem, FeedPost,
    NewPost, Notification, NotificationList, PostRecord, PostRef, ReplyRef, Session, XrpcErrorBody,
};
pub use report::VibeReport;
pub use score::{AnalyzeOptions, LexiconHit, TextScore};
pub use tone::Tone;
