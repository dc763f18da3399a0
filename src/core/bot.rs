//! Mention loop: poll notifications, analyze the mentioner, reply
//!
//! Every mention gets its own pipeline run (fetch → aggregate → classify →
//! compose → reply). A failure inside one pipeline degrades to a fixed
//! apology reply; a failed apology send is logged and swallowed so the loop
//! keeps breathing.

use std::collections::HashSet;
use std::time::Duration;

use crate::core::analyzer::ToneAnalyzer;
use crate::core::classifier::ToneTable;
use crate::core::client::BskyClient;
use crate::core::composer::{emoji_for, validate_pools, ReplyComposer, RngPicker};
use crate::types::{BotError, Notification, PostRef, ReplyRef, VibeReport};
use crate::{DEFAULT_POST_LIMIT, POLL_INTERVAL_SECS};

/// Reply sent when the pipeline fails mid-mention
pub const APOLOGY_TEXT: &str = "😔 Sorry! I tripped over my own wires reading your vibe. \
                                Mention me again in a bit and I'll give it another shot.";

/// The mention-handling bot
pub struct VibeBot {
    client: BskyClient,
    analyzer: ToneAnalyzer,
    table: ToneTable,
    composer: ReplyComposer,
    /// Mention URIs already answered this session
    seen: HashSet<String>,
    post_limit: usize,
}

impl VibeBot {
    /// Bot over an authenticated client
    pub fn new(client: BskyClient) -> Self {
        validate_pools();
        Self {
            client,
            analyzer: ToneAnalyzer::new(),
            table: ToneTable::default(),
            composer: ReplyComposer::new(),
            seen: HashSet::new(),
            post_limit: DEFAULT_POST_LIMIT,
        }
    }

    /// Cap the number of posts fetched per analysis
    pub fn with_post_limit(mut self, limit: usize) -> Self {
        self.post_limit = limit.max(1);
        self
    }

    /// Poll forever
    ///
    /// A failed poll is logged and retried on the next tick; only setup
    /// problems (no session) escape before the loop starts.
    pub async fn run(&mut self) -> Result<(), BotError> {
        if self.client.did().is_none() {
            return Err(BotError::NotAuthenticated);
        }
        tracing::info!(interval_secs = POLL_INTERVAL_SECS, "mention loop started");

        loop {
            if let Err(error) = self.poll_once().await {
                tracing::warn!(%error, "poll failed");
            }
            tokio::time::sleep(Duration::from_secs(POLL_INTERVAL_SECS)).await;
        }
    }

    /// One poll: answer every unread mention, then mark the batch seen
    pub async fn poll_once(&mut self) -> Result<(), BotError> {
        let list = self.client.list_notifications().await?;
        let mentions: Vec<Notification> = list
            .notifications
            .into_iter()
            .filter(|n| n.reason == "mention" && !n.is_read && !self.seen.contains(&n.uri))
            .collect();

        if mentions.is_empty() {
            return Ok(());
        }
        tracing::info!(count = mentions.len(), "mentions to answer");

        for mention in &mentions {
            self.seen.insert(mention.uri.clone());
            match self.answer(mention).await {
                Ok(report) => {
                    tracing::info!(
                        handle = %mention.author.handle,
                        report = %report.to_parseable_string(),
                        "replied"
                    );
                }
                Err(error) => {
                    tracing::warn!(uri = %mention.uri, %error, "pipeline failed, apologizing");
                    self.apologize(mention).await;
                }
            }
        }

        self.client.update_seen().await?;
        Ok(())
    }

    /// Full pipeline for one mention
    async fn answer(&mut self, mention: &Notification) -> Result<VibeReport, BotError> {
        let texts = self
            .client
            .fetch_recent_posts(&mention.author.did, self.post_limit)
            .await?;

        let score = self.analyzer.aggregate(&texts);
        let tone = self.table.classify(score);

        let mut picker = RngPicker::new();
        let reply_text =
            self.composer
                .compose(&mention.author.handle, score, tone, texts.len(), &mut picker);

        self.client
            .send_reply(&reply_text, thread_refs(mention), &mention.author)
            .await?;

        Ok(VibeReport::new(
            score,
            tone,
            emoji_for(score).to_string(),
            texts.len(),
        ))
    }

    /// Best-effort apology; a failed send is logged and swallowed
    async fn apologize(&self, mention: &Notification) {
        if let Err(error) = self
            .client
            .send_reply(APOLOGY_TEXT, thread_refs(mention), &mention.author)
            .await
        {
            tracing::warn!(uri = %mention.uri, %error, "apology send failed");
        }
    }
}

/// Root and parent refs for replying directly under a mention
fn thread_refs(mention: &Notification) -> ReplyRef {
    let target = PostRef {
        uri: mention.uri.clone(),
        cid: mention.cid.clone(),
    };
    ReplyRef {
        root: target.clone(),
        parent: target,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Author;

    fn mention() -> Notification {
        Notification {
            uri: "at://did:plc:abc/app.bsky.feed.post/1".to_string(),
            cid: "bafy1".to_string(),
            author: Author {
                did: "did:plc:abc".to_string(),
                handle: "alice.test".to_string(),
                display_name: None,
            },
            reason: "mention".to_string(),
            is_read: false,
            indexed_at: "2024-05-01T12:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_thread_refs_point_at_the_mention() {
        let refs = thread_refs(&mention());
        assert_eq!(refs.root.uri, refs.parent.uri);
        assert_eq!(refs.parent.cid, "bafy1");
    }

    #[test]
    fn test_apology_fits_a_post() {
        // app.bsky.feed.post caps text at 300 graphemes
        assert!(APOLOGY_TEXT.chars().count() <= 300);
    }
}
