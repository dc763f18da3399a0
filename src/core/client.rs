//! Bluesky XRPC client
//!
//! Thin wrapper over the handful of endpoints the bot needs. Authenticated
//! calls go to the PDS with an app-password session; one-shot CLI reads go
//! through the unauthenticated public AppView.

use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::types::{
    Author, AuthorFeed, BotError, CreateRecordRequest, Facet, FacetFeature, FacetIndex, NewPost,
    NotificationList, PostRef, ReplyRef, Session, XrpcErrorBody,
};
use crate::{FEED_PAGE_LIMIT, NOTIFICATION_PAGE_LIMIT};

/// Default PDS endpoint
pub const DEFAULT_SERVICE: &str = "https://bsky.social";

/// Unauthenticated AppView endpoint for public reads
pub const PUBLIC_APPVIEW: &str = "https://public.api.bsky.app";

/// XRPC client with optional session state
#[derive(Debug)]
pub struct BskyClient {
    http: reqwest::Client,
    service: String,
    session: Option<Session>,
}

impl BskyClient {
    /// Client against a PDS; call `login` before authenticated endpoints
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            service: service.into(),
            session: None,
        }
    }

    /// Client against the public AppView (reads only)
    pub fn public() -> Self {
        Self::new(PUBLIC_APPVIEW)
    }

    /// Authenticated DID, if logged in
    pub fn did(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.did.as_str())
    }

    /// Authenticated handle, if logged in
    pub fn handle(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.handle.as_str())
    }

    /// com.atproto.server.createSession
    pub async fn login(&mut self, identifier: &str, password: &str) -> Result<(), BotError> {
        let url = self.endpoint("com.atproto.server.createSession");
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "identifier": identifier,
                "password": password,
            }))
            .send()
            .await?;

        let session: Session = decode(response).await?;
        tracing::info!(handle = %session.handle, did = %session.did, "session created");
        self.session = Some(session);
        Ok(())
    }

    /// app.bsky.notification.listNotifications
    pub async fn list_notifications(&self) -> Result<NotificationList, BotError> {
        let url = self.endpoint("app.bsky.notification.listNotifications");
        let response = self
            .http
            .get(&url)
            .header("Authorization", self.auth_header()?)
            .query(&[("limit", NOTIFICATION_PAGE_LIMIT.to_string())])
            .send()
            .await?;
        decode(response).await
    }

    /// app.bsky.notification.updateSeen
    pub async fn update_seen(&self) -> Result<(), BotError> {
        let url = self.endpoint("app.bsky.notification.updateSeen");
        let response = self
            .http
            .post(&url)
            .header("Authorization", self.auth_header()?)
            .json(&serde_json::json!({ "seenAt": Utc::now() }))
            .send()
            .await?;
        ensure_ok(response).await
    }

    /// Recent post bodies for an actor (handle or DID) via the author feed,
    /// following cursors until `limit` texts are collected
    ///
    /// Reposts are skipped; the vibe belongs to the author's own words.
    pub async fn fetch_recent_posts(
        &self,
        actor: &str,
        limit: usize,
    ) -> Result<Vec<String>, BotError> {
        let url = self.endpoint("app.bsky.feed.getAuthorFeed");
        let mut texts = Vec::new();
        let mut cursor: Option<String> = None;

        while texts.len() < limit {
            let page = FEED_PAGE_LIMIT.min(limit - texts.len());
            let mut query = vec![
                ("actor".to_string(), actor.to_string()),
                ("limit".to_string(), page.to_string()),
            ];
            if let Some(ref c) = cursor {
                query.push(("cursor".to_string(), c.clone()));
            }

            let mut request = self.http.get(&url).query(&query);
            if let Some(ref session) = self.session {
                request = request.header("Authorization", format!("Bearer {}", session.access_jwt));
            }

            let feed: AuthorFeed = decode(request.send().await?).await?;
            if feed.feed.is_empty() {
                break;
            }
            for item in feed.feed {
                if texts.len() >= limit {
                    break;
                }
                if item.reason.is_some() {
                    continue;
                }
                texts.push(item.post.record.text);
            }
            match feed.cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        Ok(texts)
    }

    /// Post a reply threaded under the given refs, carrying a mention facet
    /// for the addressed author
    pub async fn send_reply(
        &self,
        text: &str,
        reply: ReplyRef,
        mention: &Author,
    ) -> Result<PostRef, BotError> {
        let session = self.session.as_ref().ok_or(BotError::NotAuthenticated)?;

        let record = NewPost {
            record_type: "app.bsky.feed.post".to_string(),
            text: text.to_string(),
            created_at: Utc::now(),
            reply: Some(reply),
            facets: mention_facet(text, mention),
        };
        let request = CreateRecordRequest {
            repo: session.did.clone(),
            collection: "app.bsky.feed.post".to_string(),
            record,
        };

        let url = self.endpoint("com.atproto.repo.createRecord");
        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", session.access_jwt))
            .json(&request)
            .send()
            .await?;
        decode(response).await
    }

    fn endpoint(&self, nsid: &str) -> String {
        format!("{}/xrpc/{}", self.service, nsid)
    }

    fn auth_header(&self) -> Result<String, BotError> {
        let session = self.session.as_ref().ok_or(BotError::NotAuthenticated)?;
        Ok(format!("Bearer {}", session.access_jwt))
    }
}

/// Facet for the "@handle" span in the reply text, empty when absent
///
/// Facet spans are byte offsets into the UTF-8 text, which is exactly what
/// `str::find` returns.
pub fn mention_facet(text: &str, mention: &Author) -> Vec<Facet> {
    let needle = format!("@{}", mention.handle);
    match text.find(&needle) {
        Some(start) => vec![Facet {
            index: FacetIndex {
                byte_start: start,
                byte_end: start + needle.len(),
            },
            features: vec![FacetFeature {
                feature_type: "app.bsky.richtext.facet#mention".to_string(),
                did: mention.did.clone(),
            }],
        }],
        None => Vec::new(),
    }
}

/// Decode a response, converting XRPC error bodies into `BotError::Xrpc`
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BotError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        Err(xrpc_error(status.as_u16(), response).await)
    }
}

/// Check status only, for endpoints with empty response bodies
async fn ensure_ok(response: reqwest::Response) -> Result<(), BotError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(xrpc_error(status.as_u16(), response).await)
    }
}

async fn xrpc_error(status: u16, response: reqwest::Response) -> BotError {
    let body: XrpcErrorBody = response.json().await.unwrap_or_default();
    BotError::Xrpc {
        status,
        error: body.error,
        message: body.message.unwrap_or_default(),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> Author {
        Author {
            did: "did:plc:abc123".to_string(),
            handle: "alice.test".to_string(),
            display_name: None,
        }
    }

    #[test]
    fn test_mention_facet_spans_the_handle() {
        let text = "🙂 Hey @alice.test! Nice vibes.";
        let facets = mention_facet(text, &author());

        assert_eq!(facets.len(), 1);
        let span = &facets[0].index;
        // Byte offsets, not char offsets: the emoji is 4 bytes
        assert_eq!(&text.as_bytes()[span.byte_start..span.byte_end], b"@alice.test");
        assert_eq!(facets[0].features[0].did, "did:plc:abc123");
    }

    #[test]
    fn test_mention_facet_absent_handle() {
        let facets = mention_facet("no mention here", &author());
        assert!(facets.is_empty());
    }

    #[test]
    fn test_endpoint_urls() {
        let client = BskyClient::new("https://bsky.social");
        assert_eq!(
            client.endpoint("app.bsky.feed.getAuthorFeed"),
            "https://bsky.social/xrpc/app.bsky.feed.getAuthorFeed"
        );
    }

    #[test]
    fn test_unauthenticated_client_has_no_identity() {
        let client = BskyClient::public();
        assert!(client.did().is_none());
        assert!(client.handle().is_none());
        assert!(client.auth_header().is_err());
    }
}
