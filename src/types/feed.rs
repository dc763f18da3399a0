//! Bluesky XRPC wire types
//!
//! Only the fields the bot actually reads or writes; everything else in the
//! wire objects is ignored on deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// SESSION
// =============================================================================

/// com.atproto.server.createSession response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_jwt: String,
    pub did: String,
    pub handle: String,
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// A post author (also the shape of a notification author)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub did: String,
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// app.bsky.notification.listNotifications response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationList {
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// One notification
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub uri: String,
    pub cid: String,
    pub author: Author,
    /// "mention", "reply", "like", "follow", "repost", "quote"
    pub reason: String,
    #[serde(default)]
    pub is_read: bool,
    pub indexed_at: DateTime<Utc>,
}

// =============================================================================
// AUTHOR FEED
// =============================================================================

/// app.bsky.feed.getAuthorFeed response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorFeed {
    pub feed: Vec<FeedItem>,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// One feed entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub post: FeedPost,
    /// Present when the entry is a repost; those are skipped
    #[serde(default)]
    pub reason: Option<serde_json::Value>,
}

/// A hydrated post view
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPost {
    pub uri: String,
    pub cid: String,
    pub author: Author,
    pub record: PostRecord,
}

/// app.bsky.feed.post record, read side
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    #[serde(default)]
    pub text: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// REPLIES
// =============================================================================

/// Strong reference to a post (uri + cid)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRef {
    pub uri: String,
    pub cid: String,
}

/// Threading refs for a reply post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyRef {
    pub root: PostRef,
    pub parent: PostRef,
}

/// Byte span a facet decorates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetIndex {
    pub byte_start: usize,
    pub byte_end: usize,
}

/// Mention feature inside a rich-text facet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetFeature {
    #[serde(rename = "$type")]
    pub feature_type: String,
    pub did: String,
}

/// One rich-text facet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facet {
    pub index: FacetIndex,
    pub features: Vec<FacetFeature>,
}

/// app.bsky.feed.post record, write side
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    #[serde(rename = "$type")]
    pub record_type: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReplyRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub facets: Vec<Facet>,
}

/// com.atproto.repo.createRecord request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    pub repo: String,
    pub collection: String,
    pub record: NewPost,
}

// =============================================================================
// ERRORS
// =============================================================================

/// XRPC error body ({"error": "...", "message": "..."})
#[derive(Debug, Clone, Default, Deserialize)]
pub struct XrpcErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_list_parses() {
        let json = r#"{
            "notifications": [{
                "uri": "at://did:plc:abc/app.bsky.feed.post/1",
                "cid": "bafy1",
                "author": {"did": "did:plc:abc", "handle": "alice.test", "displayName": "Alice"},
                "reason": "mention",
                "isRead": false,
                "indexedAt": "2024-05-01T12:00:00.000Z"
            }],
            "cursor": "page2"
        }"#;

        let list: NotificationList = serde_json::from_str(json).unwrap();
        assert_eq!(list.notifications.len(), 1);
        assert_eq!(list.notifications[0].reason, "mention");
        assert_eq!(list.notifications[0].author.handle, "alice.test");
        assert!(!list.notifications[0].is_read);
        assert_eq!(list.cursor.as_deref(), Some("page2"));
    }

    #[test]
    fn test_author_feed_parses_and_flags_reposts() {
        let json = r#"{
            "feed": [
                {"post": {"uri": "at://a/1", "cid": "c1",
                          "author": {"did": "did:plc:a", "handle": "a.test"},
                          "record": {"text": "hello", "createdAt": "2024-05-01T12:00:00.000Z"}}},
                {"post": {"uri": "at://b/2", "cid": "c2",
                          "author": {"did": "did:plc:b", "handle": "b.test"},
                          "record": {"text": "boost", "createdAt": "2024-05-01T12:01:00.000Z"}},
                 "reason": {"$type": "app.bsky.feed.defs#reasonRepost"}}
            ]
        }"#;

        let feed: AuthorFeed = serde_json::from_str(json).unwrap();
        assert_eq!(feed.feed.len(), 2);
        assert!(feed.feed[0].reason.is_none());
        assert!(feed.feed[1].reason.is_some());
        assert_eq!(feed.feed[0].post.record.text, "hello");
        assert!(feed.cursor.is_none());
    }

    #[test]
    fn test_new_post_serializes_record_type_and_camel_case() {
        let post = NewPost {
            record_type: "app.bsky.feed.post".to_string(),
            text: "hi".to_string(),
            created_at: "2024-05-01T12:00:00Z".parse().unwrap(),
            reply: None,
            facets: Vec::new(),
        };

        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"$type\":\"app.bsky.feed.post\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("\"reply\""));
        assert!(!json.contains("\"facets\""));
    }

    #[test]
    fn test_facet_serializes_byte_span() {
        let facet = Facet {
            index: FacetIndex { byte_start: 5, byte_end: 16 },
            features: vec![FacetFeature {
                feature_type: "app.bsky.richtext.facet#mention".to_string(),
                did: "did:plc:abc".to_string(),
            }],
        };

        let json = serde_json::to_string(&facet).unwrap();
        assert!(json.contains("\"byteStart\":5"));
        assert!(json.contains("\"byteEnd\":16"));
        assert!(json.contains("facet#mention"));
    }
}
