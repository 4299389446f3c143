//! Wire types for the Warbler JSON API.
//!
//! Field names follow the server's serialized shapes exactly, including
//! the `modify_DOM` flag and the literal like acknowledgment body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body the server answers with when a like toggle succeeded.
pub const LIKE_SUCCESS_MARKER: &str = "Success!";

/// A warble as serialized by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarblePayload {
    pub id: u64,
    pub user_id: u64,
    pub text: String,
    #[serde(default)]
    pub location: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A user profile as serialized by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorPayload {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Request body for `POST /messages/{id}/like`.
#[derive(Debug, Clone, Serialize)]
pub struct LikeRequest<'a> {
    pub csrf_token: &'a str,
}

/// Request body for `POST /messages/new`.
#[derive(Debug, Clone, Serialize)]
pub struct ComposeRequest<'a> {
    pub csrf_token: &'a str,
    pub text: &'a str,
    pub location: &'a str,
}

/// Request body for `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response of `POST /messages/new`: the created warble, its author,
/// and whether the caller should patch its own list.
#[derive(Debug, Clone, Deserialize)]
pub struct ComposeResponse {
    pub msg: WarblePayload,
    pub user: AuthorPayload,
    #[serde(rename = "modify_DOM")]
    pub modify_dom: bool,
}

/// One item of the timeline bootstrap, pairing a warble with its author,
/// the viewer's current like state, and the per-form anti-forgery token.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineItem {
    pub msg: WarblePayload,
    pub user: AuthorPayload,
    #[serde(default)]
    pub liked_by_viewer: bool,
    pub csrf_token: String,
}

/// Response of `GET /messages`: viewer profile, the composer form token,
/// and the listed warbles.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineResponse {
    pub viewer: AuthorPayload,
    pub csrf_token: String,
    pub items: Vec<TimelineItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_response_parses_modify_dom_key() {
        let json = r#"{
            "msg": {"id": 7, "user_id": 3, "text": "hello", "timestamp": "2021-03-05T00:00:00Z"},
            "user": {"id": 3, "username": "demo", "image_url": "/static/images/default-pic.png"},
            "modify_DOM": true
        }"#;
        let resp: ComposeResponse = serde_json::from_str(json).unwrap();
        assert!(resp.modify_dom);
        assert_eq!(resp.msg.id, 7);
        assert_eq!(resp.user.username, "demo");
        assert!(resp.msg.location.is_none());
    }

    #[test]
    fn test_like_request_serializes_token_only() {
        let body = serde_json::to_string(&LikeRequest { csrf_token: "abc" }).unwrap();
        assert_eq!(body, r#"{"csrf_token":"abc"}"#);
    }

    #[test]
    fn test_timeline_item_defaults() {
        let json = r#"{
            "msg": {"id": 1, "user_id": 2, "text": "hi", "timestamp": "2024-01-01T10:00:00Z"},
            "user": {"id": 2, "username": "alice"},
            "csrf_token": "tok-1"
        }"#;
        let item: TimelineItem = serde_json::from_str(json).unwrap();
        assert!(!item.liked_by_viewer);
        assert!(item.user.image_url.is_none());
        assert_eq!(item.csrf_token, "tok-1");
    }
}
