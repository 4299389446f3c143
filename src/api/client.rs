//! HTTP client for the Warbler server.
//!
//! One request per user action, no retries. A session cookie from
//! `POST /login` authenticates the later calls; the anti-forgery token
//! travels in each request body.

use super::types::{
    ComposeRequest, ComposeResponse, LikeRequest, LoginRequest, TimelineResponse,
    LIKE_SUCCESS_MARKER,
};

/// Thin wrapper around `reqwest::Client` bound to one server.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the given base URL (trailing slash tolerated).
    pub fn new(base_url: &str) -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /login` — establishes the session cookie.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), String> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| format!("Login request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("Login rejected: {}", response.status()));
        }
        Ok(())
    }

    /// `GET /messages` — timeline bootstrap with per-form tokens.
    pub async fn fetch_timeline(&self) -> Result<TimelineResponse, String> {
        let response = self
            .http
            .get(self.url("/messages"))
            .send()
            .await
            .map_err(|e| format!("Timeline request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("Timeline request rejected: {}", response.status()));
        }

        response
            .json::<TimelineResponse>()
            .await
            .map_err(|e| format!("Failed to parse timeline response: {}", e))
    }

    /// `POST /messages/{id}/like` — toggles the viewer's like relation.
    ///
    /// Returns `Ok(true)` only when the response body is the server's
    /// literal success marker. Any other 2xx body is `Ok(false)`: the
    /// caller must leave the liked state untouched.
    pub async fn toggle_like(&self, message_id: u64, csrf_token: &str) -> Result<bool, String> {
        let response = self
            .http
            .post(self.url(&format!("/messages/{}/like", message_id)))
            .json(&LikeRequest { csrf_token })
            .send()
            .await
            .map_err(|e| format!("Like request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("Like rejected: {}", response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read like response: {}", e))?;
        Ok(body == LIKE_SUCCESS_MARKER)
    }

    /// `POST /messages/new` — creates a warble.
    pub async fn post_warble(
        &self,
        text: &str,
        location: &str,
        csrf_token: &str,
    ) -> Result<ComposeResponse, String> {
        let response = self
            .http
            .post(self.url("/messages/new"))
            .json(&ComposeRequest {
                csrf_token,
                text,
                location,
            })
            .send()
            .await
            .map_err(|e| format!("Compose request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("Compose rejected: {}", response.status()));
        }

        response
            .json::<ComposeResponse>()
            .await
            .map_err(|e| format!("Failed to parse compose response: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:5001/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5001");
        assert_eq!(
            client.url("/messages/42/like"),
            "http://localhost:5001/messages/42/like"
        );
    }

    #[test]
    fn test_success_marker_is_exact() {
        // The icon flip keys off the exact body, not a prefix match.
        assert_eq!(LIKE_SUCCESS_MARKER, "Success!");
        assert_ne!("Success!\n", LIKE_SUCCESS_MARKER);
        assert_ne!("success!", LIKE_SUCCESS_MARKER);
    }
}
