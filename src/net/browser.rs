//! `gloo-net` transport for the WASM build.

use super::api::{HttpReply, HttpTransport};
use super::error::AuthError;

/// Browser `fetch` via `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl HttpTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, AuthError> {
        let resp = gloo_net::http::Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| AuthError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        let status = resp.status();
        // A body cut off mid-read means the exchange never completed.
        let body = resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}
