//! Outbound relay for simulated outgoing transfers.

use chrono::Utc;
use reqwest::header;
use reqwest::Client;
use serde_json::Value;

/// Forwards `/send` bodies to the scheme adapter's outbound API.
///
/// A single POST to `{base_url}/transfers`, no retries: the caller gets the
/// downstream outcome, whatever it is.
///
/// # Example
///
/// ```ignore
/// use dfsp_sim_http::OutboundRelay;
///
/// let relay = OutboundRelay::new("http://scheme-adapter:4001");
/// let downstream = relay.forward_transfer(&body).await?;
/// ```
#[derive(Debug, Clone)]
pub struct OutboundRelay {
    client: Client,
    base_url: String,
}

impl OutboundRelay {
    /// Create a relay targeting the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a relay with a caller-supplied reqwest client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the body to `{base_url}/transfers` and return the downstream
    /// body verbatim.
    ///
    /// Any failure — connect error, non-2xx status, unparseable body — comes
    /// back as a single `reqwest::Error`.
    pub async fn forward_transfer(&self, body: &Value) -> Result<Value, reqwest::Error> {
        let url = format!("{}/transfers", self.base_url);

        tracing::debug!(%url, "forwarding outbound transfer");

        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .header(header::DATE, http_date())
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        response.json().await
    }
}

/// Current time in the RFC 7231 fixed-date format, e.g.
/// `Sun, 06 Nov 1994 08:49:37 GMT`.
fn http_date() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_keeps_its_base_url() {
        let relay = OutboundRelay::new("http://localhost:4001");
        assert_eq!(relay.base_url(), "http://localhost:4001");
    }

    #[test]
    fn custom_client_is_accepted() {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        let relay = OutboundRelay::with_client(client, "http://localhost:4001");
        assert_eq!(relay.base_url(), "http://localhost:4001");
    }

    #[test]
    fn http_date_is_rfc7231_shaped() {
        let date = http_date();
        assert!(date.ends_with(" GMT"));
        // "Sun, 06 Nov 1994 08:49:37 GMT" is 29 characters
        assert_eq!(date.len(), 29);
    }
}
