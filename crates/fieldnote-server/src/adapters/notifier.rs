//! HTTP Activity Notifier
//!
//! Best-effort observer that delivers newly persisted activity records to
//! an external HTTP endpoint. Payloads can be signed with HMAC-SHA256 so
//! receivers are able to verify the origin.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use fieldnote::{Activity, ActivityObserver, MessagingError};

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpNotifier {
    client: Client,
    url: String,
    secret: Option<String>,
}

impl HttpNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .user_agent(concat!("fieldnote/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            url: url.into(),
            secret: None,
        }
    }

    /// Sign deliveries with HMAC-SHA256 using the given secret
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    fn sign_payload(&self, secret: &str, payload: &[u8]) -> String {
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        type HmacSha256 = Hmac<Sha256>;

        let mut mac =
            HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
        mac.update(payload);
        let result = mac.finalize();

        format!("sha256={}", hex::encode(result.into_bytes()))
    }
}

#[async_trait]
impl ActivityObserver for HttpNotifier {
    fn name(&self) -> &'static str {
        "http-notifier"
    }

    async fn notify(&self, activity: &Activity) -> Result<(), MessagingError> {
        let payload = serde_json::to_vec(activity).map_err(|e| {
            MessagingError::ExternalService(format!("Failed to serialize activity: {e}"))
        })?;

        let mut request = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json");

        if let Some(secret) = &self.secret {
            request = request.header("X-Fieldnote-Signature", self.sign_payload(secret, &payload));
        }

        let response = request
            .body(payload)
            .send()
            .await
            .map_err(|e| MessagingError::ExternalService(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MessagingError::ExternalService(format!(
                "Notification endpoint returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}
