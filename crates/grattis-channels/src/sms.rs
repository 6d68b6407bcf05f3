//! SMS channel over the Twilio Messages API.

use async_trait::async_trait;
use grattis_core::config::{SmsAuth, SmsConfig};
use grattis_core::error::{GrattisError, Result};
use grattis_core::traits::SmsGateway;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Twilio-backed SMS channel.
pub struct SmsChannel {
    config: SmsConfig,
    client: reqwest::Client,
}

impl SmsChannel {
    pub fn new(config: SmsConfig) -> Self {
        match &config.auth {
            SmsAuth::ApiKey { .. } => tracing::info!("Using Twilio API key authentication"),
            SmsAuth::AuthToken(_) => tracing::info!("Using Twilio auth token authentication"),
        }

        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{TWILIO_API_BASE}/Accounts/{}/Messages.json",
            self.config.account_sid
        )
    }

    /// HTTP basic-auth pair for the configured scheme: the API key SID
    /// with its secret, or the account SID with the auth token.
    fn credentials(&self) -> (&str, &str) {
        match &self.config.auth {
            SmsAuth::ApiKey { key_sid, key_secret } => (key_sid.as_str(), key_secret.as_str()),
            SmsAuth::AuthToken(token) => (self.config.account_sid.as_str(), token.as_str()),
        }
    }
}

#[async_trait]
impl SmsGateway for SmsChannel {
    async fn send_sms(&self, to: &str, body: &str) -> Result<String> {
        let (username, password) = self.credentials();
        let form = [
            ("To", to),
            ("From", self.config.from_number.as_str()),
            ("Body", body),
        ];

        let resp = self.client
            .post(self.messages_url())
            .basic_auth(username, Some(password))
            .form(&form)
            .send()
            .await
            .map_err(|e| GrattisError::channel(format!("Twilio request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(GrattisError::channel(format!("Twilio {status}: {text}")));
        }

        let json: serde_json::Value = resp.json().await
            .map_err(|e| GrattisError::channel(format!("Invalid Twilio response: {e}")))?;

        json["sid"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| GrattisError::channel("Twilio response missing message sid"))
    }
}
