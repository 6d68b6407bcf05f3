//! Email channel over SMTP with implicit TLS.

use async_trait::async_trait;
use grattis_core::config::EmailConfig;
use grattis_core::error::{GrattisError, Result};
use grattis_core::traits::Mailer;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

/// Fixed mail submission endpoint. `relay` connects on port 465 with
/// implicit TLS.
const SMTP_HOST: &str = "smtp.gmail.com";

/// SMTP-backed email channel. Sends from the configured account.
pub struct EmailChannel {
    sender: String,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailChannel {
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let creds = Credentials::new(config.user.clone(), config.app_password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(SMTP_HOST)
            .map_err(|e| GrattisError::channel(format!("SMTP transport setup failed: {e}")))?
            .credentials(creds)
            .build();

        Ok(Self {
            sender: config.user.clone(),
            transport,
        })
    }

    fn build_message(&self, subject: &str, body: &str, to: &str) -> Result<lettre::Message> {
        let from: Mailbox = self.sender.parse().map_err(|e| {
            GrattisError::channel(format!("invalid sender address {}: {e}", self.sender))
        })?;
        let recipient: Mailbox = to
            .parse()
            .map_err(|e| GrattisError::channel(format!("invalid recipient address {to}: {e}")))?;

        lettre::Message::builder()
            .from(from)
            .to(recipient)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| GrattisError::channel(format!("email build failed: {e}")))
    }
}

#[async_trait]
impl Mailer for EmailChannel {
    async fn send_email(&self, subject: &str, body: &str, to: &str) -> Result<()> {
        tracing::debug!("sending email to {to} with subject '{subject}'");
        let message = self.build_message(subject, body, to)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| GrattisError::channel(format!("email send failed: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> EmailChannel {
        EmailChannel::new(&EmailConfig {
            user: "sender@example.com".into(),
            app_password: "app-pass".into(),
        })
        .unwrap()
    }

    #[test]
    fn test_build_message_ok() {
        let msg = channel().build_message("Subject", "Body text", "operator@example.com");
        assert!(msg.is_ok());
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let err = channel()
            .build_message("Subject", "Body text", "not-an-address")
            .unwrap_err();
        assert!(matches!(err, GrattisError::Channel(_)));
    }
}
