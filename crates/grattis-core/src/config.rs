//! Environment-sourced job configuration.
//!
//! Everything a run needs is resolved once at startup into a
//! [`JobConfig`] and passed by reference into the store, provider, and
//! channel constructors. A missing or empty value is a fatal
//! configuration error, raised before any external call is made.

use crate::error::{GrattisError, Result};

const DEFAULT_DB_PORT: u16 = 3306;
const DEFAULT_MODEL: &str = "gpt-4o";

/// Contact store connection settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

/// Generation service settings.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub api_key: String,
    pub model: String,
}

/// SMTP sender settings. `user` doubles as the operator address that
/// receives the audit copy of every greeting.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub user: String,
    pub app_password: String,
}

/// SMS gateway authentication scheme. When both schemes are configured
/// the API key pair wins.
#[derive(Debug, Clone)]
pub enum SmsAuth {
    ApiKey { key_sid: String, key_secret: String },
    AuthToken(String),
}

/// SMS gateway settings.
#[derive(Debug, Clone)]
pub struct SmsConfig {
    pub account_sid: String,
    pub from_number: String,
    pub auth: SmsAuth,
}

/// Full configuration for one run.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub store: StoreConfig,
    pub generator: GeneratorConfig,
    pub email: EmailConfig,
    pub sms: SmsConfig,
}

impl JobConfig {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. An empty
    /// or whitespace-only value counts as missing, matching `.env`
    /// semantics where `KEY=` leaves the key unset for practical
    /// purposes.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| {
                GrattisError::config(format!("missing required environment variable {key}"))
            })
        };

        let port = match get("DB_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                GrattisError::config(format!("DB_PORT is not a valid port number: {raw}"))
            })?,
            None => DEFAULT_DB_PORT,
        };

        let store = StoreConfig {
            host: require("DB_HOST")?,
            port,
            user: require("DB_USER")?,
            password: require("DB_PASSWORD")?,
            database: require("DB_NAME")?,
        };

        let generator = GeneratorConfig {
            api_key: require("OPENAI_API_KEY")?,
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
        };

        let email = EmailConfig {
            user: require("EMAIL_USER")?,
            app_password: require("EMAIL_APP_PASSWORD")?,
        };

        let auth = match (
            get("TWILIO_API_KEY_SID"),
            get("TWILIO_API_KEY_SECRET"),
            get("TWILIO_AUTH_TOKEN"),
        ) {
            (Some(key_sid), Some(key_secret), _) => SmsAuth::ApiKey { key_sid, key_secret },
            (_, _, Some(token)) => SmsAuth::AuthToken(token),
            _ => {
                return Err(GrattisError::config(
                    "missing SMS authentication credentials: set TWILIO_AUTH_TOKEN or both TWILIO_API_KEY_SID and TWILIO_API_KEY_SECRET",
                ));
            }
        };

        let sms = SmsConfig {
            account_sid: require("TWILIO_ACCOUNT_SID")?,
            from_number: require("TWILIO_PHONE_NUMBER")?,
            auth,
        };

        Ok(Self {
            store,
            generator,
            email,
            sms,
        })
    }
}
