//! # grattis
//!
//! Daily birthday greeter. One run: load configuration, fetch the
//! contact list, and for every contact whose birthday is today,
//! generate a Swedish greeting and deliver it by SMS with an email
//! audit copy to the operator. Meant to be fired once a day by cron or
//! a systemd timer.
//!
//! Invocation takes no arguments; configuration comes from the
//! environment (a `.env` file next to the binary is honored). Exit
//! code 0 on a normal pass, including a pass with zero birthdays;
//! non-zero when configuration is incomplete or the contact store is
//! unreachable.

mod greeting;
mod job;

use anyhow::Result;
use grattis_channels::{EmailChannel, SmsChannel};
use grattis_core::JobConfig;
use grattis_core::runlog::{DEFAULT_LOG_PATH, RunLog};
use grattis_providers::OpenAiProvider;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("grattis=info")),
        )
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    let log = RunLog::open(DEFAULT_LOG_PATH)?;

    let config = match JobConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log.error(&format!("Missing required environment variables: {e}"));
            return Err(e.into());
        }
    };

    // Delivery setup comes before the store is touched; a bad delivery
    // configuration must abort the run before any external call.
    let provider = OpenAiProvider::new(&config.generator);
    let sms = SmsChannel::new(config.sms.clone());
    let mailer = match EmailChannel::new(&config.email) {
        Ok(mailer) => mailer,
        Err(e) => {
            log.error(&format!("Email channel setup failed: {e}"));
            return Err(e.into());
        }
    };

    let contacts = match grattis_store::fetch_all_contacts(&config.store).await {
        Ok(contacts) => {
            log.info("Successfully connected to the contact store");
            contacts
        }
        Err(e) => {
            log.error(&format!("Error connecting to the contact store: {e}"));
            println!("Could not connect to the database, exiting.");
            std::process::exit(1);
        }
    };

    let today = chrono::Local::now().date_naive();
    let report = job::run(
        &contacts,
        today,
        &provider,
        &sms,
        &mailer,
        &config.email.user,
        &log,
    )
    .await;

    tracing::info!(
        "run complete: {} contacts evaluated, {} birthdays, {} SMS sent, {} emails sent, {} skipped",
        report.evaluated,
        report.matched,
        report.sms_sent,
        report.emails_sent,
        report.skipped_empty
    );

    Ok(())
}
