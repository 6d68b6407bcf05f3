//! The per-contact pipeline: filter by birthday, generate, dispatch,
//! record.

use chrono::NaiveDate;
use grattis_core::runlog::RunLog;
use grattis_core::traits::{Mailer, Provider, SmsGateway};
use grattis_core::types::Contact;

use crate::greeting;

/// Subject line of the operator audit copy.
const AUDIT_SUBJECT: &str = "Happy Birthday - Script Generated Message";

/// Counters for one run, reported once at the end.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub evaluated: usize,
    pub matched: usize,
    pub sms_sent: usize,
    pub emails_sent: usize,
    pub skipped_empty: usize,
}

/// Drive one pass over `contacts`.
///
/// Contacts whose birthday is not `today` are skipped without a log
/// entry. For a match, generation comes first; when it yields nothing
/// the contact is skipped with one error entry. Otherwise SMS and email
/// are both attempted, each logged on its own, and a failure in either
/// never stops the loop or suppresses the other.
pub async fn run(
    contacts: &[Contact],
    today: NaiveDate,
    provider: &dyn Provider,
    sms: &dyn SmsGateway,
    mailer: &dyn Mailer,
    operator_email: &str,
    log: &RunLog,
) -> RunReport {
    let mut report = RunReport::default();

    for contact in contacts {
        report.evaluated += 1;
        if !contact.is_birthday(today) {
            continue;
        }
        report.matched += 1;

        log.info(&format!(
            "Generating birthday message for {}, relation: {}",
            contact.name, contact.relation
        ));

        let message =
            match greeting::generate_birthday_message(provider, &contact.name, &contact.relation)
                .await
            {
                Ok(Some(text)) => text,
                Ok(None) => {
                    log.error(&format!(
                        "Generation service returned no message for {}.",
                        contact.name
                    ));
                    report.skipped_empty += 1;
                    continue;
                }
                Err(e) => {
                    log.error(&format!("Generation failed for {}: {e}", contact.name));
                    report.skipped_empty += 1;
                    continue;
                }
            };

        match sms.send_sms(&contact.phone, &message).await {
            Ok(sid) => {
                report.sms_sent += 1;
                log.info(&format!(
                    "SMS sent successfully to {}. SID: {sid}",
                    contact.phone
                ));
            }
            Err(e) => log.error(&format!("Failed to send SMS to {}: {e}", contact.phone)),
        }

        let audit_body = format!(
            "The following birthday message was sent to {}:\n\n{message}",
            contact.name
        );
        match mailer
            .send_email(AUDIT_SUBJECT, &audit_body, operator_email)
            .await
        {
            Ok(()) => {
                report.emails_sent += 1;
                log.info("Email sent successfully");
            }
            Err(e) => log.error(&format!("Error sending email: {e}")),
        }

        log.info(&format!(
            "Generated message for {}: {message}",
            contact.name
        ));
    }

    report
}
