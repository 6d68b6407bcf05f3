//! Outbound delivery channels.
//!
//! Each channel wraps one external delivery service behind a core
//! trait. Channels are independent of each other: a failure in one is
//! never allowed to affect the other, and neither is fatal to the run.

pub mod email;
pub mod sms;

pub use email::EmailChannel;
pub use sms::SmsChannel;
