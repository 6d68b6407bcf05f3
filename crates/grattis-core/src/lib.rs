//! # Grattis Core
//! Shared foundation for the grattis crates: the error type, the
//! environment-sourced job configuration, the append-only run log, the
//! trait seams between the orchestrator and its collaborators, and the
//! domain types that flow through them.

pub mod config;
pub mod error;
pub mod runlog;
pub mod traits;
pub mod types;

pub use config::{EmailConfig, GeneratorConfig, JobConfig, SmsAuth, SmsConfig, StoreConfig};
pub use error::{GrattisError, Result};
pub use runlog::RunLog;
pub use traits::{Mailer, Provider, SmsGateway};
pub use types::{Contact, Message, Role};
