//! Contact store access.
//!
//! One connection, one query, then close: the job reads the whole
//! `people` table and does its date filtering in memory. Nothing here
//! ever writes to the store.

use grattis_core::config::StoreConfig;
use grattis_core::error::{GrattisError, Result};
use grattis_core::types::Contact;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{ConnectOptions, Connection};

/// Internal row type for sqlx mapping.
#[derive(sqlx::FromRow)]
struct ContactRow {
    id: i64,
    name: String,
    relation: String,
    birthday: chrono::NaiveDate,
    phone: String,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            relation: row.relation,
            birthday: row.birthday,
            phone: row.phone,
        }
    }
}

/// Fetch every contact, in the store's natural return order.
///
/// Connectivity and authentication failures are fatal to the run: the
/// caller logs the error and exits non-zero, no retry and no partial
/// result.
pub async fn fetch_all_contacts(config: &StoreConfig) -> Result<Vec<Contact>> {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database);

    let mut conn = options
        .connect()
        .await
        .map_err(|e| GrattisError::store(format!("connection failed: {e}")))?;

    let rows = sqlx::query_as::<_, ContactRow>(
        "SELECT id, name, relation, birthday, phone FROM people",
    )
    .fetch_all(&mut conn)
    .await
    .map_err(|e| GrattisError::store(format!("contact query failed: {e}")))?;

    if let Err(e) = conn.close().await {
        tracing::warn!("contact store connection close failed: {e}");
    }

    tracing::debug!("fetched {} contacts", rows.len());
    Ok(rows.into_iter().map(Into::into).collect())
}
