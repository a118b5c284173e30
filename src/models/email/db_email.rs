//! Database row for an email.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct DbEmail {
    pub id: i64,
    pub sender_name: String,
    pub sender_email: String,
    pub recipient_name: String,
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
    pub preview: String,
    pub received_at: DateTime<Utc>,
    pub is_read: bool,
    pub is_archived: bool,
    pub attachment_name: Option<String>,
    pub attachment_size: Option<String>,
    pub attachment_type: Option<String>,
    pub attachment_url: Option<String>,
}
