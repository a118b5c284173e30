//! API representation of an email.

use super::db_email::DbEmail;
use crate::models::attachment::attachment_meta::{self, AttachmentMeta};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiEmail {
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
  pub attachment: Option<AttachmentMeta>,
}

impl From<DbEmail> for ApiEmail {
  fn from(d: DbEmail) -> Self {
    let attachment = attachment_meta::from_columns(
      d.attachment_name,
      d.attachment_size,
      d.attachment_type,
      d.attachment_url,
    );
    ApiEmail {
      id: d.id,
      sender_name: d.sender_name,
      sender_email: d.sender_email,
      recipient_name: d.recipient_name,
      recipient_email: d.recipient_email,
      subject: d.subject,
      body: d.body,
      preview: d.preview,
      received_at: d.received_at,
      is_read: d.is_read,
      is_archived: d.is_archived,
      attachment,
    }
  }
}
