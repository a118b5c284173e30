//! Create payload for an email record.

use crate::models::attachment::attachment_meta::AttachmentMeta;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NewEmail {
  pub sender_name: String,
  pub sender_email: String,
  pub recipient_name: String,
  pub recipient_email: String,
  pub subject: String,
  pub body: String,
  pub preview: String,
  /// Defaults to the capture instant when the caller omits it.
  pub received_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub is_read: bool,
  #[serde(default)]
  pub is_archived: bool,
  pub attachment: Option<AttachmentMeta>,
}
