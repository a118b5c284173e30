//! Email-record operations: validation, wire/row mapping and the five
//! query shapes. Each operation is one bounded round-trip against the pool
//! and holds no state between calls.

use crate::{
  error::ApiError,
  models::{
    attachment::attachment_meta,
    email::{api_email::ApiEmail, db_email::DbEmail, email_patch::EmailPatch, new_email::NewEmail},
  },
};
use chrono::Utc;
use sqlx::SqlitePool;

const EMAIL_COLUMNS: &str = "id, sender_name, sender_email, recipient_name, recipient_email, \
   subject, body, preview, received_at, is_read, is_archived, \
   attachment_name, attachment_size, attachment_type, attachment_url";

/// All records, most recent first. Ties on the timestamp fall back to
/// insertion order so the listing is deterministic.
pub async fn list_emails(db: &SqlitePool) -> Result<Vec<ApiEmail>, ApiError> {
  let sql = format!(
    "SELECT {EMAIL_COLUMNS} FROM emails ORDER BY datetime(received_at) DESC, id ASC"
  );
  let rows: Vec<DbEmail> = sqlx::query_as(&sql).fetch_all(db).await?;
  Ok(rows.into_iter().map(ApiEmail::from).collect())
}

pub async fn get_email(db: &SqlitePool, id: i64) -> Result<ApiEmail, ApiError> {
  let sql = format!("SELECT {EMAIL_COLUMNS} FROM emails WHERE id = ?");
  let row: Option<DbEmail> = sqlx::query_as(&sql).bind(id).fetch_optional(db).await?;
  row.map(ApiEmail::from).ok_or(ApiError::NotFound)
}

/// Insert one record and return it as persisted, identifier included.
pub async fn create_email(db: &SqlitePool, input: NewEmail) -> Result<ApiEmail, ApiError> {
  validate_new_email(&input)?;

  let received_at = input.received_at.unwrap_or_else(Utc::now);
  let (att_name, att_size, att_type, att_url) =
    attachment_meta::to_columns(input.attachment.as_ref());

  let result = sqlx::query(
    "INSERT INTO emails (sender_name, sender_email, recipient_name, recipient_email, \
     subject, body, preview, received_at, is_read, is_archived, \
     attachment_name, attachment_size, attachment_type, attachment_url) \
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
  )
  .bind(&input.sender_name)
  .bind(&input.sender_email)
  .bind(&input.recipient_name)
  .bind(&input.recipient_email)
  .bind(&input.subject)
  .bind(&input.body)
  .bind(&input.preview)
  .bind(received_at)
  .bind(input.is_read)
  .bind(input.is_archived)
  .bind(att_name)
  .bind(att_size)
  .bind(att_type)
  .bind(att_url)
  .execute(db)
  .await?;

  // Re-read the persisted row so the response matches a later get exactly.
  get_email(db, result.last_insert_rowid()).await
}

/// Apply the supplied flags, leaving omitted ones untouched, and return the
/// record after mutation. Only `is_read` and `is_archived` are mutable.
pub async fn update_email(
  db: &SqlitePool,
  id: i64,
  patch: EmailPatch,
) -> Result<ApiEmail, ApiError> {
  // Existence is established before the patch is inspected, so a missing id
  // is NotFound even when the patch is empty.
  let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM emails WHERE id = ?")
    .bind(id)
    .fetch_optional(db)
    .await?;
  if exists.is_none() {
    return Err(ApiError::NotFound);
  }

  if patch.is_empty() {
    return Err(ApiError::Validation("no fields to update".into()));
  }

  let mut sets = Vec::new();
  if patch.is_read.is_some() {
    sets.push("is_read = ?");
  }
  if patch.is_archived.is_some() {
    sets.push("is_archived = ?");
  }
  let sql = format!("UPDATE emails SET {} WHERE id = ?", sets.join(", "));

  let mut query = sqlx::query(&sql);
  if let Some(v) = patch.is_read {
    query = query.bind(v);
  }
  if let Some(v) = patch.is_archived {
    query = query.bind(v);
  }
  let result = query.bind(id).execute(db).await?;
  if result.rows_affected() == 0 {
    return Err(ApiError::NotFound);
  }

  get_email(db, id).await
}

/// Remove the record permanently.
pub async fn delete_email(db: &SqlitePool, id: i64) -> Result<(), ApiError> {
  let result = sqlx::query("DELETE FROM emails WHERE id = ?")
    .bind(id)
    .execute(db)
    .await?;
  if result.rows_affected() == 0 {
    return Err(ApiError::NotFound);
  }
  Ok(())
}

fn validate_new_email(input: &NewEmail) -> Result<(), ApiError> {
  let required = [
    ("sender_name", &input.sender_name),
    ("sender_email", &input.sender_email),
    ("recipient_name", &input.recipient_name),
    ("recipient_email", &input.recipient_email),
    ("subject", &input.subject),
    ("body", &input.body),
    ("preview", &input.preview),
  ];
  for (field, value) in required {
    if value.trim().is_empty() {
      return Err(ApiError::Validation(format!("{field} must not be empty")));
    }
  }
  if let Some(a) = &input.attachment {
    for (field, value) in [
      ("attachment.file_name", &a.file_name),
      ("attachment.file_size", &a.file_size),
      ("attachment.file_type", &a.file_type),
    ] {
      if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{field} must not be empty")));
      }
    }
  }
  Ok(())
}
