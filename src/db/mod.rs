//! Database helpers: migrations, seeding and path handling.

use chrono::{TimeZone, Utc};
use sqlx::SqlitePool;
use std::path::Path;

/// Run SQLite migrations to create the emails table if absent.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS emails (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            sender_name TEXT NOT NULL,
            sender_email TEXT NOT NULL,
            recipient_name TEXT NOT NULL,
            recipient_email TEXT NOT NULL,
            subject TEXT NOT NULL,
            body TEXT NOT NULL,
            preview TEXT NOT NULL,
            received_at TEXT NOT NULL,
            is_read INTEGER DEFAULT 0,
            is_archived INTEGER DEFAULT 0,
            attachment_name TEXT,
            attachment_size TEXT,
            attachment_type TEXT,
            attachment_url TEXT
        )"#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Insert demo records when the table is empty so a fresh instance renders
/// a populated inbox. Two records carry attachment metadata, one does not.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM emails")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let samples: &[(
        &str,
        &str,
        &str,
        &str,
        &str,
        &str,
        &str,
        (i32, u32, u32, u32, u32),
        bool,
        Option<(&str, &str, &str, Option<&str>)>,
    )] = &[
        (
            "Noor Hadid",
            "noor.hadid@lumenworks.dev",
            "Sam Ellery",
            "sam.ellery@fernmail.app",
            "Launch checklist for Friday",
            "Hi Sam,\n\nThe release checklist is attached. Infra sign-off is done; \
             we still need the status page draft before Friday.\n\nNoor",
            "The release checklist is attached. Infra sign-off is done; we still need...",
            (2024, 8, 20, 9, 30),
            false,
            Some((
                "Launch-Checklist.pdf",
                "2.4 MB",
                "PDF",
                Some("https://files.lumenworks.dev/launch-checklist.pdf"),
            )),
        ),
        (
            "Priya Raman",
            "priya@fernmail.app",
            "Sam Ellery",
            "sam.ellery@fernmail.app",
            "Usage report, week 33",
            "Sam,\n\nWeekly usage numbers attached. Signups up 8%, churn flat.\n\nPriya",
            "Weekly usage numbers attached. Signups up 8%, churn flat...",
            (2024, 8, 19, 16, 12),
            true,
            Some(("Usage-W33.xlsx", "880 KB", "XLSX", None)),
        ),
        (
            "Fernmail Digest",
            "digest@fernmail.app",
            "Sam Ellery",
            "sam.ellery@fernmail.app",
            "Your weekly digest",
            "Hi Sam,\n\nHere is everything that happened in your workspace this week.\n\n\
             — Fernmail",
            "Here is everything that happened in your workspace this week...",
            (2024, 8, 18, 8, 0),
            true,
            None,
        ),
    ];

    for (
        sender_name,
        sender_email,
        recipient_name,
        recipient_email,
        subject,
        body,
        preview,
        (y, mo, d, h, mi),
        is_read,
        attachment,
    ) in samples
    {
        let received_at = Utc
            .with_ymd_and_hms(*y, *mo, *d, *h, *mi, 0)
            .single()
            .unwrap_or_else(Utc::now);
        let (att_name, att_size, att_type, att_url) = match attachment {
            Some((n, s, t, u)) => (Some(*n), Some(*s), Some(*t), *u),
            None => (None, None, None, None),
        };
        sqlx::query(
            "INSERT INTO emails (sender_name, sender_email, recipient_name, recipient_email, \
             subject, body, preview, received_at, is_read, is_archived, \
             attachment_name, attachment_size, attachment_type, attachment_url) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(sender_name)
        .bind(sender_email)
        .bind(recipient_name)
        .bind(recipient_email)
        .bind(subject)
        .bind(body)
        .bind(preview)
        .bind(received_at)
        .bind(is_read)
        .bind(false)
        .bind(att_name)
        .bind(att_size)
        .bind(att_type)
        .bind(att_url)
        .execute(pool)
        .await?;
    }
    Ok(())
}

/// Ensure SQLite file and parent folder exist for a given sqlx URL.
pub fn ensure_sqlite_path(db_url: &str) -> String {
    if !db_url.starts_with("sqlite:") {
        return db_url.to_string();
    }
    let path_part = db_url.trim_start_matches("sqlite://");
    if path_part == ":memory:" {
        return db_url.to_string();
    }
    let path_only = path_part.split_once('?').map_or(path_part, |(p, _)| p);
    if !path_only.is_empty() {
        let p = Path::new(path_only);
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        let _ = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(p);
    }
    db_url.to_string()
}
