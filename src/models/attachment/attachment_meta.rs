//! Attachment metadata and its flat-column mapping.
//!
//! An email carries at most one attachment. On the wire it is a nested
//! optional object; in the `emails` table it is four nullable columns.
//! Presence is keyed on `attachment_name` alone: the other three columns
//! are never interpreted when the name is null.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentMeta {
  pub file_name: String,
  pub file_size: String,
  pub file_type: String,
  #[serde(default)]
  pub download_url: Option<String>,
}

/// The four attachment columns in table order: name, size, type, url.
pub type AttachmentColumns = (
  Option<String>,
  Option<String>,
  Option<String>,
  Option<String>,
);

/// Flatten an optional attachment into its column group.
/// `None` maps to four nulls; `Some` fills name, size and type and carries
/// the url through as-is.
pub fn to_columns(attachment: Option<&AttachmentMeta>) -> AttachmentColumns {
  match attachment {
    Some(a) => (
      Some(a.file_name.clone()),
      Some(a.file_size.clone()),
      Some(a.file_type.clone()),
      a.download_url.clone(),
    ),
    None => (None, None, None, None),
  }
}

/// Rebuild the optional attachment from its column group. A null name means
/// no attachment regardless of what the other columns hold.
pub fn from_columns(
  name: Option<String>,
  size: Option<String>,
  file_type: Option<String>,
  url: Option<String>,
) -> Option<AttachmentMeta> {
  let file_name = name?;
  Some(AttachmentMeta {
    file_name,
    file_size: size.unwrap_or_default(),
    file_type: file_type.unwrap_or_default(),
    download_url: url,
  })
}
