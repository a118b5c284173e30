//! Partial-update payload for an email record.
//!
//! Each flag is three-state: absent leaves the stored value untouched,
//! `false` and `true` overwrite it. Only these two flags are mutable after
//! creation.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct EmailPatch {
  pub is_read: Option<bool>,
  pub is_archived: Option<bool>,
}

impl EmailPatch {
  /// True when the patch supplies no fields at all.
  pub fn is_empty(&self) -> bool {
    self.is_read.is_none() && self.is_archived.is_none()
  }
}
