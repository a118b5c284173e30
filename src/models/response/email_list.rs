//! Response envelope for the email list.

use crate::models::email::api_email::ApiEmail;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EmailList {
    pub emails: Vec<ApiEmail>,
}
