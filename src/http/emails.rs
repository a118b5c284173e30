//! Email record JSON APIs.

use crate::{
  app::AppState,
  error::ApiError,
  models::{
    email::{api_email::ApiEmail, email_patch::EmailPatch, new_email::NewEmail},
    response::email_list::EmailList,
  },
  service,
};
use axum::{
  extract::{Path as AxumPath, State},
  http::StatusCode,
  Json,
};

pub async fn list_emails(State(state): State<AppState>) -> Result<Json<EmailList>, ApiError> {
  let emails = service::list_emails(&state.db).await?;
  Ok(Json(EmailList { emails }))
}

pub async fn get_email(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<i64>,
) -> Result<Json<ApiEmail>, ApiError> {
  let email = service::get_email(&state.db, id).await?;
  Ok(Json(email))
}

pub async fn create_email(
  State(state): State<AppState>,
  Json(input): Json<NewEmail>,
) -> Result<(StatusCode, Json<ApiEmail>), ApiError> {
  let email = service::create_email(&state.db, input).await?;
  Ok((StatusCode::CREATED, Json(email)))
}

pub async fn update_email(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<i64>,
  Json(patch): Json<EmailPatch>,
) -> Result<Json<ApiEmail>, ApiError> {
  let email = service::update_email(&state.db, id, patch).await?;
  Ok(Json(email))
}

pub async fn delete_email(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<i64>,
) -> Result<StatusCode, ApiError> {
  service::delete_email(&state.db, id).await?;
  Ok(StatusCode::NO_CONTENT)
}
