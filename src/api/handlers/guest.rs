use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateGuestRequest, ListGuestsQuery},
    responses::DataResponse,
};
use crate::api::handlers::payload;
use crate::domain::models::guest::GuestRecord;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_guests(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListGuestsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let guests = match query.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => state.guest_repo.find_by_name(name).await?.into_iter().collect(),
        None => state.guest_repo.list().await?,
    };
    Ok(Json(DataResponse::new(guests)))
}

pub async fn create_guest(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateGuestRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let valid = payload(body)?.validate()?;

    let guest = GuestRecord::new(valid.name, valid.invite_link);
    let created = state.guest_repo.create(&guest).await?;

    info!("Created guest: {}", created.id);
    Ok((StatusCode::CREATED, Json(DataResponse::new(created))))
}

pub async fn delete_guest(
    State(state): State<Arc<AppState>>,
    Path(guest_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if guest_id.trim().is_empty() {
        return Err(AppError::BadRequest("Guest id is missing.".into()));
    }

    state.guest_repo.delete(&guest_id).await?;
    info!("Deleted guest: {}", guest_id);
    Ok(Json(serde_json::json!({"success": true})))
}
