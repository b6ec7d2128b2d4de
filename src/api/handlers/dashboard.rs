use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::DataResponse;
use crate::domain::services::{
    metrics::{build_timeline, summarize},
    share::{general_share_message, share_target},
};
use crate::error::AppError;
use std::sync::Arc;
use tracing::debug;

pub async fn get_metrics(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.rsvp_repo.list(None).await?;
    debug!("Summarizing {} RSVPs", records.len());
    Ok(Json(DataResponse::new(summarize(&records))))
}

pub async fn get_timeline(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.rsvp_repo.list(None).await?;
    Ok(Json(DataResponse::new(build_timeline(&records))))
}

pub async fn get_share_message(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let target = general_share_message(&state.templates, &state.config)?.map(share_target);
    Ok(Json(DataResponse::new(target)))
}
