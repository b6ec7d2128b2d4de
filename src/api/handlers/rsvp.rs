use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateRsvpRequest, ListRsvpQuery},
    responses::DataResponse,
};
use crate::api::handlers::payload;
use crate::domain::models::rsvp::{Attendance, RsvpRecord};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_rsvps(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListRsvpQuery>,
) -> Result<impl IntoResponse, AppError> {
    // Unknown filter values are ignored rather than rejected.
    let filter = query.attendance.as_deref().and_then(Attendance::from_wire);
    let needle = query.search_needle();

    let mut rsvps = state.rsvp_repo.list(filter).await?;
    rsvps.retain(|r| r.matches_search(&needle));
    Ok(Json(DataResponse::new(rsvps)))
}

pub async fn create_rsvp(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateRsvpRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let new_rsvp = payload(body)?.validate()?;

    let rsvp = RsvpRecord::new(new_rsvp);
    let created = state.rsvp_repo.create(&rsvp).await?;

    info!(
        attendance = created.attendance.as_db_str(),
        channel = created.channel.label(),
        guest_count = created.guest_count,
        "Recorded RSVP {}", created.id
    );
    Ok((StatusCode::CREATED, Json(DataResponse::new(created))))
}
