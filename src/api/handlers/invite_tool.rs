use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::IntoResponse,
    Json,
};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{GenerateGuestListRequest, ResolveGuestQuery, SaveRawNamesRequest, UpdateIntroRequest},
    responses::{DataResponse, TemplatesResponse},
};
use crate::api::handlers::payload;
use crate::domain::services::template::{BUILT_IN_TEMPLATES, LINK_PLACEHOLDER, NAME_PLACEHOLDER};
use crate::error::AppError;
use std::sync::Arc;

pub async fn get_state(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.invite_tool.view().await?;
    Ok(Json(DataResponse::new(view)))
}

pub async fn generate_guest_list(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateGuestListRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = payload(body)?;
    let view = state.invite_tool.generate(&request.raw_guest_names).await?;
    Ok(Json(DataResponse::new(view)))
}

pub async fn save_raw_names(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SaveRawNamesRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = payload(body)?;
    let view = state.invite_tool.save_raw_names(request.raw_guest_names).await?;
    Ok(Json(DataResponse::new(view)))
}

pub async fn update_intro(
    State(state): State<Arc<AppState>>,
    body: Result<Json<UpdateIntroRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = payload(body)?;
    let view = state.invite_tool.update_intro(request.intro_text).await?;
    Ok(Json(DataResponse::new(view)))
}

pub async fn list_templates() -> impl IntoResponse {
    Json(DataResponse::new(TemplatesResponse {
        templates: BUILT_IN_TEMPLATES.to_vec(),
        name_placeholder: NAME_PLACEHOLDER,
        link_placeholder: LINK_PLACEHOLDER,
    }))
}

pub async fn apply_template(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.invite_tool.apply_template(&key).await?;
    Ok(Json(DataResponse::new(view)))
}

pub async fn remove_guest(
    State(state): State<Arc<AppState>>,
    Path(guest_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.invite_tool.remove_guest(&guest_id).await?;
    Ok(Json(DataResponse::new(view)))
}

pub async fn resolve_guest(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ResolveGuestQuery>,
) -> Result<impl IntoResponse, AppError> {
    let guest = state.invite_tool.resolve(&query.to).await?;
    Ok(Json(DataResponse::new(guest)))
}

pub async fn share_guest(
    State(state): State<Arc<AppState>>,
    Path(guest_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.invite_tool.share(&guest_id).await?;
    Ok(Json(DataResponse::new(target)))
}

pub async fn reset(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    state.invite_tool.reset().await?;
    Ok(Json(serde_json::json!({"success": true})))
}
