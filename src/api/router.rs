use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, guest, rsvp, dashboard, invite_tool};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Guests
        .route("/api/guests", get(guest::list_guests).post(guest::create_guest))
        .route("/api/guests/{id}", delete(guest::delete_guest))

        // RSVP
        .route("/api/rsvp", get(rsvp::list_rsvps).post(rsvp::create_rsvp))

        // Dashboard
        .route("/api/dashboard/metrics", get(dashboard::get_metrics))
        .route("/api/dashboard/timeline", get(dashboard::get_timeline))
        .route("/api/dashboard/share", get(dashboard::get_share_message))

        // Guest list tool
        .route("/api/invite-tool", get(invite_tool::get_state).delete(invite_tool::reset))
        .route("/api/invite-tool/generate", post(invite_tool::generate_guest_list))
        .route("/api/invite-tool/raw-names", put(invite_tool::save_raw_names))
        .route("/api/invite-tool/intro", put(invite_tool::update_intro))
        .route("/api/invite-tool/templates", get(invite_tool::list_templates))
        .route("/api/invite-tool/templates/{key}", post(invite_tool::apply_template))
        .route("/api/invite-tool/lookup", get(invite_tool::resolve_guest))
        .route("/api/invite-tool/guests/{id}", delete(invite_tool::remove_guest))
        .route("/api/invite-tool/guests/{id}/share", get(invite_tool::share_guest))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
