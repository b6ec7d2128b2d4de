pub mod dashboard;
pub mod guest;
pub mod health;
pub mod invite_tool;
pub mod rsvp;

use axum::{extract::rejection::JsonRejection, Json};
use crate::error::AppError;
use tracing::debug;

pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid payload.";

/// Unwraps a JSON body, turning any extractor rejection into a 400.
pub(crate) fn payload<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        debug!("Rejected request body: {}", rejection.body_text());
        AppError::BadRequest(INVALID_PAYLOAD_MESSAGE.into())
    })
}
