use serde::Deserialize;
use serde_json::Value;

use crate::domain::models::{
    guest::MIN_GUEST_NAME_LEN,
    rsvp::{Attendance, Channel, NewRsvp, MIN_RSVP_NAME_LEN},
};
use crate::error::AppError;

// Fields arrive untyped: a wrong type is a validation failure or a default,
// never a rejection of the whole body.

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestRequest {
    pub name: Option<Value>,
    pub invite_link: Option<Value>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateRsvpRequest {
    pub name: Option<Value>,
    pub message: Option<Value>,
    pub attendance: Option<Value>,
    pub guest_count: Option<Value>,
    pub channel: Option<Value>,
}

#[derive(Deserialize)]
pub struct ListGuestsQuery {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct ListRsvpQuery {
    pub attendance: Option<String>,
    /// Free-text search over name and message.
    pub q: Option<String>,
}

impl ListRsvpQuery {
    pub fn search_needle(&self) -> String {
        self.q.as_deref().map(|q| q.trim().to_lowercase()).unwrap_or_default()
    }
}

/// The `?to=` value of a personalized invite link.
#[derive(Deserialize)]
pub struct ResolveGuestQuery {
    pub to: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateGuestListRequest {
    pub raw_guest_names: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRawNamesRequest {
    pub raw_guest_names: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIntroRequest {
    pub intro_text: String,
}

fn trimmed_str(value: &Option<Value>) -> Option<String> {
    value.as_ref()?.as_str().map(|s| s.trim().to_string())
}

fn validation_error(errors: Vec<&str>) -> AppError {
    AppError::Validation(errors.join(" "))
}

pub struct ValidGuest {
    pub name: String,
    pub invite_link: String,
}

impl CreateGuestRequest {
    pub fn validate(&self) -> Result<ValidGuest, AppError> {
        let mut errors = Vec::new();

        let name = trimmed_str(&self.name).filter(|n| n.chars().count() >= MIN_GUEST_NAME_LEN);
        if name.is_none() {
            errors.push("Guest name is required (at least 2 characters).");
        }

        let invite_link = trimmed_str(&self.invite_link).filter(|l| !l.is_empty());
        if invite_link.is_none() {
            errors.push("Invitation link is required.");
        }

        match (name, invite_link) {
            (Some(name), Some(invite_link)) => Ok(ValidGuest { name, invite_link }),
            _ => Err(validation_error(errors)),
        }
    }
}

impl CreateRsvpRequest {
    pub fn validate(&self) -> Result<NewRsvp, AppError> {
        let mut errors = Vec::new();

        let name = trimmed_str(&self.name).filter(|n| n.chars().count() >= MIN_RSVP_NAME_LEN);
        if name.is_none() {
            errors.push("Name is required (at least 3 characters).");
        }

        let attendance = self
            .attendance
            .as_ref()
            .and_then(Value::as_str)
            .and_then(Attendance::from_wire);
        if attendance.is_none() {
            errors.push("Attendance status is invalid.");
        }

        let (Some(name), Some(attendance)) = (name, attendance) else {
            return Err(validation_error(errors));
        };

        Ok(NewRsvp {
            name,
            message: trimmed_str(&self.message).unwrap_or_default(),
            attendance,
            guest_count: self.guest_count.as_ref().map(normalize_guest_count).unwrap_or(0),
            channel: self
                .channel
                .as_ref()
                .and_then(Value::as_str)
                .and_then(Channel::from_wire)
                .unwrap_or_default(),
        })
    }
}

/// Finite numbers are rounded and clamped at zero; anything else counts as 0.
fn normalize_guest_count(value: &Value) -> i32 {
    match value.as_f64() {
        Some(n) if n.is_finite() => n.round().clamp(0.0, f64::from(i32::MAX)) as i32,
        _ => 0,
    }
}
