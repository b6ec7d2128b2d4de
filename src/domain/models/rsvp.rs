use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const MIN_RSVP_NAME_LEN: usize = 3;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Attendance {
    Hadir,
    TidakHadir,
}

impl Attendance {
    /// Accepts the wire values only (`hadir`, `tidak_hadir`).
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "hadir" => Some(Self::Hadir),
            "tidak_hadir" => Some(Self::TidakHadir),
            _ => None,
        }
    }

    pub fn as_db_str(&self) -> &'static str {
        match self {
            Self::Hadir => "HADIR",
            Self::TidakHadir => "TIDAK_HADIR",
        }
    }

    pub fn is_attending(&self) -> bool {
        matches!(self, Self::Hadir)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    #[default]
    Website,
    Whatsapp,
    Manual,
}

impl Channel {
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "website" => Some(Self::Website),
            "whatsapp" => Some(Self::Whatsapp),
            "manual" => Some(Self::Manual),
            _ => None,
        }
    }

    pub fn as_db_str(&self) -> &'static str {
        match self {
            Self::Website => "WEBSITE",
            Self::Whatsapp => "WHATSAPP",
            Self::Manual => "MANUAL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Whatsapp => "WhatsApp",
            Self::Manual => "Admin Input",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} code in database: {value}")]
pub struct UnknownCode {
    kind: &'static str,
    value: String,
}

impl TryFrom<String> for Attendance {
    type Error = UnknownCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "HADIR" => Ok(Self::Hadir),
            "TIDAK_HADIR" => Ok(Self::TidakHadir),
            _ => Err(UnknownCode { kind: "attendance", value }),
        }
    }
}

impl TryFrom<String> for Channel {
    type Error = UnknownCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "WEBSITE" => Ok(Self::Website),
            "WHATSAPP" => Ok(Self::Whatsapp),
            "MANUAL" => Ok(Self::Manual),
            _ => Err(UnknownCode { kind: "channel", value }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RsvpRecord {
    pub id: String,
    pub name: String,
    pub message: String,
    #[sqlx(try_from = "String")]
    pub attendance: Attendance,
    pub guest_count: i32,
    #[sqlx(try_from = "String")]
    pub channel: Channel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Already validated RSVP input, ready to persist.
#[derive(Debug, Clone)]
pub struct NewRsvp {
    pub name: String,
    pub message: String,
    pub attendance: Attendance,
    pub guest_count: i32,
    pub channel: Channel,
}

impl RsvpRecord {
    pub fn new(params: NewRsvp) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            message: params.message,
            attendance: params.attendance,
            guest_count: params.guest_count,
            channel: params.channel,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive substring match on name or message. `needle` must
    /// already be trimmed and lowercased; an empty needle matches everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.message.to_lowercase().contains(needle)
    }
}
