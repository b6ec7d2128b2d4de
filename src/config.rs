use std::env;
use std::path::PathBuf;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Origin the personalized links are built on, e.g. `https://dini-kusyanto.id`.
    /// Empty means links are not available yet and the fallback phrases kick in.
    pub share_base_url: String,
    pub invite_store_dir: PathBuf,
    pub couple_names: String,
    pub event_date: String,
    pub event_location: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::InternalWithMsg("DATABASE_URL must be set".into()))?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::InternalWithMsg(format!("PORT must be a number, got {raw}")))?,
            Err(_) => 3000,
        };

        Ok(Self {
            database_url,
            port,
            share_base_url: normalize_base_url(&env::var("SHARE_BASE_URL").unwrap_or_default()),
            invite_store_dir: env::var("INVITE_STORE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            couple_names: env::var("COUPLE_NAMES").unwrap_or_else(|_| "Kusyanto & Dini Jumartini".to_string()),
            event_date: env::var("EVENT_DATE").unwrap_or_else(|_| "Saturday, 12 April 2025".to_string()),
            event_location: env::var("EVENT_LOCATION")
                .unwrap_or_else(|_| "Gedung Graha Saba Buana, Surakarta".to_string()),
        })
    }
}

/// Trims whitespace and trailing slashes so `<base>/?to=` never doubles up.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
