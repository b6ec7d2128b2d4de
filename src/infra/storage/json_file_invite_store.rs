use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

use crate::domain::{
    models::invite::{InviteToolState, StoredState},
    ports::InviteToolStore,
};
use crate::error::AppError;

/// Fixed key the blob is stored under; the file is `<dir>/<key>.json`.
pub const STORAGE_KEY: &str = "dashboard-invite-tool-state";

pub struct JsonFileInviteStore {
    path: PathBuf,
}

impl JsonFileInviteStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl InviteToolStore for JsonFileInviteStore {
    async fn load(&self) -> Result<InviteToolState, AppError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(InviteToolState::default()),
            Err(e) => return Err(AppError::Storage(format!("reading {}: {}", self.path.display(), e))),
        };

        match InviteToolState::parse(&raw, Utc::now().timestamp_millis()) {
            StoredState::Valid(state) => Ok(state),
            StoredState::Invalid(reason) => {
                warn!("Ignoring stored invite tool state at {}: {}", self.path.display(), reason);
                Ok(InviteToolState::default())
            }
        }
    }

    async fn save(&self, state: &InviteToolState) -> Result<(), AppError> {
        let payload = serde_json::to_string(state)
            .map_err(|e| AppError::Storage(format!("serializing state: {e}")))?;

        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| AppError::Storage(format!("creating {}: {}", dir.display(), e)))?;
        }

        // Write then rename; readers never see a partial file.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, payload)
            .await
            .map_err(|e| AppError::Storage(format!("writing {}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| AppError::Storage(format!("replacing {}: {}", self.path.display(), e)))?;

        debug!("Saved invite tool state ({} guests)", state.guests.len());
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!("removing {}: {}", self.path.display(), e))),
        }
    }
}
