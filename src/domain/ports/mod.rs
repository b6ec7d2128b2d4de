use crate::domain::models::{
    guest::GuestRecord,
    invite::InviteToolState,
    rsvp::{Attendance, RsvpRecord},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn create(&self, guest: &GuestRecord) -> Result<GuestRecord, AppError>;
    /// Newest first.
    async fn list(&self) -> Result<Vec<GuestRecord>, AppError>;
    /// Case-insensitive exact match on the name; the newest match wins.
    async fn find_by_name(&self, name: &str) -> Result<Option<GuestRecord>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait RsvpRepository: Send + Sync {
    async fn create(&self, rsvp: &RsvpRecord) -> Result<RsvpRecord, AppError>;
    /// Newest first, optionally restricted to one attendance value.
    async fn list(&self, attendance: Option<Attendance>) -> Result<Vec<RsvpRecord>, AppError>;
}

/// Holds the guest-list tool's single state blob.
#[async_trait]
pub trait InviteToolStore: Send + Sync {
    /// Never fails on bad stored data; that reads back as the default state.
    async fn load(&self) -> Result<InviteToolState, AppError>;
    /// Overwrites the whole blob.
    async fn save(&self, state: &InviteToolState) -> Result<(), AppError>;
    async fn clear(&self) -> Result<(), AppError>;
}
