use crate::domain::{models::rsvp::{Attendance, RsvpRecord}, ports::RsvpRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteRsvpRepo {
    pool: SqlitePool,
}

impl SqliteRsvpRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for SqliteRsvpRepo {
    async fn create(&self, rsvp: &RsvpRecord) -> Result<RsvpRecord, AppError> {
        sqlx::query_as::<_, RsvpRecord>(
            "INSERT INTO rsvps (id, name, message, attendance, guest_count, channel, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&rsvp.id)
            .bind(&rsvp.name)
            .bind(&rsvp.message)
            .bind(rsvp.attendance.as_db_str())
            .bind(rsvp.guest_count)
            .bind(rsvp.channel.as_db_str())
            .bind(rsvp.created_at)
            .bind(rsvp.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, attendance: Option<Attendance>) -> Result<Vec<RsvpRecord>, AppError> {
        match attendance {
            Some(attendance) => sqlx::query_as::<_, RsvpRecord>(
                "SELECT * FROM rsvps WHERE attendance = ? ORDER BY created_at DESC",
            )
                .bind(attendance.as_db_str())
                .fetch_all(&self.pool)
                .await,
            None => sqlx::query_as::<_, RsvpRecord>("SELECT * FROM rsvps ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await,
        }
            .map_err(AppError::Database)
    }
}
