use crate::domain::{models::rsvp::{Attendance, RsvpRecord}, ports::RsvpRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresRsvpRepo {
    pool: PgPool,
}

impl PostgresRsvpRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for PostgresRsvpRepo {
    async fn create(&self, rsvp: &RsvpRecord) -> Result<RsvpRecord, AppError> {
        sqlx::query_as::<_, RsvpRecord>(
            "INSERT INTO rsvps (id, name, message, attendance, guest_count, channel, created_at, updated_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
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
                "SELECT * FROM rsvps WHERE attendance = $1 ORDER BY created_at DESC",
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
