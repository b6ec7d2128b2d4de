use crate::domain::{models::guest::{fold_name, GuestRecord}, ports::GuestRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteGuestRepo {
    pool: SqlitePool,
}

impl SqliteGuestRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestRepository for SqliteGuestRepo {
    async fn create(&self, guest: &GuestRecord) -> Result<GuestRecord, AppError> {
        sqlx::query_as::<_, GuestRecord>(
            "INSERT INTO guests (id, name, name_folded, invite_link, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING id, name, invite_link, created_at, updated_at",
        )
            .bind(&guest.id)
            .bind(&guest.name)
            .bind(fold_name(&guest.name))
            .bind(&guest.invite_link)
            .bind(guest.created_at)
            .bind(guest.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<GuestRecord>, AppError> {
        sqlx::query_as::<_, GuestRecord>(
            "SELECT id, name, invite_link, created_at, updated_at FROM guests ORDER BY created_at DESC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<GuestRecord>, AppError> {
        sqlx::query_as::<_, GuestRecord>(
            "SELECT id, name, invite_link, created_at, updated_at FROM guests WHERE name_folded = ? ORDER BY created_at DESC LIMIT 1",
        )
            .bind(fold_name(name))
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM guests WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Guest not found".into()));
        }
        Ok(())
    }
}
