use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;
use tera::Tera;

use crate::config::Config;
use crate::state::AppState;
use crate::error::AppError;
use crate::domain::ports::{GuestRepository, RsvpRepository};
use crate::domain::services::{invite_tool::InviteToolService, share::SHARE_MESSAGE_TEMPLATE};
use crate::infra::storage::json_file_invite_store::JsonFileInviteStore;
use crate::infra::repositories::{
    postgres_guest_repo::PostgresGuestRepo, postgres_rsvp_repo::PostgresRsvpRepo,
    sqlite_guest_repo::SqliteGuestRepo, sqlite_rsvp_repo::SqliteRsvpRepo,
};

pub fn load_templates() -> Result<Arc<Tera>, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template(SHARE_MESSAGE_TEMPLATE, include_str!("../../templates/share_message.txt"))
        .map_err(|e| AppError::InternalWithMsg(format!("Failed to load share message template: {e}")))?;
    Ok(Arc::new(tera))
}

pub async fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    let database_url = &config.database_url;

    let (guest_repo, rsvp_repo): (Arc<dyn GuestRepository>, Arc<dyn RsvpRepository>) =
        if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
            info!("Initializing PostgreSQL connection...");

            let mut opts: PgConnectOptions = database_url.parse()?;
            opts = opts.log_statements(LevelFilter::Debug)
                .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect_with(opts)
                .await?;

            run_postgres_migrations(&pool).await?;

            (
                Arc::new(PostgresGuestRepo::new(pool.clone())),
                Arc::new(PostgresRsvpRepo::new(pool)),
            )
        } else {
            info!("Initializing SQLite connection with WAL Mode...");

            let opts = SqliteConnectOptions::from_str(database_url)?
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_secs(5))
                .log_statements(LevelFilter::Debug)
                .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

            let pool = SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(opts)
                .await?;

            run_sqlite_migrations(&pool).await?;

            (
                Arc::new(SqliteGuestRepo::new(pool.clone())),
                Arc::new(SqliteRsvpRepo::new(pool)),
            )
        };

    info!("Invite tool state stored under {}", config.invite_store_dir.display());
    let store = Arc::new(JsonFileInviteStore::new(&config.invite_store_dir));
    let invite_tool = Arc::new(InviteToolService::new(store, config.share_base_url.clone()));

    Ok(AppState {
        config: config.clone(),
        guest_repo,
        rsvp_repo,
        invite_tool,
        templates: load_templates()?,
    })
}

pub async fn run_postgres_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .map_err(|e| AppError::InternalWithMsg(format!("Failed to run Postgres migrations: {e}")))
}

pub async fn run_sqlite_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .map_err(|e| AppError::InternalWithMsg(format!("Failed to run SQLite migrations: {e}")))
}
