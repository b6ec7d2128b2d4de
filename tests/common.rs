use invitation_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    domain::services::invite_tool::InviteToolService,
    infra::{
        factory::{load_templates, run_sqlite_migrations},
        repositories::{sqlite_guest_repo::SqliteGuestRepo, sqlite_rsvp_repo::SqliteRsvpRepo},
        storage::json_file_invite_store::JsonFileInviteStore,
    },
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use tower::ServiceExt;
use serde_json::Value;

pub const TEST_BASE_URL: &str = "https://wedding.test";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub store_dir: PathBuf,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_base_url(TEST_BASE_URL).await
    }

    pub async fn with_base_url(base_url: &str) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);
        let store_dir = std::env::temp_dir().join(format!("invite_tool_{}", Uuid::new_v4()));

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        run_sqlite_migrations(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            share_base_url: base_url.to_string(),
            invite_store_dir: store_dir.clone(),
            couple_names: "Kusyanto & Dini Jumartini".to_string(),
            event_date: "Saturday, 12 April 2025".to_string(),
            event_location: "Gedung Graha Saba Buana, Surakarta".to_string(),
        };

        let store = Arc::new(JsonFileInviteStore::new(&store_dir));

        let state = Arc::new(AppState {
            config: config.clone(),
            guest_repo: Arc::new(SqliteGuestRepo::new(pool.clone())),
            rsvp_repo: Arc::new(SqliteRsvpRepo::new(pool.clone())),
            invite_tool: Arc::new(InviteToolService::new(store, config.share_base_url.clone())),
            templates: load_templates().unwrap(),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            store_dir,
            state,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn raw_post(&self, uri: &str, raw: &'static str) -> Response<Body> {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(raw))
                .unwrap()
        ).await.unwrap()
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_dir_all(&self.store_dir);
    }
}
