//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use chrono::NaiveDate;
use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::{Mutex, MutexGuard};
use tower::ServiceExt;

use actordesk_api::{AppState, build_app};
use actordesk_core::config::AppConfig;
use actordesk_database::migration::run_migrations;
use actordesk_database::{ActorRepository, DatabasePool};

/// Variable naming the scratch database.
pub const TEST_DATABASE_VAR: &str = "ACTORDESK_TEST_DATABASE_URL";

/// Tests share one table, so they run one at a time.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub pool: PgPool,
    _guard: MutexGuard<'static, ()>,
}

/// Collected response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Body as UTF-8 text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl TestApp {
    /// Create a test application over `actors` seeded rows, or `None`
    /// when no test database is configured.
    pub async fn new(actors: i32) -> Option<Self> {
        let Ok(url) = std::env::var(TEST_DATABASE_VAR) else {
            eprintln!("{TEST_DATABASE_VAR} not set, skipping");
            return None;
        };
        let guard = DB_LOCK.lock().await;

        let mut config = AppConfig::default();
        config.database.url = url;
        config.database.max_connections = 4;

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        run_migrations(db.pool()).await.expect("Failed to run migrations");
        seed(db.pool(), actors).await;

        let store = Arc::new(ActorRepository::new(db.pool().clone()));
        let state = AppState::new(config, store).expect("Failed to build state");

        Some(Self {
            router: build_app(state),
            pool: db.pool().clone(),
            _guard: guard,
        })
    }

    /// Send a request, with an optional urlencoded form body
    pub async fn request(&self, method: Method, uri: &str, form: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match form {
            Some(form) => {
                builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(form.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            headers,
            body: body.to_vec(),
        }
    }

    /// GET a JSON endpoint that must answer 200
    pub async fn json(&self, uri: &str) -> Value {
        let response = self.request(Method::GET, uri, None).await;
        assert_eq!(response.status, StatusCode::OK, "GET {uri}");
        serde_json::from_slice(&response.body).unwrap()
    }
}

async fn seed(pool: &PgPool, actors: i32) {
    sqlx::query("TRUNCATE actor RESTART IDENTITY")
        .execute(pool)
        .await
        .expect("Failed to truncate actor");

    let stamp = NaiveDate::from_ymd_opt(2006, 2, 15)
        .unwrap()
        .and_hms_opt(4, 34, 33)
        .unwrap();
    for i in 1..=actors {
        sqlx::query("INSERT INTO actor (first_name, last_name, last_update) VALUES ($1, $2, $3)")
            .bind(format!("FIRST{i:03}"))
            .bind(format!("LAST{:03}", actors + 1 - i))
            .bind(stamp)
            .execute(pool)
            .await
            .expect("Failed to seed actor");
    }
}
