use crate::auth::TokenKeys;
use crate::router::create_router;
use crate::schemas::AppState;
use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};
use axum::Router;
use axum_test::TestServer;
use common::TokenResponse;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use serde_json::json;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub const TEST_JWT_SECRET: &str = "test-secret";

/// Create an in-memory SQLite database for testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create AppState for testing
pub async fn setup_test_app_state() -> AppState {
    AppState {
        db: setup_test_db().await,
        tokens: TokenKeys::new(TEST_JWT_SECRET, 3600),
        request_timeout: Duration::from_secs(30),
    }
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is determined by the RUST_LOG environment variable,
/// defaulting to WARN if not set. Only the first call installs the subscriber.
fn init_test_tracing() {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| match level.to_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        })
        .unwrap_or(Level::WARN);

    let _ = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Create axum app for testing
pub async fn setup_test_app() -> Router {
    init_test_tracing();

    let state = setup_test_app_state().await;
    create_router(state)
}

/// Create a test server around a fresh app
pub async fn setup_test_server() -> TestServer {
    TestServer::new(setup_test_app().await).expect("Failed to start test server")
}

/// Register a user and return the issued token
pub async fn register(server: &TestServer, name: &str, email: &str) -> String {
    let response = server
        .post("/api/users")
        .json(&json!({ "name": name, "email": email, "password": "secret123" }))
        .await;
    assert_eq!(
        response.status_code(),
        axum::http::StatusCode::CREATED,
        "registration failed: {}",
        response.text()
    );
    response.json::<TokenResponse>().token
}

/// Header pair carrying a bearer token
pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header value"),
    )
}
