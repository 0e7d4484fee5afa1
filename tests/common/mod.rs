use acs_invite::core::AppState;
use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;

/// JWT secret shared by every test server and test token.
pub const TEST_JWT_SECRET: &str = "test-secret-never-use-in-production";

/// Base URL used for shareable links in tests.
pub const TEST_BASE_URL: &str = "https://invite.test";

/// Builds an AppState for tests.
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(
        pool,
        TEST_JWT_SECRET.to_string(),
        TEST_BASE_URL.to_string(),
    ))
}

/// Builds a TestServer around the full application router.
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = acs_invite::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Generates a JWT valid for 24 hours, signed with the test secret.
pub fn create_test_jwt(user_id: i64, username: &str) -> String {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Claims {
        id: i64,
        username: String,
        exp: usize,
        iat: usize,
    }

    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::hours(24))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        id: user_id,
        username: username.to_string(),
        exp: expiration,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to create JWT token")
}
