//! Integration tests for the authentication endpoints.
//!
//! These tests use `#[sqlx::test]`, which creates an isolated test database,
//! applies the migrations from `migrations/` and loads the listed fixture
//! scripts before each test.

mod common;

#[cfg(test)]
mod auth_tests {
    use super::common::*;
    use serde_json::json;
    use sqlx::SqlitePool;

    // ============================================================
    // POST /auth/register
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_register_success(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let body = json!({
            "username": "newcomer",
            "password": "SuperSecret123"
        });

        let response = server.post("/auth/register").json(&body).await;

        response.assert_status_ok();
        let user: serde_json::Value = response.json();
        assert_eq!(user["username"], "newcomer");
        assert!(user["user_id"].as_i64().is_some());
        assert!(
            user.get("password").is_none(),
            "password must never be returned"
        );
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_register_duplicate_username(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let body = json!({
            "username": "alice",
            "password": "SuperSecret123"
        });

        let response = server.post("/auth/register").json(&body).await;

        response.assert_status_conflict();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_register_short_password(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let body = json!({
            "username": "newcomer",
            "password": "short"
        });

        let response = server.post("/auth/register").json(&body).await;

        response.assert_status_bad_request();
        Ok(())
    }

    // ============================================================
    // POST /auth/login
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_login_success(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let register_body = json!({
            "username": "logintest",
            "password": "TestLogin123"
        });
        server
            .post("/auth/register")
            .json(&register_body)
            .await
            .assert_status_ok();

        let login_body = json!({
            "username": "logintest",
            "password": "TestLogin123"
        });
        let response = server.post("/auth/login").json(&login_body).await;

        response.assert_status_ok();

        let headers = response.headers();
        assert!(
            headers.get("set-cookie").is_some(),
            "Set-Cookie header should be present"
        );
        let auth_header = headers.get("authorization").unwrap().to_str().unwrap();
        assert!(
            auth_header.starts_with("Bearer "),
            "Authorization should start with 'Bearer '"
        );
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_login_wrong_password(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let body = json!({
            "username": "alice",
            "password": "wrongpassword"
        });

        let response = server.post("/auth/login").json(&body).await;

        response.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_login_nonexistent_user(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let body = json!({
            "username": "nonexistent",
            "password": "password123"
        });

        let response = server.post("/auth/login").json(&body).await;

        response.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_login_missing_password(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let body = json!({
            "username": "alice"
        });

        let response = server.post("/auth/login").json(&body).await;

        // 422 Unprocessable Entity when a required field is missing
        response.assert_status_unprocessable_entity();
        Ok(())
    }
}
