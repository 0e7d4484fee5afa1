use crate::core::{AppError, AppState};
use crate::entities::{Membership, OrgRole};
use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// JWT claims carried by every bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub id: i64,
    pub username: String,
}

#[instrument(skip(secret), fields(username = %username, id = %id))]
pub fn encode_jwt(username: String, id: i64, secret: &str) -> Result<String, AppError> {
    let now = Utc::now();
    let exp = (now + Duration::hours(24)).timestamp() as usize;
    let iat = now.timestamp() as usize;
    let claims = Claims {
        exp,
        iat,
        id,
        username,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        AppError::internal_server_error("Failed to encode token").with_details(e.to_string())
    })
}

#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(jwt_token: &str, secret: &str) -> Result<TokenData<Claims>, AppError> {
    decode(
        jwt_token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::unauthorized("Unable to decode token"))
}

/// Resolves the bearer token to a `User` and inserts it into the request
/// extensions for downstream handlers.
#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            warn!("Missing authorization header");
            AppError::forbidden("Please add the JWT token to the header")
        })?
        .to_str()
        .map_err(|_| {
            warn!("Invalid authorization header format");
            AppError::forbidden("Empty header is not allowed")
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::forbidden("Expected a bearer token"))?;

    let token_data = decode_jwt(token, &state.jwt_secret)?;

    let current_user = state
        .user
        .find_by_username(&token_data.claims.username)
        .await?
        .ok_or_else(|| {
            warn!("User not found in database: {}", token_data.claims.username);
            AppError::unauthorized("You are not an authorized user")
        })?;

    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

/// Checks that the caller's membership in an organization carries the ADMIN
/// role. `membership` is `None` when the caller is not a member at all.
pub fn require_admin(membership: &Option<Membership>) -> Result<&Membership, AppError> {
    let membership = membership.as_ref().ok_or_else(|| {
        warn!("Caller is not a member of this organization");
        AppError::forbidden("You are not a member of this organization")
    })?;

    if membership.role != OrgRole::Admin {
        warn!(
            "User {} has role {:?}, admin required",
            membership.user_id, membership.role
        );
        return Err(AppError::forbidden("Administrator role required"));
    }

    Ok(membership)
}
