//! Services module - HTTP handlers, one sub-module per resource.
//!
//! Business rules live here: repositories stay mechanical, handlers decide
//! who may do what and map rule violations to the error taxonomy.

pub mod auth;
pub mod invitation;
pub mod organization;

pub use auth::{login_user, register_user};
pub use invitation::{
    accept_invitation, issue_invitation, list_invitations, lookup_invitation, revoke_invitation,
};
pub use organization::{create_organization, list_members};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check.
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "acs-invite is running")
}
