//! acs-invite - organization invitation-link service.
//!
//! Exposes the main modules for the binary and the integration tests.

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

pub use crate::core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{Router, middleware, routing::{get, post}};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Builds the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/auth", configure_auth_routes())
        .nest("/organizations", configure_organization_routes(state.clone()))
        .nest("/invitations", configure_invitation_routes(state.clone()))
        .nest("/invite", configure_invite_link_routes(state.clone()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Authentication routes (login, register); no middleware.
fn configure_auth_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/login", post(login_user))
        .route("/register", post(register_user))
}

/// Organization routes: creation, members, and the admin-facing invitation
/// operations scoped to one organization. All require authentication.
fn configure_organization_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", post(create_organization))
        .route("/{org_id}/members", get(list_members))
        .route(
            "/{org_id}/invitations",
            get(list_invitations).post(issue_invitation),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Invitation-id routes (revocation). Requires authentication; the admin
/// check against the invitation's organization happens in the handler.
fn configure_invitation_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/{invite_id}/revoke", post(revoke_invitation))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Shareable-link routes. The GET preview is public (the token itself is the
/// credential); accepting requires a logged-in caller to admit.
fn configure_invite_link_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    let public_routes = Router::new().route("/accept/{token}", get(lookup_invitation));

    let member_routes = Router::new()
        .route("/accept/{token}", post(accept_invitation))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ));

    public_routes.merge(member_routes)
}
