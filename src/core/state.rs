//! Application state shared by every route and middleware.

use crate::repositories::{
    InvitationRepository, MembershipRepository, OrganizationRepository, UserRepository,
};
use sqlx::SqlitePool;

pub struct AppState {
    pub user: UserRepository,
    pub org: OrganizationRepository,
    pub membership: MembershipRepository,
    pub invitation: InvitationRepository,

    /// Secret key for JWT tokens.
    pub jwt_secret: String,

    /// Base for shareable invitation links.
    pub public_base_url: String,
}

impl AppState {
    /// Builds the state, handing each repository a clone of the pool.
    pub fn new(pool: SqlitePool, jwt_secret: String, public_base_url: String) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            org: OrganizationRepository::new(pool.clone()),
            membership: MembershipRepository::new(pool.clone()),
            invitation: InvitationRepository::new(pool),
            jwt_secret,
            public_base_url,
        }
    }

    /// Shareable URL for an invitation token.
    pub fn invite_url(&self, token: &str) -> String {
        format!(
            "{}/invite/accept/{}",
            self.public_base_url.trim_end_matches('/'),
            token
        )
    }
}
