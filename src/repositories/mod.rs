//! Repositories module - one repository per entity.
//!
//! Each repository owns a handle to the shared connection pool and is the
//! only place SQL for its table lives. Queries are runtime-checked
//! (`sqlx::query`/`query_as`) so the crate builds without a live database.

pub mod invitation;
pub mod membership;
pub mod organization;
pub mod traits;
pub mod user;

pub use invitation::InvitationRepository;
pub use membership::MembershipRepository;
pub use organization::OrganizationRepository;
pub use traits::{Create, Read};
pub use user::UserRepository;
