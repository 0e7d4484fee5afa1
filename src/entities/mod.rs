//! Entities module - persisted domain types. Each entity maps to one table.

pub mod enums;
pub mod invitation;
pub mod membership;
pub mod organization;
pub mod user;

pub use enums::{InvitationStatus, OrgRole};
pub use invitation::Invitation;
pub use membership::Membership;
pub use organization::Organization;
pub use user::User;
