//! DTOs module - Data Transfer Objects.
//!
//! DTOs separate the external API representation from the persisted
//! entities. `Create*` types are repository inputs, the rest are responses.

pub mod invitation;
pub mod membership;
pub mod organization;
pub mod user;

pub use invitation::{
    CreateInvitationDTO, InvitationPreviewDTO, InvitationSummaryDTO, IssueInvitationDTO,
    IssuedInvitationDTO,
};
pub use membership::{MemberDTO, MembershipDTO};
pub use organization::{CreateOrganizationDTO, OrganizationDTO};
pub use user::{CreateUserDTO, UserDTO};
