//! Invitation DTOs.

use crate::entities::{Invitation, InvitationStatus, OrgRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for issuing an invitation. The role arrives as a plain
/// string and is parsed in the service so an unrecognized value produces the
/// invalid-role error rather than a serde rejection.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct IssueInvitationDTO {
    pub role: String,
    #[validate(email)]
    pub email: Option<String>,
}

/// Repository input for a new invitation record. The service mints the token
/// and the timestamps; the database assigns the id.
#[derive(Debug, Clone)]
pub struct CreateInvitationDTO {
    pub token: String,
    pub org_id: i64,
    pub inviter_id: i64,
    pub role: OrgRole,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Response to a successful issuance: the token plus the shareable link.
#[derive(Serialize, Deserialize, Debug)]
pub struct IssuedInvitationDTO {
    pub invite_id: i64,
    pub token: String,
    pub invite_url: String,
    pub role: OrgRole,
    pub email: Option<String>,
    pub expires_at: DateTime<Utc>,
}

/// What a prospective member sees when opening the link, before accepting.
#[derive(Serialize, Deserialize, Debug)]
pub struct InvitationPreviewDTO {
    pub organization: String,
    pub inviter: Option<String>,
    pub role: OrgRole,
    pub status: InvitationStatus,
    pub expires_at: DateTime<Utc>,
}

/// Admin-facing summary used by the per-organization listing.
#[derive(Serialize, Deserialize, Debug)]
pub struct InvitationSummaryDTO {
    pub invite_id: i64,
    pub inviter: Option<String>,
    pub role: OrgRole,
    pub email: Option<String>,
    pub status: InvitationStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl InvitationSummaryDTO {
    /// Builds a summary, deriving the effective status at `now`.
    pub fn from_invitation(inv: &Invitation, inviter: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            invite_id: inv.invite_id,
            inviter,
            role: inv.role,
            email: inv.email.clone(),
            status: inv.effective_status(now),
            created_at: inv.created_at,
            expires_at: inv.expires_at,
        }
    }
}
