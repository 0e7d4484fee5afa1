//! Enumerated types used by the persisted entities.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role a member holds inside an organization. Stored uppercase, exposed
/// lowercase in the API.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "lowercase")]
pub enum OrgRole {
    Admin,
    Member,
}

impl FromStr for OrgRole {
    type Err = ();

    /// Parses the role value of an issuance request. Unrecognized values are
    /// rejected in the service layer rather than by serde, so the caller gets
    /// the invalid-role error instead of a generic deserialization failure.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(OrgRole::Admin),
            "member" => Ok(OrgRole::Member),
            _ => Err(()),
        }
    }
}

/// Lifecycle status of an invitation. Only the first three variants are ever
/// stored; `Expired` is derived from `expires_at` when reading.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Revoked,
    Expired,
}
