//! Membership DTOs.

use crate::entities::{Membership, OrgRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Confirmation returned after a successful redemption.
#[derive(Serialize, Deserialize, Debug)]
pub struct MembershipDTO {
    pub org_id: i64,
    pub user_id: i64,
    pub role: OrgRole,
    pub member_since: DateTime<Utc>,
}

impl From<Membership> for MembershipDTO {
    fn from(value: Membership) -> Self {
        Self {
            org_id: value.org_id,
            user_id: value.user_id,
            role: value.role,
            member_since: value.member_since,
        }
    }
}

/// One row of the members listing, membership joined with the username.
#[derive(Serialize, Deserialize, Debug)]
pub struct MemberDTO {
    pub user_id: i64,
    pub username: Option<String>,
    pub role: OrgRole,
    pub member_since: DateTime<Utc>,
}
