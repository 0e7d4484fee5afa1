//! Invitation entity - a single-use invitation link to join an organization.

use super::enums::{InvitationStatus, OrgRole};
use chrono::{DateTime, Duration, Utc};
use rand::{Rng, distributions::Alphanumeric};
use serde::{Deserialize, Serialize};

/// Fixed validity window for every invitation.
pub const INVITATION_VALIDITY_DAYS: i64 = 7;

/// Token length in alphanumeric characters. 32 chars of [A-Za-z0-9] carry
/// just over 190 bits of entropy, comfortably above the 128-bit floor.
pub const TOKEN_LENGTH: usize = 32;

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Invitation {
    pub invite_id: i64,
    pub token: String,
    pub org_id: i64,
    pub inviter_id: i64,
    pub role: OrgRole,
    pub email: Option<String>,
    pub status: InvitationStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub accepted_by: Option<i64>,
    pub accepted_at: Option<DateTime<Utc>>,
}

impl Invitation {
    /// Mints a fresh unguessable token from the OS-seeded thread RNG.
    pub fn generate_token() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect()
    }

    /// Expiry timestamp for an invitation created at `created_at`.
    pub fn expiry_for(created_at: DateTime<Utc>) -> DateTime<Utc> {
        created_at + Duration::days(INVITATION_VALIDITY_DAYS)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Status as seen by clients: a stored PENDING past its expiry reads as
    /// EXPIRED. Expiry is a derived predicate, never written back.
    pub fn effective_status(&self, now: DateTime<Utc>) -> InvitationStatus {
        if self.status == InvitationStatus::Pending && self.is_expired(now) {
            InvitationStatus::Expired
        } else {
            self.status
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn invitation(status: InvitationStatus, expires_at: DateTime<Utc>) -> Invitation {
        Invitation {
            invite_id: 1,
            token: Invitation::generate_token(),
            org_id: 1,
            inviter_id: 1,
            role: OrgRole::Member,
            email: None,
            status,
            created_at: Utc::now(),
            expires_at,
            accepted_by: None,
            accepted_at: None,
        }
    }

    #[test]
    fn tokens_are_long_alphanumeric_and_distinct() {
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let token = Invitation::generate_token();
            assert_eq!(token.len(), TOKEN_LENGTH);
            assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
            assert!(seen.insert(token), "duplicate token generated");
        }
    }

    #[test]
    fn expiry_is_seven_days_after_creation() {
        let created = Utc::now();
        assert_eq!(Invitation::expiry_for(created), created + Duration::days(7));
    }

    #[test]
    fn pending_past_expiry_reads_as_expired() {
        let now = Utc::now();
        let inv = invitation(InvitationStatus::Pending, now - Duration::hours(1));
        assert!(inv.is_expired(now));
        assert_eq!(inv.effective_status(now), InvitationStatus::Expired);
    }

    #[test]
    fn terminal_statuses_are_reported_as_stored() {
        let now = Utc::now();
        let accepted = invitation(InvitationStatus::Accepted, now + Duration::days(1));
        assert_eq!(accepted.effective_status(now), InvitationStatus::Accepted);

        let revoked = invitation(InvitationStatus::Revoked, now + Duration::days(1));
        assert_eq!(revoked.effective_status(now), InvitationStatus::Revoked);
    }
}
