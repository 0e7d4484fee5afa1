//! InvitationRepository - database operations for invitation links.

use super::{Create, Read};
use crate::dtos::CreateInvitationDTO;
use crate::entities::{Invitation, InvitationStatus, Membership};
use chrono::{DateTime, Utc};
use sqlx::{Error, SqlitePool};

const INVITATION_COLUMNS: &str = "invite_id, token, org_id, inviter_id, role, email, status, \
     created_at, expires_at, accepted_by, accepted_at";

pub struct InvitationRepository {
    connection_pool: SqlitePool,
}

impl InvitationRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_by_token(&self, token: &str) -> Result<Option<Invitation>, Error> {
        sqlx::query_as::<_, Invitation>(&format!(
            "SELECT {INVITATION_COLUMNS} FROM invitations WHERE token = ?"
        ))
        .bind(token)
        .fetch_optional(&self.connection_pool)
        .await
    }

    /// All invitations ever issued for an organization, newest first.
    pub async fn find_many_by_org_id(&self, org_id: &i64) -> Result<Vec<Invitation>, Error> {
        sqlx::query_as::<_, Invitation>(&format!(
            "SELECT {INVITATION_COLUMNS} FROM invitations WHERE org_id = ? \
             ORDER BY created_at DESC, invite_id DESC"
        ))
        .bind(org_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    /// Redeems a pending invitation for `user_id` in a single transaction.
    ///
    /// The status-guarded UPDATE is the first statement of the transaction,
    /// so concurrent redemptions of the same token serialize on the row and
    /// exactly one caller observes `rows_affected == 1`. Losers get
    /// `Ok(None)`; classifying why (already used vs never existed) is left
    /// to the caller, which must also rule out expiry before calling.
    ///
    /// The membership upsert rides in the same transaction: an accepted
    /// invitation without its membership row must never be observable.
    pub async fn redeem(
        &self,
        token: &str,
        user_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Option<(Invitation, Membership)>, Error> {
        let mut tx = self.connection_pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE invitations
            SET status = ?, accepted_by = ?, accepted_at = ?
            WHERE token = ? AND status = ?
            "#,
        )
        .bind(InvitationStatus::Accepted)
        .bind(user_id)
        .bind(now)
        .bind(token)
        .bind(InvitationStatus::Pending)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let invitation = sqlx::query_as::<_, Invitation>(&format!(
            "SELECT {INVITATION_COLUMNS} FROM invitations WHERE token = ?"
        ))
        .bind(token)
        .fetch_one(&mut *tx)
        .await?;

        // Idempotent admission: an existing (org, user) membership is left
        // untouched rather than treated as an error.
        sqlx::query(
            r#"
            INSERT INTO memberships (org_id, user_id, role, member_since)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (org_id, user_id) DO NOTHING
            "#,
        )
        .bind(invitation.org_id)
        .bind(user_id)
        .bind(invitation.role)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let membership = sqlx::query_as::<_, Membership>(
            "SELECT org_id, user_id, role, member_since FROM memberships \
             WHERE org_id = ? AND user_id = ?",
        )
        .bind(invitation.org_id)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some((invitation, membership)))
    }

    /// Revokes a pending invitation. The same conditional-update guard as
    /// redemption: returns `false` when the invitation was not pending
    /// anymore (or the id never existed).
    pub async fn revoke(&self, invite_id: &i64) -> Result<bool, Error> {
        let updated = sqlx::query("UPDATE invitations SET status = ? WHERE invite_id = ? AND status = ?")
            .bind(InvitationStatus::Revoked)
            .bind(invite_id)
            .bind(InvitationStatus::Pending)
            .execute(&self.connection_pool)
            .await?
            .rows_affected();

        Ok(updated == 1)
    }
}

impl Create<Invitation, CreateInvitationDTO> for InvitationRepository {
    async fn create(&self, data: &CreateInvitationDTO) -> Result<Invitation, Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO invitations
                (token, org_id, inviter_id, role, email, status, created_at, expires_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.token)
        .bind(data.org_id)
        .bind(data.inviter_id)
        .bind(data.role)
        .bind(&data.email)
        .bind(InvitationStatus::Pending)
        .bind(data.created_at)
        .bind(data.expires_at)
        .execute(&self.connection_pool)
        .await?;

        Ok(Invitation {
            invite_id: result.last_insert_rowid(),
            token: data.token.clone(),
            org_id: data.org_id,
            inviter_id: data.inviter_id,
            role: data.role,
            email: data.email.clone(),
            status: InvitationStatus::Pending,
            created_at: data.created_at,
            expires_at: data.expires_at,
            accepted_by: None,
            accepted_at: None,
        })
    }
}

impl Read<Invitation, i64> for InvitationRepository {
    async fn read(&self, id: &i64) -> Result<Option<Invitation>, Error> {
        sqlx::query_as::<_, Invitation>(&format!(
            "SELECT {INVITATION_COLUMNS} FROM invitations WHERE invite_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}
