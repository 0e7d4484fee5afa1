//! MembershipRepository - database operations for organization memberships.

use super::Read;
use crate::entities::{Membership, OrgRole};
use chrono::{DateTime, Utc};
use sqlx::{Error, SqlitePool};

pub struct MembershipRepository {
    connection_pool: SqlitePool,
}

impl MembershipRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Admits a user to an organization. Idempotent: if a membership already
    /// exists for the (org, user) pair it is left unchanged, and the stored
    /// row is returned either way.
    pub async fn admit(
        &self,
        org_id: i64,
        user_id: i64,
        role: OrgRole,
        now: DateTime<Utc>,
    ) -> Result<Membership, Error> {
        sqlx::query(
            r#"
            INSERT INTO memberships (org_id, user_id, role, member_since)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (org_id, user_id) DO NOTHING
            "#,
        )
        .bind(org_id)
        .bind(user_id)
        .bind(role)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        self.read(&(org_id, user_id))
            .await?
            .ok_or(Error::RowNotFound)
    }

    /// All memberships of an organization, oldest member first.
    pub async fn find_many_by_org_id(&self, org_id: &i64) -> Result<Vec<Membership>, Error> {
        sqlx::query_as::<_, Membership>(
            r#"
            SELECT org_id, user_id, role, member_since
            FROM memberships
            WHERE org_id = ?
            ORDER BY member_since
            "#,
        )
        .bind(org_id)
        .fetch_all(&self.connection_pool)
        .await
    }
}

impl Read<Membership, (i64, i64)> for MembershipRepository {
    async fn read(&self, (org_id, user_id): &(i64, i64)) -> Result<Option<Membership>, Error> {
        sqlx::query_as::<_, Membership>(
            r#"
            SELECT org_id, user_id, role, member_since
            FROM memberships
            WHERE org_id = ? AND user_id = ?
            "#,
        )
        .bind(org_id)
        .bind(user_id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}
