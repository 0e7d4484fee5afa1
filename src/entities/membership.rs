use super::enums::OrgRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Membership {
    pub org_id: i64,
    pub user_id: i64,
    pub role: OrgRole,
    pub member_since: DateTime<Utc>,
}
