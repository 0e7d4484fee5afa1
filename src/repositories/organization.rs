use super::{Create, Read};
use crate::dtos::CreateOrganizationDTO;
use crate::entities::Organization;
use sqlx::{Error, SqlitePool};

pub struct OrganizationRepository {
    connection_pool: SqlitePool,
}

impl OrganizationRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }
}

impl Create<Organization, CreateOrganizationDTO> for OrganizationRepository {
    async fn create(&self, data: &CreateOrganizationDTO) -> Result<Organization, Error> {
        let result = sqlx::query("INSERT INTO organizations (name) VALUES (?)")
            .bind(&data.name)
            .execute(&self.connection_pool)
            .await?;

        Ok(Organization {
            org_id: result.last_insert_rowid(),
            name: data.name.clone(),
        })
    }
}

impl Read<Organization, i64> for OrganizationRepository {
    async fn read(&self, id: &i64) -> Result<Option<Organization>, Error> {
        sqlx::query_as::<_, Organization>(
            "SELECT org_id, name FROM organizations WHERE org_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}
