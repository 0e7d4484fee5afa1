use crate::entities::Organization;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug)]
pub struct OrganizationDTO {
    pub org_id: i64,
    pub name: String,
}

impl From<Organization> for OrganizationDTO {
    fn from(value: Organization) -> Self {
        Self {
            org_id: value.org_id,
            name: value.name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateOrganizationDTO {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
}
