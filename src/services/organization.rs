//! Organization services - tenant creation and member listing.

use crate::core::{AppError, AppState};
use crate::dtos::{CreateOrganizationDTO, MemberDTO, OrganizationDTO};
use crate::entities::{OrgRole, User};
use crate::repositories::{Create, Read};
use axum::{
    Extension,
    extract::{Json, Path, State},
};
use chrono::Utc;
use futures_util::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id))]
pub async fn create_organization(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<CreateOrganizationDTO>,
) -> Result<Json<OrganizationDTO>, AppError> {
    debug!("Creating organization");
    body.validate()?;

    let organization = state.org.create(&body).await?;

    // The creator is the organization's first admin.
    state
        .membership
        .admit(
            organization.org_id,
            current_user.user_id,
            OrgRole::Admin,
            Utc::now(),
        )
        .await?;

    info!(
        "Organization '{}' created with id {}",
        organization.name, organization.org_id
    );
    Ok(Json(OrganizationDTO::from(organization)))
}

#[instrument(skip(state, current_user), fields(org_id = %org_id, user_id = %current_user.user_id))]
pub async fn list_members(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i64>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<MemberDTO>>, AppError> {
    debug!("Listing organization members");

    if state.org.read(&org_id).await?.is_none() {
        warn!("Organization not found");
        return Err(AppError::not_found("Organization not found"));
    }

    // Any member may see the roster; outsiders may not.
    state
        .membership
        .read(&(org_id, current_user.user_id))
        .await?
        .ok_or_else(|| {
            warn!("Caller is not a member of organization {}", org_id);
            AppError::forbidden("You are not a member of this organization")
        })?;

    let memberships = state.membership.find_many_by_org_id(&org_id).await?;

    let users = try_join_all(memberships.iter().map(|m| state.user.read(&m.user_id))).await?;

    let members: Vec<MemberDTO> = memberships
        .iter()
        .zip(users)
        .map(|(m, user)| MemberDTO {
            user_id: m.user_id,
            username: user.map(|u| u.username),
            role: m.role,
            member_since: m.member_since,
        })
        .collect();

    info!("Retrieved {} members", members.len());
    Ok(Json(members))
}
