//! Invitation services - the invitation-link lifecycle.
//!
//! Issue, preview, accept and revoke invitation links, plus the admin
//! listing. Authorization lives here in the service layer; the storage
//! layer enforces nothing beyond its constraints.

use crate::core::{AppError, AppState, require_admin};
use crate::dtos::{
    CreateInvitationDTO, InvitationPreviewDTO, InvitationSummaryDTO, IssueInvitationDTO,
    IssuedInvitationDTO, MembershipDTO,
};
use crate::entities::{Invitation, OrgRole, User};
use crate::repositories::{Create, Read};
use axum::{
    Extension,
    extract::{Json, Path, State},
};
use axum_macros::debug_handler;
use chrono::Utc;
use futures_util::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[debug_handler]
#[instrument(skip(state, current_user, body), fields(org_id = %org_id, inviter = %current_user.user_id))]
pub async fn issue_invitation(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i64>,
    Extension(current_user): Extension<User>,
    Json(body): Json<IssueInvitationDTO>,
) -> Result<Json<IssuedInvitationDTO>, AppError> {
    debug!("Issuing invitation");
    body.validate()?;

    if state.org.read(&org_id).await?.is_none() {
        warn!("Organization not found");
        return Err(AppError::not_found("Organization not found"));
    }

    let membership = state
        .membership
        .read(&(org_id, current_user.user_id))
        .await?;
    require_admin(&membership)?;

    let role: OrgRole = body.role.parse().map_err(|_| {
        warn!("Unrecognized target role '{}'", body.role);
        AppError::bad_request("Invalid role").with_details(format!(
            "'{}' is not a recognized role; expected 'member' or 'admin'",
            body.role
        ))
    })?;

    let now = Utc::now();
    let invitation = state
        .invitation
        .create(&CreateInvitationDTO {
            token: Invitation::generate_token(),
            org_id,
            inviter_id: current_user.user_id,
            role,
            email: body.email,
            created_at: now,
            expires_at: Invitation::expiry_for(now),
        })
        .await?;

    info!("Invitation {} issued", invitation.invite_id);
    let invite_url = state.invite_url(&invitation.token);
    Ok(Json(IssuedInvitationDTO {
        invite_id: invitation.invite_id,
        token: invitation.token,
        invite_url,
        role: invitation.role,
        email: invitation.email,
        expires_at: invitation.expires_at,
    }))
}

/// Unauthenticated preview of an invitation link: holding the token is what
/// authorizes the read. Nothing is mutated.
#[instrument(skip(state, token))]
pub async fn lookup_invitation(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<Json<InvitationPreviewDTO>, AppError> {
    debug!("Looking up invitation by token");

    let invitation = state
        .invitation
        .find_by_token(&token)
        .await?
        .ok_or_else(|| {
            warn!("Unknown invitation token");
            AppError::not_found("Invitation not found")
        })?;

    let now = Utc::now();
    if invitation.is_expired(now) {
        warn!("Invitation {} has expired", invitation.invite_id);
        return Err(AppError::gone("Invitation has expired"));
    }

    let organization = state
        .org
        .read(&invitation.org_id)
        .await?
        .ok_or_else(|| AppError::internal_server_error("Invitation references a missing organization"))?;

    let inviter = state
        .user
        .read(&invitation.inviter_id)
        .await?
        .map(|u| u.username);

    Ok(Json(InvitationPreviewDTO {
        organization: organization.name,
        inviter,
        role: invitation.role,
        status: invitation.effective_status(now),
        expires_at: invitation.expires_at,
    }))
}

#[instrument(skip(state, current_user, token), fields(user_id = %current_user.user_id))]
pub async fn accept_invitation(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    Extension(current_user): Extension<User>,
) -> Result<Json<MembershipDTO>, AppError> {
    debug!("Accepting invitation");

    let invitation = state
        .invitation
        .find_by_token(&token)
        .await?
        .ok_or_else(|| {
            warn!("Unknown invitation token");
            AppError::not_found("Invitation not found")
        })?;

    let now = Utc::now();
    // Expiry dominates stored status: a token past its window is reported
    // expired even if it was already accepted or revoked.
    if invitation.is_expired(now) {
        warn!("Invitation {} has expired", invitation.invite_id);
        return Err(AppError::gone("Invitation has expired"));
    }

    match state
        .invitation
        .redeem(&token, current_user.user_id, now)
        .await?
    {
        Some((invitation, membership)) => {
            info!(
                "Invitation {} accepted, user {} admitted to organization {}",
                invitation.invite_id, membership.user_id, membership.org_id
            );
            Ok(Json(MembershipDTO::from(membership)))
        }
        // The guarded update found no pending row: either a terminal status
        // was already stored, or a concurrent redemption won the race.
        None => {
            warn!("Invitation {} already used", invitation.invite_id);
            Err(AppError::conflict("Invitation has already been used"))
        }
    }
}

#[instrument(skip(state, current_user), fields(invite_id = %invite_id, user_id = %current_user.user_id))]
pub async fn revoke_invitation(
    State(state): State<Arc<AppState>>,
    Path(invite_id): Path<i64>,
    Extension(current_user): Extension<User>,
) -> Result<(), AppError> {
    debug!("Revoking invitation");

    let invitation = state.invitation.read(&invite_id).await?.ok_or_else(|| {
        warn!("Invitation not found");
        AppError::not_found("Invitation not found")
    })?;

    let membership = state
        .membership
        .read(&(invitation.org_id, current_user.user_id))
        .await?;
    require_admin(&membership)?;

    if !state.invitation.revoke(&invite_id).await? {
        warn!("Invitation {} is not pending anymore", invite_id);
        return Err(AppError::conflict("Invitation has already been used"));
    }

    info!("Invitation {} revoked", invite_id);
    Ok(())
}

#[instrument(skip(state, current_user), fields(org_id = %org_id, user_id = %current_user.user_id))]
pub async fn list_invitations(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i64>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<InvitationSummaryDTO>>, AppError> {
    debug!("Listing invitations for organization");

    if state.org.read(&org_id).await?.is_none() {
        warn!("Organization not found");
        return Err(AppError::not_found("Organization not found"));
    }

    let membership = state
        .membership
        .read(&(org_id, current_user.user_id))
        .await?;
    require_admin(&membership)?;

    let invitations = state.invitation.find_many_by_org_id(&org_id).await?;

    let inviters =
        try_join_all(invitations.iter().map(|inv| state.user.read(&inv.inviter_id))).await?;

    let now = Utc::now();
    let summaries: Vec<InvitationSummaryDTO> = invitations
        .iter()
        .zip(inviters)
        .map(|(inv, inviter)| {
            InvitationSummaryDTO::from_invitation(inv, inviter.map(|u| u.username), now)
        })
        .collect();

    info!("Retrieved {} invitations", summaries.len());
    Ok(Json(summaries))
}
