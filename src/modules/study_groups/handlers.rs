use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::{
    NewStudyGroup, StudyGroup, StudyGroupRepository, StudyGroupWithParticipants, UpdateStudyGroup,
    UserRole,
};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::Principal;
use crate::scheduling::membership;

async fn with_participants(
    state: &AppState,
    group: StudyGroup,
) -> AppResult<StudyGroupWithParticipants> {
    let participants = StudyGroupRepository::participants(&state.db, group.id).await?;
    Ok(StudyGroupWithParticipants {
        group,
        participants,
    })
}

async fn find_group(state: &AppState, group_id: Uuid) -> AppResult<StudyGroup> {
    StudyGroupRepository::find(&state.db, group_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Study group not found".to_string()))
}

/// POST /api/study-groups: any student may open a group; they become its
/// first participant.
pub async fn create_group(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<NewStudyGroup>,
) -> AppResult<(StatusCode, Json<StudyGroupWithParticipants>)> {
    let principal = principal.require(UserRole::Student)?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let group = StudyGroupRepository::insert(&state.db, principal.id, &payload).await?;
    let response = with_participants(&state, group).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/study-groups: public listing with participants.
pub async fn list_groups(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StudyGroupWithParticipants>>> {
    let groups = StudyGroupRepository::list(&state.db).await?;

    let mut listed = Vec::with_capacity(groups.len());
    for group in groups {
        listed.push(with_participants(&state, group).await?);
    }
    Ok(Json(listed))
}

/// POST /api/study-groups/:id/join
pub async fn join_group(
    State(state): State<AppState>,
    principal: Principal,
    Path(group_id): Path<Uuid>,
) -> AppResult<Json<StudyGroupWithParticipants>> {
    let principal = principal.require(UserRole::Student)?;
    let group = find_group(&state, group_id).await?;

    let participants = StudyGroupRepository::participant_ids(&state.db, group.id).await?;
    membership::check_join(group.creator_id, &participants, principal.id)?;

    StudyGroupRepository::add_participant(&state.db, group.id, principal.id).await?;
    let response = with_participants(&state, group).await?;
    Ok(Json(response))
}

/// POST /api/study-groups/:id/leave
pub async fn leave_group(
    State(state): State<AppState>,
    principal: Principal,
    Path(group_id): Path<Uuid>,
) -> AppResult<Json<StudyGroupWithParticipants>> {
    let principal = principal.require(UserRole::Student)?;
    let group = find_group(&state, group_id).await?;

    let participants = StudyGroupRepository::participant_ids(&state.db, group.id).await?;
    membership::check_leave(group.creator_id, &participants, principal.id)?;

    StudyGroupRepository::remove_participant(&state.db, group.id, principal.id).await?;
    let response = with_participants(&state, group).await?;
    Ok(Json(response))
}

/// PATCH /api/study-groups/:id: creator only; subject/date/time lock once
/// a second participant has joined.
pub async fn update_group(
    State(state): State<AppState>,
    principal: Principal,
    Path(group_id): Path<Uuid>,
    Json(payload): Json<UpdateStudyGroup>,
) -> AppResult<Json<StudyGroupWithParticipants>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let group = find_group(&state, group_id).await?;
    let participants = StudyGroupRepository::participant_ids(&state.db, group.id).await?;
    membership::check_update(
        group.creator_id,
        participants.len(),
        principal.id,
        payload.touches_locked_fields(),
    )?;

    let updated = StudyGroupRepository::update(&state.db, group.id, &payload).await?;
    let response = with_participants(&state, updated).await?;
    Ok(Json(response))
}

/// DELETE /api/study-groups/:id: creator only, and only once everyone
/// else has left.
pub async fn delete_group(
    State(state): State<AppState>,
    principal: Principal,
    Path(group_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let group = find_group(&state, group_id).await?;
    let participants = StudyGroupRepository::participant_ids(&state.db, group.id).await?;
    membership::check_delete(group.creator_id, participants.len(), principal.id)?;

    StudyGroupRepository::delete(&state.db, group.id).await?;
    Ok(Json(json!({ "message": "Study group deleted" })))
}
