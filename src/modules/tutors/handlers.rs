use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::{
    AvailabilityRepository, AvailabilitySlot, BookingRepository, DisableDayPayload,
    NewAvailabilitySlot, OpenSlot, UpdateAvailabilitySlot, UserRole,
};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::Principal;
use crate::scheduling::{conflict, TimeRange};

fn slot_range(slot: &AvailabilitySlot) -> TimeRange {
    TimeRange::new(slot.start_time, slot.end_time)
}

/// POST /api/tutors/availability: append one or more slots to the tutor's
/// calendar. Slots are checked and inserted in order; the first rejection
/// aborts the request, and anything inserted before it stands.
pub async fn create_availability(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<Vec<NewAvailabilitySlot>>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let principal = principal.require(UserRole::Tutor)?;

    let mut ids: Vec<Uuid> = Vec::with_capacity(payload.len());
    for slot in &payload {
        slot.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if slot.end_time <= slot.start_time {
            return Err(AppError::Validation(
                "end_time must be after start_time".to_string(),
            ));
        }

        let existing =
            AvailabilityRepository::slots_for_tutor_day(&state.db, principal.id, slot.day).await?;
        let ranges: Vec<TimeRange> = existing.iter().map(slot_range).collect();
        conflict::check_new_slot(
            OffsetDateTime::now_utc(),
            &ranges,
            &TimeRange::new(slot.start_time, slot.end_time),
        )?;

        let created = AvailabilityRepository::insert(&state.db, principal.id, slot).await?;
        ids.push(created.id);
    }

    Ok((StatusCode::CREATED, Json(json!({ "ids": ids }))))
}

/// GET /api/tutors/availability: the tutor's own slots.
pub async fn get_availability(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<Vec<AvailabilitySlot>>> {
    let principal = principal.require(UserRole::Tutor)?;
    let slots = AvailabilityRepository::slots_for_tutor(&state.db, principal.id).await?;
    Ok(Json(slots))
}

/// GET /api/tutors/availability/all: every active slot with tutor info,
/// for students browsing.
pub async fn list_open_slots(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<Vec<OpenSlot>>> {
    principal.require(UserRole::Student)?;
    let slots = AvailabilityRepository::active_slots_with_tutors(&state.db).await?;
    Ok(Json(slots))
}

/// PATCH /api/tutors/availability/:id: edit a slot. Rejected while any
/// booking sits inside the slot's current window.
pub async fn update_availability(
    State(state): State<AppState>,
    principal: Principal,
    Path(slot_id): Path<Uuid>,
    Json(payload): Json<UpdateAvailabilitySlot>,
) -> AppResult<Json<AvailabilitySlot>> {
    let principal = principal.require(UserRole::Tutor)?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let slot = AvailabilityRepository::find_owned(&state.db, slot_id, principal.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Availability slot not found".to_string()))?;

    if payload.affects_booked_window() {
        let times = BookingRepository::times_for_tutor(&state.db, principal.id).await?;
        conflict::ensure_window_unbooked(&times, &slot_range(&slot))?;
    }

    let updated = AvailabilityRepository::update(&state.db, slot.id, &payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/tutors/availability/:id: rejected while booked.
pub async fn delete_availability(
    State(state): State<AppState>,
    principal: Principal,
    Path(slot_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let principal = principal.require(UserRole::Tutor)?;

    let slot = AvailabilityRepository::find_owned(&state.db, slot_id, principal.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Availability slot not found".to_string()))?;

    let times = BookingRepository::times_for_tutor(&state.db, principal.id).await?;
    conflict::ensure_window_unbooked(&times, &slot_range(&slot))?;

    AvailabilityRepository::delete(&state.db, slot.id).await?;
    Ok(Json(json!({ "message": "Availability slot deleted" })))
}

/// PATCH /api/tutors/availability/day: deactivate every slot on a day.
/// Rejected while any booking falls inside that calendar day.
pub async fn disable_day(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<DisableDayPayload>,
) -> AppResult<Json<serde_json::Value>> {
    let principal = principal.require(UserRole::Tutor)?;

    let times = BookingRepository::times_for_tutor(&state.db, principal.id).await?;
    conflict::ensure_window_unbooked(&times, &TimeRange::calendar_day(payload.day))?;

    let disabled = AvailabilityRepository::disable_day(&state.db, principal.id, payload.day).await?;
    Ok(Json(json!({ "disabled": disabled })))
}
