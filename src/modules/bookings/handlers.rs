use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use time::Duration;
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::{
    Booking, BookingRepository, BookingStatus, BookingWithParty, CalendarEvent, NewBooking,
    UpdateBookingPayload, UserRepository, UserRole,
};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::Principal;
use crate::scheduling::{status, TransitionError};

fn to_calendar_event(booking: BookingWithParty) -> CalendarEvent {
    CalendarEvent {
        id: booking.id,
        title: format!(
            "{} with {} {}",
            booking.subject, booking.party_first_name, booking.party_last_name
        ),
        start: booking.booking_time,
        // Display convention shared with the frontend calendar.
        end: booking.booking_time + Duration::hours(1),
        status: booking.status,
    }
}

/// POST /api/bookings: a student reserves a session with a tutor. The
/// booking time is taken as requested; it is not validated against the
/// tutor's availability windows.
pub async fn create_booking(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<NewBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let principal = principal.require(UserRole::Student)?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let tutor = UserRepository::find_by_id(&state.db, payload.tutor_id)
        .await?
        .filter(|user| user.role == UserRole::Tutor)
        .ok_or_else(|| AppError::NotFound("Tutor not found".to_string()))?;

    let booking = BookingRepository::insert(&state.db, principal.id, &payload).await?;
    tracing::info!(booking_id = %booking.id, tutor_id = %tutor.id, "booking created");

    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/bookings/tutor: the tutor's bookings as calendar events.
pub async fn tutor_calendar(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<Vec<CalendarEvent>>> {
    let principal = principal.require(UserRole::Tutor)?;
    let bookings = BookingRepository::for_tutor_with_students(&state.db, principal.id).await?;
    Ok(Json(bookings.into_iter().map(to_calendar_event).collect()))
}

/// GET /api/bookings/student: the student's bookings as calendar events.
pub async fn student_calendar(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<Vec<CalendarEvent>>> {
    let principal = principal.require(UserRole::Student)?;
    let bookings = BookingRepository::for_student_with_tutors(&state.db, principal.id).await?;
    Ok(Json(bookings.into_iter().map(to_calendar_event).collect()))
}

/// PATCH /api/bookings/:id: status changes pass the transition guard;
/// either party may move the booking time without re-validation.
pub async fn update_booking(
    State(state): State<AppState>,
    principal: Principal,
    Path(booking_id): Path<Uuid>,
    Json(payload): Json<UpdateBookingPayload>,
) -> AppResult<Json<Booking>> {
    let booking = BookingRepository::find(&state.db, booking_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    if principal.id != booking.tutor_id && principal.id != booking.student_id {
        return Err(AppError::Authorization(
            "Only the booking's tutor or student may modify it".to_string(),
        ));
    }

    let target_status = match payload.status.as_deref() {
        Some(raw) => {
            let target: BookingStatus = raw
                .parse()
                .map_err(|_| TransitionError::InvalidStatus(raw.to_string()))?;
            status::check_transition(principal.role, booking.status, target)?;
            Some(target)
        }
        None => None,
    };

    let updated =
        BookingRepository::update(&state.db, booking.id, target_status, payload.booking_time)
            .await?;
    Ok(Json(updated))
}
