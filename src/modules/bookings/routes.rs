use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::app_state::AppState;

use super::handlers::{create_booking, student_calendar, tutor_calendar, update_booking};

pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/tutor", get(tutor_calendar))
        .route("/student", get(student_calendar))
        .route("/:id", patch(update_booking))
}
