use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::app_state::AppState;

use super::handlers::{
    create_availability, delete_availability, disable_day, get_availability, list_open_slots,
    update_availability,
};

pub fn tutor_routes() -> Router<AppState> {
    Router::new()
        .route("/availability", post(create_availability).get(get_availability))
        .route("/availability/all", get(list_open_slots))
        .route("/availability/day", patch(disable_day))
        .route(
            "/availability/:id",
            patch(update_availability).delete(delete_availability),
        )
}
