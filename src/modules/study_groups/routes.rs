use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::app_state::AppState;

use super::handlers::{
    create_group, delete_group, join_group, leave_group, list_groups, update_group,
};

pub fn study_group_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_group).get(list_groups))
        .route("/:id", patch(update_group).delete(delete_group))
        .route("/:id/join", post(join_group))
        .route("/:id/leave", post(leave_group))
}
