use axum::{http::HeaderValue, middleware, routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    app_state::AppState,
    middleware::trace::request_trace_middleware,
    modules::{
        bookings::routes::booking_routes, study_groups::routes::study_group_routes,
        tutors::routes::tutor_routes,
    },
};

pub fn create_router(state: AppState) -> Router {
    let cors = match state
        .env
        .app
        .frontend_origin
        .as_deref()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
    {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    };

    let api = Router::new()
        .nest("/tutors", tutor_routes())
        .nest("/bookings", booking_routes())
        .nest("/study-groups", study_group_routes());

    Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(cors)
        .layer(middleware::from_fn(request_trace_middleware))
        .with_state(state)
}

async fn hello() -> &'static str {
    "StudyHub Backend says hello!\n"
}

async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    let db_result = sqlx::query("SELECT 1").execute(&state.db).await;

    let db_status = match db_result {
        Ok(_) => "healthy",
        Err(e) => {
            tracing::info!("Database health check failed: {}", e);
            "unhealthy"
        }
    };

    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default();

    Json(json!({
        "status": "ok",
        "timestamp": timestamp,
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "database": db_status
        }
    }))
}
