//! HTTP surface for the activity roster.
//!
//! Handlers translate `ActivityError` into `{"detail": ...}` bodies; the
//! static front-end is served from the configured directory under `/static`.

pub mod dto;
pub mod error;
pub mod handlers;

use crate::core::ActivityRoster;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared handler state. The roster is built once at startup and lives as
/// long as the router.
#[derive(Clone)]
pub struct AppState {
    roster: Arc<dyn ActivityRoster>,
}

impl AppState {
    pub fn new(roster: Arc<dyn ActivityRoster>) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> Arc<dyn ActivityRoster> {
        self.roster.clone()
    }
}

pub fn build_activity_routers() -> Router<AppState> {
    let activity_routers = Router::new()
        .route("/", get(handlers::list_activities))
        .route("/:activity_name/signup", post(handlers::signup_for_activity))
        .route(
            "/:activity_name/unregister",
            delete(handlers::unregister_from_activity),
        );

    Router::new().nest("/activities", activity_routers)
}

pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .merge(build_activity_routers())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
