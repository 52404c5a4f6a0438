use crate::utils::error::Result;
use crate::utils::validation::require_param;
use crate::web::dto::{ActivitiesResponse, ActivityResponse, EmailQuery, MessageResponse};
use crate::web::AppState;
use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::Json;

pub async fn index() -> Redirect {
    Redirect::temporary("/static/index.html")
}

pub async fn list_activities(State(state): State<AppState>) -> Json<ActivitiesResponse> {
    let activities = state
        .roster()
        .list_activities()
        .await
        .into_iter()
        .map(|(name, activity)| (name, ActivityResponse::from(activity)))
        .collect();
    Json(activities)
}

pub async fn signup_for_activity(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let email = require_param("email", query.email.as_deref())?;

    state
        .roster()
        .signup(&activity_name, &email)
        .await
        .map(|change| {
            Json(MessageResponse {
                message: change.message(),
            })
        })
}

pub async fn unregister_from_activity(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let email = require_param("email", query.email.as_deref())?;

    state
        .roster()
        .unregister(&activity_name, &email)
        .await
        .map(|change| {
            Json(MessageResponse {
                message: change.message(),
            })
        })
}
