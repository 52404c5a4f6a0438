use crate::utils::error::{ActivityError, ErrorSeverity};
use crate::web::dto::ErrorDetail;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.severity() {
            ErrorSeverity::Low => {}
            ErrorSeverity::Medium => tracing::warn!("⚠️ Request rejected: {}", self),
            ErrorSeverity::High | ErrorSeverity::Critical => {
                tracing::error!("❌ Request failed: {} (Category: {:?})", self, self.category())
            }
        }

        let body = Json(ErrorDetail {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}
