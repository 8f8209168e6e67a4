use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::scheduling::BookingError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("failed to store photo")]
    Upload(#[source] anyhow::Error),
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        AppError::Upload(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Booking(BookingError::SlotUnavailable) => StatusCode::BAD_REQUEST,
            AppError::Booking(BookingError::BookingNotFound) => StatusCode::NOT_FOUND,
            AppError::Booking(BookingError::AlreadyCancelled) => StatusCode::BAD_REQUEST,
            AppError::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "message": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
