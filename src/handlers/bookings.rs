use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Booking;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct BookRequest {
    pub date: Option<String>,
    pub id: i64,
}

// POST /book
pub async fn book_slot(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BookRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let date = body.date.unwrap_or_else(|| "undefined".to_string());

    let booking = {
        let mut scheduler = state.scheduler.lock().unwrap();
        scheduler.book(&date, body.id)?
    };

    tracing::info!(
        %date,
        slot_id = body.id,
        booking_id = booking.booking_id,
        "slot booked"
    );

    Ok(Json(serde_json::json!({
        "message": "Booked successfully",
        "booking": booking,
    })))
}

// GET /my-bookings
pub async fn my_bookings(State(state): State<Arc<AppState>>) -> Json<Vec<Booking>> {
    let bookings = {
        let scheduler = state.scheduler.lock().unwrap();
        scheduler.bookings().to_vec()
    };

    Json(bookings)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRequest {
    pub booking_id: i64,
}

// POST /cancel-booking
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CancelRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    {
        let mut scheduler = state.scheduler.lock().unwrap();
        scheduler.cancel(body.booking_id)?;
    }

    tracing::info!(booking_id = body.booking_id, "booking cancelled");

    Ok(Json(
        serde_json::json!({ "message": "Booking cancelled successfully" }),
    ))
}
