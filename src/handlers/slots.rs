use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::models::Slot;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: Option<String>,
}

// GET /slots?date=2024-01-01
pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Json<Vec<Slot>> {
    // A request without a date lands in the shared literal "undefined"
    // bucket rather than being rejected.
    let date = query.date.unwrap_or_else(|| "undefined".to_string());

    let slots = {
        let mut scheduler = state.scheduler.lock().unwrap();
        scheduler.slots_for(&date).to_vec()
    };

    Json(slots)
}
