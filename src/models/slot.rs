use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: i64,
    pub start_hour: i64,
    pub end_hour: i64,
    /// Display string like "06:00 AM - 07:00 AM". Bookings copy it and use
    /// it as the join key back to the slot on cancellation.
    pub time: String,
    pub status: SlotStatus,
    pub price: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SlotStatus {
    Available,
    Booked,
}
