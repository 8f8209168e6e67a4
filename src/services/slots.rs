use std::collections::HashMap;

use crate::models::{Slot, SlotStatus};

/// Morning peak 06:00-10:00, evening peak 16:00-22:00, off-peak otherwise.
pub fn price_for_hour(hour: i64) -> i64 {
    if (6..10).contains(&hour) {
        800
    } else if (16..22).contains(&hour) {
        1200
    } else {
        600
    }
}

/// 12-hour clock with AM/PM: 0 -> "12:00 AM", 13 -> "01:00 PM".
pub fn format_12h(hour: i64) -> String {
    let h = hour.rem_euclid(24);
    let period = if h >= 12 { "PM" } else { "AM" };
    let hour12 = if h % 12 == 0 { 12 } else { h % 12 };
    format!("{hour12:02}:00 {period}")
}

/// The 24 hourly slots of a fresh date, ids 1..=24 in hour order, all
/// AVAILABLE.
pub fn generate_slots() -> Vec<Slot> {
    (0..24)
        .map(|hour| Slot {
            id: hour + 1,
            start_hour: hour,
            end_hour: (hour + 1) % 24,
            time: format!("{} - {}", format_12h(hour), format_12h(hour + 1)),
            status: SlotStatus::Available,
            price: price_for_hour(hour),
        })
        .collect()
}

/// Slot lists keyed by the literal date string.
///
/// Keys are not validated as calendar dates: every distinct string is its
/// own bucket. A date is generated on first access, kept forever, and the
/// same underlying slots are handed out on every later access, so status
/// changes stick.
#[derive(Default)]
pub struct SlotBoard {
    by_date: HashMap<String, Vec<Slot>>,
}

impl SlotBoard {
    pub fn slots_for(&mut self, date: &str) -> &mut Vec<Slot> {
        self.by_date
            .entry(date.to_string())
            .or_insert_with(generate_slots)
    }

    /// Lookup without generating. Cancellation releases slots through this
    /// so it never creates a bucket as a side effect.
    pub fn get_mut(&mut self, date: &str) -> Option<&mut Vec<Slot>> {
        self.by_date.get_mut(date)
    }
}
