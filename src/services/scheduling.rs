use crate::models::{Booking, BookingStatus, Slot, SlotStatus};
use crate::services::ledger::Ledger;
use crate::services::slots::SlotBoard;

#[derive(Debug, PartialEq, Eq)]
pub enum BookingError {
    /// Slot id unknown for that date, or already booked. Callers cannot
    /// tell the two apart.
    SlotUnavailable,
    BookingNotFound,
    AlreadyCancelled,
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::SlotUnavailable => write!(f, "Slot already booked"),
            BookingError::BookingNotFound => write!(f, "Booking not found"),
            BookingError::AlreadyCancelled => write!(f, "Already cancelled"),
        }
    }
}

impl std::error::Error for BookingError {}

/// Book/cancel state machine over the slot board and the ledger.
///
/// A slot moves AVAILABLE -> BOOKED on booking and back to AVAILABLE when
/// the booking holding it is cancelled. A booking moves CONFIRMED ->
/// CANCELLED and never comes back.
#[derive(Default)]
pub struct Scheduler {
    slots: SlotBoard,
    ledger: Ledger,
}

impl Scheduler {
    /// The date's slot list, generated on first access.
    pub fn slots_for(&mut self, date: &str) -> &[Slot] {
        self.slots.slots_for(date)
    }

    pub fn book(&mut self, date: &str, slot_id: i64) -> Result<Booking, BookingError> {
        let slots = self.slots.slots_for(date);
        let slot = match slots.iter_mut().find(|s| s.id == slot_id) {
            Some(s) if s.status != SlotStatus::Booked => s,
            _ => return Err(BookingError::SlotUnavailable),
        };

        slot.status = SlotStatus::Booked;
        let time = slot.time.clone();
        let price = slot.price;

        Ok(self.ledger.append(date.to_string(), time, price))
    }

    pub fn cancel(&mut self, booking_id: i64) -> Result<(), BookingError> {
        let booking = self
            .ledger
            .find_by_id_mut(booking_id)
            .ok_or(BookingError::BookingNotFound)?;
        if booking.status == BookingStatus::Cancelled {
            return Err(BookingError::AlreadyCancelled);
        }

        booking.status = BookingStatus::Cancelled;
        let date = booking.date.clone();
        let time = booking.time.clone();

        // Release the slot via the booking's display-time string, the only
        // link a booking keeps back to its slot. Unique within one date,
        // but it is a formatted value, not a stable id.
        // TODO: record the slot id on bookings and release by id
        match self.slots.get_mut(&date) {
            Some(slots) => match slots.iter_mut().find(|s| s.time == time) {
                Some(slot) => slot.status = SlotStatus::Available,
                None => {
                    tracing::warn!(%date, %time, "no slot matches cancelled booking, release skipped");
                }
            },
            None => {
                tracing::warn!(%date, "no slot list for cancelled booking's date, release skipped");
            }
        }

        Ok(())
    }

    /// All bookings ever made, creation order, cancelled ones included.
    pub fn bookings(&self) -> &[Booking] {
        self.ledger.all()
    }
}
