use crate::models::{Booking, BookingStatus};

/// Append-only record of every booking ever made. Ids are handed out
/// sequentially starting at 1, across all dates, and are never reused;
/// cancelled bookings stay in the ledger with their status flipped.
pub struct Ledger {
    bookings: Vec<Booking>,
    next_id: i64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            bookings: Vec::new(),
            next_id: 1,
        }
    }
}

impl Ledger {
    pub fn append(&mut self, date: String, time: String, price: i64) -> Booking {
        let booking = Booking {
            booking_id: self.next_id,
            date,
            time,
            price,
            status: BookingStatus::Confirmed,
        };
        self.next_id += 1;
        self.bookings.push(booking.clone());
        booking
    }

    pub fn find_by_id_mut(&mut self, booking_id: i64) -> Option<&mut Booking> {
        self.bookings.iter_mut().find(|b| b.booking_id == booking_id)
    }

    /// All bookings in creation order, cancelled ones included.
    pub fn all(&self) -> &[Booking] {
        &self.bookings
    }
}
