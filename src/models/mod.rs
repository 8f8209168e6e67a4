pub mod booking;
pub mod profile;
pub mod slot;

pub use booking::{Booking, BookingStatus};
pub use profile::Profile;
pub use slot::{Slot, SlotStatus};
