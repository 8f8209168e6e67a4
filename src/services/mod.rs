pub mod ledger;
pub mod scheduling;
pub mod slots;
pub mod uploads;
