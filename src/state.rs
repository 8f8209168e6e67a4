use std::sync::Mutex;

use crate::config::AppConfig;
use crate::models::Profile;
use crate::services::scheduling::Scheduler;
use crate::services::uploads::PhotoStore;

/// Shared application state. The scheduler lock covers the slot map and the
/// ledger together, so each book/cancel runs as one atomic step; locks are
/// never held across an await.
pub struct AppState {
    pub config: AppConfig,
    pub scheduler: Mutex<Scheduler>,
    pub profile: Mutex<Profile>,
    pub photos: Box<dyn PhotoStore>,
}
