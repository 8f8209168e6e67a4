use serde::{Deserialize, Serialize};

/// Single process-wide user record. Saving replaces every text field;
/// `photo` survives a save that carries no new upload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub address: String,
    pub photo: String,
}
