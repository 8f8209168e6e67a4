use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::Json;

use crate::errors::AppError;
use crate::models::Profile;
use crate::state::AppState;

// GET /profile
pub async fn get_profile(State(state): State<Arc<AppState>>) -> Json<Profile> {
    let profile = state.profile.lock().unwrap().clone();
    Json(profile)
}

#[derive(Default)]
struct ProfileForm {
    name: String,
    mobile: String,
    email: String,
    address: String,
}

// POST /profile — multipart form: name, mobile, email, address, photo (file)
pub async fn save_profile(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut form = ProfileForm::default();
    let mut photo_url: Option<String> = None;

    // The upload is resolved to a public URL before the profile lock is
    // taken; the profile itself never sees multipart or the filesystem.
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "name" => form.name = field.text().await?,
            "mobile" => form.mobile = field.text().await?,
            "email" => form.email = field.text().await?,
            "address" => form.address = field.text().await?,
            "photo" => {
                let original_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                let url = state
                    .photos
                    .store(&original_name, &bytes)
                    .await
                    .map_err(AppError::Upload)?;
                photo_url = Some(url);
            }
            _ => {}
        }
    }

    let profile = {
        let mut profile = state.profile.lock().unwrap();
        // text fields are replaced wholesale, absent parts become empty;
        // the photo URL survives a save without a new upload
        profile.name = form.name;
        profile.mobile = form.mobile;
        profile.email = form.email;
        profile.address = form.address;
        if let Some(url) = photo_url {
            profile.photo = url;
        }
        profile.clone()
    };

    tracing::info!(name = %profile.name, has_photo = !profile.photo.is_empty(), "profile saved");

    Ok(Json(serde_json::json!({
        "message": "Profile saved",
        "profile": profile,
    })))
}
