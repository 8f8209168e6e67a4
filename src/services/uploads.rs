use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;

/// Storage for uploaded profile photos. Implementations persist the bytes
/// somewhere publicly reachable and hand back the absolute URL.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> anyhow::Result<String>;
}

/// Writes photos into a local directory served under `{base_url}/uploads/`.
///
/// Files are named by the upload timestamp in milliseconds plus the original
/// file extension; two uploads within the same millisecond overwrite each
/// other.
pub struct DiskPhotoStore {
    dir: PathBuf,
    base_url: String,
}

impl DiskPhotoStore {
    pub fn new(dir: impl Into<PathBuf>, base_url: String) -> Self {
        Self {
            dir: dir.into(),
            base_url,
        }
    }
}

#[async_trait]
impl PhotoStore for DiskPhotoStore {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> anyhow::Result<String> {
        let ext = Path::new(original_name)
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let filename = format!("{}{}", Utc::now().timestamp_millis(), ext);

        let path = self.dir.join(&filename);
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("failed to write photo to {}", path.display()))?;

        tracing::info!(file = %filename, "stored profile photo");

        Ok(format!("{}/uploads/{}", self.base_url, filename))
    }
}
