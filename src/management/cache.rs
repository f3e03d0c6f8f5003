use std::{io::ErrorKind, path::PathBuf};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Serialize, de::DeserializeOwned};
use sha2::{Digest, Sha256};

use crate::error::ApiError;

/// File-backed key-value store addressed by composite string keys.
///
/// One JSON file per key under the store's root directory (the platform data
/// directory via [`CacheManager::default_dir`] in normal use). Composite keys
/// contain `:` and arbitrary user input, so the filename is the URL-safe
/// base64 of the key's SHA-256 digest rather than the key itself.
pub struct CacheManager {
    key: String,
    dir: PathBuf,
}

impl CacheManager {
    /// Default store root under the platform data directory.
    pub fn default_dir() -> PathBuf {
        let mut dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.push("spaura/cache");
        dir
    }

    /// Store rooted at an explicit directory.
    pub fn in_dir(key: impl Into<String>, dir: PathBuf) -> Self {
        Self {
            key: key.into(),
            dir,
        }
    }

    /// Reads the cached value for this key.
    ///
    /// A missing file is a plain miss (`Ok(None)`). So is a file that no
    /// longer parses into `T` (corrupt or truncated): the caller recomputes
    /// and the next write replaces the bad entry. Only an unreadable file is
    /// `ApiError::Cache`.
    pub async fn read<T: DeserializeOwned>(&self) -> Result<Option<T>, ApiError> {
        let path = self.cache_path();
        let content = match async_fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ApiError::Cache(e.to_string())),
        };

        Ok(serde_json::from_str(&content).ok())
    }

    /// Writes the value for this key, replacing any previous entry.
    ///
    /// Last write wins; there is no locking around concurrent writers.
    pub async fn write<T: Serialize>(&self, value: &T) -> Result<(), ApiError> {
        let path = self.cache_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| ApiError::Cache(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(value).map_err(|e| ApiError::Cache(e.to_string()))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| ApiError::Cache(e.to_string()))
    }

    fn cache_path(&self) -> PathBuf {
        let digest = Sha256::digest(self.key.as_bytes());
        self.dir.join(format!("{}.json", URL_SAFE_NO_PAD.encode(digest)))
    }
}
