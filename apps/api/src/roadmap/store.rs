//! Durable progress storage, one document per technology under `roadmap-progress-{technology}`.
//!
//! Last write wins. There is no locking between concurrent writers of the same key.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use redis::AsyncCommands;
use thiserror::Error;
use tracing::{debug, info};

use crate::roadmap::progress::ProgressData;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Corrupt progress document for {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Storage key for a technology's progress document.
pub fn storage_key(technology: &str) -> String {
    format!("roadmap-progress-{technology}")
}

/// Technology keys become file names and Redis keys: lowercase ASCII, digits and `-` only.
pub fn is_valid_technology_key(technology: &str) -> bool {
    !technology.is_empty()
        && technology.len() <= 64
        && technology
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

fn decode(key: &str, raw: &str) -> Result<ProgressData, StoreError> {
    serde_json::from_str(raw).map_err(|source| StoreError::Corrupt {
        key: key.to_string(),
        source,
    })
}

#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Saved progress, or the default document when nothing has been saved.
    async fn load(&self, technology: &str) -> Result<ProgressData, StoreError>;

    async fn save(&self, technology: &str, data: &ProgressData) -> Result<(), StoreError>;

    async fn clear(&self, technology: &str) -> Result<(), StoreError>;
}

/// One JSON file per technology in a directory, created on first save.
pub struct FileProgressStore {
    dir: PathBuf,
}

impl FileProgressStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, technology: &str) -> PathBuf {
        self.dir.join(format!("{}.json", storage_key(technology)))
    }
}

#[async_trait]
impl ProgressStore for FileProgressStore {
    async fn load(&self, technology: &str) -> Result<ProgressData, StoreError> {
        match tokio::fs::read_to_string(self.path(technology)).await {
            Ok(raw) => decode(&storage_key(technology), &raw),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ProgressData::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, technology: &str, data: &ProgressData) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path(technology);
        // Write-then-rename so readers never see a half-written document.
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec(data)?).await?;
        tokio::fs::rename(&tmp, &path).await?;
        debug!("Saved progress to {}", path.display());
        Ok(())
    }

    async fn clear(&self, technology: &str) -> Result<(), StoreError> {
        match tokio::fs::remove_file(self.path(technology)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// String value per key in Redis.
pub struct RedisProgressStore {
    client: redis::Client,
}

impl RedisProgressStore {
    pub fn new(client: redis::Client) -> Self {
        info!("Roadmap progress stored in Redis");
        Self { client }
    }
}

#[async_trait]
impl ProgressStore for RedisProgressStore {
    async fn load(&self, technology: &str) -> Result<ProgressData, StoreError> {
        let key = storage_key(technology);
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(&key).await?;
        match raw {
            Some(raw) => decode(&key, &raw),
            None => Ok(ProgressData::default()),
        }
    }

    async fn save(&self, technology: &str, data: &ProgressData) -> Result<(), StoreError> {
        let key = storage_key(technology);
        let raw = serde_json::to_string(data)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(&key, raw).await?;
        debug!("Saved progress to redis key {key}");
        Ok(())
    }

    async fn clear(&self, technology: &str) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del::<_, ()>(storage_key(technology)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::NaiveDate;

    use super::*;

    fn sample() -> ProgressData {
        ProgressData {
            completed_skills: BTreeSet::from(["Git".to_string()]),
            daily_streak: 2,
            last_active_date: NaiveDate::from_ymd_opt(2026, 5, 4),
            total_study_hours: 7,
            ..Default::default()
        }
    }

    #[test]
    fn test_storage_key_pattern() {
        assert_eq!(storage_key("web-dev"), "roadmap-progress-web-dev");
    }

    #[test]
    fn test_technology_key_validation() {
        assert!(is_valid_technology_key("web-dev"));
        assert!(is_valid_technology_key("rust2024"));
        assert!(!is_valid_technology_key(""));
        assert!(!is_valid_technology_key("../etc/passwd"));
        assert!(!is_valid_technology_key("Web-Dev"));
        assert!(!is_valid_technology_key("a b"));
    }

    #[tokio::test]
    async fn test_file_store_missing_document_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProgressStore::new(dir.path().join("progress"));
        assert_eq!(store.load("web-dev").await.unwrap(), ProgressData::default());
    }

    #[tokio::test]
    async fn test_file_store_round_trips_per_technology() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProgressStore::new(dir.path());
        store.save("devops", &sample()).await.unwrap();

        assert_eq!(store.load("devops").await.unwrap(), sample());
        assert_eq!(store.load("ui-ux").await.unwrap(), ProgressData::default());
        assert!(dir.path().join("roadmap-progress-devops.json").exists());
    }

    #[tokio::test]
    async fn test_file_store_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProgressStore::new(dir.path());
        store.save("ai-ml", &sample()).await.unwrap();
        store.save("ai-ml", &ProgressData::default()).await.unwrap();
        assert_eq!(store.load("ai-ml").await.unwrap(), ProgressData::default());
    }

    #[tokio::test]
    async fn test_file_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProgressStore::new(dir.path());
        store.save("blockchain", &sample()).await.unwrap();
        store.clear("blockchain").await.unwrap();
        store.clear("blockchain").await.unwrap();
        assert_eq!(
            store.load("blockchain").await.unwrap(),
            ProgressData::default()
        );
    }

    #[tokio::test]
    async fn test_file_store_reports_corrupt_documents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("roadmap-progress-web-dev.json"), "{not json").unwrap();
        let store = FileProgressStore::new(dir.path());
        let err = store.load("web-dev").await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }
}
