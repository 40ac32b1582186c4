// Typed accessors over the persistence port. A missing key reads as an
// empty collection; an unparseable value is reported as corruption and
// nothing is overwritten.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{AppError, Result};
use crate::models::matches::Match;
use crate::models::prediction::Prediction;
use crate::models::user::{sample_users, User};
use crate::storage::Storage;

pub const KEY_USERS: &str = "users";
pub const KEY_UPCOMING_MATCHES: &str = "upcomingMatches";
pub const KEY_COMPLETED_MATCHES: &str = "completedMatches";
pub const KEY_PREDICTIONS: &str = "userPredictions";
pub const KEY_PREDICTIONS_LOCKED: &str = "predictionsLocked";

#[derive(Clone)]
pub struct Store {
    storage: Arc<dyn Storage>,
}

impl Store {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Store { storage }
    }

    async fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.storage.get(key).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| AppError::CorruptData(format!("{}: {}", key, e))),
            None => Ok(Vec::new()),
        }
    }

    async fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items).map_err(|e| AppError::storage(e.to_string()))?;
        self.storage.set(key, raw).await
    }

    pub async fn users(&self) -> Result<Vec<User>> {
        self.read_collection(KEY_USERS).await
    }

    pub async fn save_users(&self, users: &[User]) -> Result<()> {
        self.write_collection(KEY_USERS, users).await
    }

    pub async fn upcoming_matches(&self) -> Result<Vec<Match>> {
        self.read_collection(KEY_UPCOMING_MATCHES).await
    }

    pub async fn save_upcoming_matches(&self, matches: &[Match]) -> Result<()> {
        self.write_collection(KEY_UPCOMING_MATCHES, matches).await
    }

    pub async fn completed_matches(&self) -> Result<Vec<Match>> {
        self.read_collection(KEY_COMPLETED_MATCHES).await
    }

    pub async fn save_completed_matches(&self, matches: &[Match]) -> Result<()> {
        self.write_collection(KEY_COMPLETED_MATCHES, matches).await
    }

    /// Replaces both match collections in one atomic write. Match completion
    /// and bulk import go through here so a match can never end up in both
    /// collections or vanish from both.
    pub async fn replace_match_collections(
        &self,
        upcoming: &[Match],
        completed: &[Match],
    ) -> Result<()> {
        let upcoming_raw =
            serde_json::to_string(upcoming).map_err(|e| AppError::storage(e.to_string()))?;
        let completed_raw =
            serde_json::to_string(completed).map_err(|e| AppError::storage(e.to_string()))?;

        self.storage
            .set_many(vec![
                (KEY_UPCOMING_MATCHES.to_string(), upcoming_raw),
                (KEY_COMPLETED_MATCHES.to_string(), completed_raw),
            ])
            .await
    }

    pub async fn predictions(&self) -> Result<Vec<Prediction>> {
        self.read_collection(KEY_PREDICTIONS).await
    }

    pub async fn save_predictions(&self, predictions: &[Prediction]) -> Result<()> {
        self.write_collection(KEY_PREDICTIONS, predictions).await
    }

    pub async fn predictions_locked(&self) -> Result<bool> {
        // The flag is stored as the strings "true"/"false".
        Ok(self
            .storage
            .get(KEY_PREDICTIONS_LOCKED)
            .await?
            .map(|raw| raw == "true")
            .unwrap_or(false))
    }

    pub async fn set_predictions_locked(&self, locked: bool) -> Result<()> {
        self.storage
            .set(KEY_PREDICTIONS_LOCKED, locked.to_string())
            .await
    }

    /// Seeds the demo accounts the first time the store comes up empty.
    pub async fn ensure_seed_users(&self) -> Result<()> {
        if self.users().await?.is_empty() {
            let seeded = sample_users(chrono::Utc::now().timestamp_millis());
            tracing::info!("🌱 Seeding {} sample users", seeded.len());
            self.save_users(&seeded).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn memory_store() -> Store {
        Store::new(Arc::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn missing_keys_read_as_empty_collections() {
        let store = memory_store();
        assert!(store.users().await.unwrap().is_empty());
        assert!(store.upcoming_matches().await.unwrap().is_empty());
        assert!(store.predictions().await.unwrap().is_empty());
        assert!(!store.predictions_locked().await.unwrap());
    }

    #[tokio::test]
    async fn corrupt_collection_reports_corruption() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(KEY_USERS, "{definitely not an array".to_string())
            .await
            .unwrap();

        let store = Store::new(storage);
        let err = store.users().await.err().unwrap();
        assert!(matches!(err, AppError::CorruptData(_)));
    }

    #[tokio::test]
    async fn seed_runs_once() {
        let store = memory_store();
        store.ensure_seed_users().await.unwrap();
        let first = store.users().await.unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(first[0].email, "john@example.com");

        // A second call must not duplicate or replace accounts.
        store.ensure_seed_users().await.unwrap();
        assert_eq!(store.users().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn lock_flag_round_trips_as_string() {
        let store = memory_store();
        store.set_predictions_locked(true).await.unwrap();
        assert!(store.predictions_locked().await.unwrap());
        store.set_predictions_locked(false).await.unwrap();
        assert!(!store.predictions_locked().await.unwrap());
    }
}
