//! Shared, lock-protected handle to the activity registry.

use crate::error::RegistryError;
use crate::registry::Registry;
use crate::types::{ActivityListing, Enrollment, Withdrawal};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

/// Cloneable store handed to request handlers.
///
/// Enroll and withdraw run their check and mutation under a single write
/// lock, so concurrent signups cannot put the same email on a roster twice.
/// Listings share the read lock.
#[derive(Clone, Default)]
pub struct ActivityStore {
    registry: Arc<RwLock<Registry>>,
}

impl ActivityStore {
    /// Wrap an already populated registry.
    pub fn new(registry: Registry) -> Self {
        info!("Activity store initialized with {} activities", registry.count());

        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    /// Snapshot of every activity and roster.
    pub async fn list(&self) -> ActivityListing {
        self.registry.read().await.list()
    }

    /// Sign an email up for an activity.
    #[instrument(skip(self))]
    pub async fn enroll(&self, activity: &str, email: &str) -> Result<Enrollment, RegistryError> {
        let mut registry = self.registry.write().await;

        match registry.enroll(activity, email) {
            Ok(enrollment) => {
                info!("Participant enrolled");
                Ok(enrollment)
            }
            Err(e) => {
                warn!(error = %e, "Enrollment rejected");
                Err(e)
            }
        }
    }

    /// Take an email off an activity's roster.
    #[instrument(skip(self))]
    pub async fn withdraw(&self, activity: &str, email: &str) -> Result<Withdrawal, RegistryError> {
        let mut registry = self.registry.write().await;

        match registry.withdraw(activity, email) {
            Ok(withdrawal) => {
                info!("Participant withdrawn");
                Ok(withdrawal)
            }
            Err(e) => {
                warn!(error = %e, "Withdrawal rejected");
                Err(e)
            }
        }
    }

    /// Get the number of activities.
    pub async fn count(&self) -> usize {
        self.registry.read().await.count()
    }

    /// Total enrollments across all activities.
    pub async fn participant_count(&self) -> usize {
        self.registry.read().await.participant_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_seed;

    fn seeded_store() -> ActivityStore {
        ActivityStore::new(Registry::from_seed(default_seed()))
    }

    #[tokio::test]
    async fn test_store_enroll_and_list() {
        let store = seeded_store();

        store.enroll("Tennis", "a@x.edu").await.unwrap();

        let listing = store.list().await;
        assert_eq!(listing["Tennis"].participants, vec!["a@x.edu"]);
        assert_eq!(store.participant_count().await, 1);
    }

    #[tokio::test]
    async fn test_store_clones_share_state() {
        let store = seeded_store();
        let other = store.clone();

        store.enroll("Basketball", "a@x.edu").await.unwrap();

        assert!(other.list().await["Basketball"].has_participant("a@x.edu"));
        other.withdraw("Basketball", "a@x.edu").await.unwrap();
        assert_eq!(store.participant_count().await, 0);
    }

    #[tokio::test]
    async fn test_store_rejects_unknown_activity() {
        let store = seeded_store();

        let err = store.withdraw("Nonexistent", "a@x.edu").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.count().await, 10);
    }

    #[tokio::test]
    async fn test_store_concurrent_duplicate_signups() {
        let store = seeded_store();

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.enroll("Tennis", "a@x.edu").await.is_ok() })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(store.list().await["Tennis"].participants, vec!["a@x.edu"]);
    }

    #[tokio::test]
    async fn test_store_concurrent_distinct_signups() {
        let store = seeded_store();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .enroll("Drama Club", &format!("student{}@x.edu", i))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let listing = store.list().await;
        let participants = &listing["Drama Club"].participants;
        assert_eq!(participants.len(), 20);
        let mut unique = participants.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 20);
    }
}
