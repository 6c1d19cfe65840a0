//! In-process TTL store backed by `DashMap`.

use super::{InsertOutcome, TtlStore};
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

/// Shortest period accepted by [`InMemoryTtlStore::spawn_sweeper`].
pub const MIN_SWEEP_PERIOD: Duration = Duration::from_millis(100);

fn deadline(now: Instant, ttl: Duration) -> StoreResult<Instant> {
    now.checked_add(ttl)
        .ok_or_else(|| StoreError::Backend(format!("ttl {:?} is out of range", ttl)))
}

struct Slot<V> {
    value: V,
    expires_at: Instant,
}

impl<V> Slot<V> {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// TTL store for a single replica.
///
/// Expired entries are dropped lazily when touched, and in bulk by the
/// optional sweeper task.
pub struct InMemoryTtlStore<V> {
    entries: DashMap<String, Slot<V>>,
}

impl<V> InMemoryTtlStore<V>
where
    V: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of stored entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every expired entry. Returns how many were removed.
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, slot| slot.is_live(now));
        before.saturating_sub(self.entries.len())
    }

    /// Run [`sweep`](Self::sweep) every `period` until the store is dropped.
    ///
    /// A zero period is raised to [`MIN_SWEEP_PERIOD`].
    pub fn spawn_sweeper(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let period = period.max(MIN_SWEEP_PERIOD);
        let store: Weak<Self> = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // first tick fires immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(store) = store.upgrade() else {
                    break;
                };
                let removed = store.sweep();
                if removed > 0 {
                    debug!(removed, remaining = store.len(), "Swept expired cache entries");
                }
            }
        })
    }
}

impl<V> Default for InMemoryTtlStore<V>
where
    V: Clone + PartialEq + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V> TtlStore<V> for InMemoryTtlStore<V>
where
    V: Clone + PartialEq + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> StoreResult<Option<V>> {
        let now = Instant::now();
        let live = match self.entries.get(key) {
            None => return Ok(None),
            Some(slot) if slot.is_live(now) => Some(slot.value.clone()),
            Some(_) => None,
        };
        if live.is_none() {
            self.entries.remove_if(key, |_, slot| !slot.is_live(now));
        }
        Ok(live)
    }

    async fn set(&self, key: &str, value: V, ttl: Duration) -> StoreResult<()> {
        let expires_at = deadline(Instant::now(), ttl)?;
        self.entries
            .insert(key.to_string(), Slot { value, expires_at });
        Ok(())
    }

    async fn insert_if_absent(
        &self,
        key: &str,
        value: V,
        ttl: Duration,
    ) -> StoreResult<InsertOutcome> {
        let now = Instant::now();
        let slot = Slot {
            value,
            expires_at: deadline(now, ttl)?,
        };
        // The entry guard holds the shard lock, so check-and-insert is atomic.
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                let remaining = occupied.get().expires_at.saturating_duration_since(now);
                if remaining.is_zero() {
                    occupied.insert(slot);
                    Ok(InsertOutcome::Inserted)
                } else {
                    Ok(InsertOutcome::Occupied { remaining })
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(slot);
                Ok(InsertOutcome::Inserted)
            }
        }
    }

    async fn remove(&self, key: &str) -> StoreResult<bool> {
        let now = Instant::now();
        Ok(self
            .entries
            .remove(key)
            .is_some_and(|(_, slot)| slot.is_live(now)))
    }

    async fn remove_if_eq(&self, key: &str, expected: &V) -> StoreResult<bool> {
        let now = Instant::now();
        Ok(self
            .entries
            .remove_if(key, |_, slot| slot.is_live(now) && slot.value == *expected)
            .is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_get_respects_ttl() {
        let store = InMemoryTtlStore::new();
        store
            .set("a@example.com", "123456".to_string(), Duration::from_secs(300))
            .await
            .unwrap();

        assert_eq!(
            store.get("a@example.com").await.unwrap().as_deref(),
            Some("123456")
        );

        tokio::time::advance(Duration::from_secs(300)).await;
        assert_eq!(store.get("a@example.com").await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_insert_if_absent_reports_remaining() {
        let store = InMemoryTtlStore::new();
        let ttl = Duration::from_secs(60);

        let first = store.insert_if_absent("k", 1u8, ttl).await.unwrap();
        assert!(first.is_inserted());

        tokio::time::advance(Duration::from_secs(20)).await;
        let second = store.insert_if_absent("k", 2u8, ttl).await.unwrap();
        assert_eq!(
            second,
            InsertOutcome::Occupied {
                remaining: Duration::from_secs(40)
            }
        );
        assert_eq!(store.get("k").await.unwrap(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_insert_if_absent_replaces_expired() {
        let store = InMemoryTtlStore::new();
        let ttl = Duration::from_secs(60);
        store.insert_if_absent("k", 1u8, ttl).await.unwrap();

        tokio::time::advance(ttl).await;
        let outcome = store.insert_if_absent("k", 2u8, ttl).await.unwrap();
        assert_eq!(outcome, InsertOutcome::Inserted);
        assert_eq!(store.get("k").await.unwrap(), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_is_one_shot() {
        let store = InMemoryTtlStore::new();
        store.set("k", 1u8, Duration::from_secs(10)).await.unwrap();

        assert!(store.remove("k").await.unwrap());
        assert!(!store.remove("k").await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_expired_entry_is_false() {
        let store = InMemoryTtlStore::new();
        store.set("k", 1u8, Duration::from_secs(10)).await.unwrap();
        tokio::time::advance(Duration::from_secs(11)).await;

        assert!(!store.remove("k").await.unwrap());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_insert_if_absent_has_one_winner() {
        let store = Arc::new(InMemoryTtlStore::new());
        let mut tasks = Vec::new();
        for i in 0..32u32 {
            let store = Arc::clone(&store);
            tasks.push(tokio::spawn(async move {
                store
                    .insert_if_absent("same", i, Duration::from_secs(60))
                    .await
                    .unwrap()
            }));
        }

        let mut inserted = 0;
        for task in tasks {
            if task.await.unwrap().is_inserted() {
                inserted += 1;
            }
        }
        assert_eq!(inserted, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_if_eq_only_matches_current_value() {
        let store = InMemoryTtlStore::new();
        store.set("k", 1u8, Duration::from_secs(10)).await.unwrap();

        assert!(!store.remove_if_eq("k", &2).await.unwrap());
        assert_eq!(store.get("k").await.unwrap(), Some(1));

        assert!(store.remove_if_eq("k", &1).await.unwrap());
        assert!(!store.remove_if_eq("k", &1).await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_if_eq_ignores_expired_entry() {
        let store = InMemoryTtlStore::new();
        store.set("k", 1u8, Duration::from_secs(10)).await.unwrap();
        tokio::time::advance(Duration::from_secs(10)).await;

        assert!(!store.remove_if_eq("k", &1).await.unwrap());
    }

    #[tokio::test]
    async fn test_unrepresentable_ttl_is_an_error() {
        let store = InMemoryTtlStore::new();
        let ttl = Duration::from_secs(u64::MAX / 2);

        assert!(matches!(
            store.set("k", 1u8, ttl).await,
            Err(StoreError::Backend(_))
        ));
        assert!(matches!(
            store.insert_if_absent("k", 1u8, ttl).await,
            Err(StoreError::Backend(_))
        ));
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_drops_expired_only() {
        let store = InMemoryTtlStore::new();
        store.set("short", 1u8, Duration::from_secs(1)).await.unwrap();
        store.set("long", 2u8, Duration::from_secs(100)).await.unwrap();

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(store.sweep(), 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_runs_periodically() {
        let store = Arc::new(InMemoryTtlStore::new());
        store.set("k", 1u8, Duration::from_secs(1)).await.unwrap();
        let handle = store.spawn_sweeper(Duration::from_secs(5));

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(store.is_empty());

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_sweep_period_does_not_kill_sweeper() {
        let store = Arc::new(InMemoryTtlStore::new());
        store.set("k", 1u8, Duration::from_millis(50)).await.unwrap();
        let handle = store.spawn_sweeper(Duration::ZERO);

        tokio::time::sleep(MIN_SWEEP_PERIOD * 2).await;
        assert!(store.is_empty());
        assert!(!handle.is_finished());

        handle.abort();
    }
}
