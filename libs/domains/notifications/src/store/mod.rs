//! Key/value storage with per-entry expiry.
//!
//! Both the verification codes and the resend cooldown marks live behind
//! [`TtlStore`]. Two backends are provided:
//!
//! - [`InMemoryTtlStore`]: a `DashMap`, single process only
//! - [`RedisTtlStore`]: shared between replicas

mod memory;
mod redis;

pub use self::memory::InMemoryTtlStore;
pub use self::redis::{RedisTtlStore, connect as connect_redis};

use crate::error::StoreResult;
use async_trait::async_trait;
use std::time::Duration;

/// Result of [`TtlStore::insert_if_absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was free and now holds the new value.
    Inserted,
    /// A live entry already exists and expires in `remaining`.
    Occupied { remaining: Duration },
}

impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// Async TTL cache keyed by string.
///
/// Expired entries behave exactly like absent ones.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TtlStore<V>: Send + Sync
where
    V: Clone + PartialEq + Send + Sync + 'static,
{
    /// Live value for `key`, if any.
    async fn get(&self, key: &str) -> StoreResult<Option<V>>;

    /// Insert or overwrite `key`, expiring after `ttl`.
    async fn set(&self, key: &str, value: V, ttl: Duration) -> StoreResult<()>;

    /// Atomically insert `value` only when no live entry exists.
    async fn insert_if_absent(&self, key: &str, value: V, ttl: Duration)
    -> StoreResult<InsertOutcome>;

    /// Delete `key`. Returns true only for the caller that removed a live entry.
    async fn remove(&self, key: &str) -> StoreResult<bool>;

    /// Delete `key` only while it still holds `expected`, as one atomic step.
    async fn remove_if_eq(&self, key: &str, expected: &V) -> StoreResult<bool>;

    /// Backend reachability, used by the readiness probe.
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
