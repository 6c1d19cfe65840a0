//! Redis-backed TTL store shared by every replica.

use super::{InsertOutcome, TtlStore};
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use redis::Client;
use redis::aio::ConnectionManager;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{info, warn};

/// How often `insert_if_absent` retries when the key expires between
/// `SET NX` and `PTTL`.
const INSERT_ATTEMPTS: usize = 3;

/// Connect to Redis and verify the connection with PING.
///
/// The returned `ConnectionManager` reconnects on its own and is cheap to clone.
pub async fn connect(url: &str) -> StoreResult<ConnectionManager> {
    info!("Connecting to Redis cache");

    let client = Client::open(url)?;
    let manager = ConnectionManager::new(client).await?;

    let mut conn = manager.clone();
    let _: String = redis::cmd("PING").query_async(&mut conn).await?;

    info!("Connected to Redis cache");
    Ok(manager)
}

/// JSON-encoded values under `<prefix><key>`, expiry enforced by Redis.
pub struct RedisTtlStore<V> {
    conn: ConnectionManager,
    prefix: String,
    _value: PhantomData<fn() -> V>,
}

impl<V> RedisTtlStore<V> {
    pub fn new(conn: ConnectionManager, prefix: impl Into<String>) -> Self {
        Self {
            conn,
            prefix: prefix.into(),
            _value: PhantomData,
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

#[async_trait]
impl<V> TtlStore<V> for RedisTtlStore<V>
where
    V: Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> StoreResult<Option<V>> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = redis::cmd("GET")
            .arg(self.key(key))
            .query_async(&mut conn)
            .await?;

        raw.map(|raw| serde_json::from_str(&raw))
            .transpose()
            .map_err(StoreError::from)
    }

    async fn set(&self, key: &str, value: V, ttl: Duration) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        let payload = serde_json::to_string(&value)?;
        let _: () = redis::cmd("SET")
            .arg(self.key(key))
            .arg(payload)
            .arg("PX")
            .arg(ttl_millis(ttl))
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    async fn insert_if_absent(
        &self,
        key: &str,
        value: V,
        ttl: Duration,
    ) -> StoreResult<InsertOutcome> {
        let mut conn = self.conn.clone();
        let key = self.key(key);
        let payload = serde_json::to_string(&value)?;

        for _ in 0..INSERT_ATTEMPTS {
            let set: Option<String> = redis::cmd("SET")
                .arg(&key)
                .arg(&payload)
                .arg("NX")
                .arg("PX")
                .arg(ttl_millis(ttl))
                .query_async(&mut conn)
                .await?;
            if set.is_some() {
                return Ok(InsertOutcome::Inserted);
            }

            let pttl: i64 = redis::cmd("PTTL").arg(&key).query_async(&mut conn).await?;
            match pttl {
                ms if ms > 0 => {
                    return Ok(InsertOutcome::Occupied {
                        remaining: Duration::from_millis(ms.unsigned_abs()),
                    });
                }
                // -1: present without expiry, only possible if written by hand
                -1 => {
                    warn!(key = %key, "Cache key has no expiry");
                    return Ok(InsertOutcome::Occupied { remaining: ttl });
                }
                // -2 or 0: expired in between, try again
                _ => continue,
            }
        }

        Err(StoreError::Backend(format!(
            "key {} kept expiring during insert",
            key
        )))
    }

    async fn remove(&self, key: &str) -> StoreResult<bool> {
        let mut conn = self.conn.clone();
        let removed: i64 = redis::cmd("DEL")
            .arg(self.key(key))
            .query_async(&mut conn)
            .await?;
        Ok(removed > 0)
    }

    async fn remove_if_eq(&self, key: &str, expected: &V) -> StoreResult<bool> {
        let mut conn = self.conn.clone();
        let payload = serde_json::to_string(expected)?;

        let script = redis::Script::new(
            r"
            if redis.call('get', KEYS[1]) == ARGV[1] then
                return redis.call('del', KEYS[1])
            else
                return 0
            end
            ",
        );

        let removed: i64 = script
            .key(self.key(key))
            .arg(payload)
            .invoke_async(&mut conn)
            .await?;
        Ok(removed > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use test_utils::{TestDataBuilder, TestRedis};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Mark {
        issued_at: i64,
    }

    async fn store(redis: &TestRedis, test: &str) -> RedisTtlStore<Mark> {
        let conn = connect(redis.connection_string()).await.unwrap();
        RedisTtlStore::new(conn, TestDataBuilder::from_test_name(test).key_prefix("store"))
    }

    #[test]
    fn test_ttl_millis_never_zero() {
        assert_eq!(ttl_millis(Duration::ZERO), 1);
        assert_eq!(ttl_millis(Duration::from_secs(2)), 2000);
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_set_get_remove() {
        let redis = TestRedis::new().await;
        let store = store(&redis, "set_get_remove").await;
        let mark = Mark { issued_at: 7 };

        store.set("k", mark.clone(), Duration::from_secs(30)).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(mark));

        let prefix = TestDataBuilder::from_test_name("set_get_remove").key_prefix("store");
        assert_eq!(redis.keys(&prefix).await, vec![format!("{}k", prefix)]);
        assert!(redis.pttl(&format!("{}k", prefix)).await > 0);

        assert!(store.remove("k").await.unwrap());
        assert!(!store.remove("k").await.unwrap());
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_insert_if_absent() {
        let redis = TestRedis::new().await;
        let store = store(&redis, "insert_if_absent").await;
        let ttl = Duration::from_secs(60);

        let first = store
            .insert_if_absent("k", Mark { issued_at: 1 }, ttl)
            .await
            .unwrap();
        assert_eq!(first, InsertOutcome::Inserted);

        let second = store
            .insert_if_absent("k", Mark { issued_at: 2 }, ttl)
            .await
            .unwrap();
        match second {
            InsertOutcome::Occupied { remaining } => {
                assert!(remaining <= ttl);
                assert!(remaining > Duration::from_secs(50));
            }
            other => panic!("expected occupied, got {:?}", other),
        }
        assert_eq!(store.get("k").await.unwrap(), Some(Mark { issued_at: 1 }));
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_remove_if_eq_keeps_replaced_value() {
        let redis = TestRedis::new().await;
        let store = store(&redis, "remove_if_eq").await;
        let ttl = Duration::from_secs(30);

        store.set("k", Mark { issued_at: 1 }, ttl).await.unwrap();
        store.set("k", Mark { issued_at: 2 }, ttl).await.unwrap();

        assert!(!store.remove_if_eq("k", &Mark { issued_at: 1 }).await.unwrap());
        assert!(store.remove_if_eq("k", &Mark { issued_at: 2 }).await.unwrap());
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_entries_expire() {
        let redis = TestRedis::new().await;
        let store = store(&redis, "entries_expire").await;

        store
            .set("k", Mark { issued_at: 1 }, Duration::from_millis(200))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(store.get("k").await.unwrap(), None);
        assert!(store.ping().await.is_ok());
    }
}
