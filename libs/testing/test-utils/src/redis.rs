//! Disposable Redis for store tests.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::redis::Redis;

/// A Redis 8 container that lives as long as this value.
///
/// ```rust,ignore
/// use test_utils::{TestDataBuilder, TestRedis};
///
/// # async fn example() {
/// let redis = TestRedis::new().await;
/// let prefix = TestDataBuilder::from_test_name("cooldown").key_prefix("email");
///
/// // build the store under test from redis.connection_string() and prefix
/// assert!(redis.keys(&prefix).await.is_empty());
/// # }
/// ```
pub struct TestRedis {
    _container: ContainerAsync<Redis>,
    connection: ConnectionManager,
    connection_string: String,
}

impl TestRedis {
    pub async fn new() -> Self {
        let container = Redis::default()
            .with_tag("8-alpine")
            .start()
            .await
            .expect("Failed to start Redis container");

        let host_port = container
            .get_host_port_ipv4(6379)
            .await
            .expect("Failed to get Redis port");
        let connection_string = format!("redis://127.0.0.1:{}", host_port);

        let client = Client::open(connection_string.as_str()).expect("Failed to create Redis client");
        let connection = ConnectionManager::new(client)
            .await
            .expect("Failed to connect to Redis");

        tracing::info!(port = host_port, "Test Redis ready");

        Self {
            _container: container,
            connection,
            connection_string,
        }
    }

    /// Shared connection for direct assertions on stored keys.
    pub fn connection(&self) -> ConnectionManager {
        self.connection.clone()
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// Keys under `prefix`, sorted.
    pub async fn keys(&self, prefix: &str) -> Vec<String> {
        let mut conn = self.connection();
        let mut keys: Vec<String> = conn
            .keys(format!("{}*", prefix))
            .await
            .expect("KEYS failed");
        keys.sort();
        keys
    }

    /// Remaining lifetime of `key` in milliseconds; negative when missing or persistent.
    pub async fn pttl(&self, key: &str) -> i64 {
        let mut conn = self.connection();
        conn.pttl(key).await.expect("PTTL failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_keys_are_listed_per_prefix() {
        let redis = TestRedis::new().await;
        let mut conn = redis.connection();

        conn.set::<_, _, ()>("email:code:a@example.com", "1").await.unwrap();
        conn.set::<_, _, ()>("email:code:b@example.com", "2").await.unwrap();
        conn.set::<_, _, ()>("email:cooldown:a@example.com", "3").await.unwrap();

        assert_eq!(
            redis.keys("email:code:").await,
            vec!["email:code:a@example.com", "email:code:b@example.com"]
        );
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_pttl_reports_remaining_lifetime() {
        let redis = TestRedis::new().await;
        let mut conn = redis.connection();

        conn.pset_ex::<_, _, ()>("email:cooldown:a@example.com", "1", 60_000)
            .await
            .unwrap();

        let remaining = redis.pttl("email:cooldown:a@example.com").await;
        assert!(remaining > 0 && remaining <= 60_000);
        assert_eq!(redis.pttl("email:cooldown:missing").await, -2);
    }
}
