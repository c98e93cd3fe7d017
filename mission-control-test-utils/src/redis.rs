use fred::prelude::*;

use crate::TestError;

/// Valkey/Redis test setup for code paths that write to the real-time store
///
/// Each instance gets a unique key prefix so tests running in parallel never share keys.
/// Requires a server listening on `127.0.0.1:6379`; only used by tests behind the
/// `redis-test` feature.
pub struct RedisTest {
    pub redis_pool: Pool,
    prefix: String,
}

impl RedisTest {
    /// Connect to the local test instance and generate a unique prefix
    pub async fn new() -> Result<Self, TestError> {
        let redis_config = Config::from_url("redis://127.0.0.1:6379")?;
        let redis_pool = Pool::new(redis_config, None, None, None, 5)?;
        redis_pool.init().await?;

        Ok(RedisTest {
            redis_pool,
            prefix: Self::generate_unique_prefix(),
        })
    }

    /// Key prefix reserved for this test instance
    pub fn prefix(&self) -> String {
        self.prefix.clone()
    }

    /// Key `{prefix}:{id}` within this test's namespace
    pub fn key(&self, id: i32) -> String {
        format!("{}:{}", self.prefix, id)
    }

    fn generate_unique_prefix() -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();

        let thread_id = std::thread::current().id();

        let mut hasher = DefaultHasher::new();
        timestamp.hash(&mut hasher);
        thread_id.hash(&mut hasher);
        let hash = hasher.finish();

        format!("test:{}:{:x}:chats", timestamp, hash)
    }

    /// Delete the keys written under this test's prefix for the provided IDs
    pub async fn cleanup(self, ids: &[i32]) -> Result<(), TestError> {
        let keys: Vec<String> = ids.iter().map(|&id| self.key(id)).collect();
        if !keys.is_empty() {
            self.redis_pool.del::<(), _>(keys).await?;
        }

        Ok(())
    }
}
