//! # Key-Value Repository
//!
//! The raw string-keyed, string-valued interface everything durable goes
//! through. Read, write and delete are all exact-key, single-row operations;
//! there is no cross-key transaction and none is needed.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreResult;

/// Repository for raw key-value access.
#[derive(Debug, Clone)]
pub struct KvRepository {
    pool: SqlitePool,
}

impl KvRepository {
    pub fn new(pool: SqlitePool) -> Self {
        KvRepository { pool }
    }

    /// Reads the value stored under `key`, if any.
    pub async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_entries WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Writes `value` under `key`, replacing any existing value.
    ///
    /// Durable as soon as this returns - every caller write is an
    /// independent single-key operation, never batched.
    pub async fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        debug!(key = %key, "kv put");

        sqlx::query(
            "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes the entry under `key` entirely.
    ///
    /// ## Returns
    /// Whether an entry existed and was removed.
    pub async fn delete(&self, key: &str) -> StoreResult<bool> {
        debug!(key = %key, "kv delete");

        let result = sqlx::query("DELETE FROM kv_entries WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Store, StoreConfig};

    async fn test_store() -> Store {
        Store::open(StoreConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let kv = test_store().await.kv();
        assert_eq!(kv.get("nothing_here").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let kv = test_store().await.kv();

        kv.put("greeting", "namaste").await.unwrap();
        assert_eq!(kv.get("greeting").await.unwrap().as_deref(), Some("namaste"));

        // Overwrite replaces, never appends
        kv.put("greeting", "hello").await.unwrap();
        assert_eq!(kv.get("greeting").await.unwrap().as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_delete() {
        let kv = test_store().await.kv();

        kv.put("ephemeral", "x").await.unwrap();
        assert!(kv.delete("ephemeral").await.unwrap());
        assert_eq!(kv.get("ephemeral").await.unwrap(), None);

        // Deleting an absent key reports false, not an error
        assert!(!kv.delete("ephemeral").await.unwrap());
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let kv = test_store().await.kv();

        kv.put("a", "1").await.unwrap();
        kv.put("b", "2").await.unwrap();
        kv.delete("a").await.unwrap();

        assert_eq!(kv.get("a").await.unwrap(), None);
        assert_eq!(kv.get("b").await.unwrap().as_deref(), Some("2"));
    }
}
