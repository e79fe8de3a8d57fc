//! # qb-db
//!
//! libSQL persistence for qbank plus the in-memory [`provider::Provider`]
//! that sits between the store and the pure engines in `qb-query`.
//!
//! - [`QbDb`]: connection handle, id generation, migrations
//! - [`service::QbService`]: repository methods for every record type
//! - [`store::Store`]: the async contract the provider talks to
//! - [`provider::Provider`]: loaded collections, patched after each successful write

pub mod error;
pub mod helpers;
mod migrations;
pub mod provider;
pub mod repos;
pub mod service;
pub mod store;
pub mod updates;

#[cfg(test)]
mod test_support;

use std::path::Path;

use error::DatabaseError;
use libsql::Builder;

/// Path that opens a throwaway in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Database handle for all qbank records.
pub struct QbDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl QbDb {
    /// Open a local database at the given path, creating parent directories.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created, the
    /// database cannot be opened, or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        if path != IN_MEMORY {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let qb_db = Self { db, conn };
        qb_db.run_migrations().await?;
        tracing::debug!(path, "opened store");
        Ok(qb_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"qst-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    async fn test_db() -> QbDb {
        QbDb::open_local(IN_MEMORY).await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = ["questions", "categories", "subcategories", "tags", "jobs"];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn open_local_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("qbank.db");
        let db = QbDb::open_local(path.to_str().unwrap()).await.unwrap();
        assert!(path.exists());
        drop(db);
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("qst").await.unwrap();
        assert!(id.starts_with("qst-"), "ID should start with 'qst-': {id}");
        assert_eq!(
            id.len(),
            12,
            "ID should be 12 chars (3 prefix + 1 dash + 8 hex): {id}"
        );

        let hex_part = &id[4..];
        assert!(
            hex_part.chars().all(|c| c.is_ascii_hexdigit()),
            "Random part should be hex: {hex_part}"
        );
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in qb_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }
}
