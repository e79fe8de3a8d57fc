//! Service layer hosting every repository method.
//!
//! `QbService` wraps `QbDb`. All repo methods are implemented as
//! `impl QbService` blocks under [`crate::repos`].

use crate::QbDb;
use crate::error::DatabaseError;

/// The libSQL-backed store.
pub struct QbService {
    db: QbDb,
}

impl QbService {
    /// Open (or create) a local store.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = QbDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Wrap an already opened database.
    #[must_use]
    pub const fn from_db(db: QbDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &QbDb {
        &self.db
    }
}
