//! Document store - SQLite-backed JSON document collections
//!
//! A thin persistence layer storing JSON-serialized records in named
//! collections, queried by id or by top-level field equality. The HTTP
//! layer never talks to SQLite directly; it goes through the typed
//! accessors built on top of this store.

use crate::store::error::{StoreError, StoreResult};
use rusqlite::{params, Connection, OpenFlags};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// SQLite-backed document store
///
/// Opened once at startup and shared across request tasks; every
/// operation serializes on the internal connection lock. `close` must
/// be called during shutdown to release the connection deterministically.
pub struct DocumentStore {
    conn: Mutex<Option<Connection>>,
    path: Option<PathBuf>,
}

impl DocumentStore {
    /// Create or open a document store at the given path
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Write(format!("create {:?}: {}", parent, e)))?;
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| StoreError::Write(e.to_string()))?;

        // Configure for performance
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA cache_size = 10000;
            PRAGMA temp_store = MEMORY;
            ",
        )
        .map_err(|e| StoreError::Write(e.to_string()))?;

        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(Some(conn)),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory store (used by tests)
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Write(e.to_string()))?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(Some(conn)),
            path: None,
        })
    }

    fn init_schema(conn: &Connection) -> StoreResult<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                body TEXT NOT NULL,
                PRIMARY KEY (collection, id)
            )",
            [],
        )
        .map_err(|e| StoreError::Write(e.to_string()))?;

        Ok(())
    }

    /// Path of the backing file, if file-backed
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Insert a new document; fails if the id already exists
    pub async fn insert<T: Serialize>(
        &self,
        collection: &str,
        id: &str,
        doc: &T,
    ) -> StoreResult<()> {
        let body = serde_json::to_string(doc)?;
        let guard = self.conn.lock().await;
        let conn = open_conn(&guard)?;

        conn.execute(
            "INSERT INTO documents (collection, id, body) VALUES (?, ?, ?)",
            params![collection, id, body],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(f, _)
                if f.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StoreError::DuplicateId(id.to_string())
            }
            other => StoreError::Write(other.to_string()),
        })?;

        Ok(())
    }

    /// Insert a new document, enforcing uniqueness of a top-level field
    /// across the collection
    ///
    /// The existence check and the insert happen under a single lock
    /// hold, so concurrent inserts cannot both pass the check.
    pub async fn insert_unique<T: Serialize>(
        &self,
        collection: &str,
        id: &str,
        doc: &T,
        unique_field: &str,
    ) -> StoreResult<()> {
        let body = serde_json::to_string(doc)?;
        let path = format!("$.{}", unique_field);
        let guard = self.conn.lock().await;
        let conn = open_conn(&guard)?;

        let existing: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM documents
                 WHERE collection = ?1 AND json_extract(body, ?2) = json_extract(?3, ?2)",
                params![collection, path, body],
                |row| row.get(0),
            )
            .map_err(|e| StoreError::Read(e.to_string()))?;

        if existing > 0 {
            return Err(StoreError::UniqueViolation(unique_field.to_string()));
        }

        conn.execute(
            "INSERT INTO documents (collection, id, body) VALUES (?, ?, ?)",
            params![collection, id, body],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(f, _)
                if f.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StoreError::DuplicateId(id.to_string())
            }
            other => StoreError::Write(other.to_string()),
        })?;

        Ok(())
    }

    /// Find a document by id
    pub async fn find<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> StoreResult<Option<T>> {
        let guard = self.conn.lock().await;
        let conn = open_conn(&guard)?;

        let mut stmt = conn
            .prepare_cached("SELECT body FROM documents WHERE collection = ? AND id = ?")
            .map_err(|e| StoreError::Read(e.to_string()))?;

        let mut rows = stmt
            .query(params![collection, id])
            .map_err(|e| StoreError::Read(e.to_string()))?;

        match rows.next().map_err(|e| StoreError::Read(e.to_string()))? {
            Some(row) => {
                let body: String = row.get(0).map_err(|e| StoreError::Read(e.to_string()))?;
                Ok(Some(serde_json::from_str(&body)?))
            }
            None => Ok(None),
        }
    }

    /// Replace an existing document; fails if the id does not exist
    pub async fn update<T: Serialize>(
        &self,
        collection: &str,
        id: &str,
        doc: &T,
    ) -> StoreResult<()> {
        let body = serde_json::to_string(doc)?;
        let guard = self.conn.lock().await;
        let conn = open_conn(&guard)?;

        let changed = conn
            .execute(
                "UPDATE documents SET body = ? WHERE collection = ? AND id = ?",
                params![body, collection, id],
            )
            .map_err(|e| StoreError::Write(e.to_string()))?;

        if changed == 0 {
            return Err(StoreError::Write(format!(
                "no document {} in collection {}",
                id, collection
            )));
        }

        Ok(())
    }

    /// Delete a document by id; returns whether anything was removed
    pub async fn delete(&self, collection: &str, id: &str) -> StoreResult<bool> {
        let guard = self.conn.lock().await;
        let conn = open_conn(&guard)?;

        let changed = conn
            .execute(
                "DELETE FROM documents WHERE collection = ? AND id = ?",
                params![collection, id],
            )
            .map_err(|e| StoreError::Write(e.to_string()))?;

        Ok(changed > 0)
    }

    /// List all documents in a collection, in insertion order
    pub async fn list<T: DeserializeOwned>(&self, collection: &str) -> StoreResult<Vec<T>> {
        let guard = self.conn.lock().await;
        let conn = open_conn(&guard)?;

        let mut stmt = conn
            .prepare_cached(
                "SELECT body FROM documents WHERE collection = ? ORDER BY rowid",
            )
            .map_err(|e| StoreError::Read(e.to_string()))?;

        let bodies = stmt
            .query_map(params![collection], |row| row.get::<_, String>(0))
            .map_err(|e| StoreError::Read(e.to_string()))?;

        let mut docs = Vec::new();
        for body in bodies {
            let body = body.map_err(|e| StoreError::Read(e.to_string()))?;
            docs.push(serde_json::from_str(&body)?);
        }

        Ok(docs)
    }

    /// Find documents whose top-level `field` equals `value`
    pub async fn find_where<T: DeserializeOwned>(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> StoreResult<Vec<T>> {
        let path = format!("$.{}", field);
        let guard = self.conn.lock().await;
        let conn = open_conn(&guard)?;

        let mut stmt = conn
            .prepare_cached(
                "SELECT body FROM documents
                 WHERE collection = ? AND json_extract(body, ?) = ?
                 ORDER BY rowid",
            )
            .map_err(|e| StoreError::Read(e.to_string()))?;

        let bodies = stmt
            .query_map(params![collection, path, value], |row| {
                row.get::<_, String>(0)
            })
            .map_err(|e| StoreError::Read(e.to_string()))?;

        let mut docs = Vec::new();
        for body in bodies {
            let body = body.map_err(|e| StoreError::Read(e.to_string()))?;
            docs.push(serde_json::from_str(&body)?);
        }

        Ok(docs)
    }

    /// Check that the store connection is usable
    pub async fn ping(&self) -> StoreResult<()> {
        let guard = self.conn.lock().await;
        let conn = open_conn(&guard)?;

        conn.query_row("SELECT 1", [], |_| Ok(()))
            .map_err(|e| StoreError::Read(e.to_string()))
    }

    /// Release the underlying connection
    ///
    /// Subsequent operations fail. Called once during graceful shutdown.
    pub async fn close(&self) {
        let mut guard = self.conn.lock().await;
        if let Some(conn) = guard.take() {
            if let Err((_conn, e)) = conn.close() {
                tracing::warn!("Error closing document store: {}", e);
            }
        }
    }
}

/// Borrow the live connection, failing if the store has been closed
fn open_conn(guard: &Option<Connection>) -> StoreResult<&Connection> {
    guard
        .as_ref()
        .ok_or_else(|| StoreError::Read("store is closed".to_string()))
}
