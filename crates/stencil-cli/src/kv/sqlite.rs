// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! SQLite-backed KV store implementation.

use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;
use stencil::kv::{KVError, KVResult, KVStore};

/// Name of the database file inside the data directory.
pub const DATABASE_FILE: &str = "kv.db";

/// SQLite-backed KV store.
///
/// Each namespace shares the same SQLite database but uses a namespace
/// column to separate data.
pub struct SqliteKVStore {
    conn: Mutex<Connection>,
    namespace: String,
}

impl SqliteKVStore {
    /// Creates a new SQLite-backed KV store.
    ///
    /// The database file is stored at `data_dir/kv.db`.
    pub fn new(data_dir: &Path, namespace: &str) -> KVResult<Self> {
        let db_path = data_dir.join(DATABASE_FILE);
        let conn = Connection::open(&db_path)
            .map_err(|e| KVError::Storage(format!("Failed to open database: {}", e)))?;

        // Create table if it doesn't exist
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                namespace TEXT NOT NULL,
                key TEXT NOT NULL,
                value BLOB NOT NULL,
                PRIMARY KEY (namespace, key)
            )
            "#,
            [],
        )
        .map_err(|e| KVError::Storage(format!("Failed to create table: {}", e)))?;

        Ok(Self {
            conn: Mutex::new(conn),
            namespace: namespace.to_string(),
        })
    }

    /// The namespace rows are written under.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

/// Maps SQLite failures onto the store's error kinds.
fn storage_error(err: rusqlite::Error) -> KVError {
    match err.sqlite_error_code() {
        Some(ErrorCode::DiskFull) => KVError::QuotaExceeded,
        _ => KVError::Storage(err.to_string()),
    }
}

impl KVStore for SqliteKVStore {
    fn get(&self, key: &str) -> KVResult<Option<Vec<u8>>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| KVError::Storage(e.to_string()))?;

        conn.query_row(
            "SELECT value FROM kv WHERE namespace = ?1 AND key = ?2",
            params![&self.namespace, key],
            |row| row.get(0),
        )
        .optional()
        .map_err(storage_error)
    }

    fn put(&self, key: &str, value: &[u8]) -> KVResult<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| KVError::Storage(e.to_string()))?;

        conn.execute(
            r#"
            INSERT OR REPLACE INTO kv (namespace, key, value)
            VALUES (?1, ?2, ?3)
            "#,
            params![&self.namespace, key, value],
        )
        .map_err(storage_error)?;

        Ok(())
    }

    fn delete(&self, key: &str) -> KVResult<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| KVError::Storage(e.to_string()))?;

        conn.execute(
            "DELETE FROM kv WHERE namespace = ?1 AND key = ?2",
            params![&self.namespace, key],
        )
        .map_err(storage_error)?;

        Ok(())
    }
}
