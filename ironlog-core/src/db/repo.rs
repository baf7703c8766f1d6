//! Key-value repository over SQLite
//!
//! Every document (workout list, event log, settings, ...) is stored as a
//! JSON string under one key. Writes overwrite the whole value.

use crate::error::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Where [`KeyValueStore::upsert_entry`] puts an entry that is not yet stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

/// Storage contract the journal depends on.
///
/// Lists (workouts, events, templates, ...) are JSON arrays of objects with
/// an `id` field. The list helpers work on the raw array, so an entry that
/// no longer decodes is skipped on read but written back untouched.
pub trait KeyValueStore {
    /// Raw stored value, `None` if the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Read and decode a JSON value.
    ///
    /// A missing key or a value that fails to decode yields `T::default()`;
    /// malformed data is logged, never returned as an error.
    fn read_json<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        let Some(raw) = self.read(key)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Stored value is malformed, using default");
                Ok(T::default())
            }
        }
    }

    /// Encode `value` as JSON and write it.
    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.write(key, &raw)
    }

    /// Stored array as raw JSON values. Anything but an array reads as empty.
    fn read_entries(&self, key: &str) -> Result<Vec<Value>> {
        self.read_json(key)
    }

    /// Decode a stored array entry by entry, skipping entries that fail.
    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let entries = self.read_entries(key)?;
        Ok(entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(key, index, error = %e, "Skipping malformed entry");
                    None
                }
            })
            .collect())
    }

    /// Replace the entry with the given id, or add it at `placement`.
    fn upsert_entry<T: Serialize>(
        &self,
        key: &str,
        id: &str,
        entry: &T,
        placement: Placement,
    ) -> Result<()> {
        let mut entries = self.read_entries(key)?;
        let value = serde_json::to_value(entry)?;
        let position = entries.iter().position(|e| entry_id(e) == Some(id));
        match position {
            Some(index) => entries[index] = value,
            None if placement == Placement::Front => entries.insert(0, value),
            None => entries.push(value),
        }
        self.write_json(key, &entries)
    }

    /// Decode the entry with the given id, apply `f` and store the result.
    ///
    /// Returns `None` if no entry has that id. An entry that exists but
    /// does not decode is an error rather than being overwritten.
    fn update_entry<T, F>(&self, key: &str, id: &str, f: F) -> Result<Option<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T),
    {
        let mut entries = self.read_entries(key)?;
        let Some(index) = entries.iter().position(|e| entry_id(e) == Some(id)) else {
            return Ok(None);
        };
        let mut entry: T = serde_json::from_value(entries[index].clone())?;
        f(&mut entry);
        entries[index] = serde_json::to_value(&entry)?;
        self.write_json(key, &entries)?;
        Ok(Some(entry))
    }

    /// Delete the entry with the given id. Returns whether it existed.
    fn remove_entry(&self, key: &str, id: &str) -> Result<bool> {
        let mut entries = self.read_entries(key)?;
        let before = entries.len();
        entries.retain(|e| entry_id(e) != Some(id));
        if entries.len() == before {
            return Ok(false);
        }
        self.write_json(key, &entries)?;
        Ok(true)
    }

    /// Put `new_entries` in front of the stored array.
    fn prepend_entries<T: Serialize>(&self, key: &str, new_entries: &[T]) -> Result<()> {
        if new_entries.is_empty() {
            return Ok(());
        }
        let existing = self.read_entries(key)?;
        let mut entries = new_entries
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        entries.extend(existing);
        self.write_json(key, &entries)
    }
}

fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}

fn read_value(conn: &Connection, key: &str) -> Result<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

fn write_value(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO kv_store (key, value, updated_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at
        "#,
        params![key, value, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Database handle (single connection)
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open or create a database at the given path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run migrations on this database
    pub fn migrate(&self) -> Result<()> {
        let conn = self.lock();
        super::schema::run_migrations(&conn)
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Delete a key. Returns whether it existed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let conn = self.lock();
        let deleted = conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(deleted > 0)
    }

    /// Run `f` inside an immediate transaction.
    ///
    /// All reads and writes made through the [`StoreTransaction`] commit
    /// together; an error from `f` rolls everything back.
    pub fn atomically<T>(&self, f: impl FnOnce(&StoreTransaction<'_>) -> Result<T>) -> Result<T> {
        let mut conn = self.lock();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let out = f(&StoreTransaction { conn: &tx })?;
        tx.commit()?;
        Ok(out)
    }
}

impl KeyValueStore for Database {
    fn read(&self, key: &str) -> Result<Option<String>> {
        read_value(&self.lock(), key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        write_value(&self.lock(), key, value)
    }
}

/// Store view bound to an open transaction, see [`Database::atomically`].
pub struct StoreTransaction<'a> {
    conn: &'a Connection,
}

impl KeyValueStore for StoreTransaction<'_> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        read_value(self.conn, key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        write_value(self.conn, key, value)
    }
}
