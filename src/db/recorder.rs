//! Persistent key-value record store.
//!
//! A `Recorder<T>` owns one SQLite file holding a single collection. Keys are
//! strings, values are `T` serialized as JSON. All mutations happen inside an
//! open transaction which only becomes durable on `commit()`; closing or
//! dropping the recorder without committing discards them.

use crate::db::log::{AuditRow, load_log, ttlog};
use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

pub struct Recorder<T> {
    path: PathBuf,
    conn: Option<Connection>,
    _record: PhantomData<T>,
}

impl<T> Recorder<T> {
    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    fn conn(&self) -> AppResult<&Connection> {
        self.conn
            .as_ref()
            .ok_or_else(|| AppError::StoreClosed(self.path.display().to_string()))
    }

    /// Release the backing file. Uncommitted mutations are rolled back.
    /// Calling it on an already closed recorder is a no-op.
    pub fn close(&mut self) -> AppResult<()> {
        if let Some(conn) = self.conn.take() {
            if !conn.is_autocommit() {
                conn.execute_batch("ROLLBACK")?;
            }
            conn.close().map_err(|(_, e)| AppError::Db(e))?;
        }
        Ok(())
    }

    /// Make every mutation since the last commit durable as one unit.
    pub fn commit(&mut self) -> AppResult<()> {
        self.conn()?.execute_batch("COMMIT; BEGIN DEFERRED;")?;
        Ok(())
    }

    /// Append an audit row. It is written in the current transaction and
    /// becomes durable with the next commit. Failures only warn.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        let res = self
            .conn()
            .and_then(|conn| ttlog(conn, operation, target, message));
        if let Err(e) = res {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    /// Full audit trail of this collection, oldest first.
    pub fn audit_trail(&self) -> AppResult<Vec<AuditRow>> {
        load_log(self.conn()?)
    }

    pub fn contains(&self, key: &str) -> AppResult<bool> {
        let found: Option<i64> = self
            .conn()?
            .query_row("SELECT 1 FROM records WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(found.is_some())
    }

    /// All keys, in lexical order.
    pub fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .conn()?
            .prepare_cached("SELECT key FROM records ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Stored JSON text at `key`, without decoding it.
    pub fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        let raw = self
            .conn()?
            .query_row("SELECT value FROM records WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(raw)
    }

    /// Store `json` at `key` as is. Used to move records between files
    /// without a decode/encode round.
    pub fn set_raw(&mut self, key: &str, json: &str) -> AppResult<()> {
        self.conn()?.execute(
            "INSERT INTO records (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, json],
        )?;
        Ok(())
    }

    /// Remove the record at `key`.
    pub fn delete(&mut self, key: &str) -> AppResult<()> {
        let deleted = self
            .conn()?
            .execute("DELETE FROM records WHERE key = ?1", [key])?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "no record with key {} in {}",
                key,
                self.path.display()
            )));
        }
        Ok(())
    }
}

impl<T> Recorder<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Open (creating if needed) the collection file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.is_dir()
        {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory {} does not exist", parent.display()),
            )));
        }
        let conn = Connection::open(&path)?;

        run_pending_migrations(&conn)?;
        conn.execute_batch("BEGIN DEFERRED;")?;

        Ok(Self {
            path,
            conn: Some(conn),
            _record: PhantomData,
        })
    }

    pub fn get(&self, key: &str) -> AppResult<Option<T>> {
        match self.get_raw(key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Insert or replace the record at `key`.
    pub fn set(&mut self, key: &str, record: &T) -> AppResult<()> {
        let json = serde_json::to_string(record)?;
        self.set_raw(key, &json)
    }

    /// Every `(key, record)` pair accepted by `predicate`, in no particular
    /// order. Callers sort when order matters.
    pub fn list_all<F>(&self, predicate: F) -> AppResult<Vec<(String, T)>>
    where
        F: Fn(&str, &T) -> bool,
    {
        let mut stmt = self
            .conn()?
            .prepare_cached("SELECT key, value FROM records")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut out = Vec::new();
        for r in rows {
            let (key, json) = r?;
            let record: T = serde_json::from_str(&json)?;
            if predicate(&key, &record) {
                out.push((key, record));
            }
        }
        Ok(out)
    }
}

impl<T> Drop for Recorder<T> {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take()
            && !conn.is_autocommit()
        {
            let _ = conn.execute_batch("ROLLBACK");
        }
    }
}
