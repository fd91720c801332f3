//! Versioned schema for collection files.
//!
//! The applied version is kept in `PRAGMA user_version`; every migration runs
//! in its own transaction together with the version bump, so a failure leaves
//! the file at the previous version.

use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

struct Migration {
    version: i64,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_records",
        sql: r#"
        CREATE TABLE IF NOT EXISTS records (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: 2,
        name: "create_log",
        sql: r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    },
];

/// Latest schema version known to this build.
pub fn latest_version() -> i64 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

pub fn current_version(conn: &Connection) -> AppResult<i64> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

/// Apply every migration newer than the file's version.
/// Returns the number of migrations applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    let current = current_version(conn)?;

    if current > latest_version() {
        return Err(AppError::Migration(format!(
            "file schema version {} is newer than supported version {}",
            current,
            latest_version()
        )));
    }

    let mut applied = Vec::new();

    for m in MIGRATIONS.iter().filter(|m| m.version > current) {
        let batch = format!(
            "BEGIN;\n{}\nPRAGMA user_version = {};\nCOMMIT;",
            m.sql, m.version
        );

        if let Err(e) = conn.execute_batch(&batch) {
            let _ = conn.execute_batch("ROLLBACK");
            return Err(AppError::Migration(format!("{}: {}", m.name, e)));
        }

        applied.push(m);
    }

    // the log table only exists once migration 2 ran, so record afterwards
    for m in &applied {
        ttlog(
            conn,
            "migration_applied",
            m.name,
            &format!("Schema upgraded to version {}", m.version),
        )?;
    }

    Ok(applied.len())
}
