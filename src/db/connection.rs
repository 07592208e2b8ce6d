use std::fs;
use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

/// Open (or create) the SQLite file that backs local storage and make sure the
/// key/value table exists.
pub fn open_database(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Throwaway storage used by tests and previews. Nothing outlives the
/// connection.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Create the single key/value table. Each key is one named slot; the value is
/// whatever text the caller serialized into it.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS local_storage (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}
