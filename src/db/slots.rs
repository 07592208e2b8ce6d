use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;

/// Read the raw text stored under `key`, if any.
pub fn fetch_slot(conn: &Connection, key: &str) -> Result<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM local_storage WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

/// Replace the contents of `key` in one statement, so a slot is either the old
/// value or the new one and never a mix.
pub fn store_slot(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}
