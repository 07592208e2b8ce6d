//! Local storage backed by an embedded SQLite file: a key/value table where
//! each key is one named slot.

mod connection;
mod slots;

pub use connection::{ensure_schema, open_database, open_in_memory};
pub use slots::{fetch_slot, store_slot};
