//! Error type shared by the persistence, store, and configuration layers. The
//! terminal front-end wraps these in `anyhow` so it can attach context before
//! surfacing a message in the footer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Course name is required.")]
    BlankName,

    #[error("could not locate home directory")]
    HomeDirUnavailable,
}

pub type Result<T> = std::result::Result<T, CatalogError>;
