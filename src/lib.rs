//! Core library surface for the Course Catalog TUI application.
//!
//! The data side (store, view state, projection, command state machine) has no
//! terminal dependency so it can be exercised headlessly; `ui` layers the
//! Ratatui front-end on top of it.
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod render;
pub mod store;
pub mod ui;
pub mod view;

/// The session object the front-end drives.
pub use commands::{Catalog, Interaction};

pub use config::Config;
pub use error::{CatalogError, Result};

/// Domain types other layers manipulate.
pub use models::{Course, CourseDraft, CourseUpdate, Subject};

pub use store::CourseStore;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
