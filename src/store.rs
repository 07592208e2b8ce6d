//! The course store: owns the in-memory collection, keeps it in sync with the
//! local storage slot, and hands out ids. Every mutation is written through
//! immediately; if the write fails the mutation is undone so the collection in
//! memory always matches the last successful save.

use std::collections::{BTreeSet, HashSet};
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::Connection;
use tracing::{debug, info, warn};

use crate::db::{fetch_slot, store_slot};
use crate::error::{CatalogError, Result};
use crate::models::{Course, CourseDraft, CourseUpdate};

/// Name of the slot that holds the serialized collection.
pub const DEFAULT_SLOT: &str = "coursesData";

pub struct CourseStore {
    conn: Connection,
    slot: String,
    courses: Vec<Course>,
}

impl CourseStore {
    /// Read the collection from `slot`. A missing, empty, or unreadable slot
    /// results in the sample courses being written and returned instead.
    pub fn load(conn: Connection, slot: impl Into<String>) -> Result<Self> {
        let slot = slot.into();
        let courses = match read_slot(&conn, &slot)? {
            Some(raw) => decode_courses(&raw).unwrap_or_else(|err| {
                warn!(slot = %slot, error = %err, "stored courses are unreadable, starting over");
                Vec::new()
            }),
            None => Vec::new(),
        };

        let mut store = Self {
            conn,
            slot,
            courses,
        };

        if store.courses.is_empty() {
            store.courses = sample_courses(now_millis());
            store.save()?;
            info!(count = store.courses.len(), "seeded sample courses");
        } else {
            debug!(count = store.courses.len(), "loaded courses");
        }

        Ok(store)
    }

    /// Serialize the whole collection and write it in a single statement.
    pub fn save(&self) -> Result<()> {
        let encoded = encode_courses(&self.courses)?;
        store_slot(&self.conn, &self.slot, &encoded)
    }

    /// Append a new course with a fresh id and persist it.
    pub fn add(&mut self, draft: CourseDraft) -> Result<Course> {
        if draft.name.trim().is_empty() {
            return Err(CatalogError::BlankName);
        }

        let course = draft.into_course(self.next_id());
        self.courses.push(course.clone());
        if let Err(err) = self.save() {
            self.courses.pop();
            return Err(err);
        }

        info!(id = course.id, year = %course.year, "added course");
        Ok(course)
    }

    /// Merge `changes` into the course with `id`. Returns `false` without
    /// touching storage when no such course exists.
    pub fn update(&mut self, id: i64, changes: CourseUpdate) -> Result<bool> {
        if matches!(&changes.name, Some(name) if name.trim().is_empty()) {
            return Err(CatalogError::BlankName);
        }

        let Some(index) = self.position(id) else {
            debug!(id, "update ignored, course not found");
            return Ok(false);
        };

        let previous = self.courses[index].clone();
        self.courses[index].apply(changes);
        if let Err(err) = self.save() {
            self.courses[index] = previous;
            return Err(err);
        }

        info!(id, "updated course");
        Ok(true)
    }

    /// Delete the course with `id`. Returns `false` when it was already gone.
    pub fn remove(&mut self, id: i64) -> Result<bool> {
        let Some(index) = self.position(id) else {
            debug!(id, "remove ignored, course not found");
            return Ok(false);
        };

        let removed = self.courses.remove(index);
        if let Err(err) = self.save() {
            self.courses.insert(index, removed);
            return Err(err);
        }

        info!(id, "removed course");
        Ok(true)
    }

    /// Distinct year labels, newest-looking first. The ordering is plain
    /// reverse lexical order, not a calendar comparison.
    pub fn list_years(&self) -> Vec<String> {
        let years: BTreeSet<&str> = self.courses.iter().map(|c| c.year.as_str()).collect();
        years.into_iter().rev().map(str::to_string).collect()
    }

    pub fn get(&self, id: i64) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Courses in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.courses.iter().position(|c| c.id == id)
    }

    /// Timestamp-derived id, bumped past every existing id so two adds within
    /// the same millisecond still get distinct values. Once the top of the
    /// range is taken, the highest free id below it is used instead.
    fn next_id(&self) -> i64 {
        let highest = self.courses.iter().map(|c| c.id).max().unwrap_or(0);
        if let Some(after) = highest.checked_add(1) {
            return now_millis().max(after);
        }

        let taken: HashSet<i64> = self.courses.iter().map(|c| c.id).collect();
        (i64::MIN..i64::MAX)
            .rev()
            .find(|id| !taken.contains(id))
            .unwrap_or(i64::MIN)
    }
}

/// Slot contents as text. A value SQLite cannot hand back as text counts as
/// unreadable data, not as a storage failure.
fn read_slot(conn: &Connection, slot: &str) -> Result<Option<String>> {
    match fetch_slot(conn, slot) {
        Err(CatalogError::Database(
            err @ (rusqlite::Error::InvalidColumnType(..)
            | rusqlite::Error::FromSqlConversionFailure(..)),
        )) => {
            warn!(slot = %slot, error = %err, "stored courses are not text, starting over");
            Ok(None)
        }
        other => other,
    }
}

/// JSON text stored in the slot.
pub fn encode_courses(courses: &[Course]) -> Result<String> {
    Ok(serde_json::to_string(courses)?)
}

pub fn decode_courses(raw: &str) -> Result<Vec<Course>> {
    Ok(serde_json::from_str(raw)?)
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// The three courses written on first run so the screen is never blank.
fn sample_courses(base_id: i64) -> Vec<Course> {
    vec![
        Course {
            id: base_id + 1,
            name: "Mathematical Analysis".to_string(),
            subject: "mathematics".to_string(),
            year: "2023-2024".to_string(),
            description: "Analysis course covering limits, derivatives, integrals and series."
                .to_string(),
            files: "https://example.com/analysis-notes.pdf\nhttps://example.com/exercises.pdf"
                .to_string(),
        },
        Course {
            id: base_id + 2,
            name: "Quantum Mechanics".to_string(),
            subject: "physics".to_string(),
            year: "2023-2024".to_string(),
            description: "Introduction to the fundamental principles of quantum mechanics."
                .to_string(),
            files: "https://example.com/quantum-mechanics.pdf".to_string(),
        },
        Course {
            id: base_id + 3,
            name: "Object-Oriented Programming".to_string(),
            subject: "computer-science".to_string(),
            year: "2024-2025".to_string(),
            description: "Advanced OOP concepts in Java and Python.".to_string(),
            files: "https://github.com/example/oop-course\nhttps://example.com/slides.pdf"
                .to_string(),
        },
    ]
}
