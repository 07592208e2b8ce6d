//! Domain models for the course catalog. These types stay light-weight data
//! holders: the store owns the collection, the view layer filters it, and the
//! renderer turns it into something drawable. The serialized shape of
//! `Course` is the on-disk format of the catalog slot, so field names here are
//! part of the storage contract.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single course entry. Every field except `id` is user-editable.
pub struct Course {
    /// Identifier assigned at creation time. Never changes afterwards, so edit
    /// and delete flows can keep referring to it while the other fields move.
    pub id: i64,
    /// Display name shown on cards and in the detail view. Never blank once
    /// persisted.
    pub name: String,
    /// Subject code. Known codes map to a `Subject`; anything else is kept and
    /// displayed verbatim so newer data does not break older builds.
    pub subject: String,
    /// Free-form school-year label such as `2024-2025`.
    pub year: String,
    /// Optional free text.
    #[serde(default)]
    pub description: String,
    /// Newline-delimited resources: URLs or plain labels.
    #[serde(default)]
    pub files: String,
}

impl Course {
    /// Label of the subject, falling back to the raw code for unknown values.
    pub fn subject_label(&self) -> String {
        subject_label(&self.subject)
    }

    /// Overwrite every field present in `changes`, leaving the id untouched.
    pub fn apply(&mut self, changes: CourseUpdate) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(subject) = changes.subject {
            self.subject = subject;
        }
        if let Some(year) = changes.year {
            self.year = year;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(files) = changes.files {
            self.files = files;
        }
    }
}

/// The fixed list of subjects offered by the course form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Subject {
    #[default]
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    ComputerScience,
    French,
    English,
    History,
    Geography,
    Philosophy,
    Economics,
    Other,
}

impl Subject {
    /// Every subject in the order the form cycles through them.
    pub const ALL: [Subject; 12] = [
        Subject::Mathematics,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::ComputerScience,
        Subject::French,
        Subject::English,
        Subject::History,
        Subject::Geography,
        Subject::Philosophy,
        Subject::Economics,
        Subject::Other,
    ];

    /// Stable code written to storage.
    pub fn code(self) -> &'static str {
        match self {
            Subject::Mathematics => "mathematics",
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Biology => "biology",
            Subject::ComputerScience => "computer-science",
            Subject::French => "language-french",
            Subject::English => "language-english",
            Subject::History => "history",
            Subject::Geography => "geography",
            Subject::Philosophy => "philosophy",
            Subject::Economics => "economics",
            Subject::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::ComputerScience => "Computer Science",
            Subject::French => "French",
            Subject::English => "English",
            Subject::History => "History",
            Subject::Geography => "Geography",
            Subject::Philosophy => "Philosophy",
            Subject::Economics => "Economics",
            Subject::Other => "Other",
        }
    }

    pub fn from_code(code: &str) -> Option<Subject> {
        Subject::ALL.into_iter().find(|subject| subject.code() == code)
    }

    /// Next subject in `ALL`, wrapping around.
    pub fn next(self) -> Subject {
        let index = self.position();
        Subject::ALL[(index + 1) % Subject::ALL.len()]
    }

    /// Previous subject in `ALL`, wrapping around.
    pub fn previous(self) -> Subject {
        let index = self.position();
        Subject::ALL[(index + Subject::ALL.len() - 1) % Subject::ALL.len()]
    }

    fn position(self) -> usize {
        Subject::ALL
            .iter()
            .position(|subject| *subject == self)
            .unwrap_or(0)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Display label for a subject code. Unknown codes come back unchanged.
pub fn subject_label(code: &str) -> String {
    match Subject::from_code(code) {
        Some(subject) => subject.label().to_string(),
        None => code.to_string(),
    }
}

/// The editable fields of a course, as collected by the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseDraft {
    pub name: String,
    pub subject: String,
    pub year: String,
    pub description: String,
    pub files: String,
}

impl CourseDraft {
    /// Copy the editable fields out of an existing record.
    pub fn from_course(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            subject: course.subject.clone(),
            year: course.year.clone(),
            description: course.description.clone(),
            files: course.files.clone(),
        }
    }

    /// Trim every field the way the form boundary does before saving.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            subject: self.subject.trim().to_string(),
            year: self.year.trim().to_string(),
            description: self.description.trim().to_string(),
            files: self.files.trim().to_string(),
        }
    }

    /// Turn the draft into a record carrying the given id.
    pub fn into_course(self, id: i64) -> Course {
        Course {
            id,
            name: self.name,
            subject: self.subject,
            year: self.year,
            description: self.description,
            files: self.files,
        }
    }
}

/// Partial set of replacements for an existing course. `None` keeps the
/// current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseUpdate {
    pub name: Option<String>,
    pub subject: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
    pub files: Option<String>,
}

impl From<CourseDraft> for CourseUpdate {
    fn from(draft: CourseDraft) -> Self {
        Self {
            name: Some(draft.name),
            subject: Some(draft.subject),
            year: Some(draft.year),
            description: Some(draft.description),
            files: Some(draft.files),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Course {
        Course {
            id: 7,
            name: "Organic Chemistry".to_string(),
            subject: "chemistry".to_string(),
            year: "2024-2025".to_string(),
            description: "Reactions and mechanisms.".to_string(),
            files: String::new(),
        }
    }

    #[test]
    fn known_subject_codes_have_labels() {
        assert_eq!(subject_label("computer-science"), "Computer Science");
        assert_eq!(subject_label("language-french"), "French");
        assert_eq!(sample().subject_label(), "Chemistry");
    }

    #[test]
    fn unknown_subject_code_is_displayed_verbatim() {
        assert_eq!(subject_label("astronomy"), "astronomy");
    }

    #[test]
    fn subject_cycle_wraps_in_both_directions() {
        assert_eq!(Subject::Other.next(), Subject::Mathematics);
        assert_eq!(Subject::Mathematics.previous(), Subject::Other);
        assert_eq!(Subject::default(), Subject::Mathematics);
        for subject in Subject::ALL {
            assert_eq!(Subject::from_code(subject.code()), Some(subject));
        }
    }

    #[test]
    fn apply_keeps_id_and_untouched_fields() {
        let mut course = sample();
        course.apply(CourseUpdate {
            year: Some("2025-2026".to_string()),
            ..CourseUpdate::default()
        });
        assert_eq!(course.id, 7);
        assert_eq!(course.year, "2025-2026");
        assert_eq!(course.name, "Organic Chemistry");
    }

    #[test]
    fn missing_optional_fields_deserialize_as_empty() {
        let course: Course = serde_json::from_str(
            r#"{"id":1,"name":"History of Art","subject":"history","year":"2022-2023"}"#,
        )
        .unwrap();
        assert_eq!(course.description, "");
        assert_eq!(course.files, "");
    }

    #[test]
    fn draft_trims_all_fields() {
        let draft = CourseDraft {
            name: "  Statistics ".to_string(),
            subject: "mathematics".to_string(),
            year: " 2024-2025\n".to_string(),
            description: " ".to_string(),
            files: "\nnotes.txt\n".to_string(),
        }
        .trimmed();
        assert_eq!(draft.name, "Statistics");
        assert_eq!(draft.year, "2024-2025");
        assert_eq!(draft.description, "");
        assert_eq!(draft.files, "notes.txt");
    }
}
