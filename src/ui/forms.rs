use anyhow::{anyhow, Result};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::{subject_label, CourseDraft, Subject};

/// Form state for creating or editing a course.
#[derive(Default, Clone)]
pub(crate) struct CourseForm {
    pub(crate) name: String,
    /// Subject code. May hold an unknown code when editing older data; cycling
    /// replaces it with a known one.
    pub(crate) subject: String,
    pub(crate) year: String,
    pub(crate) description: String,
    pub(crate) files: String,
    pub(crate) active: CourseField,
    pub(crate) error: Option<String>,
}

/// Fields of the course form, in tab order.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub(crate) enum CourseField {
    #[default]
    Name,
    Subject,
    Year,
    Description,
    Files,
}

impl CourseField {
    const ORDER: [CourseField; 5] = [
        CourseField::Name,
        CourseField::Subject,
        CourseField::Year,
        CourseField::Description,
        CourseField::Files,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            CourseField::Name => "Name",
            CourseField::Subject => "Subject",
            CourseField::Year => "Year",
            CourseField::Description => "Description",
            CourseField::Files => "Files",
        }
    }

    fn index(self) -> usize {
        CourseField::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }
}

impl CourseForm {
    pub(crate) fn from_draft(draft: CourseDraft) -> Self {
        Self {
            name: draft.name,
            subject: draft.subject,
            year: draft.year,
            description: draft.description,
            files: draft.files,
            active: CourseField::Name,
            error: None,
        }
    }

    pub(crate) fn next_field(&mut self) {
        let index = (self.active.index() + 1) % CourseField::ORDER.len();
        self.active = CourseField::ORDER[index];
    }

    pub(crate) fn previous_field(&mut self) {
        let len = CourseField::ORDER.len();
        let index = (self.active.index() + len - 1) % len;
        self.active = CourseField::ORDER[index];
    }

    /// Step through the fixed subject list. Unknown codes restart at the top.
    pub(crate) fn cycle_subject(&mut self, forward: bool) {
        let next = match Subject::from_code(&self.subject) {
            Some(subject) if forward => subject.next(),
            Some(subject) => subject.previous(),
            None => Subject::default(),
        };
        self.subject = next.code().to_string();
    }

    /// Insert a character into the active text field. The subject field only
    /// reacts to the space bar, which advances the choice.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            CourseField::Name => self.name.push(ch),
            CourseField::Subject => {
                if ch != ' ' {
                    return false;
                }
                self.cycle_subject(true);
            }
            CourseField::Year => self.year.push(ch),
            CourseField::Description => self.description.push(ch),
            CourseField::Files => self.files.push(ch),
        }
        true
    }

    /// Start a new line in the files list. Returns `false` for every other
    /// field so the caller can treat Enter as "save" there.
    pub(crate) fn newline(&mut self) -> bool {
        if self.active != CourseField::Files {
            return false;
        }
        self.files.push('\n');
        true
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            CourseField::Name => {
                self.name.pop();
            }
            CourseField::Subject => {}
            CourseField::Year => {
                self.year.pop();
            }
            CourseField::Description => {
                self.description.pop();
            }
            CourseField::Files => {
                self.files.pop();
            }
        }
    }

    /// Validate and trim the inputs before they reach the store.
    pub(crate) fn parse_inputs(&self) -> Result<CourseDraft> {
        let draft = CourseDraft {
            name: self.name.clone(),
            subject: self.subject.clone(),
            year: self.year.clone(),
            description: self.description.clone(),
            files: self.files.clone(),
        }
        .trimmed();

        if draft.name.is_empty() {
            return Err(anyhow!("Course name is required."));
        }
        if draft.year.is_empty() {
            return Err(anyhow!("School year is required."));
        }
        Ok(draft)
    }

    /// Render the form body, one entry per field. The files field spans as
    /// many lines as it holds.
    pub(crate) fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            self.build_line(CourseField::Name, &self.name, "<required>"),
            self.subject_line(),
            self.build_line(CourseField::Year, &self.year, "<required>"),
            self.build_line(CourseField::Description, &self.description, "<optional>"),
        ];

        let file_lines: Vec<&str> = self.files.split('\n').collect();
        let first = file_lines.first().copied().unwrap_or_default();
        let placeholder = if self.files.is_empty() {
            "<optional, one per line>"
        } else {
            ""
        };
        lines.push(self.build_line(CourseField::Files, first, placeholder));
        let indent = " ".repeat(CourseField::Files.label().len() + 2);
        for extra in file_lines.iter().skip(1) {
            lines.push(Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(extra.to_string(), self.value_style(CourseField::Files, extra)),
            ]));
        }
        lines
    }

    /// Cursor offset (column, row) relative to the top-left of the form body.
    pub(crate) fn cursor_offset(&self) -> (u16, u16) {
        let prefix = self.active.label().len() as u16 + 2;
        let width = |value: &str| value.chars().count() as u16;
        match self.active {
            CourseField::Name => (prefix + width(&self.name), 0),
            CourseField::Subject => (prefix, 1),
            CourseField::Year => (prefix + width(&self.year), 2),
            CourseField::Description => (prefix + width(&self.description), 3),
            CourseField::Files => {
                let rows = self.files.split('\n').count().max(1);
                let last = self.files.rsplit('\n').next().unwrap_or_default();
                (prefix + width(last), 4 + rows as u16 - 1)
            }
        }
    }

    fn build_line(&self, field: CourseField, value: &str, placeholder: &str) -> Line<'static> {
        let display = if value.is_empty() {
            placeholder.to_string()
        } else {
            value.to_string()
        };
        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, self.value_style(field, value)),
        ])
    }

    fn subject_line(&self) -> Line<'static> {
        let is_active = self.active == CourseField::Subject;
        let mut spans = vec![Span::raw(format!("{}: ", CourseField::Subject.label()))];
        if is_active {
            spans.push(Span::styled("◀ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            subject_label(&self.subject),
            self.value_style(CourseField::Subject, &self.subject),
        ));
        if is_active {
            spans.push(Span::styled(" ▶", Style::default().fg(Color::DarkGray)));
        }
        Line::from(spans)
    }

    fn value_style(&self, field: CourseField, value: &str) -> Style {
        if self.active == field {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        }
    }
}

/// Pending confirmation before a course is deleted.
#[derive(Clone)]
pub(crate) struct ConfirmCourseDelete {
    pub(crate) id: i64,
    pub(crate) name: String,
}

/// Input state for the "add year" prompt.
#[derive(Default, Clone)]
pub(crate) struct YearPrompt {
    pub(crate) value: String,
    pub(crate) error: Option<String>,
}

impl YearPrompt {
    pub(crate) fn build_line(&self) -> Line<'static> {
        let display = if self.value.is_empty() {
            Span::styled("e.g. 2024-2025", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                self.value.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        };
        Line::from(vec![Span::raw("Year: "), display])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_wraps() {
        let mut form = CourseForm::default();
        assert_eq!(form.active, CourseField::Name);
        for _ in 0..5 {
            form.next_field();
        }
        assert_eq!(form.active, CourseField::Name);
        form.previous_field();
        assert_eq!(form.active, CourseField::Files);
    }

    #[test]
    fn enter_only_adds_lines_to_files() {
        let mut form = CourseForm::default();
        assert!(!form.newline());
        form.active = CourseField::Files;
        for ch in "a.pdf".chars() {
            form.push_char(ch);
        }
        assert!(form.newline());
        form.push_char('b');
        assert_eq!(form.files, "a.pdf\nb");
        assert_eq!(form.cursor_offset(), (8, 5));
        assert_eq!(form.build_lines().len(), 6);
    }

    #[test]
    fn subject_cycles_through_fixed_list() {
        let mut form = CourseForm::from_draft(CourseDraft {
            subject: "astronomy".to_string(),
            ..CourseDraft::default()
        });
        form.cycle_subject(true);
        assert_eq!(form.subject, "mathematics");
        form.cycle_subject(false);
        assert_eq!(form.subject, "other");
        form.active = CourseField::Subject;
        assert!(!form.push_char('x'));
        assert!(form.push_char(' '));
        assert_eq!(form.subject, "mathematics");
    }

    #[test]
    fn parse_requires_name_and_year() {
        let mut form = CourseForm::default();
        form.year = "2024-2025".to_string();
        assert_eq!(
            form.parse_inputs().unwrap_err().to_string(),
            "Course name is required."
        );
        form.name = "  Botany ".to_string();
        form.year = " ".to_string();
        assert!(form.parse_inputs().is_err());
        form.year = "2024-2025".to_string();
        assert_eq!(form.parse_inputs().unwrap().name, "Botany");
    }
}
