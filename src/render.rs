//! Read-only projection of the store and view state into the pieces the
//! terminal front-end draws: the year tab strip, the course cards (or an empty
//! marker), and the detail view of one course.

use crate::models::Course;
use crate::view::{ViewState, YearFilter};

/// Tab label used for the "every year" filter.
pub const ALL_YEARS_LABEL: &str = "All years";
/// Card text for courses without a description.
pub const NO_DESCRIPTION: &str = "No description";
/// Detail text for courses without a description.
pub const NO_DESCRIPTION_DETAIL: &str = "No description available.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearTab {
    pub label: String,
    pub filter: YearFilter,
    pub active: bool,
}

/// Years newest first, with a just-added year slotted into its sorted
/// position, followed by the "all years" tab.
pub fn year_tabs(years: &[String], view: &ViewState) -> Vec<YearTab> {
    let mut labels: Vec<String> = years.to_vec();
    if let Some(pending) = view.pending_year() {
        if !labels.iter().any(|year| year == pending) {
            labels.push(pending.to_string());
            labels.sort_by(|a, b| b.cmp(a));
        }
    }

    let selected = view.selected_year();
    let mut tabs: Vec<YearTab> = labels
        .into_iter()
        .map(|label| {
            let filter = YearFilter::Year(label.clone());
            YearTab {
                active: *selected == filter,
                label,
                filter,
            }
        })
        .collect();

    tabs.push(YearTab {
        label: ALL_YEARS_LABEL.to_string(),
        active: *selected == YearFilter::All,
        filter: YearFilter::All,
    });
    tabs
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard {
    pub id: i64,
    pub subject: String,
    pub name: String,
    pub summary: String,
    pub year: String,
}

impl CourseCard {
    fn from_course(course: &Course) -> Self {
        let summary = if course.description.trim().is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            course.description.clone()
        };
        Self {
            id: course.id,
            subject: course.subject_label(),
            name: course.name.clone(),
            summary,
            year: course.year.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseListing {
    Empty,
    Cards(Vec<CourseCard>),
}

impl CourseListing {
    pub fn cards(&self) -> &[CourseCard] {
        match self {
            CourseListing::Empty => &[],
            CourseListing::Cards(cards) => cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CourseListing::Empty)
    }
}

/// Cards for every visible course, in store order.
pub fn course_listing(courses: &[Course], view: &ViewState) -> CourseListing {
    let cards: Vec<CourseCard> = view
        .visible(courses)
        .into_iter()
        .map(CourseCard::from_course)
        .collect();
    if cards.is_empty() {
        CourseListing::Empty
    } else {
        CourseListing::Cards(cards)
    }
}

/// One line of a course's `files` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileLine {
    Link(String),
    Text(String),
}

impl FileLine {
    pub fn classify(line: &str) -> Self {
        if line.starts_with("http://") || line.starts_with("https://") {
            FileLine::Link(line.to_string())
        } else {
            FileLine::Text(line.to_string())
        }
    }

    pub fn text(&self) -> &str {
        match self {
            FileLine::Link(text) | FileLine::Text(text) => text,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, FileLine::Link(_))
    }
}

/// Split on newlines, drop blank lines, and classify what is left.
pub fn split_files(files: &str) -> Vec<FileLine> {
    files
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(FileLine::classify)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDetail {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub year: String,
    pub description: String,
    pub files: Vec<FileLine>,
}

pub fn course_detail(course: &Course) -> CourseDetail {
    let description = if course.description.trim().is_empty() {
        NO_DESCRIPTION_DETAIL.to_string()
    } else {
        course.description.clone()
    };
    CourseDetail {
        id: course.id,
        name: course.name.clone(),
        subject: course.subject_label(),
        year: course.year.clone(),
        description,
        files: split_files(&course.files),
    }
}
