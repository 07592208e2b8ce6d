//! Ephemeral view state: which year tab is active and what the user typed into
//! the search bar. Nothing here is persisted, and filtering never touches the
//! store.

use crate::models::Course;

/// Year tab selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearFilter {
    All,
    Year(String),
}

impl YearFilter {
    /// The concrete year label, if one is selected.
    pub fn year(&self) -> Option<&str> {
        match self {
            YearFilter::All => None,
            YearFilter::Year(label) => Some(label),
        }
    }

    pub fn matches(&self, course: &Course) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(label) => course.year == *label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    selected: YearFilter,
    /// Year introduced through "add year" that no course uses yet. It stays
    /// selectable until the user picks another tab.
    pending_year: Option<String>,
    search_query: String,
}

impl ViewState {
    /// Start on the first listed year, or on "all" when there is none.
    pub fn for_years(years: &[String]) -> Self {
        let selected = years
            .first()
            .map(|year| YearFilter::Year(year.clone()))
            .unwrap_or(YearFilter::All);
        Self {
            selected,
            pending_year: None,
            search_query: String::new(),
        }
    }

    pub fn selected_year(&self) -> &YearFilter {
        &self.selected
    }

    pub fn pending_year(&self) -> Option<&str> {
        self.pending_year.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Switch tabs. Picking anything other than the pending year forgets it.
    pub fn select(&mut self, filter: YearFilter) {
        if self.pending_year.as_deref() != filter.year() {
            self.pending_year = None;
        }
        self.selected = filter;
    }

    /// Make `label` the active year without creating any course. Blank labels
    /// are ignored.
    pub fn add_year(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }
        self.pending_year = Some(label.to_string());
        self.selected = YearFilter::Year(label.to_string());
        true
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
    }

    /// Bring the selection back in line with the years that actually exist.
    /// A vanished year falls back to the first listed one, or to "all".
    pub fn reconcile(&mut self, years: &[String]) {
        let pending_settled = match &self.pending_year {
            Some(pending) => {
                years.contains(pending) || self.selected.year() != Some(pending.as_str())
            }
            None => false,
        };
        if pending_settled {
            self.pending_year = None;
        }

        let stale = match &self.selected {
            YearFilter::All => false,
            YearFilter::Year(label) => {
                !years.contains(label) && self.pending_year.as_ref() != Some(label)
            }
        };

        if stale {
            self.selected = years
                .first()
                .map(|year| YearFilter::Year(year.clone()))
                .unwrap_or(YearFilter::All);
        }
    }

    /// Courses visible under the current year and search query, in store order.
    pub fn visible<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        filter_by_query(
            filter_by_year(courses.iter(), &self.selected),
            &self.search_query,
        )
    }
}

pub fn filter_by_year<'a>(
    courses: impl IntoIterator<Item = &'a Course>,
    filter: &YearFilter,
) -> Vec<&'a Course> {
    courses
        .into_iter()
        .filter(|course| filter.matches(course))
        .collect()
}

/// Case-insensitive substring search over name, subject label and
/// description. An empty query keeps everything.
pub fn filter_by_query<'a>(
    courses: impl IntoIterator<Item = &'a Course>,
    query: &str,
) -> Vec<&'a Course> {
    if query.is_empty() {
        return courses.into_iter().collect();
    }
    let needle = query.to_lowercase();
    courses
        .into_iter()
        .filter(|course| matches_query(course, &needle))
        .collect()
}

/// `needle` must already be lowercase.
pub fn matches_query(course: &Course, needle: &str) -> bool {
    course.name.to_lowercase().contains(needle)
        || course.subject_label().to_lowercase().contains(needle)
        || course.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn course(id: i64, name: &str, subject: &str, year: &str, description: &str) -> Course {
        Course {
            id,
            name: name.to_string(),
            subject: subject.to_string(),
            year: year.to_string(),
            description: description.to_string(),
            files: String::new(),
        }
    }

    fn catalog() -> Vec<Course> {
        vec![
            course(1, "Mathematical Analysis", "mathematics", "2023-2024", "Limits and series."),
            course(2, "Quantum Mechanics", "physics", "2023-2024", "Wave functions."),
            course(3, "Object-Oriented Programming", "computer-science", "2024-2025", ""),
        ]
    }

    fn years(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    fn ids(courses: &[&Course]) -> Vec<i64> {
        courses.iter().map(|c| c.id).collect()
    }

    #[test]
    fn starts_on_first_year_or_all() {
        let view = ViewState::for_years(&years(&["2024-2025", "2023-2024"]));
        assert_eq!(view.selected_year(), &YearFilter::Year("2024-2025".into()));
        assert_eq!(ViewState::for_years(&[]).selected_year(), &YearFilter::All);
    }

    #[test]
    fn year_filter_keeps_matching_courses() {
        let courses = catalog();
        let mut view = ViewState::for_years(&[]);
        view.select(YearFilter::Year("2023-2024".into()));
        assert_eq!(ids(&view.visible(&courses)), vec![1, 2]);
    }

    #[test]
    fn search_is_case_insensitive_over_name_subject_and_description() {
        let courses = catalog();
        let mut view = ViewState::for_years(&[]);

        view.set_search("QUANT");
        assert_eq!(ids(&view.visible(&courses)), vec![2]);

        view.set_search("computer sci");
        assert_eq!(ids(&view.visible(&courses)), vec![3]);

        view.set_search("series");
        assert_eq!(ids(&view.visible(&courses)), vec![1]);

        view.clear_search();
        assert_eq!(view.visible(&courses).len(), 3);
    }

    #[test]
    fn search_does_not_match_raw_subject_code() {
        let courses = catalog();
        assert!(filter_by_query(&courses, "computer-science").is_empty());
    }

    #[test]
    fn vanished_year_falls_back_to_first_year() {
        let mut view = ViewState::for_years(&[]);
        view.select(YearFilter::Year("2022-2023".into()));
        view.reconcile(&years(&["2024-2025", "2023-2024"]));
        assert_eq!(view.selected_year(), &YearFilter::Year("2024-2025".into()));
    }

    #[test]
    fn vanished_year_falls_back_to_all_when_nothing_is_left() {
        let mut view = ViewState::for_years(&years(&["2024-2025"]));
        view.reconcile(&[]);
        assert_eq!(view.selected_year(), &YearFilter::All);
    }

    #[test]
    fn added_year_survives_until_another_tab_is_picked() {
        let mut view = ViewState::for_years(&years(&["2024-2025"]));
        assert!(view.add_year(" 2025-2026 "));
        view.reconcile(&years(&["2024-2025"]));
        assert_eq!(view.selected_year().year(), Some("2025-2026"));
        assert_eq!(view.pending_year(), Some("2025-2026"));

        view.select(YearFilter::Year("2024-2025".into()));
        assert_eq!(view.pending_year(), None);
        view.select(YearFilter::Year("2025-2026".into()));
        view.reconcile(&years(&["2024-2025"]));
        assert_eq!(view.selected_year().year(), Some("2024-2025"));
    }

    #[test]
    fn added_year_becomes_regular_once_used() {
        let mut view = ViewState::for_years(&years(&["2024-2025"]));
        view.add_year("2025-2026");
        view.reconcile(&years(&["2025-2026", "2024-2025"]));
        assert_eq!(view.pending_year(), None);
        assert_eq!(view.selected_year().year(), Some("2025-2026"));
    }

    #[test]
    fn blank_year_is_ignored() {
        let mut view = ViewState::for_years(&years(&["2024-2025"]));
        assert!(!view.add_year("   "));
        assert_eq!(view.selected_year().year(), Some("2024-2025"));
    }

    fn arb_course() -> impl Strategy<Value = Course> {
        (
            any::<i64>(),
            "[a-zA-Z ]{1,10}",
            prop::sample::select(vec!["physics", "history", "astronomy"]),
            prop::sample::select(vec!["2023-2024", "2024-2025"]),
            "[a-zA-Z ]{0,10}",
        )
            .prop_map(|(id, name, subject, year, description)| {
                course(id, &name, subject, year, &description)
            })
    }

    proptest! {
        #[test]
        fn year_and_search_filters_commute(
            courses in prop::collection::vec(arb_course(), 0..12),
            year in prop::sample::select(vec!["2023-2024", "2024-2025"]),
            query in "[a-zA-Z ]{0,3}",
        ) {
            let filter = YearFilter::Year(year.to_string());
            let year_first = filter_by_query(filter_by_year(&courses, &filter), &query);
            let search_first = filter_by_year(filter_by_query(&courses, &query), &filter);
            prop_assert_eq!(year_first, search_first);
        }
    }
}
