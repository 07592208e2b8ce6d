//! The catalog session: store, view state, and the modal interaction state
//! machine that user commands drive. Every command leaves the view reconciled
//! with the store, so the next projection is always consistent.
//!
//! ```text
//! Idle --open_add--> Editing(None) --submit/close--> Idle
//! Idle --view(id)--> Viewing(id) --open_edit--> Editing(Some(id))
//! Viewing(id) --delete(confirmed)--> Idle
//! ```

use tracing::{debug, info};

use crate::error::Result;
use crate::models::{Course, CourseDraft, Subject};
use crate::render::{course_detail, course_listing, year_tabs, CourseDetail, CourseListing, YearTab};
use crate::store::CourseStore;
use crate::view::{ViewState, YearFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Idle,
    /// `None` while creating, the course id while editing.
    Editing(Option<i64>),
    Viewing(i64),
}

pub struct Catalog {
    store: CourseStore,
    view: ViewState,
    interaction: Interaction,
}

impl Catalog {
    pub fn new(store: CourseStore) -> Self {
        let view = ViewState::for_years(&store.list_years());
        Self {
            store,
            view,
            interaction: Interaction::Idle,
        }
    }

    pub fn store(&self) -> &CourseStore {
        &self.store
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Start creating a course. The draft's year defaults to the active tab.
    pub fn open_add(&mut self) -> CourseDraft {
        self.interaction = Interaction::Editing(None);
        CourseDraft {
            subject: Subject::default().code().to_string(),
            year: self
                .view
                .selected_year()
                .year()
                .map(str::to_string)
                .unwrap_or_default(),
            ..CourseDraft::default()
        }
    }

    /// Start editing an existing course, from the detail view or directly.
    /// Unknown ids leave the current state alone.
    pub fn open_edit(&mut self, id: i64) -> Option<CourseDraft> {
        let draft = CourseDraft::from_course(self.store.get(id)?);
        self.interaction = Interaction::Editing(Some(id));
        Some(draft)
    }

    /// Save the form. Creates or updates depending on what is being edited,
    /// then returns to idle. Returns the id of the affected course, or `None`
    /// when nothing was being edited or the edited course no longer exists.
    /// On a storage error the session stays in editing mode.
    pub fn submit(&mut self, draft: CourseDraft) -> Result<Option<i64>> {
        let Interaction::Editing(target) = self.interaction else {
            debug!(state = ?self.interaction, "submit ignored outside editing");
            return Ok(None);
        };

        let draft = draft.trimmed();
        let affected = match target {
            None => Some(self.store.add(draft)?.id),
            Some(id) => self.store.update(id, draft.into())?.then_some(id),
        };

        self.interaction = Interaction::Idle;
        self.refresh();
        Ok(affected)
    }

    /// Open the detail view of a course. Only valid from idle.
    pub fn view(&mut self, id: i64) -> bool {
        if self.interaction != Interaction::Idle || self.store.get(id).is_none() {
            return false;
        }
        self.interaction = Interaction::Viewing(id);
        true
    }

    /// Delete the course being viewed once `confirm` agrees. Declining, or
    /// calling this outside the detail view, changes nothing.
    pub fn delete(&mut self, confirm: impl FnOnce(&Course) -> bool) -> Result<bool> {
        let Interaction::Viewing(id) = self.interaction else {
            return Ok(false);
        };
        let Some(course) = self.store.get(id) else {
            self.interaction = Interaction::Idle;
            return Ok(false);
        };
        if !confirm(course) {
            debug!(id, "delete declined");
            return Ok(false);
        }

        let removed = self.store.remove(id)?;
        self.interaction = Interaction::Idle;
        self.refresh();
        Ok(removed)
    }

    /// Back to idle, dropping whatever form or detail view was open.
    pub fn close(&mut self) {
        self.interaction = Interaction::Idle;
    }

    /// Select a new year label so subsequent courses default into it. No
    /// course is created.
    pub fn add_year(&mut self, label: &str) -> bool {
        let added = self.view.add_year(label);
        if added {
            info!(year = label.trim(), "switched to new year");
            self.refresh();
        }
        added
    }

    pub fn select_year(&mut self, filter: YearFilter) {
        self.view.select(filter);
        self.refresh();
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.view.set_search(query);
    }

    pub fn clear_search(&mut self) {
        self.view.clear_search();
    }

    pub fn year_tabs(&self) -> Vec<YearTab> {
        year_tabs(&self.store.list_years(), &self.view)
    }

    pub fn listing(&self) -> CourseListing {
        course_listing(self.store.courses(), &self.view)
    }

    /// Detail of the course currently being viewed.
    pub fn detail(&self) -> Option<CourseDetail> {
        match self.interaction {
            Interaction::Viewing(id) => self.store.get(id).map(course_detail),
            _ => None,
        }
    }

    fn refresh(&mut self) {
        let years = self.store.list_years();
        self.view.reconcile(&years);
    }
}
