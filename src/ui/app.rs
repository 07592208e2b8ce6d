use std::mem;

use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use open::that as open_link;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;
use tracing::warn;

use crate::commands::{Catalog, Interaction};
use crate::render::{CourseCard, CourseListing, FileLine};

use super::forms::{ConfirmCourseDelete, CourseField, CourseForm, YearPrompt};
use super::helpers::{centered_rect, first_visible_row, key_hints, surface_error};
use super::screens::{CourseGrid, DetailScreen, SearchBar};

/// Number of course cards per grid row.
const GRID_COLUMNS: usize = 3;
/// Height of one course card, borders included.
const CARD_HEIGHT: u16 = 6;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
const TABS_HEIGHT: u16 = 3;
const SEARCH_HEIGHT: u16 = 3;

/// What currently owns the keyboard. Mirrors `Interaction` in the catalog,
/// plus the purely presentational prompts.
enum Mode {
    Browsing,
    Viewing(DetailScreen),
    Editing(CourseForm),
    ConfirmDelete {
        detail: DetailScreen,
        confirm: ConfirmCourseDelete,
    },
    NamingYear(YearPrompt),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Terminal front-end state wrapped around the catalog session.
pub struct App {
    catalog: Catalog,
    grid: CourseGrid,
    search: Option<SearchBar>,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            grid: CourseGrid::default(),
            search: None,
            mode: Mode::Browsing,
            status: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Route a key press to the active mode. Returns `true` when the user asked
    /// to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Browsing);

        self.mode = match mode {
            Mode::Browsing => self.handle_browse_key(code, &mut exit),
            Mode::Viewing(detail) => self.handle_detail_key(code, detail),
            Mode::Editing(form) => self.handle_form_key(code, form),
            Mode::ConfirmDelete { detail, confirm } => {
                self.handle_confirm_delete(code, detail, confirm)?
            }
            Mode::NamingYear(prompt) => self.handle_year_prompt(code, prompt),
        };

        self.grid.clamp(self.catalog.listing().len());
        Ok(exit)
    }

    /// Ctrl+K toggles the search bar while browsing.
    pub(crate) fn handle_ctrl_k(&mut self) {
        if !matches!(self.mode, Mode::Browsing) {
            return;
        }
        if self.search.is_some() {
            self.close_search();
        } else {
            self.open_search();
        }
    }

    /// Ctrl+S saves the course form from any field.
    pub(crate) fn handle_ctrl_s(&mut self) {
        let mode = mem::replace(&mut self.mode, Mode::Browsing);
        self.mode = match mode {
            Mode::Editing(form) => self.save_form(form),
            other => other,
        };
        self.grid.clamp(self.catalog.listing().len());
    }

    fn handle_browse_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        if let Some(search) = self.search.as_mut() {
            match code {
                KeyCode::Esc => {
                    self.close_search();
                    return Mode::Browsing;
                }
                KeyCode::Backspace => {
                    search.query.pop();
                    let query = search.query.clone();
                    self.apply_search(query);
                    return Mode::Browsing;
                }
                KeyCode::Char(ch) if !ch.is_control() => {
                    search.query.push(ch);
                    let query = search.query.clone();
                    self.apply_search(query);
                    return Mode::Browsing;
                }
                _ => {}
            }
        }

        let len = self.catalog.listing().len();
        match code {
            KeyCode::Char('q') => {
                *exit = true;
            }
            KeyCode::Left => self.grid.move_horizontal(-1, len),
            KeyCode::Right => self.grid.move_horizontal(1, len),
            KeyCode::Up => self.grid.move_vertical(-1, len, GRID_COLUMNS),
            KeyCode::Down => self.grid.move_vertical(1, len, GRID_COLUMNS),
            KeyCode::Tab | KeyCode::Char(']') => self.cycle_year(1),
            KeyCode::BackTab | KeyCode::Char('[') => self.cycle_year(-1),
            KeyCode::Enter => return self.open_selected_course(),
            KeyCode::Char('a') | KeyCode::Char('+') => {
                self.clear_status();
                return Mode::Editing(CourseForm::from_draft(self.catalog.open_add()));
            }
            KeyCode::Char('e') | KeyCode::Char('E') => match self.selected_card() {
                Some(card) => return self.open_edit_form(card.id),
                None => self.set_status("No course selected to edit.", StatusKind::Error),
            },
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.clear_status();
                return Mode::NamingYear(YearPrompt::default());
            }
            KeyCode::Char('/') => self.open_search(),
            _ => {}
        }
        Mode::Browsing
    }

    fn handle_detail_key(&mut self, code: KeyCode, mut detail: DetailScreen) -> Mode {
        let Some(course) = self.catalog.detail() else {
            self.catalog.close();
            return Mode::Browsing;
        };

        match code {
            KeyCode::Esc => {
                self.catalog.close();
                self.close_search();
                return Mode::Browsing;
            }
            KeyCode::Up => detail.move_selection(-1, course.files.len()),
            KeyCode::Down => detail.move_selection(1, course.files.len()),
            KeyCode::Enter => match detail.current_file(&course.files) {
                Some(FileLine::Link(url)) => {
                    if let Err(err) = open_link(url) {
                        warn!(url = %url, error = %err, "failed to open link");
                        self.set_status(format!("Failed to open link: {err}"), StatusKind::Error);
                    } else {
                        self.set_status(format!("Opened {url}."), StatusKind::Info);
                    }
                }
                Some(FileLine::Text(label)) => {
                    self.set_status(format!("'{label}' is not a link."), StatusKind::Error);
                }
                None => self.set_status("This course has no files.", StatusKind::Error),
            },
            KeyCode::Char('e') | KeyCode::Char('E') => {
                return self.open_edit_form(course.id);
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('-') => {
                self.clear_status();
                return Mode::ConfirmDelete {
                    detail,
                    confirm: ConfirmCourseDelete {
                        id: course.id,
                        name: course.name,
                    },
                };
            }
            _ => {}
        }
        Mode::Viewing(detail)
    }

    fn handle_form_key(&mut self, code: KeyCode, mut form: CourseForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.catalog.close();
                self.close_search();
                self.set_status("Changes discarded.", StatusKind::Info);
                return Mode::Browsing;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Left if form.active == CourseField::Subject => form.cycle_subject(false),
            KeyCode::Right if form.active == CourseField::Subject => form.cycle_subject(true),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                if !form.newline() {
                    return self.save_form(form);
                }
            }
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::Editing(form)
    }

    fn handle_confirm_delete(
        &mut self,
        code: KeyCode,
        detail: DetailScreen,
        confirm: ConfirmCourseDelete,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Viewing(detail))
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self
                    .catalog
                    .delete(|course| course.id == confirm.id)
                    .context("failed to delete course")
                {
                    Ok(true) => {
                        self.set_status(format!("Deleted {}.", confirm.name), StatusKind::Info);
                        Ok(Mode::Browsing)
                    }
                    Ok(false) => {
                        self.catalog.close();
                        self.set_status("Course no longer exists.", StatusKind::Error);
                        Ok(Mode::Browsing)
                    }
                    Err(err) => {
                        self.set_status(surface_error(&err), StatusKind::Error);
                        Ok(Mode::ConfirmDelete { detail, confirm })
                    }
                }
            }
            _ => Ok(Mode::ConfirmDelete { detail, confirm }),
        }
    }

    fn handle_year_prompt(&mut self, code: KeyCode, mut prompt: YearPrompt) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Add year cancelled.", StatusKind::Info);
                return Mode::Browsing;
            }
            KeyCode::Backspace => {
                prompt.value.pop();
            }
            KeyCode::Enter => {
                if self.catalog.add_year(&prompt.value) {
                    self.grid.selected = 0;
                    self.set_status(
                        format!(
                            "Switched to {}. Add a course to keep this year.",
                            prompt.value.trim()
                        ),
                        StatusKind::Info,
                    );
                    return Mode::Browsing;
                }
                prompt.error = Some("Year label is required.".to_string());
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                prompt.value.push(ch);
                prompt.error = None;
            }
            _ => {}
        }
        Mode::NamingYear(prompt)
    }

    fn save_form(&mut self, mut form: CourseForm) -> Mode {
        let creating = self.catalog.interaction() == Interaction::Editing(None);
        let result = form.parse_inputs().and_then(|draft| {
            self.catalog
                .submit(draft)
                .context("failed to save course")
        });

        match result {
            Ok(Some(id)) => {
                self.focus_course(id);
                let message = if creating {
                    "Course added."
                } else {
                    "Course updated."
                };
                self.set_status(message, StatusKind::Info);
                Mode::Browsing
            }
            Ok(None) => {
                self.catalog.close();
                self.set_status("Course no longer exists.", StatusKind::Error);
                Mode::Browsing
            }
            Err(err) => {
                let message = surface_error(&err);
                form.error = Some(message.clone());
                self.set_status(message, StatusKind::Error);
                Mode::Editing(form)
            }
        }
    }

    fn open_selected_course(&mut self) -> Mode {
        let Some(card) = self.selected_card() else {
            self.set_status("No course selected.", StatusKind::Error);
            return Mode::Browsing;
        };
        if self.catalog.view(card.id) {
            self.clear_status();
            Mode::Viewing(DetailScreen::new(card.id))
        } else {
            Mode::Browsing
        }
    }

    fn open_edit_form(&mut self, id: i64) -> Mode {
        match self.catalog.open_edit(id) {
            Some(draft) => {
                self.clear_status();
                Mode::Editing(CourseForm::from_draft(draft))
            }
            None => {
                self.catalog.close();
                self.set_status("Course no longer exists.", StatusKind::Error);
                Mode::Browsing
            }
        }
    }

    fn open_search(&mut self) {
        if self.search.is_none() {
            self.search = Some(SearchBar::default());
        }
    }

    /// Hiding the bar also clears the query.
    fn close_search(&mut self) {
        if self.search.take().is_none() {
            return;
        }
        self.catalog.clear_search();
        self.grid.selected = 0;
    }

    fn apply_search(&mut self, query: String) {
        self.catalog.set_search(query);
        self.grid.selected = 0;
    }

    fn cycle_year(&mut self, offset: isize) {
        let tabs = self.catalog.year_tabs();
        if tabs.is_empty() {
            return;
        }
        let len = tabs.len() as isize;
        let current = tabs.iter().position(|tab| tab.active).unwrap_or(0) as isize;
        let next = (current + offset).rem_euclid(len) as usize;
        self.catalog.select_year(tabs[next].filter.clone());
        self.grid.selected = 0;
    }

    fn selected_card(&self) -> Option<CourseCard> {
        self.catalog
            .listing()
            .cards()
            .get(self.grid.selected)
            .cloned()
    }

    fn focus_course(&mut self, id: i64) {
        if let Some(index) = self
            .catalog
            .listing()
            .cards()
            .iter()
            .position(|card| card.id == id)
        {
            self.grid.selected = index;
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        let mut constraints = vec![Constraint::Length(TABS_HEIGHT)];
        if self.search.is_some() {
            constraints.push(Constraint::Length(SEARCH_HEIGHT));
        }
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(FOOTER_HEIGHT));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.draw_year_tabs(frame, chunks[0]);
        let mut next = 1;
        if let Some(search) = &self.search {
            self.draw_search_bar(frame, chunks[1], search);
            next = 2;
        }
        self.draw_course_grid(frame, chunks[next]);
        self.draw_footer(frame, chunks[next + 1]);

        match &self.mode {
            Mode::Browsing => {}
            Mode::Viewing(detail) => self.draw_detail(frame, area, detail),
            Mode::Editing(form) => {
                let title = match self.catalog.interaction() {
                    Interaction::Editing(Some(_)) => "Edit Course",
                    _ => "Add Course",
                };
                self.draw_course_form(frame, area, title, form);
            }
            Mode::ConfirmDelete { detail, confirm } => {
                self.draw_detail(frame, area, detail);
                self.draw_confirm_delete(frame, area, confirm);
            }
            Mode::NamingYear(prompt) => self.draw_year_prompt(frame, area, prompt),
        }
    }

    fn draw_year_tabs(&self, frame: &mut Frame, area: Rect) {
        let tabs = self.catalog.year_tabs();
        let selected = tabs.iter().position(|tab| tab.active).unwrap_or(0);
        let titles: Vec<Line> = tabs.iter().map(|tab| Line::from(tab.label.clone())).collect();
        let widget = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title("School Years"))
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|");
        frame.render_widget(widget, area);
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect, search: &SearchBar) {
        let block = Block::default().borders(Borders::ALL).title("Search");
        let paragraph = Paragraph::new(Span::raw(format!("Search: {}", search.query)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);

        if matches!(self.mode, Mode::Browsing) {
            let inner = block.inner(area);
            let cursor_x = inner.x + "Search: ".len() as u16 + search.query.chars().count() as u16;
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }

    fn draw_course_grid(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        let listing = self.catalog.listing();
        let cards = match &listing {
            CourseListing::Empty => {
                let text = if self.catalog.view_state().search_query().is_empty() {
                    "No courses for this year yet. Press 'a' to add one."
                } else {
                    "No courses match the current search."
                };
                let message = Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::NONE));
                frame.render_widget(message, area);
                return;
            }
            CourseListing::Cards(cards) => cards,
        };

        let total_rows = cards.len().div_ceil(GRID_COLUMNS);
        let capacity = ((area.height / CARD_HEIGHT) as usize).max(1);
        let start = first_visible_row(self.grid.selected / GRID_COLUMNS, capacity, total_rows);
        let visible_rows = capacity.min(total_rows.saturating_sub(start));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
            .split(area);

        for (offset, row_area) in rows.iter().enumerate() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(*row_area);
            for (column, cell) in columns.iter().enumerate() {
                let index = (start + offset) * GRID_COLUMNS + column;
                if let Some(card) = cards.get(index) {
                    self.draw_card(frame, *cell, card, index == self.grid.selected);
                }
            }
        }
    }

    fn draw_card(&self, frame: &mut Frame, area: Rect, card: &CourseCard, selected: bool) {
        let border_style = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                card.subject.clone(),
                Style::default().fg(Color::Magenta),
            ))
            .title_bottom(Line::from(card.year.clone()).right_aligned());

        let name = if selected {
            format!("▶ {}", card.name)
        } else {
            card.name.clone()
        };
        let lines = vec![
            Line::from(Span::styled(
                name,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.summary.clone(),
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Left);
        frame.render_widget(paragraph, area);
    }

    fn draw_detail(&self, frame: &mut Frame, area: Rect, detail: &DetailScreen) {
        let Some(course) = self.catalog.detail() else {
            return;
        };

        let popup_area = centered_rect(70, 70, area);
        frame.render_widget(Clear, popup_area);
        let block = Block::default()
            .title(course.name.clone())
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let label_style = Style::default().fg(Color::Gray);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Subject: ", label_style),
                Span::raw(course.subject.clone()),
            ]),
            Line::from(vec![
                Span::styled("Year: ", label_style),
                Span::raw(course.year.clone()),
            ]),
            Line::from(""),
        ];
        lines.extend(
            course
                .description
                .lines()
                .map(|text| Line::from(text.to_string())),
        );

        if !course.files.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Files and resources",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for (index, file) in course.files.iter().enumerate() {
                let focused = index == detail.selected_file;
                let marker = if focused { "▶ " } else { "  " };
                let mut style = match file {
                    FileLine::Link(_) => Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                    FileLine::Text(_) => Style::default(),
                };
                if focused {
                    style = style.add_modifier(Modifier::BOLD);
                }
                lines.push(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(file.text().to_string(), style),
                ]));
            }
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn draw_course_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &CourseForm) {
        let popup_area = centered_rect(70, 60, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = form.build_lines();
        lines.push(Line::from(""));
        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save (new line in Files) • Ctrl+S to save • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines);
        frame.render_widget(paragraph, inner);

        let (offset_x, offset_y) = form.cursor_offset();
        frame.set_cursor_position((inner.x + offset_x, inner.y + offset_y));
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmCourseDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Confirm Deletion")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Delete '{}'?", confirm.name)),
            Line::from("This cannot be undone."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_year_prompt(&self, frame: &mut Frame, area: Rect, prompt: &YearPrompt) {
        let popup_area = centered_rect(50, 25, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Add Year").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![prompt.build_line(), Line::from("")];
        if let Some(error) = &prompt.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        let cursor_x = inner.x + "Year: ".len() as u16 + prompt.value.chars().count() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph =
            Paragraph::new(vec![status_line, self.footer_instructions()]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        match (&self.mode, &self.search) {
            (Mode::Viewing(_), _) => key_hints(&[
                ("↑↓", "Select File"),
                ("Enter", "Open Link"),
                ("e", "Edit"),
                ("d", "Delete"),
                ("Esc", "Close"),
            ]),
            (Mode::Editing(_), _) => key_hints(&[
                ("Tab", "Next Field"),
                ("←→", "Subject"),
                ("Ctrl+S", "Save"),
                ("Esc", "Cancel"),
            ]),
            (Mode::ConfirmDelete { .. }, _) => key_hints(&[("y", "Delete"), ("n", "Keep")]),
            (Mode::NamingYear(_), _) => key_hints(&[("Enter", "Switch"), ("Esc", "Cancel")]),
            (Mode::Browsing, Some(_)) => key_hints(&[
                ("type", "Filter"),
                ("←↑↓→", "Move"),
                ("Enter", "Open"),
                ("Tab", "Year"),
                ("Esc", "Close Search"),
            ]),
            (Mode::Browsing, None) => key_hints(&[
                ("←↑↓→", "Move"),
                ("Enter", "Open"),
                ("Tab", "Year"),
                ("a", "Add Course"),
                ("e", "Edit"),
                ("y", "Add Year"),
                ("/", "Search"),
                ("q", "Quit"),
            ]),
        }
    }
}
