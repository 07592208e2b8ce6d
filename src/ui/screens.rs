use crate::render::FileLine;

/// Cursor over the course card grid. The grid itself is recomputed every
/// frame, so only the selected index lives here.
#[derive(Default)]
pub(crate) struct CourseGrid {
    pub(crate) selected: usize,
}

impl CourseGrid {
    pub(crate) fn move_horizontal(&mut self, offset: isize, len: usize) {
        self.move_by(offset, len);
    }

    pub(crate) fn move_vertical(&mut self, offset: isize, len: usize, columns: usize) {
        if len == 0 {
            return;
        }
        let target = self.selected as isize + offset * columns as isize;
        if target >= 0 && (target as usize) < len {
            self.selected = target as usize;
        }
    }

    /// Keep the cursor on a card after the listing shrinks.
    pub(crate) fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn move_by(&mut self, offset: isize, len: usize) {
        if len == 0 {
            return;
        }
        let max = len as isize - 1;
        self.selected = (self.selected as isize + offset).clamp(0, max) as usize;
    }
}

/// State of the detail view: which course and which file line is focused.
pub(crate) struct DetailScreen {
    pub(crate) course_id: i64,
    pub(crate) selected_file: usize,
}

impl DetailScreen {
    pub(crate) fn new(course_id: i64) -> Self {
        Self {
            course_id,
            selected_file: 0,
        }
    }

    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        if len == 0 {
            self.selected_file = 0;
            return;
        }
        let max = len as isize - 1;
        self.selected_file = (self.selected_file as isize + offset).clamp(0, max) as usize;
    }

    pub(crate) fn current_file<'a>(&self, files: &'a [FileLine]) -> Option<&'a FileLine> {
        files.get(self.selected_file)
    }
}

/// Inline search bar over the course grid.
#[derive(Default)]
pub(crate) struct SearchBar {
    pub(crate) query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_moves_stay_in_bounds() {
        let mut grid = CourseGrid::default();
        grid.move_horizontal(-1, 5);
        assert_eq!(grid.selected, 0);
        grid.move_horizontal(10, 5);
        assert_eq!(grid.selected, 4);
        grid.move_vertical(-1, 5, 3);
        assert_eq!(grid.selected, 1);
        grid.move_vertical(1, 5, 3);
        assert_eq!(grid.selected, 4);
        grid.move_vertical(1, 5, 3);
        assert_eq!(grid.selected, 4);
    }

    #[test]
    fn grid_clamps_after_shrinking() {
        let mut grid = CourseGrid { selected: 7 };
        grid.clamp(3);
        assert_eq!(grid.selected, 2);
        grid.clamp(0);
        assert_eq!(grid.selected, 0);
    }

    #[test]
    fn detail_selects_file_lines() {
        let files = vec![
            FileLine::Link("https://a.com/x.pdf".to_string()),
            FileLine::Text("local-notes.txt".to_string()),
        ];
        let mut detail = DetailScreen::new(1);
        detail.move_selection(5, files.len());
        assert_eq!(detail.current_file(&files).map(FileLine::text), Some("local-notes.txt"));
        detail.move_selection(-5, files.len());
        assert!(detail.current_file(&files).unwrap().is_link());
    }
}
