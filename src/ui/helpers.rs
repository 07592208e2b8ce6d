use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

/// Footer line of `[key] action` pairs.
pub(crate) fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (index, (key, action)) in hints.iter().enumerate() {
        spans.push(Span::styled(format!("[{key}]"), key_style));
        if index + 1 == hints.len() {
            spans.push(Span::raw(format!(" {action}")));
        } else {
            spans.push(Span::raw(format!(" {action}   ")));
        }
    }
    Line::from(spans)
}

/// First row to draw so that `selected_row` stays on screen when only
/// `capacity` rows fit.
pub(crate) fn first_visible_row(selected_row: usize, capacity: usize, total_rows: usize) -> usize {
    let capacity = capacity.max(1);
    let mut start = if selected_row >= capacity {
        selected_row + 1 - capacity
    } else {
        0
    };
    if start + capacity > total_rows {
        start = total_rows.saturating_sub(capacity);
    }
    start
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Context};

    use super::*;

    #[test]
    fn surface_error_returns_root_cause() {
        let err = Err::<(), _>(anyhow!("disk full"))
            .context("failed to save course")
            .unwrap_err();
        assert_eq!(surface_error(&err), "disk full");
    }

    #[test]
    fn first_visible_row_follows_selection() {
        assert_eq!(first_visible_row(0, 3, 10), 0);
        assert_eq!(first_visible_row(4, 3, 10), 2);
        assert_eq!(first_visible_row(9, 3, 10), 7);
        assert_eq!(first_visible_row(1, 5, 2), 0);
    }

    #[test]
    fn key_hints_render_every_pair() {
        let line = key_hints(&[("a", "Add"), ("q", "Quit")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[a] Add   [q] Quit");
    }
}
