//! Breed picker overlay rendering
//!
//! Filterable, multi-select list of every breed. Shows a window of rows
//! that follows the cursor.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::helpers::{spinner_frame, truncate};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_INPUT_BG};

/// Maximum visible rows in the breed list
const MAX_VISIBLE_ROWS: usize = 10;

/// First visible row so that `cursor` stays on screen.
fn scroll_offset(cursor: usize, rows: usize) -> usize {
    (cursor + 1).saturating_sub(rows)
}

pub fn render_breed_picker(frame: &mut Frame, app: &App) {
    let picker = &app.breed_picker;
    if !picker.visible {
        return;
    }

    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    // filter line, gap, list, gap, selection count, hints
    let max_rows = (area.height.saturating_sub(8) as usize).clamp(1, MAX_VISIBLE_ROWS);
    let content_height = max_rows as u16 + 5;
    let config = DialogFrameConfig::new("Filter by breed", content_height).max_width(56);
    let inner = render_dialog_frame(frame, area, &ctx, &config);
    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    let width = inner.width as usize;

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                format!("{}\u{2588}", picker.filter),
                Style::default().fg(COLOR_HEADER).bg(COLOR_INPUT_BG),
            ),
        ]),
        Line::default(),
    ];

    let filtered = picker.filtered(&app.breeds);
    if app.breeds.is_empty() {
        let text = if app.breeds_loading {
            format!("{} Loading breeds...", spinner_frame())
        } else {
            "No breeds available".to_string()
        };
        lines.push(Line::from(Span::styled(text, Style::default().fg(COLOR_DIM))));
        lines.extend(std::iter::repeat_n(Line::default(), max_rows - 1));
    } else if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No breeds matching \"{}\"", picker.filter),
            Style::default().fg(COLOR_DIM),
        )));
        lines.extend(std::iter::repeat_n(Line::default(), max_rows - 1));
    } else {
        let offset = scroll_offset(picker.cursor, max_rows);
        for (idx, breed) in filtered.iter().enumerate().skip(offset).take(max_rows) {
            let is_cursor = idx == picker.cursor;
            let checkbox = if picker.is_selected(breed) { "[x] " } else { "[ ] " };
            let marker = if is_cursor { "▸ " } else { "  " };
            let name_style = if is_cursor {
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_HEADER)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
                Span::styled(checkbox, Style::default().fg(COLOR_ACCENT)),
                Span::styled(truncate(breed, width.saturating_sub(6)), name_style),
            ]));
        }
        let shown = filtered.len().saturating_sub(offset).min(max_rows);
        lines.extend(std::iter::repeat_n(Line::default(), max_rows - shown));
    }

    lines.push(Line::default());
    let selected = match picker.selected.len() {
        0 => "All breeds".to_string(),
        n => format!("{} selected", n),
    };
    lines.push(Line::from(Span::styled(selected, Style::default().fg(COLOR_DIM))));
    lines.push(Line::from(Span::styled(
        truncate(
            "[Space] Toggle  [Enter] Apply  [Ctrl+U] Clear  [Esc] Cancel",
            width,
        ),
        Style::default().fg(COLOR_DIM),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_follows_cursor() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(25, 10), 16);
    }
}
