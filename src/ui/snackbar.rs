//! Snackbar rendering: a one-line notice near the bottom of the screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Span,
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

use super::helpers::truncate;
use super::theme::{COLOR_HEADER, COLOR_SNACKBAR_BG};

pub fn render_snackbar(frame: &mut Frame, app: &App) {
    let Some(message) = app.snackbar.message() else {
        return;
    };

    let area = frame.area();
    if area.height < 3 {
        return;
    }
    let text = truncate(message, area.width.saturating_sub(4) as usize);
    let width = (text.width() as u16 + 4).min(area.width);
    let snackbar = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height - 3,
        width,
        height: 1,
    };

    frame.render_widget(Clear, snackbar);
    let para = Paragraph::new(Span::styled(text, Style::default().fg(COLOR_HEADER)))
        .alignment(Alignment::Center)
        .style(Style::default().bg(COLOR_SNACKBAR_BG));
    frame.render_widget(para, snackbar);
}
