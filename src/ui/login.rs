//! Login and signup screens.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, AuthMode, LoginField};
use crate::route::Route;

use super::components::{calculate_input_field_height, render_input_field, InputFieldConfig};
use super::helpers::{centered_rect, spinner_frame};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_INFO};

/// Shown above the form after the server rejected the session.
pub const SESSION_EXPIRED_NOTICE: &str = "Your session has expired. Please log in again.";

pub fn render_login_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);
    let mode = app.auth_mode();
    let form = &app.login_form;
    let expired = matches!(app.route, Route::Login { session_expired: true });

    let name = InputFieldConfig::new("Name", &form.name)
        .focused(form.field == LoginField::Name)
        .placeholder("Your name");
    let email = InputFieldConfig::new("Email", &form.email)
        .focused(form.field == LoginField::Email)
        .placeholder("you@example.com");

    // title, subtitle, gap, fields, error, gap, button, gap, two hint lines
    let mut content_height =
        3 + calculate_input_field_height(&name) + calculate_input_field_height(&email) + 6;
    if expired {
        content_height += 2;
    }

    let width = ctx.dialog_width(36, 56);
    let card = centered_rect(area, width, content_height + 2);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(block, card);

    let inner = Rect {
        x: card.x + 1,
        y: card.y + 1,
        width: card.width.saturating_sub(2),
        height: card.height.saturating_sub(2),
    };
    let mut y = inner.y;

    let line_at = |frame: &mut Frame, y: &mut u16, line: Line| {
        if *y < inner.y + inner.height {
            let para = Paragraph::new(line)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(para, Rect::new(inner.x, *y, inner.width, 1));
        }
        *y += 1;
    };

    line_at(
        frame,
        &mut y,
        Line::from(Span::styled(
            mode.title(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
    );
    line_at(
        frame,
        &mut y,
        Line::from(Span::styled(
            "Find your new best friend",
            Style::default().fg(COLOR_DIM),
        )),
    );
    y += 1;

    if expired {
        line_at(
            frame,
            &mut y,
            Line::from(Span::styled(SESSION_EXPIRED_NOTICE, Style::default().fg(COLOR_INFO))),
        );
        y += 1;
    }

    let field_area = |y: u16, height: u16| Rect::new(inner.x, y, inner.width, height);
    y += render_input_field(frame, field_area(y, 4), &name);
    y += render_input_field(frame, field_area(y, 4), &email);

    let error_line = match &form.error {
        Some(error) => Line::from(Span::styled(error.as_str(), Style::default().fg(COLOR_ERROR))),
        None => Line::from(""),
    };
    line_at(frame, &mut y, error_line);
    y += 1;

    let button = if form.submitting {
        Line::from(vec![
            Span::styled(spinner_frame(), Style::default().fg(COLOR_ACCENT)),
            Span::raw(" "),
            Span::styled(mode.busy_label(), Style::default().fg(COLOR_DIM)),
        ])
    } else {
        Line::from(Span::styled(
            format!("[ {} ]", mode.submit_label()),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
    };
    line_at(frame, &mut y, button);
    y += 1;

    let switch_hint = match mode {
        AuthMode::Login => "Don't have an account? [F2] Sign up",
        AuthMode::Signup => "Already have an account? [F2] Log in",
    };
    line_at(
        frame,
        &mut y,
        Line::from(Span::styled(
            "[Tab] Next field  [Enter] Submit",
            Style::default().fg(COLOR_DIM),
        )),
    );
    line_at(
        frame,
        &mut y,
        Line::from(Span::styled(switch_hint, Style::default().fg(COLOR_DIM))),
    );
}
