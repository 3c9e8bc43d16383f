//! Match result modal rendering.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::matching::MatchResult;

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::helpers::truncate;
use super::layout::LayoutContext;
use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_FAVORITE, COLOR_HEADER};

pub fn render_match_modal(frame: &mut Frame, app: &App) {
    let Some(result) = app.match_flow.modal() else {
        return;
    };

    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let (title, mut lines) = match result {
        MatchResult::Found(dog) => (
            "It's a Match!",
            vec![
                Line::from(vec![
                    Span::styled("♥ ", Style::default().fg(COLOR_FAVORITE)),
                    Span::styled(
                        dog.name.clone(),
                        Style::default()
                            .fg(COLOR_HEADER)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::default(),
                Line::from(Span::styled(dog.breed.clone(), Style::default().fg(COLOR_HEADER))),
                Line::from(Span::styled(dog.age_label(), Style::default().fg(COLOR_DIM))),
                Line::from(Span::styled(
                    format!("Zip code {}", dog.zip_code),
                    Style::default().fg(COLOR_DIM),
                )),
                Line::from(Span::styled(
                    truncate(&dog.img, ctx.dialog_width(36, 60).saturating_sub(4) as usize),
                    Style::default().fg(COLOR_DIM),
                )),
            ],
        ),
        MatchResult::Failed(message) => (
            "Match",
            vec![Line::from(Span::styled(
                message.clone(),
                Style::default().fg(COLOR_ERROR),
            ))],
        ),
    };
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "[Enter] Close",
        Style::default().fg(COLOR_DIM),
    )));

    let config = DialogFrameConfig::new(title, lines.len() as u16).min_width(36);
    let inner = render_dialog_frame(frame, area, &ctx, &config);
    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}
