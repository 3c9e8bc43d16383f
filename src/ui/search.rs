//! Search screen rendering
//!
//! Layout, top to bottom:
//! - Header with the app name and the signed-in user
//! - Filter bar: breed filter and sort order
//! - Result grid of dog cards, with favorites beside it (or below it on
//!   narrow terminals)
//! - Page indicator
//! - Keybind hints

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::{Dog, SortDirection};
use crate::search::SearchStatus;

use super::helpers::{format_breeds, spinner_frame, truncate};
use super::layout::{LayoutContext, CARD_HEIGHT, CARD_WIDTH, STACKED_FAVORITES_HEIGHT};
use super::pagination::page_indicator_line;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_FAVORITE, COLOR_FOCUS, COLOR_HEADER,
};

pub fn render_search_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // filter bar
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(1), // pagination
            Constraint::Length(1), // hints
        ])
        .split(area);

    render_header(frame, rows[0], app);
    render_filter_bar(frame, rows[1], app);

    let (results_area, favorites_area) = split_main(rows[2], &ctx);
    render_results(frame, results_area, app, &ctx);
    render_favorites(frame, favorites_area, app);

    let pagination = Paragraph::new(page_indicator_line(&app.page_indicator))
        .alignment(Alignment::Center);
    frame.render_widget(pagination, rows[3]);

    render_hints(frame, rows[4], app);
}

/// Results and favorites areas for the main region.
fn split_main(area: Rect, ctx: &LayoutContext) -> (Rect, Rect) {
    if ctx.should_stack_panels() {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(CARD_HEIGHT),
                Constraint::Length(STACKED_FAVORITES_HEIGHT),
            ])
            .split(area);
        (parts[0], parts[1])
    } else {
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(ctx.results_width()),
                Constraint::Length(ctx.favorites_panel_width()),
            ])
            .split(area);
        (parts[0], parts[1])
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Span::styled(
        " Fetch Dogs",
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(Line::from(title)), area);

    if let Some(user) = app.session.user() {
        let text = if app.logging_out {
            format!("{} Logging out... ", spinner_frame())
        } else {
            format!("{} <{}> ", user.name, user.email)
        };
        let user_line = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(COLOR_DIM),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(user_line, area);
    }
}

fn render_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let query = app.search.query();
    let sort = query.sort();
    let arrow = match sort.direction {
        SortDirection::Asc => "↑",
        SortDirection::Desc => "↓",
    };

    let mut spans = vec![
        Span::styled(" Breeds: ", Style::default().fg(COLOR_DIM)),
        Span::styled(format_breeds(query.breeds()), Style::default().fg(COLOR_HEADER)),
        Span::styled("   Sort: ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            format!("{} {}", sort.field.label(), arrow),
            Style::default().fg(COLOR_HEADER),
        ),
    ];

    if let Some(total) = app.search.total() {
        spans.push(Span::styled(
            format!("   {} dogs", total),
            Style::default().fg(COLOR_DIM),
        ));
    }
    if app.search.is_loading() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(spinner_frame(), Style::default().fg(COLOR_ACCENT)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { COLOR_FOCUS } else { COLOR_BORDER };
    Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

fn render_results(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let block = panel_block(" Dogs ".to_string(), app.focus == Focus::Results);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut grid_area = inner;
    if let SearchStatus::Failed(message) = app.search.status() {
        let banner = Paragraph::new(Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(message.as_str(), Style::default().fg(COLOR_ERROR)),
        ]));
        frame.render_widget(banner, Rect { height: inner.height.min(1), ..inner });
        grid_area.y += 1;
        grid_area.height = grid_area.height.saturating_sub(1);
    }

    let dogs = app.search.dogs();
    if dogs.is_empty() {
        let message = match app.search.status() {
            SearchStatus::Idle | SearchStatus::Loading => {
                Some(format!("{} Loading dogs...", spinner_frame()))
            }
            SearchStatus::Ready => Some("No dogs found.".to_string()),
            SearchStatus::Failed(_) => None,
        };
        if let Some(message) = message {
            let para = Paragraph::new(Span::styled(message, Style::default().fg(COLOR_DIM)))
                .alignment(Alignment::Center);
            frame.render_widget(para, Rect { height: grid_area.height.min(1), ..grid_area });
        }
        return;
    }

    let columns = ctx.grid_columns();
    let visible_rows = (grid_area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = app.selected_dog / columns;
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    for (index, dog) in dogs.iter().enumerate() {
        let row = index / columns;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let col = (index % columns) as u16;
        let card = Rect {
            x: grid_area.x + col * CARD_WIDTH,
            y: grid_area.y + (row - first_row) as u16 * CARD_HEIGHT,
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
        }
        .intersection(grid_area);
        if card.is_empty() {
            continue;
        }
        let selected = app.focus == Focus::Results && index == app.selected_dog;
        render_dog_card(frame, card, dog, app.favorites.contains(&dog.id), selected);
    }
}

fn render_dog_card(frame: &mut Frame, area: Rect, dog: &Dog, favorite: bool, selected: bool) {
    let border = if selected { COLOR_FOCUS } else { COLOR_BORDER };
    let name_width = (CARD_WIDTH as usize).saturating_sub(6);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", truncate(&dog.name, name_width)),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));

    let text_width = (CARD_WIDTH as usize).saturating_sub(3);
    let heart = if favorite {
        Span::styled("♥ Favorite", Style::default().fg(COLOR_FAVORITE))
    } else {
        Span::styled("♡", Style::default().fg(COLOR_DIM))
    };
    let lines = vec![
        Line::from(Span::styled(
            truncate(&dog.breed, text_width),
            Style::default().fg(COLOR_HEADER),
        )),
        Line::from(Span::styled(dog.age_label(), Style::default().fg(COLOR_DIM))),
        Line::from(Span::styled(
            format!("Zip {}", dog.zip_code),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(heart),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_favorites(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(" Favorites ({}) ", app.favorites.len());
    let block = panel_block(title, app.focus == Focus::Favorites);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    let width = inner.width as usize;

    if app.favorites.is_empty() {
        let para = Paragraph::new(Span::styled(
            "No favorites yet. Press [f] on a dog to add it.",
            Style::default().fg(COLOR_DIM),
        ))
        .wrap(Wrap { trim: true });
        frame.render_widget(para, inner);
        return;
    }

    let visible = app.visible_favorites();
    if visible.is_empty() && app.favorite_dogs.is_loading() {
        lines.push(Line::from(Span::styled(
            format!("{} Loading favorites...", spinner_frame()),
            Style::default().fg(COLOR_DIM),
        )));
    }

    for (index, dog) in visible.iter().enumerate() {
        let selected = app.focus == Focus::Favorites && index == app.selected_favorite;
        let marker = if selected { "▸ " } else { "  " };
        let name_style = if selected {
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_HEADER)
        };
        let detail = format!(" · {}", dog.breed);
        let name = truncate(&dog.name, width.saturating_sub(4));
        let detail = truncate(&detail, width.saturating_sub(4 + name.chars().count()));
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
            Span::styled("♥ ", Style::default().fg(COLOR_FAVORITE)),
            Span::styled(name, name_style),
            Span::styled(detail, Style::default().fg(COLOR_DIM)),
        ]));
    }

    lines.push(Line::default());
    let count = app.favorites_page_count();
    if count > 1 {
        lines.push(Line::from(Span::styled(
            format!("‹ Page {} of {} ›", app.favorites_page(), count),
            Style::default().fg(COLOR_DIM),
        )));
    }
    let match_line = if app.match_flow.is_in_flight() {
        Span::styled(
            format!("{} Finding your match...", spinner_frame()),
            Style::default().fg(COLOR_ACCENT),
        )
    } else {
        Span::styled("[m] Find my match", Style::default().fg(COLOR_ACCENT))
    };
    lines.push(Line::from(match_line));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.focus {
        Focus::Results => {
            " [f] Favorite  [b] Breeds  [s] Sort  [o] Order  [n/p] Page  [g] Go to  [Tab] Favorites  [m] Match  [L] Logout  [q] Quit"
        }
        Focus::Favorites => {
            " [d] Remove  [←/→] Page  [Tab] Results  [m] Match  [L] Logout  [q] Quit"
        }
    };
    let text = truncate(hints, area.width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(COLOR_DIM))),
        area,
    );
}
