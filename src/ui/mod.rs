//! UI rendering for Fetch Dogs
//!
//! One screen is drawn per frame, chosen by [`App::screen`]:
//! - Loading: spinner while a stored session is checked
//! - Login / Signup: the credentials form
//! - Search: filters, result grid, favorites and pagination
//!
//! Overlays (breed picker, match modal) and the snackbar are drawn on top.
//!
//! ## Responsive Layout System
//!
//! Sizing decisions go through [`LayoutContext`], built from the terminal
//! dimensions. Key handling asks the same context how many cards fit per
//! row, so selection movement matches what is drawn.

mod breed_picker;
mod components;
mod helpers;
mod layout;
mod login;
mod match_modal;
mod pagination;
mod search;
mod snackbar;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_FAVORITE, COLOR_HEADER,
};

// Re-export layout system for external use
pub use layout::{breakpoints, LayoutContext};

pub use login::SESSION_EXPIRED_NOTICE;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use breed_picker::render_breed_picker;
use helpers::spinner_frame;
use login::render_login_screen;
use match_modal::render_match_modal;
use search::render_search_screen;
use snackbar::render_snackbar;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Loading => render_loading_screen(frame),
        Screen::Login | Screen::Signup => render_login_screen(frame, app),
        Screen::Search => {
            render_search_screen(frame, app);
            render_breed_picker(frame, app);
            render_match_modal(frame, app);
        }
    }

    render_snackbar(frame, app);
}

fn render_loading_screen(frame: &mut Frame) {
    let area = frame.area();
    let line = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    let text = format!("{} Checking your session...", spinner_frame());
    let para = Paragraph::new(Span::styled(text, Style::default().fg(COLOR_DIM)))
        .alignment(Alignment::Center);
    frame.render_widget(para, line);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Instant;

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::adapters::mock::{InMemoryStorage, MockHttpClient};
    use crate::api::FetchClient;
    use crate::matching::MatchResult;
    use crate::models::{AuthUser, Dog};
    use crate::route::Route;
    use crate::search::SearchPage;

    fn app_on(route: Route) -> App {
        let storage = Arc::new(InMemoryStorage::new());
        let client = Arc::new(FetchClient::new(
            "http://api.test",
            Arc::new(MockHttpClient::new()),
            storage.clone(),
        ));
        let mut app = App::new(client, storage, Some(Route::login()));
        app.start();
        if !route.is_public() {
            app.session.set_user(AuthUser::new("Ada", "ada@example.com"));
        }
        app.navigate(route);
        app
    }

    fn dog(id: &str, name: &str, breed: &str) -> Dog {
        Dog {
            id: id.to_string(),
            img: format!("https://img.test/{}.jpg", id),
            name: name.to_string(),
            age: 2,
            zip_code: "10001".to_string(),
            breed: breed.to_string(),
        }
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn with_results(app: &mut App, dogs: Vec<Dog>) {
        let generation = app.search.generation();
        let page = SearchPage {
            total: dogs.len(),
            result_ids: dogs.iter().map(|d| d.id.clone()).collect(),
            dogs,
        };
        app.search.complete(generation, Ok(page));
    }

    #[tokio::test]
    async fn test_login_screen_renders_form() {
        let app = app_on(Route::login());
        let text = draw(&app, 100, 40);
        assert!(text.contains("Welcome to Fetch Dogs"));
        assert!(text.contains("Name"));
        assert!(text.contains("Email"));
        assert!(text.contains("[ Login ]"));
        assert!(!text.contains(SESSION_EXPIRED_NOTICE));
    }

    #[tokio::test]
    async fn test_expired_login_shows_notice() {
        let app = app_on(Route::session_expired());
        let text = draw(&app, 100, 40);
        assert!(text.contains(SESSION_EXPIRED_NOTICE));
    }

    #[tokio::test]
    async fn test_signup_screen_title() {
        let app = app_on(Route::Signup);
        let text = draw(&app, 100, 40);
        assert!(text.contains("Sign Up for Fetch Dogs"));
        assert!(text.contains("[ Sign Up ]"));
    }

    #[tokio::test]
    async fn test_search_screen_shows_cards_and_favorites() {
        let mut app = app_on(Route::search(1));
        with_results(
            &mut app,
            vec![dog("a", "Rex", "Boxer"), dog("b", "Luna", "Pug")],
        );
        app.toggle_favorite("a");

        let text = draw(&app, 160, 40);
        assert!(text.contains("Fetch Dogs"));
        assert!(text.contains("Ada <ada@example.com>"));
        assert!(text.contains("Rex"));
        assert!(text.contains("Luna"));
        assert!(text.contains("Boxer"));
        assert!(text.contains("Favorites (1)"));
        assert!(text.contains("Breeds: All breeds"));
        assert!(text.contains("Sort: Breed ↑"));
    }

    #[tokio::test]
    async fn test_empty_results_message() {
        let mut app = app_on(Route::search(1));
        with_results(&mut app, vec![]);
        let text = draw(&app, 100, 30);
        assert!(text.contains("No dogs found."));
        assert!(text.contains("No favorites yet."));
    }

    #[tokio::test]
    async fn test_failed_search_shows_banner() {
        let mut app = app_on(Route::search(1));
        let generation = app.search.generation();
        app.search.complete(
            generation,
            Err(crate::error::ApiError::Status {
                status: 500,
                message: "boom".to_string(),
            }),
        );
        let text = draw(&app, 100, 30);
        assert!(text.contains("Failed to fetch dogs. Please try again."));
    }

    #[tokio::test]
    async fn test_breed_picker_overlay() {
        let mut app = app_on(Route::search(1));
        app.breeds = vec!["Akita".to_string(), "Beagle".to_string()];
        app.breed_picker.open(&[]);
        let text = draw(&app, 100, 30);
        assert!(text.contains("Filter by breed"));
        assert!(text.contains("[ ] Akita"));
        assert!(text.contains("[ ] Beagle"));
    }

    #[tokio::test]
    async fn test_match_modal_shows_dog() {
        let mut app = app_on(Route::search(1));
        app.match_flow.start(&["a".to_string()]);
        app.match_flow.finish(Ok(dog("a", "Rex", "Boxer")));
        assert!(matches!(app.match_flow.modal(), Some(MatchResult::Found(_))));
        let text = draw(&app, 100, 30);
        assert!(text.contains("It's a Match!"));
        assert!(text.contains("Rex"));
    }

    #[tokio::test]
    async fn test_snackbar_is_drawn() {
        let mut app = app_on(Route::search(1));
        app.snackbar.show("1 favorite added!", Instant::now());
        let text = draw(&app, 100, 30);
        assert!(text.contains("1 favorite added!"));
    }

    #[tokio::test]
    async fn test_tiny_terminal_does_not_panic() {
        let mut app = app_on(Route::search(1));
        with_results(&mut app, vec![dog("a", "Rex", "Boxer")]);
        app.breed_picker.open(&[]);
        draw(&app, 10, 4);
        let app = app_on(Route::login());
        draw(&app, 10, 4);
    }
}
