//! Input handling module for keyboard and command processing.
//!
//! All input goes through the same two steps:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Dispatched to appropriate handlers in the [`handlers`] module
//!
//! # Architecture
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> Handler -> App mutation
//! ```
//!
//! # Example
//!
//! ```ignore
//! use fetch_dogs::input::CommandRegistry;
//!
//! let registry = CommandRegistry::new();
//! let context = app.build_input_context();
//!
//! if let Some(cmd) = registry.dispatch(key_event, &context) {
//!     app.execute_command(cmd);
//! }
//! ```

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crate::app::{App, Screen};

impl App {
    /// Builds an InputContext from the current application state.
    pub fn build_input_context(&self) -> InputContext {
        let screen = self.screen();
        let modal = if screen != Screen::Search {
            ModalType::None
        } else if self.breed_picker.visible {
            ModalType::BreedPicker
        } else if self.match_flow.is_open() {
            ModalType::MatchModal
        } else if self.page_indicator.jump().is_some() {
            ModalType::JumpPrompt
        } else {
            ModalType::None
        };
        InputContext::new(screen, self.focus, modal)
    }

    /// Execute a command against the current state.
    ///
    /// Returns `true` if some handler took the command.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        tracing::debug!("execute_command: {:?}", cmd);

        if cmd.marks_dirty() {
            self.mark_dirty();
        }
        if cmd == Command::Quit {
            self.quit();
            return true;
        }

        let context = self.build_input_context();
        match context.modal {
            ModalType::BreedPicker => return handlers::handle_breed_picker_command(self, &cmd),
            ModalType::JumpPrompt => return handlers::handle_jump_prompt_command(self, &cmd),
            ModalType::MatchModal => return handlers::handle_match_modal_command(self, &cmd),
            ModalType::None => {}
        }

        match context.screen {
            Screen::Login | Screen::Signup => handlers::handle_form_command(self, &cmd),
            Screen::Search => handlers::handle_search_command(self, &cmd),
            Screen::Loading => false,
        }
    }

    /// Route bracketed-paste text to whichever text input is active.
    pub fn handle_paste(&mut self, text: &str) {
        let context = self.build_input_context();
        match (context.screen, context.modal) {
            (_, ModalType::BreedPicker) => text.chars().for_each(|c| self.breed_picker.type_char(c)),
            (_, ModalType::JumpPrompt) => text.chars().for_each(|c| self.page_indicator.push_char(c)),
            (Screen::Login | Screen::Signup, _) => self.login_form.insert_str(text),
            _ => return,
        }
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::adapters::mock::{InMemoryStorage, MockHttpClient};
    use crate::api::FetchClient;
    use crate::models::AuthUser;
    use crate::route::Route;

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

    fn press(app: &mut App, code: KeyCode) -> bool {
        let registry = CommandRegistry::new();
        let context = app.build_input_context();
        match registry.dispatch(KeyEvent::new(code, KeyModifiers::NONE), &context) {
            Some(cmd) => app.execute_command(cmd),
            None => false,
        }
    }

    #[tokio::test]
    async fn test_typing_fills_login_form() {
        let mut app = app_on(Route::login());
        for c in "Ada".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        app.handle_paste("ada@example.com");
        assert_eq!(app.login_form.name, "Ada");
        assert_eq!(app.login_form.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_f2_switches_to_signup() {
        let mut app = app_on(Route::login());
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.route, Route::Signup);
        assert_eq!(app.screen(), Screen::Signup);
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.route, Route::login());
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_submitted() {
        let mut app = app_on(Route::login());
        press(&mut app, KeyCode::Enter);
        assert!(!app.login_form.submitting);
        assert_eq!(app.login_form.error.as_deref(), Some("Please enter your name."));
    }

    #[tokio::test]
    async fn test_breed_picker_is_modal() {
        let mut app = app_on(Route::search(1));
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.build_input_context().modal, ModalType::BreedPicker);

        // 'q' filters instead of quitting
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.breed_picker.filter, "q");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.build_input_context().modal, ModalType::None);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_sort_keys_reset_page() {
        let mut app = app_on(Route::search(3));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.search.query().sort().field.as_str(), "name");
        assert_eq!(app.search.query().page(), 1);
        assert_eq!(app.route, Route::search(1));

        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.search.query().sort().direction.as_str(), "desc");
    }

    #[tokio::test]
    async fn test_tab_cycles_focus() {
        let mut app = app_on(Route::search(1));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, crate::app::Focus::Favorites);
    }
}
