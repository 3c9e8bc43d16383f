//! Credentials form command handlers.

use crate::app::{App, AuthMode};
use crate::input::Command;
use crate::route::Route;

/// Handles commands on the login and signup screens.
///
/// Returns `true` if the command was handled.
pub fn handle_form_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::InsertChar(c) => {
            app.login_form.insert_char(*c);
            true
        }

        Command::Backspace => {
            app.login_form.backspace();
            true
        }

        Command::NextField => {
            app.login_form.next_field();
            true
        }

        Command::SubmitForm => {
            app.submit_login();
            true
        }

        Command::ToggleAuthMode => {
            if app.login_form.submitting {
                return true;
            }
            let target = match app.auth_mode() {
                AuthMode::Login => Route::Signup,
                AuthMode::Signup => Route::login(),
            };
            app.navigate(target);
            true
        }

        _ => false,
    }
}
