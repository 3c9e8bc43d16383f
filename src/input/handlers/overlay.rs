//! Overlay command handlers: breed picker, jump prompt and match modal.

use crate::app::App;
use crate::input::Command;

/// Handles commands while the breed picker is open.
///
/// Returns `true` if the command was handled.
pub fn handle_breed_picker_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::InsertChar(c) => {
            app.breed_picker.type_char(*c);
            true
        }

        Command::Backspace => {
            app.breed_picker.backspace();
            true
        }

        Command::PickerUp => {
            app.breed_picker.cursor_up();
            true
        }

        Command::PickerDown => {
            app.breed_picker.cursor_down(&app.breeds);
            true
        }

        Command::PickerToggle => {
            app.breed_picker.toggle_current(&app.breeds);
            true
        }

        Command::PickerClear => {
            app.breed_picker.clear_selection();
            true
        }

        Command::PickerApply => {
            let selection = app.breed_picker.take_selection();
            let ticket = app.search.set_breeds(selection);
            app.apply_search_ticket(ticket);
            true
        }

        Command::PickerClose => {
            app.breed_picker.close();
            true
        }

        _ => false,
    }
}

/// Handles commands while the jump-to-page prompt is open.
pub fn handle_jump_prompt_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::InsertChar(c) => {
            app.page_indicator.push_char(*c);
            true
        }

        Command::Backspace => {
            app.page_indicator.backspace();
            true
        }

        Command::JumpSubmit => {
            // Invalid or unchanged input just closes the prompt
            if let Some(page) = app.page_indicator.submit() {
                app.go_to_page(page);
            }
            true
        }

        Command::JumpCancel => {
            app.page_indicator.cancel();
            true
        }

        _ => false,
    }
}

/// Handles commands while the match modal is open.
pub fn handle_match_modal_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::CloseModal => {
            app.match_flow.close();
            true
        }
        _ => false,
    }
}
