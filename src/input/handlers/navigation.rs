//! Search screen command handlers.
//!
//! Handles selection movement, favorites, filters, sorting and paging.

use crate::app::{App, Focus};
use crate::input::Command;
use crate::ui::LayoutContext;

/// Handles commands on the search screen.
///
/// Returns `true` if the command was handled.
pub fn handle_search_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::CycleFocus => {
            app.focus = app.focus.next();
            app.clamp_selection();
            true
        }

        Command::MoveUp | Command::MoveDown | Command::MoveLeft | Command::MoveRight => {
            match app.focus {
                Focus::Results => move_in_grid(app, cmd),
                Focus::Favorites => move_in_favorites(app, cmd),
            }
            true
        }

        Command::ToggleFavorite => {
            if let Some(id) = app.selected_dog().map(|dog| dog.id.clone()) {
                app.toggle_favorite(&id);
            }
            true
        }

        Command::RemoveFavorite => {
            if let Some(id) = app.selected_favorite_dog().map(|dog| dog.id.clone()) {
                app.remove_favorite(&id);
            }
            true
        }

        Command::OpenBreedPicker => {
            let current = app.search.query().breeds().to_vec();
            app.breed_picker.open(&current);
            app.load_breeds();
            true
        }

        Command::CycleSortField => {
            let field = app.search.query().sort().field.next();
            let ticket = app.search.set_sort_field(field);
            app.apply_search_ticket(ticket);
            true
        }

        Command::ToggleSortDirection => {
            let direction = app.search.query().sort().direction.toggled();
            let ticket = app.search.set_sort_direction(direction);
            app.apply_search_ticket(ticket);
            true
        }

        Command::NextPage | Command::PreviousPage | Command::FirstPage | Command::LastPage => {
            let indicator = &app.page_indicator;
            let target = match cmd {
                Command::NextPage => indicator.step(1),
                Command::PreviousPage => indicator.step(-1),
                Command::FirstPage => indicator.first(),
                _ => indicator.last(),
            };
            if let Some(page) = target {
                app.go_to_page(page);
            }
            true
        }

        Command::OpenJumpPrompt => {
            app.page_indicator.open_jump();
            true
        }

        Command::FindMatch => {
            app.find_match();
            true
        }

        Command::Logout => {
            app.logout();
            true
        }

        Command::Quit => {
            app.quit();
            true
        }

        _ => false,
    }
}

fn move_in_grid(app: &mut App, cmd: &Command) {
    let len = app.search.dogs().len();
    if len == 0 {
        return;
    }
    let columns = LayoutContext::new(app.terminal_width, app.terminal_height).grid_columns();
    let current = app.selected_dog;
    app.selected_dog = match cmd {
        Command::MoveLeft => current.saturating_sub(1),
        Command::MoveRight => (current + 1).min(len - 1),
        Command::MoveUp if current >= columns => current - columns,
        Command::MoveDown if current + columns < len => current + columns,
        _ => current,
    };
}

/// Up/down walk the visible page; left/right turn favorites pages.
fn move_in_favorites(app: &mut App, cmd: &Command) {
    let len = app.visible_favorites().len();
    match cmd {
        Command::MoveUp => app.selected_favorite = app.selected_favorite.saturating_sub(1),
        Command::MoveDown if app.selected_favorite + 1 < len => app.selected_favorite += 1,
        Command::MoveLeft => {
            if let Some(page) = app.favorites_indicator.step(-1) {
                app.go_to_favorites_page(page);
            }
        }
        Command::MoveRight => {
            if let Some(page) = app.favorites_indicator.step(1) {
                app.go_to_favorites_page(page);
            }
        }
        _ => {}
    }
}
