//! Command registry for dispatching keyboard input to commands.
//!
//! The [`CommandRegistry`] provides a centralized place for mapping key events
//! to commands based on the current application context. It handles:
//! - Global bindings (always active)
//! - Modal bindings (breed picker, jump prompt, match modal)
//! - Focus-specific bindings (results vs favorites panel)
//! - Screen-specific bindings (login/signup form vs search screen)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Registry for dispatching key events to commands.
///
/// Priority order:
/// 1. Global bindings (Ctrl+C)
/// 2. Modal bindings, then free text for modals that take it
/// 3. Focus bindings (search screen only)
/// 4. Screen bindings
/// 5. Character input on the login and signup forms
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    /// The keybinding configuration
    config: KeybindingConfig,
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = normalize(key);

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        if context.is_modal_active() {
            if let Some(cmd) = self.config.get_modal(context.modal, &combo) {
                return Some(cmd.clone());
            }
            // Modals swallow everything they do not bind
            return text_char(&combo)
                .filter(|_| context.modal_accepts_text())
                .map(Command::InsertChar);
        }

        if context.is_form_screen() {
            if let Some(cmd) = self.config.get_screen(context.screen, &combo) {
                return Some(cmd.clone());
            }
            return text_char(&combo).map(Command::InsertChar);
        }

        if let Some(cmd) = self.config.get_focus(context.focus, &combo) {
            return Some(cmd.clone());
        }
        self.config.get_screen(context.screen, &combo).cloned()
    }
}

/// Terminals disagree on whether uppercase letters carry SHIFT; always add it.
fn normalize(key: KeyEvent) -> KeyCombo {
    match key.code {
        KeyCode::Char(c) if c.is_uppercase() => {
            KeyCombo::new(key.code, key.modifiers | KeyModifiers::SHIFT)
        }
        _ => KeyCombo::new(key.code, key.modifiers),
    }
}

/// Printable character without Control or Alt.
fn text_char(combo: &KeyCombo) -> Option<char> {
    match combo.code {
        KeyCode::Char(c)
            if !combo
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}
