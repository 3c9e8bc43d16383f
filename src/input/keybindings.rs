//! Default keybindings for the application.
//!
//! This module defines the default key bindings that map key combinations
//! to commands.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;
use crate::app::{Focus, Screen};

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (always active)
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Keybindings per screen
    pub screen: HashMap<Screen, HashMap<KeyCombo, Command>>,
    /// Keybindings per focused panel of the search screen
    pub focus: HashMap<Focus, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            screen: HashMap::new(),
            focus: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_screen_bindings();
        config.setup_focus_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
    }

    fn setup_modal_bindings(&mut self) {
        let picker = self.modal.entry(ModalType::BreedPicker).or_default();
        picker.insert(KeyCombo::plain(KeyCode::Up), Command::PickerUp);
        picker.insert(KeyCombo::plain(KeyCode::Down), Command::PickerDown);
        picker.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::PickerToggle);
        picker.insert(KeyCombo::ctrl(KeyCode::Char('u')), Command::PickerClear);
        picker.insert(KeyCombo::plain(KeyCode::Enter), Command::PickerApply);
        picker.insert(KeyCombo::plain(KeyCode::Esc), Command::PickerClose);
        picker.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);

        let jump = self.modal.entry(ModalType::JumpPrompt).or_default();
        jump.insert(KeyCombo::plain(KeyCode::Enter), Command::JumpSubmit);
        jump.insert(KeyCombo::plain(KeyCode::Esc), Command::JumpCancel);
        jump.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);

        let modal = self.modal.entry(ModalType::MatchModal).or_default();
        modal.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseModal);
        modal.insert(KeyCombo::plain(KeyCode::Enter), Command::CloseModal);
    }

    fn setup_screen_bindings(&mut self) {
        for screen in [Screen::Login, Screen::Signup] {
            let form = self.screen.entry(screen).or_default();
            form.insert(KeyCombo::plain(KeyCode::Tab), Command::NextField);
            form.insert(KeyCombo::shift(KeyCode::BackTab), Command::NextField);
            form.insert(KeyCombo::plain(KeyCode::Up), Command::NextField);
            form.insert(KeyCombo::plain(KeyCode::Down), Command::NextField);
            form.insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitForm);
            form.insert(KeyCombo::plain(KeyCode::F(2)), Command::ToggleAuthMode);
            form.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        }

        let loading = self.screen.entry(Screen::Loading).or_default();
        loading.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);

        let search = self.screen.entry(Screen::Search).or_default();
        search.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        search.insert(KeyCombo::plain(KeyCode::Tab), Command::CycleFocus);
        search.insert(KeyCombo::shift(KeyCode::BackTab), Command::CycleFocus);
        search.insert(KeyCombo::plain(KeyCode::Char('b')), Command::OpenBreedPicker);
        search.insert(KeyCombo::plain(KeyCode::Char('s')), Command::CycleSortField);
        search.insert(KeyCombo::plain(KeyCode::Char('o')), Command::ToggleSortDirection);
        search.insert(KeyCombo::plain(KeyCode::Char('n')), Command::NextPage);
        search.insert(KeyCombo::plain(KeyCode::PageDown), Command::NextPage);
        search.insert(KeyCombo::plain(KeyCode::Char('p')), Command::PreviousPage);
        search.insert(KeyCombo::plain(KeyCode::PageUp), Command::PreviousPage);
        search.insert(KeyCombo::plain(KeyCode::Char('[')), Command::FirstPage);
        search.insert(KeyCombo::plain(KeyCode::Home), Command::FirstPage);
        search.insert(KeyCombo::plain(KeyCode::Char(']')), Command::LastPage);
        search.insert(KeyCombo::plain(KeyCode::End), Command::LastPage);
        search.insert(KeyCombo::plain(KeyCode::Char('g')), Command::OpenJumpPrompt);
        search.insert(KeyCombo::plain(KeyCode::Char('m')), Command::FindMatch);
        search.insert(KeyCombo::shift(KeyCode::Char('L')), Command::Logout);
        search.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        search.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        search.insert(KeyCombo::plain(KeyCode::Left), Command::MoveLeft);
        search.insert(KeyCombo::plain(KeyCode::Right), Command::MoveRight);
    }

    fn setup_focus_bindings(&mut self) {
        let results = self.focus.entry(Focus::Results).or_default();
        results.insert(KeyCombo::plain(KeyCode::Enter), Command::ToggleFavorite);
        results.insert(KeyCombo::plain(KeyCode::Char('f')), Command::ToggleFavorite);

        let favorites = self.focus.entry(Focus::Favorites).or_default();
        favorites.insert(KeyCombo::plain(KeyCode::Enter), Command::RemoveFavorite);
        favorites.insert(KeyCombo::plain(KeyCode::Char('d')), Command::RemoveFavorite);
        favorites.insert(KeyCombo::plain(KeyCode::Delete), Command::RemoveFavorite);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }

    pub fn get_screen(&self, screen: Screen, combo: &KeyCombo) -> Option<&Command> {
        self.screen.get(&screen).and_then(|m| m.get(combo))
    }

    pub fn get_focus(&self, focus: Focus, combo: &KeyCombo) -> Option<&Command> {
        self.focus.get(&focus).and_then(|m| m.get(combo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_c_is_global() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_global(&KeyCombo::ctrl(KeyCode::Char('c'))),
            Some(&Command::Quit)
        );
    }

    #[test]
    fn test_enter_depends_on_focus() {
        let config = KeybindingConfig::new();
        let enter = KeyCombo::plain(KeyCode::Enter);
        assert_eq!(
            config.get_focus(Focus::Results, &enter),
            Some(&Command::ToggleFavorite)
        );
        assert_eq!(
            config.get_focus(Focus::Favorites, &enter),
            Some(&Command::RemoveFavorite)
        );
    }

    #[test]
    fn test_form_screens_share_bindings() {
        let config = KeybindingConfig::new();
        let f2 = KeyCombo::plain(KeyCode::F(2));
        assert_eq!(
            config.get_screen(Screen::Login, &f2),
            Some(&Command::ToggleAuthMode)
        );
        assert_eq!(
            config.get_screen(Screen::Signup, &f2),
            Some(&Command::ToggleAuthMode)
        );
        assert_eq!(config.get_screen(Screen::Search, &f2), None);
    }
}
