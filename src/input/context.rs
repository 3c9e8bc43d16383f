//! Input context for determining which commands are available.
//!
//! The [`InputContext`] captures the current application state relevant to
//! input handling, allowing the command registry to dispatch appropriate
//! commands based on the current modal, focus, and screen.

use crate::app::{Focus, Screen};

/// The type of modal overlay currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    /// No modal is active
    #[default]
    None,
    /// Breed filter overlay
    BreedPicker,
    /// "Jump to page" prompt of the results indicator
    JumpPrompt,
    /// Match result modal
    MatchModal,
}

/// Context information for input handling.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub screen: Screen,
    pub focus: Focus,
    pub modal: ModalType,
}

impl InputContext {
    pub fn new(screen: Screen, focus: Focus, modal: ModalType) -> Self {
        Self {
            screen,
            focus,
            modal,
        }
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }

    /// Whether a modal takes free-text input.
    pub fn modal_accepts_text(&self) -> bool {
        matches!(self.modal, ModalType::BreedPicker | ModalType::JumpPrompt)
    }

    /// Login or signup: printable keys go to the form.
    pub fn is_form_screen(&self) -> bool {
        matches!(self.screen, Screen::Login | Screen::Signup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = InputContext::default();
        assert_eq!(ctx.screen, Screen::Loading);
        assert!(!ctx.is_modal_active());
    }

    #[test]
    fn test_text_modals() {
        let ctx = InputContext::new(Screen::Search, Focus::Results, ModalType::JumpPrompt);
        assert!(ctx.is_modal_active());
        assert!(ctx.modal_accepts_text());

        let ctx = InputContext::new(Screen::Search, Focus::Results, ModalType::MatchModal);
        assert!(!ctx.modal_accepts_text());
    }

    #[test]
    fn test_form_screens() {
        assert!(InputContext::new(Screen::Signup, Focus::Results, ModalType::None).is_form_screen());
        assert!(!InputContext::new(Screen::Search, Focus::Results, ModalType::None).is_form_screen());
    }
}
