//! Command definitions for keyboard input handling.
//!
//! This module defines all commands that can be triggered by keyboard input.
//! The [`Command`] enum provides a unified way to represent user actions,
//! decoupling key bindings from their effects.

/// Represents all possible commands that can be triggered by keyboard input.
///
/// Commands are organized into categories:
/// - Global commands (quit)
/// - Credentials form commands (typing, field switch, submit)
/// - Search screen commands (selection, favorites, filters, paging)
/// - Overlay commands (breed picker, jump prompt, match modal)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C, q on the search screen)
    Quit,

    // =========================================================================
    // Text Input (form fields, picker filter, jump prompt)
    // =========================================================================
    /// Insert a character into whatever text input is active
    InsertChar(char),
    /// Delete the character before the cursor
    Backspace,

    // =========================================================================
    // Login / Signup
    // =========================================================================
    /// Switch between name and email (Tab)
    NextField,
    /// Submit the form (Enter)
    SubmitForm,
    /// Switch between login and signup (F2)
    ToggleAuthMode,

    // =========================================================================
    // Search Screen
    // =========================================================================
    /// Switch focus between results and favorites (Tab)
    CycleFocus,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Add or remove the selected dog from favorites (Enter, f)
    ToggleFavorite,
    /// Remove the selected favorite (d, Delete)
    RemoveFavorite,
    /// Open the breed filter (b)
    OpenBreedPicker,
    /// Cycle the sort field (s)
    CycleSortField,
    /// Flip the sort direction (o)
    ToggleSortDirection,
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    /// Open the "jump to page" prompt (g)
    OpenJumpPrompt,
    /// Ask for a match among the favorites (m)
    FindMatch,
    /// Log out (Shift+L)
    Logout,

    // =========================================================================
    // Breed Picker
    // =========================================================================
    PickerUp,
    PickerDown,
    /// Toggle the breed under the cursor (Space)
    PickerToggle,
    /// Clear the pending selection (Ctrl+U)
    PickerClear,
    /// Apply the pending selection (Enter)
    PickerApply,
    /// Close without applying (Esc)
    PickerClose,

    // =========================================================================
    // Jump Prompt
    // =========================================================================
    JumpSubmit,
    JumpCancel,

    // =========================================================================
    // Match Modal
    // =========================================================================
    CloseModal,
}

impl Command {
    /// Whether this command changes visible state.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Quit)
    }
}
