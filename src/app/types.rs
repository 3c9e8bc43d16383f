//! Type definitions for the application state.
//!
//! Contains enums and structs used for tracking UI state:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Focus`] - Which panel of the search screen has focus
//! - [`AuthMode`] - Login or signup flavor of the credentials form
//! - [`LoginForm`] - Name/email form state
//! - [`BreedPicker`] - Breed filter overlay state

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Waiting for the startup session check
    #[default]
    Loading,
    Login,
    Signup,
    Search,
}

/// Represents which panel of the search screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    Results,
    Favorites,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Results => Focus::Favorites,
            Focus::Favorites => Focus::Results,
        }
    }
}

/// Which credentials screen the form belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome to Fetch Dogs",
            AuthMode::Signup => "Sign Up for Fetch Dogs",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }
    }

    /// Label shown while the request is in flight.
    pub fn busy_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Logging in...",
            AuthMode::Signup => "Signing up...",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login failed. Please check your credentials and try again.",
            AuthMode::Signup => "Sign up failed. Please try again.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Name,
    Email,
}

/// Name/email form shared by the login and signup screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub field: LoginField,
    /// A login request is in flight; input is ignored
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn active_value(&mut self) -> &mut String {
        match self.field {
            LoginField::Name => &mut self.name,
            LoginField::Email => &mut self.email,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.submitting || c.is_control() {
            return;
        }
        self.active_value().push(c);
    }

    /// Insert pasted text, dropping line breaks and other control characters.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.submitting {
            self.active_value().pop();
        }
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            LoginField::Name => LoginField::Email,
            LoginField::Email => LoginField::Name,
        };
    }

    /// Both fields are required; the email needs an `@`.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Please enter your name.");
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("Please enter a valid email address.");
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Breed multi-select overlay.
///
/// Edits a pending selection; nothing reaches the search until it is
/// applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedPicker {
    pub visible: bool,
    /// Case-insensitive substring filter
    pub filter: String,
    /// Index into the filtered list
    pub cursor: usize,
    /// Pending selection, in the order breeds were picked
    pub selected: Vec<String>,
}

impl BreedPicker {
    /// Open with `current` as the pending selection.
    pub fn open(&mut self, current: &[String]) {
        self.visible = true;
        self.filter.clear();
        self.cursor = 0;
        self.selected = current.to_vec();
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn filtered<'a>(&self, breeds: &'a [String]) -> Vec<&'a String> {
        let needle = self.filter.to_lowercase();
        breeds
            .iter()
            .filter(|breed| needle.is_empty() || breed.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn type_char(&mut self, c: char) {
        if !c.is_control() {
            self.filter.push(c);
            self.cursor = 0;
        }
    }

    pub fn backspace(&mut self) {
        if self.filter.pop().is_some() {
            self.cursor = 0;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, breeds: &[String]) {
        let len = self.filtered(breeds).len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn is_selected(&self, breed: &str) -> bool {
        self.selected.iter().any(|b| b == breed)
    }

    /// Toggle the breed under the cursor.
    pub fn toggle_current(&mut self, breeds: &[String]) {
        let Some(breed) = self.filtered(breeds).get(self.cursor).map(|b| (*b).clone()) else {
            return;
        };
        if self.is_selected(&breed) {
            self.selected.retain(|b| *b != breed);
        } else {
            self.selected.push(breed);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Close the overlay and hand back the pending selection.
    pub fn take_selection(&mut self) -> Vec<String> {
        let selected = std::mem::take(&mut self.selected);
        self.close();
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breeds() -> Vec<String> {
        ["Beagle", "Boxer", "Pug", "Shiba Inu"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::Results.next(), Focus::Favorites);
        assert_eq!(Focus::Favorites.next(), Focus::Results);
    }

    #[test]
    fn test_login_form_edits_active_field() {
        let mut form = LoginForm::new();
        form.insert_str("Ada");
        form.next_field();
        form.insert_str("ada@example.com\n");
        form.backspace();
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.co");
    }

    #[test]
    fn test_login_form_ignores_input_while_submitting() {
        let mut form = LoginForm::new();
        form.insert_char('a');
        form.submitting = true;
        form.insert_char('b');
        form.backspace();
        assert_eq!(form.name, "a");
    }

    #[test]
    fn test_login_form_validation() {
        let mut form = LoginForm::new();
        assert_eq!(form.validate(), Err("Please enter your name."));
        form.name = "Ada".to_string();
        form.email = "nope".to_string();
        assert_eq!(form.validate(), Err("Please enter a valid email address."));
        form.email = "ada@example.com".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_auth_mode_messages() {
        assert_eq!(
            AuthMode::Login.failure_message(),
            "Login failed. Please check your credentials and try again."
        );
        assert_eq!(AuthMode::Signup.busy_label(), "Signing up...");
    }

    #[test]
    fn test_breed_picker_filters_case_insensitively() {
        let all = breeds();
        let mut picker = BreedPicker::default();
        picker.open(&[]);
        picker.type_char('b');
        let filtered: Vec<&str> = picker.filtered(&all).iter().map(|s| s.as_str()).collect();
        assert_eq!(filtered, vec!["Beagle", "Boxer"]);
    }

    #[test]
    fn test_breed_picker_toggle_and_take() {
        let all = breeds();
        let mut picker = BreedPicker::default();
        picker.open(&["Pug".to_string()]);
        picker.cursor_down(&all);
        picker.toggle_current(&all);
        assert!(picker.is_selected("Boxer"));

        picker.type_char('p');
        picker.toggle_current(&all);
        assert!(!picker.is_selected("Pug"));

        let selection = picker.take_selection();
        assert_eq!(selection, vec!["Boxer".to_string()]);
        assert!(!picker.visible);
    }

    #[test]
    fn test_breed_picker_cursor_stays_in_bounds() {
        let all = breeds();
        let mut picker = BreedPicker::default();
        picker.open(&[]);
        for _ in 0..10 {
            picker.cursor_down(&all);
        }
        assert_eq!(picker.cursor, 3);
        picker.type_char('x');
        assert_eq!(picker.cursor, 0);
        picker.cursor_up();
        assert_eq!(picker.cursor, 0);
    }
}
