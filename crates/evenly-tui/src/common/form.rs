//! Minimal focusable text-field forms.
//!
//! Every form view (login, register, manual entry) is a vertical list of
//! labelled single-line fields: Tab/Down moves focus, typing edits the
//! focused field, Enter submits.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One labelled input field.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    /// Render as asterisks (passwords).
    pub masked: bool,
}

impl FormField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: false,
        }
    }

    pub fn masked(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: true,
        }
    }

    pub fn with_value(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            masked: false,
        }
    }

    /// Value as shown on screen.
    pub fn display(&self) -> String {
        if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// What a key press did to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Key was consumed by editing/focus movement.
    Handled,
    /// Enter on the last field (or anywhere): caller should submit.
    Submit,
    /// Key was not for this form.
    Ignored,
}

/// A focusable stack of fields.
#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub focus: usize,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    pub fn value(&self, index: usize) -> &str {
        &self.fields[index].value
    }

    /// Clears all values and resets focus.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focus = 0;
    }

    /// Routes a key press into the form.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.fields.len();
                FormOutcome::Handled
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.checked_sub(1).unwrap_or(self.fields.len() - 1);
                FormOutcome::Handled
            }
            KeyCode::Backspace => {
                self.fields[self.focus].value.pop();
                FormOutcome::Handled
            }
            KeyCode::Enter => FormOutcome::Submit,
            // Plain characters only; chords belong to the surrounding view.
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.fields[self.focus].value.push(c);
                FormOutcome::Handled
            }
            _ => FormOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Typing lands in the focused field; Tab wraps around.
    #[test]
    fn test_typing_and_focus() {
        let mut form = FormState::new(vec![FormField::new("Email"), FormField::masked("Password")]);

        form.handle_key(key(KeyCode::Char('a')));
        assert_eq!(form.value(0), "a");

        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Char('x')));
        assert_eq!(form.value(1), "x");
        assert_eq!(form.fields[1].display(), "*");

        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus, 0);
    }

    /// Enter asks the caller to submit.
    #[test]
    fn test_enter_submits() {
        let mut form = FormState::new(vec![FormField::new("Email")]);
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormOutcome::Submit);
    }

    /// Backspace edits, reset clears.
    #[test]
    fn test_backspace_and_reset() {
        let mut form = FormState::new(vec![FormField::new("Email")]);
        form.handle_key(key(KeyCode::Char('a')));
        form.handle_key(key(KeyCode::Char('b')));
        form.handle_key(key(KeyCode::Backspace));
        assert_eq!(form.value(0), "a");

        form.reset();
        assert_eq!(form.value(0), "");
    }
}
