//! Generic input form
//!
//! Every create/edit dialog is a vertical list of labelled text fields with
//! one focused at a time. Tab/Down move forward, Shift-Tab/Up back, Esc
//! cancels and Enter submits (handled by the owning screen).

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

pub struct FormField {
    pub label: &'static str,
    pub input: Input,
    /// Render as asterisks (passwords)
    pub mask: bool,
}

impl FormField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            input: Input::default(),
            mask: false,
        }
    }

    pub fn masked(label: &'static str) -> Self {
        Self {
            label,
            input: Input::default(),
            mask: true,
        }
    }
}

pub struct Form {
    pub title: &'static str,
    pub fields: Vec<FormField>,
    pub focus: usize,
}

impl Form {
    pub fn new(title: &'static str, fields: Vec<FormField>) -> Self {
        Self {
            title,
            fields,
            focus: 0,
        }
    }

    /// Trimmed value of field `idx`.
    pub fn value(&self, idx: usize) -> &str {
        self.fields[idx].input.value().trim()
    }

    /// Value of field `idx`, or `None` when empty.
    pub fn optional(&self, idx: usize) -> Option<String> {
        let v = self.value(idx);
        (!v.is_empty()).then(|| v.to_string())
    }

    pub fn next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Route a key to the form. Returns false for keys the form does not
    /// consume (Enter, Esc), which the owning screen interprets.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.next();
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.prev();
                true
            }
            KeyCode::Enter | KeyCode::Esc => false,
            _ => {
                self.fields[self.focus].input.handle_event(&Event::Key(key));
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut form = Form::new(
            "t",
            vec![FormField::new("a"), FormField::new("b"), FormField::new("c")],
        );
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus, 0);
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus, 2);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = Form::new("t", vec![FormField::new("a"), FormField::new("b")]);
        form.handle_key(key(KeyCode::Char('x')));
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Char('y')));
        assert_eq!(form.value(0), "x");
        assert_eq!(form.value(1), "y");
    }

    #[test]
    fn test_enter_and_esc_are_not_consumed() {
        let mut form = Form::new("t", vec![FormField::new("a")]);
        assert!(!form.handle_key(key(KeyCode::Enter)));
        assert!(!form.handle_key(key(KeyCode::Esc)));
    }
}
