//! Login and register views.
//!
//! Credential errors land here as ordinary form errors (the `detail`
//! message verbatim); only a rejected *stored* token goes through the
//! global coordinator.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::{FormField, FormState};

/// Login form state.
#[derive(Debug)]
pub struct LoginState {
    pub form: FormState,
    pub submitting: bool,
    pub error: Option<String>,
    /// Informational line (e.g. "Account created"), shown in green.
    pub notice: Option<String>,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            form: FormState::new(vec![FormField::new("Email"), FormField::masked("Password")]),
            submitting: false,
            error: None,
            notice: None,
        }
    }
}

impl LoginState {
    pub fn email(&self) -> &str {
        self.form.value(0)
    }

    pub fn password(&self) -> &str {
        self.form.value(1)
    }
}

/// Register form state.
#[derive(Debug)]
pub struct RegisterState {
    pub form: FormState,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for RegisterState {
    fn default() -> Self {
        Self {
            form: FormState::new(vec![
                FormField::new("Email"),
                FormField::masked("Password"),
                FormField::new("Full name"),
                FormField::new("Phone (optional)"),
            ]),
            submitting: false,
            error: None,
        }
    }
}

/// Status line under a credential form.
enum FormStatus {
    Quiet,
    Submitting,
    Error(String),
    Notice(String),
}

impl FormStatus {
    fn of(submitting: bool, error: Option<&str>, notice: Option<&str>) -> Self {
        if submitting {
            FormStatus::Submitting
        } else if let Some(error) = error {
            FormStatus::Error(error.to_string())
        } else if let Some(notice) = notice {
            FormStatus::Notice(notice.to_string())
        } else {
            FormStatus::Quiet
        }
    }
}

/// Renders a centered credential form with its status lines.
fn render_form(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    hint: &str,
    form: &FormState,
    status: &FormStatus,
) {
    let width = area.width.min(56);
    let height = (form.fields.len() as u16) * 2 + 6;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 3;
    let boxed = Rect::new(x, y, width, height.min(area.height));

    let block = Block::default().borders(Borders::ALL).title(format!(" {title} "));
    let inner = block.inner(boxed);
    frame.render_widget(block, boxed);

    let mut constraints: Vec<Constraint> = Vec::new();
    for _ in &form.fields {
        constraints.push(Constraint::Length(2));
    }
    constraints.push(Constraint::Length(1)); // status line
    constraints.push(Constraint::Length(1)); // hint line
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in form.fields.iter().enumerate() {
        let focused = form.focus == i;
        let marker = if focused { "› " } else { "  " };
        let cursor = if focused { "_" } else { "" };
        let label_style = if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let line = Line::from(vec![
            Span::styled(format!("{marker}{:<18}", field.label), label_style),
            Span::raw(format!("{}{cursor}", field.display())),
        ]);
        frame.render_widget(Paragraph::new(line), rows[i]);
    }

    let status_line = match status {
        FormStatus::Submitting => {
            Line::styled("Submitting…", Style::default().fg(Color::Yellow))
        }
        FormStatus::Error(error) => {
            Line::styled(error.to_string(), Style::default().fg(Color::Red))
        }
        FormStatus::Notice(notice) => {
            Line::styled(notice.to_string(), Style::default().fg(Color::Green))
        }
        FormStatus::Quiet => Line::raw(""),
    };
    frame.render_widget(
        Paragraph::new(status_line).alignment(Alignment::Center),
        rows[form.fields.len()],
    );

    frame.render_widget(
        Paragraph::new(Line::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
        rows[form.fields.len() + 1],
    );
}

pub fn render_login(state: &LoginState, frame: &mut Frame, area: Rect) {
    let status = FormStatus::of(
        state.submitting,
        state.error.as_deref(),
        state.notice.as_deref(),
    );
    render_form(
        frame,
        area,
        "Log in to Evenly",
        "Enter submit · Tab next field · Ctrl+R register · Esc quit",
        &state.form,
        &status,
    );
}

pub fn render_register(state: &RegisterState, frame: &mut Frame, area: Rect) {
    let status = FormStatus::of(state.submitting, state.error.as_deref(), None);
    render_form(
        frame,
        area,
        "Create an account",
        "Enter submit · Tab next field · Esc back to login",
        &state.form,
        &status,
    );
}
