//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui Frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::features::{auth, dashboard, income, insights, manual, smoothing};
use crate::route::View;
use crate::state::AppState;

/// Spinner frames for the busy indicator.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(state, frame, rows[0]);
    render_body(state, frame, rows[1]);
    render_footer(state, frame, rows[2]);
}

fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = vec![
        Span::styled("Evenly", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
    ];

    if state.session.is_authenticated() {
        for (i, view) in View::nav_order().iter().enumerate() {
            let style = if *view == state.view {
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!("[{}] {}", i + 1, view.title()), style));
            spans.push(Span::raw("  "));
        }

        let identity = state
            .session
            .user()
            .map_or_else(String::new, |user| user.email.clone());
        spans.push(Span::styled(identity, Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(
            state.view.title(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn render_body(state: &AppState, frame: &mut Frame, area: Rect) {
    match state.view {
        View::Login => auth::render_login(&state.login, frame, area),
        View::Register => auth::render_register(&state.register, frame, area),
        View::Dashboard => dashboard::render(&state.dashboard, frame, area),
        View::Income => income::render(&state.income, frame, area),
        View::Smoothing => smoothing::render(&state.smoothing, frame, area),
        View::Insights => insights::render(&state.insights, frame, area),
        View::Manual => manual::render(&state.manual, frame, area),
    }
}

fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    let hints = match state.view {
        View::Login => "Enter submit · Tab field · Ctrl+R register · Esc quit",
        View::Register => "Enter submit · Tab field · Esc back to login",
        View::Dashboard => "1-5 views · s sync · r reload · o log out · q quit",
        View::Income => "1-5 views · r reload · o log out · q quit",
        View::Smoothing => "1-5 views · c calculate release · r reload · o log out · q quit",
        View::Insights => {
            "j/k select · m mark read · d dismiss · u unread only · r reload · o log out · q quit"
        }
        View::Manual => {
            "←/→ tab · Enter submit · Ctrl+A account · Ctrl+T template · Ctrl+R analyze · Esc back"
        }
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];
    if state.is_busy() {
        let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
        spans.push(Span::raw("  "));
        spans.push(Span::styled(spinner, Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
