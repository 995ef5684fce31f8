//! Dashboard view: safe-to-spend, predictions and stability at a glance.

use evenly_types::{CashflowPrediction, RiskLevel, SafeToSpend, StabilityScore};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::common::Loadable;
use crate::common::text::{format_inr, format_opt_date};

/// Everything the dashboard shows, fetched as one wait-all join.
///
/// There is deliberately no per-section result here: if any of the three
/// calls fails the whole view fails, never a partial render.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub safe: SafeToSpend,
    pub predictions: Vec<CashflowPrediction>,
    pub stability: StabilityScore,
}

#[derive(Debug, Default)]
pub struct DashboardState {
    pub data: Loadable<DashboardData>,
    pub syncing: bool,
    pub notice: Option<String>,
}

impl DashboardData {
    /// The 7-day window, when the server has produced one.
    pub fn prediction_7d(&self) -> Option<&CashflowPrediction> {
        self.predictions
            .iter()
            .find(|p| p.prediction_window_days == 7)
    }
}

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    }
}

fn stat_panel(frame: &mut Frame, area: Rect, label: &str, value: String, sub: &str) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(label.to_string(), Style::default().fg(Color::DarkGray)),
        Line::styled(value, Style::default().add_modifier(Modifier::BOLD)),
        Line::styled(sub.to_string(), Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render(state: &DashboardState, frame: &mut Frame, area: Rect) {
    match &state.data {
        Loadable::Idle | Loadable::Loading => {
            frame.render_widget(Paragraph::new("Loading dashboard…"), area);
        }
        Loadable::Failed(message) => {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    message.to_string(),
                    Style::default().fg(Color::Red),
                )),
                area,
            );
        }
        Loadable::Loaded(data) => render_loaded(state, data, frame, area),
    }
}

fn render_loaded(state: &DashboardState, data: &DashboardData, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(area);

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[0]);

    stat_panel(
        frame,
        stats[0],
        "Daily safe to spend",
        format_inr(data.safe.daily_safe_spend_inr),
        "Conservative estimate",
    );
    stat_panel(
        frame,
        stats[1],
        "Weekly safe to spend",
        format_inr(data.safe.weekly_safe_spend_inr),
        "Conservative estimate",
    );
    stat_panel(
        frame,
        stats[2],
        "Buffer balance",
        format_inr(data.safe.buffer_balance_inr),
        "Smoothing reserve",
    );
    stat_panel(
        frame,
        stats[3],
        "Income stability",
        format!("{:.0}%", data.stability.stability_score * 100.0),
        &data.stability.interpretation,
    );

    render_prediction(data, frame, rows[1]);

    let mut detail = vec![Line::raw(data.safe.explanation.clone())];
    if let Some(date) = data.safe.predicted_cash_exhaustion_date {
        detail.push(Line::styled(
            format!("Predicted cash exhaustion: {}", format_opt_date(Some(date))),
            Style::default().fg(Color::Red),
        ));
    }
    if state.syncing {
        detail.push(Line::styled(
            "Syncing…",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(notice) = &state.notice {
        detail.push(Line::styled(
            notice.to_string(),
            Style::default().fg(Color::Green),
        ));
    }
    frame.render_widget(
        Paragraph::new(detail).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Outlook "),
        ),
        rows[2],
    );
}

fn render_prediction(data: &DashboardData, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Next 7 days ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(pred) = data.prediction_7d() else {
        frame.render_widget(
            Paragraph::new("No 7-day prediction yet. Press s to sync and generate."),
            inner,
        );
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::raw(format!(
                "Expected inflow {}   outflow {}   net ",
                format_inr(pred.expected_inflow_inr),
                format_inr(pred.expected_outflow_inr),
            )),
            Span::styled(
                format_inr(pred.net_cashflow_inr),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(format!(
            "Range {} to {}",
            format_inr(pred.lower_bound_inr),
            format_inr(pred.upper_bound_inr),
        )),
        Line::from(vec![
            Span::raw("Risk "),
            Span::styled(
                pred.risk_level.label(),
                Style::default().fg(risk_color(pred.risk_level)),
            ),
            Span::raw(format!(
                "   confidence {:.0}%   model {}",
                pred.confidence_score * 100.0,
                pred.model_used,
            )),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
