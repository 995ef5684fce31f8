//! Income smoothing view: buffer health and weekly releases.

use evenly_types::{ReleaseCalculation, SmoothingBuffer, WeeklyRelease};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, Wrap};

use crate::common::Loadable;
use crate::common::text::{format_date, format_inr, format_opt_date};

/// Buffer and release history, fetched together (wait-all).
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingData {
    pub buffer: SmoothingBuffer,
    pub releases: Vec<WeeklyRelease>,
}

#[derive(Debug, Default)]
pub struct SmoothingState {
    pub data: Loadable<SmoothingData>,
    pub calculating: bool,
    pub calculation: Option<ReleaseCalculation>,
    pub notice: Option<String>,
}

pub fn render(state: &SmoothingState, frame: &mut Frame, area: Rect) {
    match &state.data {
        Loadable::Idle | Loadable::Loading => {
            frame.render_widget(Paragraph::new("Loading smoothing buffer…"), area);
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

fn render_loaded(state: &SmoothingState, data: &SmoothingData, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let buffer = &data.buffer;
    let buffer_lines = vec![
        Line::from(format!(
            "Balance {}   deposited {}   released {}",
            format_inr(buffer.buffer_balance_inr),
            format_inr(buffer.total_deposited_inr),
            format_inr(buffer.total_released_inr),
        )),
        Line::from(format!(
            "Threshold {}   capacity {}   risk score {:.2}",
            format_inr(buffer.min_buffer_threshold_inr),
            format_inr(buffer.max_buffer_capacity_inr),
            buffer.buffer_risk_score,
        )),
        Line::from(format!(
            "Last deposit {}   last release {}",
            format_opt_date(buffer.last_deposit_date),
            format_opt_date(buffer.last_release_date),
        )),
        Line::from(format!("Updated {}", format_date(buffer.updated_at))),
    ];
    frame.render_widget(
        Paragraph::new(buffer_lines).block(Block::default().borders(Borders::ALL).title(" Buffer ")),
        rows[0],
    );

    let recommendation: Vec<Line> = if state.calculating {
        vec![Line::styled(
            "Calculating…",
            Style::default().fg(Color::Yellow),
        )]
    } else if let Some(notice) = &state.notice {
        vec![Line::styled(
            notice.to_string(),
            Style::default().fg(Color::Red),
        )]
    } else if let Some(calc) = &state.calculation {
        vec![
            Line::from(vec![
                ratatui::text::Span::raw("Recommended weekly release "),
                ratatui::text::Span::styled(
                    format_inr(calc.recommended_weekly_release_inr),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                ratatui::text::Span::raw(format!(
                    "   buffer health {:.0}%",
                    calc.buffer_health * 100.0
                )),
            ]),
            Line::styled(
                calc.explanation.clone(),
                Style::default().fg(Color::DarkGray),
            ),
        ]
    } else {
        vec![Line::styled(
            "Press c to calculate this week's recommended release.",
            Style::default().fg(Color::DarkGray),
        )]
    };
    frame.render_widget(
        Paragraph::new(recommendation).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Recommendation "),
        ),
        rows[1],
    );

    render_releases(&data.releases, frame, rows[2]);
}

fn render_releases(releases: &[WeeklyRelease], frame: &mut Frame, area: Rect) {
    if releases.is_empty() {
        frame.render_widget(
            Paragraph::new("No weekly releases recorded yet.").block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Weekly releases "),
            ),
            area,
        );
        return;
    }

    let header = Row::new(vec!["Week", "Recommended", "Actual", "Before", "After", "Status"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = releases
        .iter()
        .map(|r| {
            let status = if r.is_released { "released" } else { "pending" };
            Row::new(vec![
                format_date(r.week_start_date),
                format_inr(r.recommended_weekly_release_inr),
                format_inr(r.actual_release_inr),
                format_inr(r.buffer_balance_before_inr),
                format_inr(r.buffer_balance_after_inr),
                status.to_string(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Min(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Weekly releases "),
    );

    frame.render_widget(table, area);
}
