//! Insights view: severity-tagged observations with read/dismiss actions.

use evenly_types::{Insight, InsightSeverity};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::common::Loadable;
use crate::common::text::{format_date, truncate_with_ellipsis};

#[derive(Debug, Default)]
pub struct InsightsState {
    pub insights: Loadable<Vec<Insight>>,
    pub unread_only: bool,
    pub selected: usize,
    pub notice: Option<String>,
}

impl InsightsState {
    /// The insight under the cursor, if any are loaded.
    pub fn selected_insight(&self) -> Option<&Insight> {
        self.insights.loaded().and_then(|list| list.get(self.selected))
    }

    pub fn select_next(&mut self) {
        if let Some(list) = self.insights.loaded()
            && !list.is_empty()
        {
            self.selected = (self.selected + 1).min(list.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Clamps the cursor after a refetch shrinks the list.
    pub fn clamp_selection(&mut self) {
        if let Some(list) = self.insights.loaded() {
            self.selected = self.selected.min(list.len().saturating_sub(1));
        }
    }
}

fn severity_color(severity: InsightSeverity) -> Color {
    match severity {
        InsightSeverity::Info => Color::Blue,
        InsightSeverity::Warning => Color::Yellow,
        InsightSeverity::Critical => Color::Red,
    }
}

pub fn render(state: &InsightsState, frame: &mut Frame, area: Rect) {
    let filter = if state.unread_only {
        " Insights (unread) "
    } else {
        " Insights "
    };
    let block = Block::default().borders(Borders::ALL).title(filter);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &state.insights {
        Loadable::Idle | Loadable::Loading => {
            frame.render_widget(Paragraph::new("Loading insights…"), inner);
        }
        Loadable::Failed(message) => {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    message.to_string(),
                    Style::default().fg(Color::Red),
                )),
                inner,
            );
        }
        Loadable::Loaded(insights) if insights.is_empty() => {
            frame.render_widget(Paragraph::new("No insights yet. Sync or analyze to generate some."), inner);
        }
        Loadable::Loaded(insights) => {
            let panes = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(4), Constraint::Length(7)])
                .split(inner);

            render_list(state, insights, frame, panes[0]);
            render_detail(state.selected_insight(), state.notice.as_deref(), frame, panes[1]);
        }
    }
}

fn render_list(state: &InsightsState, insights: &[Insight], frame: &mut Frame, area: Rect) {
    let visible = area.height as usize;
    // Keep the cursor on screen.
    let start = state.selected.saturating_sub(visible.saturating_sub(1));

    let lines: Vec<Line> = insights
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(i, insight)| {
            let marker = if insight.is_read { "  " } else { "• " };
            let summary = truncate_with_ellipsis(
                &insight.explanation_text,
                (area.width as usize).saturating_sub(26),
            );
            let style = if i == state.selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(
                    format!("{:>8} ", insight.severity.label()),
                    Style::default().fg(severity_color(insight.severity)),
                ),
                Span::raw(format!("{} ", format_date(insight.created_at))),
                Span::raw(marker),
                Span::raw(summary),
            ])
            .style(style)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_detail(
    insight: Option<&Insight>,
    notice: Option<&str>,
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(insight) = insight else {
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                insight.insight_type.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", insight.severity.label()),
                Style::default().fg(severity_color(insight.severity)),
            ),
        ]),
        Line::raw(insight.explanation_text.clone()),
    ];

    if !insight.supporting_metrics.is_empty() {
        let metrics = insight
            .supporting_metrics
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(Line::styled(metrics, Style::default().fg(Color::DarkGray)));
    }

    if let Some(notice) = notice {
        lines.push(Line::styled(
            notice.to_string(),
            Style::default().fg(Color::Green),
        ));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
