//! Income breakdown view: per-source contribution and stability.

use evenly_types::IncomeSource;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::common::Loadable;
use crate::common::text::{format_inr, format_opt_date};

#[derive(Debug, Default)]
pub struct IncomeState {
    pub sources: Loadable<Vec<IncomeSource>>,
}

pub fn render(state: &IncomeState, frame: &mut Frame, area: Rect) {
    match &state.sources {
        Loadable::Idle | Loadable::Loading => {
            frame.render_widget(Paragraph::new("Loading income sources…"), area);
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
        Loadable::Loaded(sources) if sources.is_empty() => {
            frame.render_widget(
                Paragraph::new("No income sources detected yet. Add transactions and analyze."),
                area,
            );
        }
        Loadable::Loaded(sources) => {
            let header = Row::new(vec![
                "Source",
                "Category",
                "Avg monthly",
                "Share",
                "Stability",
                "Last payment",
            ])
            .style(Style::default().add_modifier(Modifier::BOLD));

            let rows: Vec<Row> = sources
                .iter()
                .map(|s| {
                    Row::new(vec![
                        s.source_name.clone(),
                        s.source_category.clone(),
                        format_inr(s.avg_monthly_inr),
                        format!("{:.1}%", s.contribution_pct),
                        format!("{:.2}", s.stability_score),
                        format_opt_date(s.last_payment_date),
                    ])
                })
                .collect();

            let table = Table::new(
                rows,
                [
                    Constraint::Min(18),
                    Constraint::Length(14),
                    Constraint::Length(12),
                    Constraint::Length(7),
                    Constraint::Length(9),
                    Constraint::Length(12),
                ],
            )
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Income sources "),
            );

            frame.render_widget(table, area);
        }
    }
}
