//! Manual entry view: transaction form, account form and bulk CSV import.

use chrono::NaiveDate;
use evenly_types::{BankAccount, NewBankAccount, NewTransaction, TxnType};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use uuid::Uuid;

use crate::common::{FormField, FormState, Loadable};
use crate::common::text::format_inr;

/// Active tab within the manual entry view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManualTab {
    #[default]
    Transaction,
    Account,
    Bulk,
}

impl ManualTab {
    pub fn title(self) -> &'static str {
        match self {
            ManualTab::Transaction => "Add transaction",
            ManualTab::Account => "Add account",
            ManualTab::Bulk => "Bulk import",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ManualTab::Transaction => ManualTab::Account,
            ManualTab::Account => ManualTab::Bulk,
            ManualTab::Bulk => ManualTab::Transaction,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ManualTab::Transaction => ManualTab::Bulk,
            ManualTab::Account => ManualTab::Transaction,
            ManualTab::Bulk => ManualTab::Account,
        }
    }
}

#[derive(Debug)]
pub struct ManualState {
    pub accounts: Loadable<Vec<BankAccount>>,
    pub tab: ManualTab,
    pub txn_form: FormState,
    pub account_form: FormState,
    pub bulk_form: FormState,
    /// Index into the loaded account list; transactions and bulk imports
    /// target this account.
    pub selected_account: usize,
    pub submitting: bool,
    pub notice: Option<String>,
    pub error: Option<String>,
}

impl Default for ManualState {
    fn default() -> Self {
        Self {
            accounts: Loadable::Idle,
            tab: ManualTab::Transaction,
            txn_form: FormState::new(vec![
                FormField::new("Date (YYYY-MM-DD)"),
                FormField::new("Type (credit/debit)"),
                FormField::new("Amount (₹)"),
                FormField::new("Description"),
                FormField::new("Category"),
                FormField::new("Balance after (₹)"),
            ]),
            account_form: FormState::new(vec![
                FormField::new("Bank name"),
                FormField::new("Account number"),
                FormField::with_value("Account type", "savings"),
                FormField::with_value("Primary (yes/no)", "no"),
            ]),
            bulk_form: FormState::new(vec![FormField::new("CSV file path")]),
            selected_account: 0,
            submitting: false,
            notice: None,
            error: None,
        }
    }
}

impl ManualState {
    /// The account targeted by the transaction/bulk tabs.
    pub fn selected_account_id(&self) -> Option<Uuid> {
        self.accounts
            .loaded()
            .and_then(|list| list.get(self.selected_account))
            .map(|account| account.account_id)
    }

    pub fn cycle_account(&mut self) {
        if let Some(list) = self.accounts.loaded()
            && !list.is_empty()
        {
            self.selected_account = (self.selected_account + 1) % list.len();
        }
    }

    /// The form for the active tab.
    pub fn active_form_mut(&mut self) -> &mut FormState {
        match self.tab {
            ManualTab::Transaction => &mut self.txn_form,
            ManualTab::Account => &mut self.account_form,
            ManualTab::Bulk => &mut self.bulk_form,
        }
    }

    /// Validates the transaction form into a request payload.
    pub fn build_transaction(&self) -> Result<NewTransaction, String> {
        let account_id = self
            .selected_account_id()
            .ok_or("Add a bank account first")?;

        let date = NaiveDate::parse_from_str(self.txn_form.value(0).trim(), "%Y-%m-%d")
            .map_err(|_| "Date must be YYYY-MM-DD".to_string())?;
        let txn_type: TxnType = self
            .txn_form
            .value(1)
            .trim()
            .parse()
            .map_err(|_| "Type must be credit or debit".to_string())?;
        let amount_inr: f64 = self
            .txn_form
            .value(2)
            .trim()
            .parse()
            .map_err(|_| "Amount must be a number".to_string())?;
        let balance_after_txn: f64 = self
            .txn_form
            .value(5)
            .trim()
            .parse()
            .map_err(|_| "Balance after must be a number".to_string())?;

        let description = self.txn_form.value(3).trim();
        if description.is_empty() {
            return Err("Description is required".to_string());
        }
        let merchant_category = self.txn_form.value(4).trim();
        if merchant_category.is_empty() {
            return Err("Category is required".to_string());
        }

        Ok(NewTransaction {
            account_id,
            txn_timestamp: date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            amount_inr,
            txn_type,
            balance_after_txn,
            description: description.to_string(),
            merchant_category: merchant_category.to_string(),
        })
    }

    /// Validates the account form into a request payload.
    pub fn build_account(&self) -> Result<NewBankAccount, String> {
        let bank_name = self.account_form.value(0).trim();
        if bank_name.is_empty() {
            return Err("Bank name is required".to_string());
        }
        let account_number = self.account_form.value(1).trim();
        if account_number.is_empty() {
            return Err("Account number is required".to_string());
        }
        let account_type = self.account_form.value(2).trim();
        if account_type.is_empty() {
            return Err("Account type is required".to_string());
        }

        Ok(NewBankAccount {
            account_number: account_number.to_string(),
            bank_name: bank_name.to_string(),
            account_type: account_type.to_string(),
            is_primary: self.account_form.value(3).trim().eq_ignore_ascii_case("yes"),
        })
    }
}

pub fn render(state: &ManualState, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    render_tabs(state, frame, rows[0]);
    render_account_picker(state, frame, rows[1]);
    render_active_tab(state, frame, rows[2]);
}

fn render_tabs(state: &ManualState, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for tab in [ManualTab::Transaction, ManualTab::Account, ManualTab::Bulk] {
        let style = if tab == state.tab {
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", tab.title()), style));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn render_account_picker(state: &ManualState, frame: &mut Frame, area: Rect) {
    let line = match &state.accounts {
        Loadable::Idle | Loadable::Loading => Line::raw("Loading accounts…"),
        Loadable::Failed(message) => {
            Line::styled(message.to_string(), Style::default().fg(Color::Red))
        }
        Loadable::Loaded(list) if list.is_empty() => Line::styled(
            "No bank accounts yet — add one on the Add account tab.",
            Style::default().fg(Color::Yellow),
        ),
        Loadable::Loaded(list) => {
            let account = &list[state.selected_account.min(list.len() - 1)];
            Line::from(vec![
                Span::raw("Account: "),
                Span::styled(
                    format!("{} ({})", account.bank_name, account.account_type),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "  balance {}   Ctrl+A next account",
                    format_inr(account.current_balance_inr)
                )),
            ])
        }
    };
    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn render_active_tab(state: &ManualState, frame: &mut Frame, area: Rect) {
    let form = match state.tab {
        ManualTab::Transaction => &state.txn_form,
        ManualTab::Account => &state.account_form,
        ManualTab::Bulk => &state.bulk_form,
    };

    let mut lines = Vec::new();
    for (i, field) in form.fields.iter().enumerate() {
        let focused = form.focus == i;
        let marker = if focused { "› " } else { "  " };
        let cursor = if focused { "_" } else { "" };
        let label_style = if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<22}", field.label), label_style),
            Span::raw(format!("{}{cursor}", field.display())),
        ]));
        lines.push(Line::raw(""));
    }

    if state.submitting {
        lines.push(Line::styled(
            "Submitting…",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(error) = &state.error {
        lines.push(Line::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(notice) = &state.notice {
        lines.push(Line::styled(
            notice.to_string(),
            Style::default().fg(Color::Green),
        ));
    }

    if state.tab == ManualTab::Bulk {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Columns: date,type,amount,description,category,balance_after — Ctrl+T saves a template.",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", state.tab.title())),
        ),
        area,
    );
}
