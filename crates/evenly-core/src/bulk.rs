//! Bulk CSV import for manually entered transactions.
//!
//! The template is a fixed literal generated client-side; columns map
//! positionally onto [`NewTransaction`] fields. The account id comes from
//! the selected account, not the CSV.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use evenly_types::{NewTransaction, TxnType};
use uuid::Uuid;

/// Downloadable CSV template: header plus three sample rows.
pub const TEMPLATE: &str = "date,type,amount,description,category,balance_after
2026-02-01,credit,50000,Freelance payment,freelancing,50000
2026-02-02,debit,500,Grocery shopping,groceries,49500
2026-02-03,credit,25000,Consulting fee,consulting,74500";

/// Template filename used when saving to disk.
pub const TEMPLATE_FILENAME: &str = "transaction_template.csv";

const COLUMNS: usize = 6;

/// Parses pasted CSV data (header row included) into transactions for the
/// given account.
///
/// Column order per the template header: date, type, amount, description,
/// category, balance_after. Blank lines are skipped.
///
/// # Errors
/// Returns an error naming the offending line when a row is malformed.
pub fn parse_transactions(account_id: Uuid, input: &str) -> Result<Vec<NewTransaction>> {
    let mut lines = input.trim().lines();

    let Some(_header) = lines.next() else {
        bail!("CSV input is empty");
    };

    let mut txns = Vec::new();
    for (idx, line) in lines.enumerate() {
        // Line 1 is the header; data rows are numbered from 2 for messages.
        let line_no = idx + 2;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        txns.push(
            parse_line(account_id, line)
                .with_context(|| format!("Invalid transaction on line {line_no}"))?,
        );
    }

    Ok(txns)
}

fn parse_line(account_id: Uuid, line: &str) -> Result<NewTransaction> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != COLUMNS {
        bail!("expected {COLUMNS} columns, found {}", fields.len());
    }

    let date = NaiveDate::parse_from_str(fields[0], "%Y-%m-%d")
        .with_context(|| format!("bad date '{}'", fields[0]))?;
    let txn_type: TxnType = fields[1]
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let amount_inr: f64 = fields[2]
        .parse()
        .with_context(|| format!("bad amount '{}'", fields[2]))?;
    let balance_after_txn: f64 = fields[5]
        .parse()
        .with_context(|| format!("bad balance '{}'", fields[5]))?;

    Ok(NewTransaction {
        account_id,
        txn_timestamp: date.and_hms_opt(0, 0, 0).unwrap_or_default(),
        amount_inr,
        txn_type,
        balance_after_txn,
        description: fields[3].to_string(),
        merchant_category: fields[4].to_string(),
    })
}
