//! Effect handler implementations (network and file I/O).
//!
//! Each effect becomes one spawned task that performs its I/O and sends a
//! single completion event into the inbox. Multi-call effects join with
//! wait-all/fail-if-any semantics: one failing call fails the whole view
//! load, never a partial result.

use evenly_core::api::ApiClient;
use evenly_core::bulk;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::effects::UiEffect;
use crate::events::{InsightAction, UiEvent};
use crate::features::dashboard::DashboardData;
use crate::features::smoothing::SmoothingData;

pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;

/// Spawns a task executing the effect and delivering its completion event.
pub fn spawn_effect(client: ApiClient, tx: UiEventSender, effect: UiEffect) {
    tokio::spawn(async move {
        let event = run_effect(&client, effect).await;
        // A closed inbox means the app is exiting; nothing left to deliver.
        let _ = tx.send(event);
    });
}

async fn run_effect(client: &ApiClient, effect: UiEffect) -> UiEvent {
    match effect {
        UiEffect::Quit => unreachable!("Quit is handled by the runtime"),

        UiEffect::FetchProfile => UiEvent::ProfileFetched(client.me().await),

        UiEffect::Login { email, password } => {
            UiEvent::LoginFinished(client.login(&email, &password).await)
        }

        UiEffect::Register { request } => UiEvent::RegisterFinished(client.register(&request).await),

        UiEffect::LoadDashboard => {
            let result = tokio::try_join!(
                client.safe_to_spend(),
                client.predictions(),
                client.stability_score(),
            )
            .map(|(safe, predictions, stability)| DashboardData {
                safe,
                predictions,
                stability,
            });
            UiEvent::DashboardLoaded(Box::new(result))
        }

        UiEffect::LoadIncome => UiEvent::IncomeLoaded(client.income_sources().await),

        UiEffect::LoadSmoothing => {
            let result = tokio::try_join!(client.buffer(), client.weekly_releases())
                .map(|(buffer, releases)| SmoothingData { buffer, releases });
            UiEvent::SmoothingLoaded(result)
        }

        UiEffect::LoadInsights { unread_only } => {
            UiEvent::InsightsLoaded(client.insights(unread_only).await)
        }

        UiEffect::LoadAccounts => UiEvent::AccountsLoaded(client.bank_accounts().await),

        UiEffect::SyncData => {
            // Sync, then regenerate predictions over the fresh data.
            let result = match client.sync_transactions().await {
                Ok(summary) => client.generate_predictions().await.map(|_| summary),
                Err(err) => Err(err),
            };
            UiEvent::SyncFinished(result)
        }

        UiEffect::CalculateRelease => UiEvent::ReleaseCalculated(client.calculate_release().await),

        UiEffect::MarkInsightRead { insight_id } => UiEvent::InsightUpdated(
            InsightAction::MarkRead,
            client.mark_insight_read(insight_id).await,
        ),

        UiEffect::DismissInsight { insight_id } => UiEvent::InsightUpdated(
            InsightAction::Dismiss,
            client.dismiss_insight(insight_id).await,
        ),

        UiEffect::SubmitTransaction { txn } => {
            UiEvent::TransactionSubmitted(client.create_transaction(&txn).await)
        }

        UiEffect::SubmitBulk { path, account_id } => submit_bulk(client, &path, account_id).await,

        UiEffect::SubmitAccount { account } => {
            UiEvent::AccountCreated(client.create_bank_account(&account).await)
        }

        UiEffect::Analyze => UiEvent::AnalyzeFinished(client.analyze().await),

        UiEffect::SaveTemplate => save_template().await,
    }
}

async fn submit_bulk(client: &ApiClient, path: &str, account_id: Uuid) -> UiEvent {
    let input = match tokio::fs::read_to_string(path).await {
        Ok(input) => input,
        Err(err) => return UiEvent::BulkRejected(format!("Cannot read {path}: {err}")),
    };

    let txns = match bulk::parse_transactions(account_id, &input) {
        Ok(txns) => txns,
        Err(err) => return UiEvent::BulkRejected(format!("{err:#}")),
    };

    UiEvent::BulkSubmitted(client.create_transactions_bulk(&txns).await)
}

async fn save_template() -> UiEvent {
    match tokio::fs::write(bulk::TEMPLATE_FILENAME, bulk::TEMPLATE).await {
        Ok(()) => UiEvent::TemplateSaved(Ok(bulk::TEMPLATE_FILENAME.to_string())),
        Err(err) => UiEvent::TemplateSaved(Err(format!("Cannot save template: {err}"))),
    }
}
