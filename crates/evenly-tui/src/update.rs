//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.
//!
//! This is also where the session coordinator lives: every async result is
//! checked for the unauthorized error variant first, and any hit — whatever
//! endpoint produced it — transitions the session to Anonymous and lands on
//! the login view. Credential-exchange failures never carry that variant,
//! so a bad password stays a form error.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use evenly_core::api::{ApiError, ApiErrorKind};
use evenly_types::RegisterRequest;

use crate::common::Loadable;
use crate::common::form::FormOutcome;
use crate::effects::UiEffect;
use crate::events::{InsightAction, UiEvent};
use crate::features::auth::LoginState;
use crate::features::dashboard::DashboardState;
use crate::features::income::IncomeState;
use crate::features::insights::InsightsState;
use crate::features::manual::{ManualState, ManualTab};
use crate::features::smoothing::SmoothingState;
use crate::route::{self, View};
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Key(key) => handle_key(state, key),

        UiEvent::ProfileFetched(result) => match result {
            Ok(profile) => {
                state.session.set_user(Some(profile));
                vec![]
            }
            Err(err) => {
                // Any profile-fetch failure de-authenticates: the token may
                // be live, but we cannot show an identity we cannot load.
                tracing::warn!("profile fetch failed: {err}");
                force_logout(state, "Session expired. Please log in again.");
                vec![]
            }
        },

        UiEvent::LoginFinished(result) => {
            state.login.submitting = false;
            match result {
                Ok(token) => {
                    if let Err(err) = state.session.set_token(Some(token.access_token)) {
                        tracing::warn!("failed to persist token: {err:#}");
                    }
                    state.login = LoginState::default();
                    let mut effects = navigate_to(state, View::Dashboard);
                    effects.push(UiEffect::FetchProfile);
                    effects
                }
                Err(err) => {
                    state.login.notice = None;
                    state.login.error = Some(credential_failure(&err, "Login failed"));
                    vec![]
                }
            }
        }

        UiEvent::RegisterFinished(result) => {
            state.register.submitting = false;
            match result {
                Ok(profile) => {
                    tracing::info!(email = %profile.email, "account created");
                    state.register.form.reset();
                    state.register.error = None;
                    state.view = View::Login;
                    state.login.notice = Some("Account created. Log in below.".to_string());
                    vec![]
                }
                Err(err) => {
                    state.register.error = Some(credential_failure(&err, "Registration failed"));
                    vec![]
                }
            }
        }

        UiEvent::DashboardLoaded(result) => {
            match *result {
                Ok(data) => {
                    if state.view == View::Dashboard {
                        state.dashboard.data = Loadable::Loaded(data);
                    }
                }
                Err(err) => {
                    if guard_unauthorized(state, &err) {
                        return vec![];
                    }
                    if state.view == View::Dashboard {
                        state.dashboard.data = Loadable::Failed(failure_message(&err));
                    }
                }
            }
            vec![]
        }

        UiEvent::IncomeLoaded(result) => {
            match result {
                Ok(sources) => {
                    if state.view == View::Income {
                        state.income.sources = Loadable::Loaded(sources);
                    }
                }
                Err(err) => {
                    if guard_unauthorized(state, &err) {
                        return vec![];
                    }
                    if state.view == View::Income {
                        state.income.sources = Loadable::Failed(failure_message(&err));
                    }
                }
            }
            vec![]
        }

        UiEvent::SmoothingLoaded(result) => {
            match result {
                Ok(data) => {
                    if state.view == View::Smoothing {
                        state.smoothing.data = Loadable::Loaded(data);
                    }
                }
                Err(err) => {
                    if guard_unauthorized(state, &err) {
                        return vec![];
                    }
                    if state.view == View::Smoothing {
                        state.smoothing.data = Loadable::Failed(failure_message(&err));
                    }
                }
            }
            vec![]
        }

        UiEvent::InsightsLoaded(result) => {
            match result {
                Ok(insights) => {
                    if state.view == View::Insights {
                        state.insights.insights = Loadable::Loaded(insights);
                        state.insights.clamp_selection();
                    }
                }
                Err(err) => {
                    if guard_unauthorized(state, &err) {
                        return vec![];
                    }
                    if state.view == View::Insights {
                        state.insights.insights = Loadable::Failed(failure_message(&err));
                    }
                }
            }
            vec![]
        }

        UiEvent::AccountsLoaded(result) => {
            match result {
                Ok(accounts) => {
                    if state.view == View::Manual {
                        state.manual.selected_account = 0;
                        state.manual.accounts = Loadable::Loaded(accounts);
                    }
                }
                Err(err) => {
                    if guard_unauthorized(state, &err) {
                        return vec![];
                    }
                    if state.view == View::Manual {
                        state.manual.accounts = Loadable::Failed(failure_message(&err));
                    }
                }
            }
            vec![]
        }

        UiEvent::SyncFinished(result) => {
            state.dashboard.syncing = false;
            match result {
                Ok(summary) => {
                    tracing::info!(status = %summary.status, "sync finished");
                    state.dashboard.notice = Some("Synced and regenerated predictions.".to_string());
                    if state.view == View::Dashboard {
                        state.dashboard.data = Loadable::Loading;
                        return vec![UiEffect::LoadDashboard];
                    }
                    vec![]
                }
                Err(err) => {
                    if guard_unauthorized(state, &err) {
                        return vec![];
                    }
                    state.dashboard.notice = Some(failure_message(&err));
                    vec![]
                }
            }
        }

        UiEvent::ReleaseCalculated(result) => {
            state.smoothing.calculating = false;
            match result {
                Ok(calculation) => {
                    if state.view == View::Smoothing {
                        state.smoothing.notice = None;
                        state.smoothing.calculation = Some(calculation);
                    }
                }
                Err(err) => {
                    if guard_unauthorized(state, &err) {
                        return vec![];
                    }
                    state.smoothing.notice = Some(failure_message(&err));
                }
            }
            vec![]
        }

        UiEvent::InsightUpdated(action, result) => match result {
            Ok(_) => {
                state.insights.notice = Some(match action {
                    InsightAction::MarkRead => "Marked as read.".to_string(),
                    InsightAction::Dismiss => "Dismissed.".to_string(),
                });
                state.insights.insights = Loadable::Loading;
                vec![UiEffect::LoadInsights {
                    unread_only: state.insights.unread_only,
                }]
            }
            Err(err) => {
                if guard_unauthorized(state, &err) {
                    return vec![];
                }
                state.insights.notice = Some(failure_message(&err));
                vec![]
            }
        },

        UiEvent::TransactionSubmitted(result) => {
            state.manual.submitting = false;
            match result {
                Ok(_) => {
                    state.manual.txn_form.reset();
                    state.manual.error = None;
                    state.manual.notice = Some("Transaction added.".to_string());
                }
                Err(err) => {
                    if guard_unauthorized(state, &err) {
                        return vec![];
                    }
                    state.manual.error = Some(failure_message(&err));
                }
            }
            vec![]
        }

        UiEvent::BulkSubmitted(result) => {
            state.manual.submitting = false;
            match result {
                Ok(txns) => {
                    state.manual.bulk_form.reset();
                    state.manual.error = None;
                    state.manual.notice =
                        Some(format!("{} transactions imported.", txns.len()));
                }
                Err(err) => {
                    if guard_unauthorized(state, &err) {
                        return vec![];
                    }
                    state.manual.error = Some(failure_message(&err));
                }
            }
            vec![]
        }

        UiEvent::BulkRejected(message) => {
            state.manual.submitting = false;
            state.manual.error = Some(message);
            vec![]
        }

        UiEvent::AccountCreated(result) => {
            state.manual.submitting = false;
            match result {
                Ok(account) => {
                    tracing::info!(bank = %account.bank_name, "bank account created");
                    state.manual.account_form = ManualState::default().account_form;
                    state.manual.error = None;
                    state.manual.notice = Some("Bank account added.".to_string());
                    state.manual.accounts = Loadable::Loading;
                    vec![UiEffect::LoadAccounts]
                }
                Err(err) => {
                    if guard_unauthorized(state, &err) {
                        return vec![];
                    }
                    state.manual.error = Some(failure_message(&err));
                    vec![]
                }
            }
        }

        UiEvent::AnalyzeFinished(result) => {
            state.manual.submitting = false;
            match result {
                Ok(summary) => {
                    state.manual.error = None;
                    state.manual.notice = Some(format!(
                        "Analyzed: {} insights, {} predictions generated.",
                        summary.insights_generated, summary.predictions_generated
                    ));
                }
                Err(err) => {
                    if guard_unauthorized(state, &err) {
                        return vec![];
                    }
                    state.manual.error = Some(failure_message(&err));
                }
            }
            vec![]
        }

        UiEvent::TemplateSaved(result) => {
            match result {
                Ok(path) => {
                    state.manual.error = None;
                    state.manual.notice = Some(format!("Template saved to {path}."));
                }
                Err(message) => state.manual.error = Some(message),
            }
            vec![]
        }
    }
}

// ============================================================================
// Key handling
// ============================================================================

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    match state.view {
        View::Login => handle_login_key(state, key),
        View::Register => handle_register_key(state, key),
        View::Manual => handle_manual_key(state, key),
        _ => handle_browse_key(state, key),
    }
}

fn handle_login_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Esc {
        return vec![UiEffect::Quit];
    }
    if key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.view = route::navigate(View::Register, state.session.is_authenticated());
        return vec![];
    }
    if state.login.submitting {
        return vec![];
    }

    match state.login.form.handle_key(key) {
        FormOutcome::Submit => {
            let email = state.login.email().trim().to_string();
            let password = state.login.password().to_string();
            if email.is_empty() || password.is_empty() {
                state.login.error = Some("Email and password are required".to_string());
                return vec![];
            }
            state.login.submitting = true;
            state.login.error = None;
            vec![UiEffect::Login { email, password }]
        }
        _ => vec![],
    }
}

fn handle_register_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Esc {
        state.view = View::Login;
        return vec![];
    }
    if state.register.submitting {
        return vec![];
    }

    match state.register.form.handle_key(key) {
        FormOutcome::Submit => {
            let email = state.register.form.value(0).trim().to_string();
            let password = state.register.form.value(1).to_string();
            let full_name = state.register.form.value(2).trim().to_string();
            let phone = state.register.form.value(3).trim().to_string();

            if email.is_empty() || password.is_empty() || full_name.is_empty() {
                state.register.error =
                    Some("Email, password and full name are required".to_string());
                return vec![];
            }
            if password.len() < 8 {
                state.register.error =
                    Some("Password must be at least 8 characters".to_string());
                return vec![];
            }

            state.register.submitting = true;
            state.register.error = None;
            vec![UiEffect::Register {
                request: Box::new(RegisterRequest {
                    email,
                    password,
                    full_name,
                    phone: if phone.is_empty() { None } else { Some(phone) },
                }),
            }]
        }
        _ => vec![],
    }
}

fn handle_browse_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('q') => return vec![UiEffect::Quit],
        KeyCode::Char('o') => {
            force_logout(state, "Logged out.");
            return vec![];
        }
        KeyCode::Char('r') => return reload_current(state),
        KeyCode::Char(c @ '1'..='5') => {
            let index = (c as usize) - ('1' as usize);
            let target = View::nav_order()[index];
            return navigate_to(state, target);
        }
        _ => {}
    }

    match state.view {
        View::Dashboard => match key.code {
            KeyCode::Char('s') if !state.dashboard.syncing => {
                state.dashboard.syncing = true;
                state.dashboard.notice = None;
                vec![UiEffect::SyncData]
            }
            _ => vec![],
        },
        View::Smoothing => match key.code {
            KeyCode::Char('c') if !state.smoothing.calculating => {
                state.smoothing.calculating = true;
                state.smoothing.notice = None;
                vec![UiEffect::CalculateRelease]
            }
            _ => vec![],
        },
        View::Insights => handle_insights_key(state, key),
        _ => vec![],
    }
}

fn handle_insights_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            state.insights.select_next();
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.insights.select_prev();
            vec![]
        }
        KeyCode::Char('u') => {
            state.insights.unread_only = !state.insights.unread_only;
            state.insights.selected = 0;
            state.insights.insights = Loadable::Loading;
            vec![UiEffect::LoadInsights {
                unread_only: state.insights.unread_only,
            }]
        }
        KeyCode::Char('m') => match state.insights.selected_insight() {
            Some(insight) => vec![UiEffect::MarkInsightRead {
                insight_id: insight.insight_id,
            }],
            None => vec![],
        },
        KeyCode::Char('d') => match state.insights.selected_insight() {
            Some(insight) => vec![UiEffect::DismissInsight {
                insight_id: insight.insight_id,
            }],
            None => vec![],
        },
        _ => vec![],
    }
}

fn handle_manual_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => return navigate_to(state, View::Dashboard),
        KeyCode::Left => {
            state.manual.tab = state.manual.tab.prev();
            state.manual.notice = None;
            state.manual.error = None;
            return vec![];
        }
        KeyCode::Right => {
            state.manual.tab = state.manual.tab.next();
            state.manual.notice = None;
            state.manual.error = None;
            return vec![];
        }
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.manual.cycle_account();
            return vec![];
        }
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return vec![UiEffect::SaveTemplate];
        }
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if !state.manual.submitting {
                state.manual.submitting = true;
                state.manual.notice = None;
                state.manual.error = None;
                return vec![UiEffect::Analyze];
            }
            return vec![];
        }
        _ => {}
    }

    if state.manual.submitting {
        return vec![];
    }

    match state.manual.active_form_mut().handle_key(key) {
        FormOutcome::Submit => submit_manual(state),
        _ => vec![],
    }
}

fn submit_manual(state: &mut AppState) -> Vec<UiEffect> {
    state.manual.notice = None;
    match state.manual.tab {
        ManualTab::Transaction => match state.manual.build_transaction() {
            Ok(txn) => {
                state.manual.submitting = true;
                state.manual.error = None;
                vec![UiEffect::SubmitTransaction { txn: Box::new(txn) }]
            }
            Err(message) => {
                state.manual.error = Some(message);
                vec![]
            }
        },
        ManualTab::Account => match state.manual.build_account() {
            Ok(account) => {
                state.manual.submitting = true;
                state.manual.error = None;
                vec![UiEffect::SubmitAccount { account }]
            }
            Err(message) => {
                state.manual.error = Some(message);
                vec![]
            }
        },
        ManualTab::Bulk => {
            let path = state.manual.bulk_form.value(0).trim().to_string();
            if path.is_empty() {
                state.manual.error = Some("CSV file path is required".to_string());
                return vec![];
            }
            let Some(account_id) = state.manual.selected_account_id() else {
                state.manual.error = Some("Add a bank account first".to_string());
                return vec![];
            };
            state.manual.submitting = true;
            state.manual.error = None;
            vec![UiEffect::SubmitBulk { path, account_id }]
        }
    }
}

// ============================================================================
// Navigation and the session coordinator
// ============================================================================

/// Applies the route guard and primes the target view's data load.
///
/// Every navigation refetches: view data is transient and discarded when
/// the user leaves, so entering a view always starts from Loading.
fn navigate_to(state: &mut AppState, requested: View) -> Vec<UiEffect> {
    let view = route::navigate(requested, state.session.is_authenticated());
    state.view = view;

    match view {
        View::Dashboard => {
            state.dashboard.data = Loadable::Loading;
            state.dashboard.notice = None;
            vec![UiEffect::LoadDashboard]
        }
        View::Income => {
            state.income.sources = Loadable::Loading;
            vec![UiEffect::LoadIncome]
        }
        View::Smoothing => {
            state.smoothing.data = Loadable::Loading;
            state.smoothing.calculation = None;
            state.smoothing.notice = None;
            vec![UiEffect::LoadSmoothing]
        }
        View::Insights => {
            state.insights.insights = Loadable::Loading;
            state.insights.notice = None;
            state.insights.selected = 0;
            vec![UiEffect::LoadInsights {
                unread_only: state.insights.unread_only,
            }]
        }
        View::Manual => {
            state.manual.accounts = Loadable::Loading;
            state.manual.notice = None;
            state.manual.error = None;
            vec![UiEffect::LoadAccounts]
        }
        View::Login | View::Register => vec![],
    }
}

fn reload_current(state: &mut AppState) -> Vec<UiEffect> {
    let view = state.view;
    navigate_to(state, view)
}

/// Reacts to a credential rejection: the single place that turns a 401
/// into a session transition plus a forced landing on the login view.
fn guard_unauthorized(state: &mut AppState, err: &ApiError) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    tracing::info!("credential rejected, forcing logout");
    force_logout(state, "Session expired. Please log in again.");
    true
}

/// Drops the session and all transient view data, landing on login.
fn force_logout(state: &mut AppState, message: &str) {
    if let Err(err) = state.session.logout() {
        tracing::warn!("failed to clear token store: {err:#}");
    }

    state.dashboard = DashboardState::default();
    state.income = IncomeState::default();
    state.smoothing = SmoothingState::default();
    state.insights = InsightsState::default();
    state.manual = ManualState::default();

    state.view = View::Login;
    state.login = LoginState::default();
    state.login.notice = Some(message.to_string());
}

/// Failure text for a view: validation/business errors verbatim, anything
/// else generic (the detail goes to the log).
fn failure_message(err: &ApiError) -> String {
    tracing::warn!("api call failed: {err} ({:?})", err.kind);
    match err.kind {
        ApiErrorKind::Status => err.message.clone(),
        _ => "Failed to load data. Check the connection and try again.".to_string(),
    }
}

/// Failure text for the credential forms.
fn credential_failure(err: &ApiError, fallback: &str) -> String {
    tracing::warn!("credential exchange failed: {err}");
    match err.kind {
        ApiErrorKind::Status => err.message.clone(),
        ApiErrorKind::Network => "Cannot reach the server.".to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use evenly_core::auth::{Session, TokenStore};
    use evenly_types::TokenResponse;
    use tempfile::{TempDir, tempdir};

    use super::*;
    use crate::features::dashboard::DashboardData;

    fn store_in(dir: &TempDir) -> TokenStore {
        TokenStore::at(dir.path().join("token.json"))
    }

    fn authenticated_state(dir: &TempDir) -> AppState {
        store_in(dir).write("stale-token").unwrap();
        AppState::new(Session::restore(store_in(dir)))
    }

    fn anonymous_state(dir: &TempDir) -> AppState {
        AppState::new(Session::restore(store_in(dir)))
    }

    fn unauthorized() -> ApiError {
        ApiError::unauthorized(r#"{"detail":"Could not validate credentials"}"#)
    }

    fn dashboard_data() -> DashboardData {
        DashboardData {
            safe: serde_json::from_value(serde_json::json!({
                "daily_safe_spend_inr": 1200.0,
                "weekly_safe_spend_inr": 8400.0,
                "predicted_cash_exhaustion_date": null,
                "buffer_balance_inr": 15000.0,
                "worst_case_income_7d": 5000.0,
                "fixed_expenses_weekly": 3000.0,
                "volatility_multiplier": 1.4,
                "explanation": "Based on worst-case income"
            }))
            .unwrap(),
            predictions: vec![],
            stability: serde_json::from_value(serde_json::json!({
                "stability_score": 0.8,
                "interpretation": "High"
            }))
            .unwrap(),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// A 401 on any data fetch forces the session to Anonymous, clears the
    /// persisted token and lands on the login view.
    #[test]
    fn test_unauthorized_forces_logout() {
        let dir = tempdir().unwrap();
        let mut state = authenticated_state(&dir);
        assert_eq!(state.view, View::Dashboard);

        update(
            &mut state,
            UiEvent::DashboardLoaded(Box::new(Err(unauthorized()))),
        );

        assert!(!state.session.is_authenticated());
        assert_eq!(state.view, View::Login);
        assert_eq!(store_in(&dir).read(), None);
    }

    /// The coordinator reacts regardless of which endpoint rejected the
    /// token.
    #[test]
    fn test_unauthorized_from_any_endpoint() {
        let dir = tempdir().unwrap();
        let mut state = authenticated_state(&dir);
        state.view = View::Insights;

        update(&mut state, UiEvent::InsightsLoaded(Err(unauthorized())));

        assert!(!state.session.is_authenticated());
        assert_eq!(state.view, View::Login);
    }

    /// A non-401 failure stays inside the view: generic failure state,
    /// session untouched.
    #[test]
    fn test_dashboard_failure_is_isolated() {
        let dir = tempdir().unwrap();
        let mut state = authenticated_state(&dir);

        update(
            &mut state,
            UiEvent::DashboardLoaded(Box::new(Err(ApiError::status(500, "")))),
        );

        assert!(state.session.is_authenticated());
        assert_eq!(state.view, View::Dashboard);
        assert!(matches!(state.dashboard.data, Loadable::Failed(_)));
    }

    /// The dashboard join is all-or-nothing: a failed join never leaves a
    /// partial Loaded state behind.
    #[test]
    fn test_dashboard_join_never_partial() {
        let dir = tempdir().unwrap();
        let mut state = authenticated_state(&dir);
        state.dashboard.data = Loadable::Loading;

        update(
            &mut state,
            UiEvent::DashboardLoaded(Box::new(Err(ApiError::status(502, "")))),
        );

        assert!(state.dashboard.data.loaded().is_none());
        assert!(matches!(state.dashboard.data, Loadable::Failed(_)));
    }

    /// Successful login stores the token, navigates to the dashboard and
    /// schedules the profile fetch; the profile then populates the user.
    #[test]
    fn test_login_success_flow() {
        let dir = tempdir().unwrap();
        let mut state = anonymous_state(&dir);
        assert_eq!(state.view, View::Login);

        let effects = update(
            &mut state,
            UiEvent::LoginFinished(Ok(TokenResponse {
                access_token: "abc123".to_string(),
                token_type: "bearer".to_string(),
            })),
        );

        assert_eq!(state.session.token(), Some("abc123"));
        assert_eq!(store_in(&dir).read(), Some("abc123".to_string()));
        assert_eq!(state.view, View::Dashboard);
        assert!(effects
            .iter()
            .any(|e| matches!(e, UiEffect::FetchProfile)));
        assert!(effects
            .iter()
            .any(|e| matches!(e, UiEffect::LoadDashboard)));

        let profile = serde_json::from_value(serde_json::json!({
            "user_id": "7f8a1f9c-42cb-4c4f-9f53-0b2c6a3a6f01",
            "email": "testuser1@example.com",
            "full_name": "Test User",
            "phone": null,
            "is_active": true,
            "created_at": "2026-01-15T09:30:00"
        }))
        .unwrap();
        update(&mut state, UiEvent::ProfileFetched(Ok(profile)));

        assert_eq!(
            state.session.user().unwrap().email,
            "testuser1@example.com"
        );
        assert_eq!(
            route::resolve(View::Dashboard, state.session.is_authenticated()),
            route::RouteDecision::Allow
        );
    }

    /// A failed login is a form error: no navigation, no session change.
    #[test]
    fn test_login_failure_stays_on_form() {
        let dir = tempdir().unwrap();
        let mut state = anonymous_state(&dir);

        update(
            &mut state,
            UiEvent::LoginFinished(Err(ApiError::status(
                401,
                r#"{"detail":"Incorrect email or password"}"#,
            ))),
        );

        assert_eq!(state.view, View::Login);
        assert!(!state.session.is_authenticated());
        assert_eq!(
            state.login.error.as_deref(),
            Some("Incorrect email or password")
        );
    }

    /// A result aimed at a view the user has left is discarded.
    #[test]
    fn test_stale_result_discarded() {
        let dir = tempdir().unwrap();
        let mut state = authenticated_state(&dir);
        state.view = View::Insights;

        update(
            &mut state,
            UiEvent::DashboardLoaded(Box::new(Ok(dashboard_data()))),
        );

        assert!(matches!(state.dashboard.data, Loadable::Idle));
    }

    /// The logout key drops the session and all view data.
    #[test]
    fn test_logout_key() {
        let dir = tempdir().unwrap();
        let mut state = authenticated_state(&dir);
        state.dashboard.data = Loadable::Loaded(dashboard_data());

        update(&mut state, UiEvent::Key(key(KeyCode::Char('o'))));

        assert!(!state.session.is_authenticated());
        assert_eq!(state.view, View::Login);
        assert!(matches!(state.dashboard.data, Loadable::Idle));
        assert_eq!(store_in(&dir).read(), None);
    }

    /// Number keys navigate between views and prime a fresh load.
    #[test]
    fn test_navigation_reloads_target_view() {
        let dir = tempdir().unwrap();
        let mut state = authenticated_state(&dir);

        let effects = update(&mut state, UiEvent::Key(key(KeyCode::Char('4'))));

        assert_eq!(state.view, View::Insights);
        assert!(state.insights.insights.is_loading());
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LoadInsights { unread_only: false }]
        ));
    }

    /// Submitting the login form emits the login effect with the typed
    /// credentials.
    #[test]
    fn test_login_form_submit() {
        let dir = tempdir().unwrap();
        let mut state = anonymous_state(&dir);

        for c in "testuser1@example.com".chars() {
            update(&mut state, UiEvent::Key(key(KeyCode::Char(c))));
        }
        update(&mut state, UiEvent::Key(key(KeyCode::Tab)));
        for c in "TestPass123".chars() {
            update(&mut state, UiEvent::Key(key(KeyCode::Char(c))));
        }
        let effects = update(&mut state, UiEvent::Key(key(KeyCode::Enter)));

        assert!(state.login.submitting);
        match effects.as_slice() {
            [UiEffect::Login { email, password }] => {
                assert_eq!(email, "testuser1@example.com");
                assert_eq!(password, "TestPass123");
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }
}
