//! Application state composition.
//!
//! ```text
//! AppState
//! ├── session: Session          (token, user, authenticated flag)
//! ├── view: View                (route-guarded active view)
//! ├── login / register          (credential forms)
//! ├── dashboard / income /
//! │   smoothing / insights /
//! │   manual                    (per-view server-backed state)
//! └── should_quit, spinner_frame
//! ```
//!
//! The session is the only cross-view mutable resource; every mutation of
//! it goes through its four entry points, called from the reducer.

use evenly_core::auth::Session;

use crate::common::Loadable;
use crate::effects::UiEffect;
use crate::features::auth::{LoginState, RegisterState};
use crate::features::dashboard::DashboardState;
use crate::features::income::IncomeState;
use crate::features::insights::InsightsState;
use crate::features::manual::ManualState;
use crate::features::smoothing::SmoothingState;
use crate::route::{self, View};

/// Combined application state for the TUI.
pub struct AppState {
    pub session: Session,
    pub view: View,
    pub should_quit: bool,
    /// Advances on every tick; drives the loading spinner.
    pub spinner_frame: usize,

    pub login: LoginState,
    pub register: RegisterState,
    pub dashboard: DashboardState,
    pub income: IncomeState,
    pub smoothing: SmoothingState,
    pub insights: InsightsState,
    pub manual: ManualState,
}

impl AppState {
    /// Creates the state with the route guard applied to the initial view.
    pub fn new(session: Session) -> Self {
        let view = route::navigate(View::Dashboard, session.is_authenticated());
        Self {
            session,
            view,
            should_quit: false,
            spinner_frame: 0,
            login: LoginState::default(),
            register: RegisterState::default(),
            dashboard: DashboardState::default(),
            income: IncomeState::default(),
            smoothing: SmoothingState::default(),
            insights: InsightsState::default(),
            manual: ManualState::default(),
        }
    }

    /// Effects to run at startup: restored sessions fetch the profile and
    /// the dashboard; anonymous sessions sit on the login form.
    pub fn startup_effects(&mut self) -> Vec<UiEffect> {
        if !self.session.is_authenticated() {
            return Vec::new();
        }
        self.dashboard.data = Loadable::Loading;
        vec![UiEffect::FetchProfile, UiEffect::LoadDashboard]
    }

    /// True while any view has a fetch in flight (drives the spinner).
    pub fn is_busy(&self) -> bool {
        self.dashboard.data.is_loading()
            || self.dashboard.syncing
            || self.income.sources.is_loading()
            || self.smoothing.data.is_loading()
            || self.smoothing.calculating
            || self.insights.insights.is_loading()
            || self.manual.accounts.is_loading()
            || self.manual.submitting
            || self.login.submitting
            || self.register.submitting
    }
}
