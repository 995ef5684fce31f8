//! Top-level views and the route guard.

/// Top-level views, mirroring the product's navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    Dashboard,
    Income,
    Smoothing,
    Insights,
    Manual,
}

impl View {
    /// Returns true if the view is only reachable with a session.
    pub fn requires_auth(self) -> bool {
        !matches!(self, View::Login | View::Register)
    }

    /// Header title.
    pub fn title(self) -> &'static str {
        match self {
            View::Login => "Log in",
            View::Register => "Register",
            View::Dashboard => "Dashboard",
            View::Income => "Income breakdown",
            View::Smoothing => "Income smoothing",
            View::Insights => "Insights",
            View::Manual => "Manual entry",
        }
    }

    /// Views reachable from the navigation bar, in key order (1-5).
    pub fn nav_order() -> &'static [View] {
        &[
            View::Dashboard,
            View::Income,
            View::Smoothing,
            View::Insights,
            View::Manual,
        ]
    }
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested view.
    Allow,
    /// Anonymous session requested a protected view.
    RedirectLogin,
    /// Authenticated session requested login/register.
    RedirectDashboard,
}

/// The route guard: a pure function of the requested view and the
/// authentication flag. No side effects beyond the returned decision.
pub fn resolve(requested: View, authenticated: bool) -> RouteDecision {
    if requested.requires_auth() && !authenticated {
        RouteDecision::RedirectLogin
    } else if !requested.requires_auth() && authenticated {
        RouteDecision::RedirectDashboard
    } else {
        RouteDecision::Allow
    }
}

/// Applies the guard and returns the view that should actually render.
pub fn navigate(requested: View, authenticated: bool) -> View {
    match resolve(requested, authenticated) {
        RouteDecision::Allow => requested,
        RouteDecision::RedirectLogin => View::Login,
        RouteDecision::RedirectDashboard => View::Dashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Anonymous sessions are pushed to login from every protected view.
    #[test]
    fn test_anonymous_redirects_to_login() {
        for view in [
            View::Dashboard,
            View::Income,
            View::Smoothing,
            View::Insights,
            View::Manual,
        ] {
            assert_eq!(resolve(view, false), RouteDecision::RedirectLogin);
            assert_eq!(navigate(view, false), View::Login);
        }
    }

    /// Authenticated sessions cannot land on login/register.
    #[test]
    fn test_authenticated_redirects_from_auth_views() {
        assert_eq!(resolve(View::Login, true), RouteDecision::RedirectDashboard);
        assert_eq!(
            resolve(View::Register, true),
            RouteDecision::RedirectDashboard
        );
        assert_eq!(navigate(View::Login, true), View::Dashboard);
    }

    /// Matching state and view pass through unchanged.
    #[test]
    fn test_allowed_routes() {
        assert_eq!(resolve(View::Login, false), RouteDecision::Allow);
        assert_eq!(resolve(View::Register, false), RouteDecision::Allow);
        assert_eq!(resolve(View::Dashboard, true), RouteDecision::Allow);
        assert_eq!(navigate(View::Insights, true), View::Insights);
    }
}
