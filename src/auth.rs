use crate::config::AppConfig;
use crate::models::Session;

/// RedirectTarget
///
/// The two fixed destinations a denied navigation can be sent to. The gate
/// emits the symbolic target; the shell resolves it to a concrete path through
/// the immutable AppConfig, so route tables never hard-code redirect paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// The session is not authenticated. Sign in first.
    Login,
    /// The session is authenticated but its effective role does not grant
    /// access to the requested view.
    Unauthorized,
}

impl RedirectTarget {
    /// Resolves the symbolic target to the configured navigation path.
    pub fn path<'a>(&self, config: &'a AppConfig) -> &'a str {
        match self {
            RedirectTarget::Login => &config.login_path,
            RedirectTarget::Unauthorized => &config.unauthorized_path,
        }
    }
}

/// Decision
///
/// The output of the authorization gate for a single navigation. Denial is a
/// designed control-flow outcome surfaced as a redirect, never an error: every
/// input maps to exactly one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Render the requested view.
    Allow,
    /// Replace the current history entry with the target path. Replacement
    /// (rather than a push) is required so that back-navigation after a
    /// redirect never re-displays the disallowed route.
    Redirect(RedirectTarget),
}

/// authorize
///
/// The authorization gate: decides whether the current session may view a
/// route requiring `required_role`.
///
/// The entire decision procedure:
/// 1. No required role: the route is public, every session is allowed.
/// 2. Unauthenticated session (flag false, or no user attached): redirect to
///    login. The flag is checked independently of the user so a stale user
///    record left behind after logout still counts as unauthenticated.
/// 3. Effective role (primary `role`, legacy `userType` fallback) compared to
///    the required role by exact, case-sensitive string equality — no
///    hierarchy, no wildcards. A mismatch, including a user carrying no role
///    at all, redirects to the unauthorized page.
/// 4. Otherwise: allow.
///
/// Pure and total: no side effects, no panics, deny-by-default on every
/// ambiguous input. This function is the single place in the shell where an
/// access-control comparison happens.
pub fn authorize(session: &Session, required_role: Option<&str>) -> Decision {
    let Some(required) = required_role else {
        return Decision::Allow;
    };

    if !session.is_authenticated {
        return Decision::Redirect(RedirectTarget::Login);
    }
    let Some(user) = session.user.as_ref() else {
        return Decision::Redirect(RedirectTarget::Login);
    };

    match user.effective_role() {
        Some(role) if role == required => Decision::Allow,
        _ => Decision::Redirect(RedirectTarget::Unauthorized),
    }
}
