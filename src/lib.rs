// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod debounce;
pub mod models;
pub mod navigation;
pub mod search;
pub mod session;
pub mod storage;

// Module for routing segregation (Public, HR, Employee).
pub mod routes;

use auth::{Decision, authorize};
use navigation::NavigationSurface;
use routes::RouteTable;
use session::SessionState;

// --- Public Re-exports ---

// Makes core state types easily accessible to the application entry point
// (main.rs) and embedding frontends.
pub use auth::RedirectTarget;
pub use config::AppConfig;
pub use models::{RouteEntry, Session, User};
pub use storage::{FileSessionStorage, MockSessionStorage, StorageState};

/// Shell
///
/// The portal's router/dispatcher: the single owner of the startup sequence
/// and of per-navigation authorization. It interprets the validated route
/// table as data — one generic "apply the gate if a role is required"
/// procedure for every entry — and drives the pluggable navigation surface
/// with the outcome.
///
/// All state the gate reads (the session context, the immutable config) is
/// held here and passed explicitly into each decision; nothing is resolved
/// through ambient globals.
pub struct Shell<N: NavigationSurface> {
    config: AppConfig,
    session: SessionState,
    storage: StorageState,
    navigator: N,
    table: RouteTable,
    started: bool,
}

impl<N: NavigationSurface> Shell<N> {
    /// mount
    ///
    /// Materializes the route table into a dispatchable shell. The table is
    /// already validated (duplicate paths are rejected at `RouteTable`
    /// construction), so mounting itself cannot fail; it wires the table to
    /// the session context, configuration, and navigation surface.
    pub fn mount(config: AppConfig, storage: StorageState, navigator: N, table: RouteTable) -> Self {
        Self {
            config,
            session: SessionState::new(),
            storage,
            navigator,
            table,
            started: false,
        }
    }

    /// start
    ///
    /// The explicit one-shot startup sequence, invoked exactly once by
    /// whoever owns application startup:
    /// 1. Attempt to restore the persisted session (a malformed or absent
    ///    record degrades to logged-out and never crashes dispatch).
    /// 2. Reset the viewport scroll to the top.
    ///
    /// Both effects are deliberately one-shot: subsequent calls are no-ops,
    /// and route changes never re-run them. In particular, scroll position is
    /// kept across navigations so list positions survive back-and-forth
    /// browsing.
    pub async fn start(&mut self) {
        if self.started {
            tracing::debug!("shell already started; ignoring");
            return;
        }
        self.started = true;

        self.session.restore(&self.storage).await;
        self.navigator.reset_scroll();
    }

    /// navigate
    ///
    /// Handles one user navigation: records the history entry, then resolves
    /// it through the authorization gate.
    ///
    /// Outcomes:
    /// - `Allow`: the entry's view is rendered.
    /// - `Redirect`: the just-pushed history entry is *replaced* with the
    ///   configured target path (login or unauthorized), so back-navigation
    ///   skips the disallowed route, and the target route is then dispatched.
    /// - Unknown path: replaced with the configured home path.
    ///
    /// Redirects are followed exactly one level. The targets are public in
    /// any well-formed table; if a misconfigured table denies a target too,
    /// the shell logs it and stops rather than looping.
    pub fn navigate(&mut self, path: &str) {
        self.navigator.push(path);
        self.dispatch(path, false);
    }

    fn dispatch(&mut self, path: &str, redirect_followed: bool) {
        let Some((view, required_role)) = self
            .table
            .find(path)
            .map(|entry| (entry.view.clone(), entry.required_role.clone()))
        else {
            tracing::warn!(%path, "unknown route; redirecting to home");
            let home = self.config.home_path.clone();
            self.navigator.replace(&home);
            if !redirect_followed && home != path {
                self.dispatch(&home, true);
            }
            return;
        };

        match authorize(self.session.session(), required_role.as_deref()) {
            Decision::Allow => {
                tracing::debug!(%path, %view, "navigation allowed");
                self.navigator.render(&view);
            }
            Decision::Redirect(target) => {
                let target_path = target.path(&self.config).to_string();
                tracing::info!(%path, target = %target_path, "navigation denied");
                self.navigator.replace(&target_path);

                if redirect_followed {
                    tracing::warn!(
                        %target_path,
                        "redirect target is itself denied; check the route table"
                    );
                    return;
                }
                self.dispatch(&target_path, true);
            }
        }
    }

    /// The session context, for read-only queries (`is_authenticated`,
    /// `current_user`).
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Mutable session access for the external login/logout flow. The shell
    /// itself never mutates the session.
    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    /// The storage backend shared with the login/logout flow.
    pub fn storage(&self) -> &StorageState {
        &self.storage
    }

    /// The navigation surface, primarily for tests inspecting outcomes.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Mutable navigation surface access, for surfaces that model user
    /// actions of their own (e.g. a recorded history stack driving `back`).
    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// The immutable shell configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
