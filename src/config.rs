use std::env;
use std::path::PathBuf;

/// Default debounce window for search inputs, in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// AppConfig
///
/// Holds the shell's entire configuration state. This struct is designed to be
/// immutable once loaded, ensuring every navigation decision sees the same
/// redirect targets and storage location for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Controls log formatting and fail-fast rules.
    pub env: Env,
    // Filesystem location of the persisted session record (the well-known
    // storage key this layer reads at startup).
    pub session_store_path: PathBuf,
    // Where unknown paths land. Must name a public route.
    pub home_path: String,
    // Redirect target for unauthenticated access to a protected route.
    pub login_path: String,
    // Redirect target for authenticated access with the wrong role.
    pub unauthorized_path: String,
    // Debounce window applied to search-triggered filtering, in milliseconds.
    pub search_debounce_ms: u64,
}

/// Env
///
/// Defines the runtime context, used to switch between development-friendly
/// defaults (local session file, pretty logs) and hardened production settings
/// (explicit storage path, JSON logs).
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides a safe, non-panicking AppConfig instance primarily used for
    /// test setup. This allows tests to instantiate the configuration without
    /// touching process environment variables.
    fn default() -> Self {
        Self {
            env: Env::Local,
            session_store_path: PathBuf::from(".hr-portal-session.json"),
            home_path: "/".to_string(),
            login_path: "/login".to_string(),
            unauthorized_path: "/unauthorized".to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the shell configuration at
    /// startup. It reads all parameters from environment variables and
    /// implements the **fail-fast** principle for values that must be explicit
    /// in production.
    ///
    /// # Panics
    /// Panics if `SESSION_STORE_PATH` is unset while `APP_ENV=production`.
    /// Starting without a known session location would silently log every user
    /// out on each deploy, so the process refuses to start instead.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        // Session Store Resolution
        // The production path is mandatory and must be explicitly set; local
        // development falls back to a file in the working directory.
        let session_store_path = match env {
            Env::Production => PathBuf::from(
                env::var("SESSION_STORE_PATH")
                    .expect("FATAL: SESSION_STORE_PATH must be set in production."),
            ),
            _ => env::var("SESSION_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".hr-portal-session.json")),
        };

        // The redirect targets rarely change, but remain overridable so the
        // shell can be embedded under a path prefix.
        let home_path = env::var("PORTAL_HOME_PATH").unwrap_or_else(|_| "/".to_string());
        let login_path = env::var("PORTAL_LOGIN_PATH").unwrap_or_else(|_| "/login".to_string());
        let unauthorized_path =
            env::var("PORTAL_UNAUTHORIZED_PATH").unwrap_or_else(|_| "/unauthorized".to_string());

        // Debounce Window Resolution
        // An unparsable override is a configuration mistake, not a fatal one:
        // log it and keep the default window.
        let search_debounce_ms = match env::var("SEARCH_DEBOUNCE_MS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    "SEARCH_DEBOUNCE_MS is not a valid integer; using default"
                );
                DEFAULT_SEARCH_DEBOUNCE_MS
            }),
            Err(_) => DEFAULT_SEARCH_DEBOUNCE_MS,
        };

        Self {
            env,
            session_store_path,
            home_path,
            login_path,
            unauthorized_path,
            search_debounce_ms,
        }
    }
}
