use chrono::Utc;

use crate::models::{Session, SessionRecord, User};
use crate::storage::StorageState;

/// SessionState
///
/// The process-wide session context. It is created logged-out, populated once
/// at startup by `restore`, and mutated only by the login/logout flow; the
/// authorization gate reads it and never writes it. The shell passes it
/// explicitly into every decision — there is no ambient global lookup.
#[derive(Debug, Default)]
pub struct SessionState {
    session: Session,
}

impl SessionState {
    /// A fresh, logged-out session context.
    pub fn new() -> Self {
        Self::default()
    }

    /// restore
    ///
    /// Attempts to rebuild the session from the persisted record.
    ///
    /// The restoration procedure:
    /// 1. No stored record: stay logged out.
    /// 2. Stored record parses as a `SessionRecord`: the session becomes
    ///    authenticated as that user. Validity here is parseability — this is
    ///    an advisory UX layer, and the server re-checks every request.
    /// 3. Stored record fails to parse: discard it (clear the store so the
    ///    next startup does not retry a known-bad record), log a warning, and
    ///    stay logged out.
    ///
    /// This path must never fail: a corrupt record degrades to a logged-out
    /// session, it does not take the shell down.
    pub async fn restore(&mut self, storage: &StorageState) {
        let Some(raw) = storage.load().await else {
            tracing::debug!("no persisted session record; starting logged out");
            return;
        };

        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) => {
                tracing::info!(user = %record.user.email, "session restored");
                self.session = Session::authenticated(record.user);
            }
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed session record");
                if let Err(e) = storage.clear().await {
                    tracing::warn!(error = %e, "failed to discard session record");
                }
            }
        }
    }

    /// login
    ///
    /// Authenticates the session as `user` and persists the record so the next
    /// startup can restore it. Invoked by the external login flow after the
    /// server has accepted the credentials; this layer never validates them.
    pub async fn login(&mut self, user: User, storage: &StorageState) -> Result<(), String> {
        let record = SessionRecord {
            user: user.clone(),
            saved_at: Utc::now(),
        };
        let raw = serde_json::to_string(&record)
            .map_err(|e| format!("failed to serialize session record: {e}"))?;
        storage.save(&raw).await?;

        self.session = Session::authenticated(user);
        Ok(())
    }

    /// logout
    ///
    /// Reverts to a logged-out session and removes the persisted record. The
    /// in-memory session is cleared even if the storage backend fails, so the
    /// UI never keeps acting authenticated after a logout.
    pub async fn logout(&mut self, storage: &StorageState) -> Result<(), String> {
        self.session = Session::logged_out();
        storage.clear().await
    }

    /// Read-only query: is the current session authenticated?
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    /// Read-only query: the current user, when authenticated.
    pub fn current_user(&self) -> Option<&User> {
        if self.session.is_authenticated {
            self.session.user.as_ref()
        } else {
            // A stale user on an unauthenticated session is not "current".
            None
        }
    }

    /// The full session value, as consumed by the authorization gate.
    pub fn session(&self) -> &Session {
        &self.session
    }
}
