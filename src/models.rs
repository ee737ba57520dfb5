use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// --- Core Identity & Session Schemas ---

/// User
///
/// Represents the authenticated user's canonical identity record as written by
/// the external login flow. Only the fields relevant to authorization are
/// modeled here; extra profile fields in the persisted record are ignored on
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    /// The user's primary identifier.
    pub email: String,
    /// The RBAC field: 'hr' or 'employee'. Newer records always carry it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Legacy alias for `role`. Older persisted records carry the role under
    /// the `userType` key; authorization falls back to it when `role` is
    /// absent.
    #[serde(rename = "userType", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

impl User {
    /// effective_role
    ///
    /// Resolves the role value used for authorization decisions: `role` when
    /// present, otherwise the legacy `userType` field. Returns `None` for a
    /// record carrying neither, which the gate treats as a role mismatch.
    pub fn effective_role(&self) -> Option<&str> {
        self.role.as_deref().or(self.user_type.as_deref())
    }
}

/// Session
///
/// The in-memory authentication state for this client.
///
/// Invariant: `is_authenticated == true` implies `user` is `Some`. The inverse
/// does not hold — a stale `user` left behind with `is_authenticated == false`
/// must be treated as unauthenticated, which the gate enforces by checking the
/// flag before the user.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub is_authenticated: bool,
    pub user: Option<User>,
}

impl Session {
    /// A logged-out session with no user attached. The state every session
    /// starts from before restoration, and reverts to on logout.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// An authenticated session for the given user. The only constructor that
    /// sets `is_authenticated`, keeping the session invariant by construction.
    pub fn authenticated(user: User) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
        }
    }
}

/// SessionRecord
///
/// The persisted session shape: the single serialized record written by the
/// external login flow under the well-known storage key. This layer only reads
/// and validates parseability of the record at startup.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionRecord {
    pub user: User,
    /// When the record was persisted. Informational only; this layer does not
    /// expire sessions (server-side enforcement is out of scope).
    #[ts(type = "string")]
    pub saved_at: DateTime<Utc>,
}

// --- Routing Schemas ---

/// RouteEntry
///
/// One row of the declarative route table: a navigable path, the name of the
/// view mounted there, and the role required to see it. Tables are plain data
/// supplied by configuration; all interpretation lives in the shell.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RouteEntry {
    /// Navigation path, unique across the table (validated by `RouteTable`).
    pub path: String,
    /// Identifier of the view the frontend mounts for this path.
    pub view: String,
    /// Role required to access this route. `None` means the route is public.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_role: Option<String>,
}

impl RouteEntry {
    /// A route anyone may visit.
    pub fn public(path: &str, view: &str) -> Self {
        Self {
            path: path.to_string(),
            view: view.to_string(),
            required_role: None,
        }
    }

    /// A route restricted to sessions whose effective role equals `role`.
    pub fn protected(path: &str, view: &str, role: &str) -> Self {
        Self {
            path: path.to_string(),
            view: view.to_string(),
            required_role: Some(role.to_string()),
        }
    }
}

// --- List-View Record Schemas ---
// Carried for the search/filter utilities only. CRUD business logic for these
// records lives outside this layer.

/// Employee
///
/// An employee directory row as the list views receive it from the backend.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
}

/// LeaveRequest
///
/// A leave request row as the list views receive it from the backend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LeaveRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    /// Denormalized for display and searching; the list views never join.
    pub employee_name: String,
    /// "annual" | "sick" | "unpaid" — free-form as far as this layer cares.
    pub leave_type: String,
    #[ts(type = "string")]
    pub start_date: NaiveDate,
    #[ts(type = "string")]
    pub end_date: NaiveDate,
    /// "pending" | "approved" | "rejected".
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
