/// Route Table Index
///
/// Organizes the portal's route definitions into security-segregated modules.
/// Each module contributes plain `RouteEntry` data — tagged records, not
/// behavior — and the shell applies the authorization wrapper generically to
/// every entry carrying a required role. This keeps access control visible at
/// the table level instead of scattered through view code.

/// Routes accessible to all users (anonymous included).
pub mod public;

/// Routes restricted to a specific effective role ('hr' or 'employee').
pub mod protected;

use crate::models::RouteEntry;
use std::collections::HashSet;

/// RouteTable
///
/// The validated, ordered list of route entries the shell dispatches against.
/// Construction is the single place duplicate paths are caught: the gate only
/// ever sees one entry at a time and cannot detect global configuration
/// errors, so the table refuses to exist with them.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// new
    ///
    /// Builds a table from the supplied entries, rejecting duplicate paths.
    /// A duplicate is a configuration error to be fixed at the source, not
    /// something the dispatcher should resolve by picking a winner silently.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, String> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.path.as_str()) {
                return Err(format!("duplicate route path: {}", entry.path));
            }
        }
        Ok(Self { entries })
    }

    /// from_json
    ///
    /// Builds a table from a JSON array of route entries. Route tables are
    /// configuration input, so deployments can supply them as data instead of
    /// recompiling.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let entries: Vec<RouteEntry> =
            serde_json::from_str(raw).map_err(|e| format!("invalid route table JSON: {e}"))?;
        Self::new(entries)
    }

    /// Looks up the entry for an exact path.
    pub fn find(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// The entries in table order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

/// default_table
///
/// Assembles the portal's standard route table from the security-segregated
/// modules. Infallible by construction: the static definitions carry no
/// duplicate paths, and the tests keep it that way.
pub fn default_table() -> RouteTable {
    let mut entries = public::public_routes();
    entries.extend(protected::hr_routes());
    entries.extend(protected::employee_routes());

    RouteTable::new(entries).expect("default route table must be valid")
}
