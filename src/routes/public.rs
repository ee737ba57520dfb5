use crate::models::RouteEntry;

/// Public Route Definitions
///
/// The routes every visitor may reach, authenticated or not. This set must
/// always include the configured redirect targets (login, unauthorized) and
/// the home path: the shell sends denied and unknown navigations here, and a
/// redirect target that is itself protected would dead-end.
pub fn public_routes() -> Vec<RouteEntry> {
    vec![
        // GET / — the portal landing page.
        RouteEntry::public("/", "Home"),
        // The sign-in form. Destination for every unauthenticated access to a
        // protected route.
        RouteEntry::public("/login", "Login"),
        // The access-denied page. Destination for authenticated sessions whose
        // role does not match the route's requirement.
        RouteEntry::public("/unauthorized", "Unauthorized"),
    ]
}
