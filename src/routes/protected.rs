use crate::models::RouteEntry;

/// HR Route Definitions
///
/// The views exclusively accessible to users with the 'hr' role: staff
/// directory, leave administration, and the management dashboard.
///
/// Access Control:
/// Every entry here carries `required_role = "hr"`, so the shell wraps each
/// one with the authorization gate before mounting. Role comparison is exact
/// and case-sensitive — there is no hierarchy granting HR access to
/// employee-only views or vice versa.
pub fn hr_routes() -> Vec<RouteEntry> {
    vec![
        // Management overview: headcount, pending leave approvals.
        RouteEntry::protected("/dashboard", "HrDashboard", "hr"),
        // The searchable employee directory.
        RouteEntry::protected("/employees", "EmployeeList", "hr"),
        // All leave requests across the company, for approval/rejection.
        RouteEntry::protected("/leave-requests", "LeaveRequestList", "hr"),
    ]
}

/// Employee Route Definitions
///
/// The views for users with the 'employee' role: their own leave history and
/// profile. Protected the same way as the HR set, just with a different
/// required role.
pub fn employee_routes() -> Vec<RouteEntry> {
    vec![
        // The signed-in employee's own leave requests.
        RouteEntry::protected("/my-leaves", "MyLeaves", "employee"),
        // The signed-in employee's profile page.
        RouteEntry::protected("/profile", "Profile", "employee"),
    ]
}
