use hr_portal::models::{Employee, LeaveRequest};
use hr_portal::search::{filter_list, matches, normalize};
use uuid::Uuid;

#[test]
fn normalize_trims_and_lowercases() {
    // Internal spacing is preserved; only the edges are trimmed.
    assert_eq!(normalize(Some("  Jane  Doe  ")), "jane  doe");
    assert_eq!(normalize(Some("HR")), "hr");
    assert_eq!(normalize(Some("")), "");
}

#[test]
fn normalize_coerces_absent_to_empty() {
    assert_eq!(normalize(None), "");
}

#[test]
fn empty_term_matches_everything() {
    assert!(matches(Some("Jane Doe"), ""));
    assert!(matches(Some(""), ""));
    assert!(matches(None, ""));
    // A whitespace-only term normalizes to empty and also matches.
    assert!(matches(None, "   "));
}

#[test]
fn matching_is_normalized_substring_containment() {
    assert!(matches(Some("Jane Doe"), "jane"));
    assert!(matches(Some("Jane Doe"), "NE do"));
    assert!(matches(Some("  Jane Doe "), " JANE "));
    assert!(!matches(Some("Jane Doe"), "xyz"));
    // Substring, not token-based: the term must be contiguous.
    assert!(!matches(Some("Jane Doe"), "jane d oe"));
}

#[test]
fn absent_value_never_matches_a_real_term() {
    assert!(!matches(None, "jane"));
}

fn employees() -> Vec<Employee> {
    vec![
        Employee {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            department: "Engineering".to_string(),
            position: "Developer".to_string(),
        },
        Employee {
            id: Uuid::new_v4(),
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            department: "Finance".to_string(),
            position: "Analyst".to_string(),
        },
    ]
}

#[test]
fn filter_list_with_empty_term_returns_all() {
    let all = employees();
    assert_eq!(filter_list(&all, "").len(), all.len());
}

#[test]
fn filter_list_matches_any_searchable_field() {
    let all = employees();

    // By name.
    let by_name = filter_list(&all, "jane");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Jane Doe");

    // By department.
    let by_department = filter_list(&all, "finance");
    assert_eq!(by_department.len(), 1);
    assert_eq!(by_department[0].name, "John Smith");

    // No field matches.
    assert!(filter_list(&all, "marketing").is_empty());
}

#[test]
fn filter_list_searches_leave_request_fields() {
    let requests = vec![
        LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            employee_name: "Jane Doe".to_string(),
            leave_type: "annual".to_string(),
            start_date: "2026-08-10".parse().unwrap(),
            end_date: "2026-08-14".parse().unwrap(),
            status: "pending".to_string(),
            reason: Some("Summer holiday".to_string()),
        },
        LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            employee_name: "John Smith".to_string(),
            leave_type: "sick".to_string(),
            start_date: "2026-08-03".parse().unwrap(),
            end_date: "2026-08-04".parse().unwrap(),
            status: "approved".to_string(),
            reason: None,
        },
    ];

    let pending = filter_list(&requests, "PENDING");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].employee_name, "Jane Doe");

    // The optional reason field participates when present.
    let holiday = filter_list(&requests, "holiday");
    assert_eq!(holiday.len(), 1);

    // An absent reason never matches but also never panics.
    assert!(filter_list(&requests, "resignation").is_empty());
}
