use crate::models::{Employee, LeaveRequest};

/// normalize
///
/// Canonicalizes a raw field value for comparison: an absent value becomes the
/// empty string, surrounding whitespace is trimmed, and the result is
/// lowercased. Internal whitespace is left untouched, so `"  Jane  Doe  "`
/// normalizes to `"jane  doe"`.
pub fn normalize(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_lowercase()
}

/// matches
///
/// Substring search over normalized values. An empty (or whitespace-only)
/// search term matches everything — the "no filter active" state of a search
/// box. Otherwise the normalized value must contain the normalized term as a
/// contiguous substring; matching is not token-based and not fuzzy.
pub fn matches(value: Option<&str>, search_term: &str) -> bool {
    let term = normalize(Some(search_term));
    if term.is_empty() {
        return true;
    }
    normalize(value).contains(&term)
}

/// Searchable
///
/// Implemented by list-view records to expose the fields a search box should
/// match against. Fields are optional because records may legitimately lack
/// them; an absent field simply never matches a non-empty term.
pub trait Searchable {
    fn search_fields(&self) -> Vec<Option<&str>>;
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(&self.name),
            Some(&self.email),
            Some(&self.department),
            Some(&self.position),
        ]
    }
}

impl Searchable for LeaveRequest {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(&self.employee_name),
            Some(&self.leave_type),
            Some(&self.status),
            self.reason.as_deref(),
        ]
    }
}

/// filter_list
///
/// Filters a record list down to the entries with at least one searchable
/// field matching the term. With an empty term every record passes, so the
/// list views can run the filter unconditionally.
pub fn filter_list<'a, T: Searchable>(items: &'a [T], search_term: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .into_iter()
                .any(|field| matches(field, search_term))
        })
        .collect()
}
