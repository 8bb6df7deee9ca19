use super::*;

#[test]
fn badge_classes_match_status_colors() {
    assert_eq!(badge_class(RequestStatus::Pending), "badge bg-warning text-dark");
    assert_eq!(badge_class(RequestStatus::Approved), "badge bg-success");
    assert_eq!(badge_class(RequestStatus::Rejected), "badge bg-danger");
    assert_eq!(badge_class(RequestStatus::Returned), "badge bg-secondary");
}

#[test]
fn every_status_has_a_distinct_badge() {
    let mut classes: Vec<&str> = RequestStatus::ALL.into_iter().map(badge_class).collect();
    classes.sort_unstable();
    classes.dedup();
    assert_eq!(classes.len(), RequestStatus::ALL.len());
}
