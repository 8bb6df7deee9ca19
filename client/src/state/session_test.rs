use super::*;

#[test]
fn redirects_from_protected_pages() {
    assert!(needs_login_redirect(Some("/equipment")));
    assert!(needs_login_redirect(Some("/admin-requests")));
}

#[test]
fn stays_put_on_login_views() {
    assert!(!needs_login_redirect(Some("/login")));
    assert!(!needs_login_redirect(Some("/login/")));
    assert!(!needs_login_redirect(Some("/")));
}

#[test]
fn unknown_location_still_redirects() {
    assert!(needs_login_redirect(None));
}
