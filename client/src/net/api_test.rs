use super::*;

#[test]
fn base_url_defaults_when_unset_or_blank() {
    assert_eq!(resolve_base_url(None), "http://localhost:8080");
    assert_eq!(resolve_base_url(Some("  ")), "http://localhost:8080");
}

#[test]
fn base_url_uses_configured_value() {
    assert_eq!(resolve_base_url(Some("https://lending.school.test")), "https://lending.school.test");
}
