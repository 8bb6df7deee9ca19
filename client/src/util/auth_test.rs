use super::*;

fn signed_in() -> Session {
    Session {
        token: Some("tok-1".to_owned()),
        username: Some("jdoe".to_owned()),
        ..Session::default()
    }
}

#[test]
fn should_not_redirect_before_restore() {
    assert!(!should_redirect_unauth(false, &Session::anonymous()));
}

#[test]
fn should_redirect_anonymous_after_restore() {
    assert!(should_redirect_unauth(true, &Session::anonymous()));
}

#[test]
fn should_not_redirect_when_logged_in() {
    assert!(!should_redirect_unauth(true, &signed_in()));
}

#[test]
fn token_without_username_still_redirects() {
    let session = Session { username: None, ..signed_in() };
    assert!(should_redirect_unauth(true, &session));
}
