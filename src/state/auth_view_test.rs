use super::*;
use crate::net::types::Role;

fn department_user() -> User {
    User {
        id: uuid::Uuid::new_v4(),
        name: "Asha".to_owned(),
        email: "asha@city.gov".to_owned(),
        role: Role::Department,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        department: None,
        profile_picture: None,
    }
}

#[test]
fn loading_while_initializing_even_with_idle_session() {
    let session = SessionState::default();
    let view = derive_auth_view(&session, true);
    assert!(view.is_loading);
    assert!(!view.is_authenticated);
}

#[test]
fn loading_while_fetch_outstanding_after_ready() {
    let mut session = SessionState::default();
    session.request_fetch();
    let view = derive_auth_view(&session, false);
    assert!(view.is_loading);
}

#[test]
fn authenticated_iff_user_present() {
    let mut session = SessionState::default();
    session.fetch_succeeded(department_user());
    let view = derive_auth_view(&session, false);
    assert!(view.is_authenticated);
    assert!(!view.is_loading);
    assert_eq!(view.user.map(|u| u.role), Some(Role::Department));
}

#[test]
fn fetch_failure_surfaces_error_and_leaves_unauthenticated() {
    let mut session = SessionState::default();
    session.request_fetch();
    session.fetch_failed("User not found");

    let view = derive_auth_view(&session, false);
    assert!(!view.is_authenticated);
    assert!(!view.is_loading);
    assert_eq!(view.error.as_deref(), Some("User not found"));
}

#[test]
fn clear_after_user_yields_absent_user() {
    let mut session = SessionState::default();
    session.fetch_succeeded(department_user());
    session.clear_user();

    let view = derive_auth_view(&session, false);
    assert!(view.user.is_none());
    assert!(!view.is_authenticated);
}
