use super::*;
use crate::net::types::User;
use crate::state::auth_view::AuthView;

fn user_with_role(role: Role) -> User {
    User {
        id: uuid::Uuid::new_v4(),
        name: "Test User".to_owned(),
        email: "test@example.com".to_owned(),
        role,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        department: None,
        profile_picture: None,
    }
}

fn authenticated(role: Role) -> AuthView {
    AuthView {
        user: Some(user_with_role(role)),
        is_authenticated: true,
        is_loading: false,
        error: None,
    }
}

#[test]
fn loading_wins_regardless_of_user_and_role() {
    let mut view = authenticated(Role::Admin);
    view.is_loading = true;

    assert_eq!(route_decision(&view, None), RouteDecision::Loading);
    assert_eq!(
        route_decision(&view, Some(Role::Department)),
        RouteDecision::Loading
    );
}

#[test]
fn unauthenticated_redirects_to_login() {
    let view = AuthView::default();
    assert_eq!(route_decision(&view, None), RouteDecision::RedirectToLogin);
    assert_eq!(
        route_decision(&view, Some(Role::Department)),
        RouteDecision::RedirectToLogin
    );
}

#[test]
fn fetch_error_without_user_still_redirects() {
    let view = AuthView {
        error: Some("User not found".to_owned()),
        ..AuthView::default()
    };
    assert_eq!(route_decision(&view, None), RouteDecision::RedirectToLogin);
}

#[test]
fn citizen_requiring_department_is_denied_not_redirected() {
    let view = authenticated(Role::Citizen);
    assert_eq!(
        route_decision(&view, Some(Role::Department)),
        RouteDecision::AccessDenied
    );
}

#[test]
fn matching_role_allows() {
    let view = authenticated(Role::Department);
    assert_eq!(
        route_decision(&view, Some(Role::Department)),
        RouteDecision::Allow
    );
}

#[test]
fn no_required_role_allows_any_authenticated_user() {
    for role in [Role::Citizen, Role::Department, Role::Admin] {
        assert_eq!(route_decision(&authenticated(role), None), RouteDecision::Allow);
    }
}

#[test]
fn roles_are_matched_exactly_not_hierarchically() {
    // Admin does not satisfy a department requirement; the set is closed
    // and compared exactly, denial is the default.
    let view = authenticated(Role::Admin);
    assert_eq!(
        route_decision(&view, Some(Role::Department)),
        RouteDecision::AccessDenied
    );
}
