use super::*;

#[test]
fn user_profile_endpoint_formats_expected_path() {
    assert_eq!(user_profile_endpoint("u123"), "/api/users/u123/profile");
}

#[test]
fn session_endpoints_are_under_auth() {
    assert_eq!(CURRENT_USER_ENDPOINT, "/api/auth/me");
    assert_eq!(LOGOUT_ENDPOINT, "/api/auth/logout");
}
