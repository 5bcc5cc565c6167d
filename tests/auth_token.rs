use axum::{
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use remodel_storefront_api::{
    error::AppError,
    middleware::auth::{bearer_token, decode_token},
    models::User,
    services::auth_service::{TOKEN_TTL_DAYS, issue_token},
};
use uuid::Uuid;

const SECRET: &str = "test-secret";

fn user() -> User {
    User {
        id: Uuid::new_v4(),
        email: "anna@globalhealth.com".into(),
        full_name: Some("Anna".into()),
    }
}

#[test]
fn issued_token_round_trips_identity_and_lasts_seven_days() {
    let user = user();
    let token = issue_token(SECRET, &user).expect("token");
    let claims = decode_token(&token, SECRET).expect("claims");

    assert_eq!(claims.id, user.id);
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.exp - claims.iat, (TOKEN_TTL_DAYS * 24 * 60 * 60) as usize);
}

#[test]
fn token_signed_with_another_secret_is_forbidden() {
    let token = issue_token("other-secret", &user()).expect("token");
    let err = decode_token(&token, SECRET).expect_err("must reject");
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
    assert_eq!(err.to_string(), "Invalid token");
}

#[test]
fn garbage_token_is_forbidden() {
    let err = decode_token("not-a-jwt", SECRET).expect_err("must reject");
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[test]
fn bearer_token_takes_second_part_of_header() {
    let mut headers = HeaderMap::new();
    assert_eq!(bearer_token(&headers), None);

    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
    assert_eq!(bearer_token(&headers), Some("abc.def"));

    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer"));
    assert_eq!(bearer_token(&headers), None);
}

#[test]
fn internal_errors_hide_their_cause() {
    let response = AppError::Internal(anyhow::anyhow!("connection refused")).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = AppError::Unauthorized("No token provided".into()).into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
