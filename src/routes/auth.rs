use axum::{Json, Router, extract::State, routing::{get, post}};

use crate::{
    dto::auth::{AuthResponse, SigninRequest, SignupRequest},
    error::AppResult,
    extract::AppJson,
    middleware::auth::AuthUser,
    response::{ErrorBody, MessageResponse},
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route("/session", get(session))
        .route("/signout", post(signout))
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User created and signed in", body = AuthResponse),
        (status = 400, description = "Missing fields or user already exists", body = ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SignupRequest>,
) -> AppResult<Json<AuthResponse>> {
    let resp = auth_service::signup(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/signin",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signed in", body = AuthResponse),
        (status = 400, description = "Missing fields", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn signin(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SigninRequest>,
) -> AppResult<Json<AuthResponse>> {
    let resp = auth_service::signin(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Current session", body = AuthResponse),
        (status = 401, description = "No token provided", body = ErrorBody),
        (status = 403, description = "Invalid token", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn session(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<AuthResponse>> {
    let resp = auth_service::session(&state, &user).await?;
    Ok(Json(resp))
}

/// Tokens are stateless; signing out is the client discarding its token.
#[utoipa::path(
    post,
    path = "/api/auth/signout",
    responses(
        (status = 200, description = "Signed out", body = MessageResponse)
    ),
    tag = "Auth"
)]
pub async fn signout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Signed out successfully".into(),
    })
}
