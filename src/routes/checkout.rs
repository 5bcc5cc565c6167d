use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::checkout::{CheckoutLogRequest, CheckoutLogResponse},
    error::AppResult,
    extract::AppJson,
    response::ErrorBody,
    services::checkout_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/log-checkout", post(log_checkout))
}

#[utoipa::path(
    post,
    path = "/log-checkout",
    request_body = CheckoutLogRequest,
    responses(
        (status = 200, description = "Checkout logged in the background", body = CheckoutLogResponse),
        (status = 400, description = "Total price is required", body = ErrorBody)
    ),
    tag = "Checkout"
)]
pub async fn log_checkout(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CheckoutLogRequest>,
) -> AppResult<Json<CheckoutLogResponse>> {
    let resp = checkout_service::log_checkout(&state, payload)?;
    Ok(Json(resp))
}
