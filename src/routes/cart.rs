use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get},
};
use uuid::Uuid;

use crate::{
    dto::cart::AddToCartRequest,
    error::AppResult,
    extract::{AppJson, AppPath},
    middleware::auth::AuthUser,
    models::CartItem,
    response::{DataResponse, ErrorBody, StatusResponse},
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_list).post(add_to_cart).delete(clear_cart))
        .route("/{id}", delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart items for the current user, newest first", body = DataResponse<Vec<CartItem>>),
        (status = 401, description = "No token provided", body = ErrorBody),
        (status = 403, description = "Invalid token", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn cart_list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<CartItem>>>> {
    let items = cart_service::list_cart(&state, &user).await?;
    Ok(Json(DataResponse::ok(items)))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Cart item added", body = DataResponse<CartItem>),
        (status = 400, description = "Missing fields or non-positive price", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<AddToCartRequest>,
) -> AppResult<Json<DataResponse<CartItem>>> {
    let item = cart_service::add_to_cart(&state, &user, payload).await?;
    Ok(Json(DataResponse::ok(item)))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{id}",
    params(
        ("id" = Uuid, Path, description = "Cart item ID")
    ),
    responses(
        (status = 200, description = "Removed", body = StatusResponse),
        (status = 404, description = "Cart item not found", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<StatusResponse>> {
    cart_service::remove_from_cart(&state, &user, id).await?;
    Ok(Json(StatusResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart cleared", body = StatusResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<StatusResponse>> {
    cart_service::clear_cart(&state, &user).await?;
    Ok(Json(StatusResponse::ok()))
}
