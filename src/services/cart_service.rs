use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::cart::AddToCartRequest,
    entity::cart_items::{ActiveModel as CartActive, Column as CartCol, Entity as CartItems},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::CartItem,
    state::AppState,
};

pub async fn list_cart(state: &AppState, user: &AuthUser) -> AppResult<Vec<CartItem>> {
    let items = CartItems::find()
        .filter(CartCol::UserId.eq(user.user_id))
        .order_by_desc(CartCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(CartItem::from)
        .collect();
    Ok(items)
}

pub async fn add_to_cart(
    state: &AppState,
    user: &AuthUser,
    payload: AddToCartRequest,
) -> AppResult<CartItem> {
    let room_type = payload.room_type.filter(|s| !s.trim().is_empty());
    let style = payload.style.filter(|s| !s.trim().is_empty());
    let (Some(room_type), Some(style), Some(price)) = (room_type, style, payload.price) else {
        return Err(AppError::BadRequest(
            "room_type, style, and price are required".into(),
        ));
    };
    if price <= 0 {
        return Err(AppError::BadRequest(
            "price must be greater than 0".into(),
        ));
    }

    let item = CartActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.user_id),
        room_type: Set(room_type),
        style: Set(style),
        price: Set(price),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::debug!(user_id = %user.user_id, item_id = %item.id, "cart item added");
    Ok(CartItem::from(item))
}

pub async fn remove_from_cart(state: &AppState, user: &AuthUser, id: Uuid) -> AppResult<()> {
    let result = CartItems::delete_many()
        .filter(CartCol::Id.eq(id))
        .filter(CartCol::UserId.eq(user.user_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Cart item not found".into()));
    }
    Ok(())
}

pub async fn clear_cart(state: &AppState, user: &AuthUser) -> AppResult<u64> {
    let result = CartItems::delete_many()
        .filter(CartCol::UserId.eq(user.user_id))
        .exec(&state.orm)
        .await?;
    tracing::debug!(user_id = %user.user_id, removed = result.rows_affected, "cart cleared");
    Ok(result.rows_affected)
}
