use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub room_type: Option<String>,
    pub style: Option<String>,
    pub price: Option<i64>,
}
