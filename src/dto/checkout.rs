use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutLogRequest {
    /// Number or numeric string.
    #[schema(value_type = Option<f64>)]
    pub total_price: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutLogResponse {
    pub success: bool,
    pub message: String,
}
