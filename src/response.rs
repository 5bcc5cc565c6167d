use serde::Serialize;
use utoipa::ToSchema;

/// `{ data, error }` envelope used by the cart and contexts endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }
}

/// `{ error }` body. `error: null` is the success shape for deletions.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub error: Option<String>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { error: None }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
