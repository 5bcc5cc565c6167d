use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::User;

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct SigninRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Session {
    pub access_token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub user: User,
    pub session: Session,
}

impl AuthResponse {
    pub fn new(user: User, access_token: String) -> Self {
        Self {
            user,
            session: Session { access_token },
        }
    }
}

/// JWT payload. `id` and `email` identify the caller; `exp` is seven days after `iat`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub id: Uuid,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}
