use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, SqlErr};
use uuid::Uuid;

use crate::{
    dto::auth::{AuthResponse, Claims, SigninRequest, SignupRequest},
    entity::users::{self, ActiveModel as UserActive, Entity as Users},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::User,
    state::AppState,
};

pub const TOKEN_TTL_DAYS: i64 = 7;

fn required(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn credentials(email: Option<String>, password: Option<String>) -> AppResult<(String, String)> {
    // Passwords are taken verbatim; only emptiness is rejected.
    match (required(email), password.filter(|p| !p.is_empty())) {
        (Some(email), Some(password)) => Ok((email, password)),
        _ => Err(AppError::BadRequest(
            "Email and password are required".into(),
        )),
    }
}

/// HS256 token carrying `{id, email}`, valid for seven days.
pub fn issue_token(secret: &str, user: &User) -> AppResult<String> {
    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::days(TOKEN_TTL_DAYS))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        id: user.id,
        email: user.email.clone(),
        iat: now.timestamp() as usize,
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

async fn hash_password(password: String, cost: u32) -> AppResult<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

async fn verify_password(password: String, hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

pub async fn signup(state: &AppState, payload: SignupRequest) -> AppResult<AuthResponse> {
    let SignupRequest {
        email,
        password,
        full_name,
    } = payload;
    let (email, password) = credentials(email, password)?;

    let exist = Users::find()
        .filter(users::Column::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?;
    if exist.is_some() {
        return Err(AppError::BadRequest("User already exists".into()));
    }

    let password_hash = hash_password(password, state.config.bcrypt_cost).await?;

    let model = UserActive {
        id: Set(Uuid::new_v4()),
        email: Set(email),
        password_hash: Set(password_hash),
        full_name: Set(required(full_name)),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await
    .map_err(|err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::BadRequest("User already exists".into())
        }
        _ => AppError::OrmError(err),
    })?;

    let user = User::from(model);
    let token = issue_token(&state.config.jwt_secret, &user)?;
    tracing::info!(user_id = %user.id, "user signed up");
    Ok(AuthResponse::new(user, token))
}

pub async fn signin(state: &AppState, payload: SigninRequest) -> AppResult<AuthResponse> {
    let (email, password) = credentials(payload.email, payload.password)?;

    let model = Users::find()
        .filter(users::Column::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".into()))?;

    if !verify_password(password, model.password_hash.clone()).await? {
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    let user = User::from(model);
    let token = issue_token(&state.config.jwt_secret, &user)?;
    tracing::info!(user_id = %user.id, "user signed in");
    Ok(AuthResponse::new(user, token))
}

/// Resolve the token's user again; a token for a deleted user yields 404.
pub async fn session(state: &AppState, auth: &AuthUser) -> AppResult<AuthResponse> {
    let model = Users::find_by_id(auth.user_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(AuthResponse::new(User::from(model), auth.token.clone()))
}
