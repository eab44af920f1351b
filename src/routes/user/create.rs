use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserCreateRes};
use crate::types::error::AppError;
use crate::utils::token::{construct_token, encrypt, new_secret};
use actix_web::{post, web};
use std::sync::Arc;

/// Open signup. The access token is returned exactly once; only its hash
/// is kept.
#[post("/signup")]
async fn signup(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    if body.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    if !body.email.contains('@') {
        return Err(AppError::Validation("invalid email".into()));
    }

    let secret = new_secret();
    let encrypted =
        encrypt(&secret).map_err(|e| AppError::Internal(format!("hashing failed: {e}")))?;

    let user_id = db
        .create_user(DBUserCreate {
            name: body.name.trim().to_string(),
            email: body.email.clone(),
            auth_hash: encrypted,
        })
        .await?;

    Ok(ApiResponse::Created(UserCreateRes {
        id: user_id,
        token: construct_token(&user_id, &secret),
    }))
}
