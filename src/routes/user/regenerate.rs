use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRegenerateTokenRes;
use crate::utils::token::construct_token;
use crate::utils::webutils::acting_user;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

/// Rotate the caller's access token. The old token stops working
/// immediately.
#[post("")]
async fn regenerate(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
) -> ApiResult<UserRegenerateTokenRes> {
    let user_id = acting_user(&auth)?;
    let secret = db.regenerate_user_token(&user_id).await?;

    Ok(ApiResponse::Ok(UserRegenerateTokenRes {
        token: construct_token(&user_id, &secret),
    }))
}
