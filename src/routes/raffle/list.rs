use crate::db::postgres_service::PostgresService;
use crate::types::raffle::RaffleWithRole;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::acting_user;
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

/// Raffles the caller owns or sells for.
#[get("")]
async fn list_mine(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    tok: BearerAuth,
) -> ApiResult<Vec<RaffleWithRole>> {
    let user_id = acting_user(&tok)?;
    let raffles = db.list_raffles_for_user(user_id).await?;

    Ok(ApiResponse::Ok(raffles))
}
