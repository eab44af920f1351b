use crate::db::postgres_service::PostgresService;
use crate::types::raffle::{RRaffleCreate, RaffleCreateRes};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::acting_user;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::info;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RRaffleCreate>,
    tok: BearerAuth,
) -> ApiResult<RaffleCreateRes> {
    let owner_id = acting_user(&tok)?;
    let raffle_id = db.create_raffle(owner_id, data.into_inner()).await?;
    info!(%raffle_id, %owner_id, "raffle created");

    Ok(ApiResponse::Created(RaffleCreateRes {
        id: raffle_id,
        message: "Raffle created.".to_string(),
    }))
}
