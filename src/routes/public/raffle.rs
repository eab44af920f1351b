use crate::db::postgres_service::PostgresService;
use crate::types::raffle::TakenNumbersRes;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

/// Buyer-facing raffle page. No auth; anyone with the link can view.
#[get("/raffle/{id}")]
async fn get_raffle(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<entity::raffle::Model> {
    let raffle = db.get_raffle(path.into_inner()).await?;

    Ok(ApiResponse::Ok(raffle))
}

/// Which numbers are gone, for the pick-a-number grid.
#[get("/raffle/{id}/numbers")]
async fn numbers(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<TakenNumbersRes> {
    let numbers = db.taken_numbers(path.into_inner()).await?;

    Ok(ApiResponse::Ok(TakenNumbersRes { numbers }))
}
