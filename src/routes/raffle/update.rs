use crate::db::postgres_service::PostgresService;
use crate::types::raffle::RRaffleUpdate;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::acting_user;
use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    data: web::Json<RRaffleUpdate>,
    tok: BearerAuth,
) -> ApiResult<entity::raffle::Model> {
    let user_id = acting_user(&tok)?;
    let raffle = db
        .update_raffle(path.into_inner(), user_id, data.into_inner())
        .await?;

    Ok(ApiResponse::Ok(raffle))
}
