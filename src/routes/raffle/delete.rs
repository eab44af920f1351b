use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::acting_user;
use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[delete("/{id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    tok: BearerAuth,
) -> ApiResult<Response> {
    let user_id = acting_user(&tok)?;
    let raffle_id = path.into_inner();
    db.delete_raffle(raffle_id, user_id).await?;
    info!(%raffle_id, "raffle deleted");

    Ok(ApiResponse::NoContent)
}
