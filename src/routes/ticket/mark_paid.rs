use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::acting_user;
use actix_web::{patch, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

#[patch("/{id}/paid")]
async fn mark_paid(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    tok: BearerAuth,
) -> ApiResult<entity::ticket::Model> {
    let user_id = acting_user(&tok)?;
    let ticket = db.mark_ticket_paid(path.into_inner(), user_id).await?;

    Ok(ApiResponse::Ok(ticket))
}
