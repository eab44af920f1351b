use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::acting_user;
use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct Response {}

/// Inviter withdraws a pending invitation. Hard delete, so the same
/// email can be invited again later with a clean slate.
#[delete("/{id}")]
async fn cancel(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    tok: BearerAuth,
) -> ApiResult<Response> {
    let user_id = acting_user(&tok)?;
    db.cancel_invite(path.into_inner(), user_id).await?;

    Ok(ApiResponse::NoContent)
}
