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
pub struct Response {
    pub message: String,
}

#[delete("/member/{id}")]
async fn remove_member(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    tok: BearerAuth,
) -> ApiResult<Response> {
    let user_id = acting_user(&tok)?;
    let membership_id = path.into_inner();
    db.remove_member(membership_id, user_id).await?;
    info!(%membership_id, "member removed");

    Ok(ApiResponse::Ok(Response {
        message: "Member removed and related invitations cleaned up.".to_string(),
    }))
}
