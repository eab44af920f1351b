use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::acting_user;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[post("/{id}/accept")]
async fn accept(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    tok: BearerAuth,
) -> ApiResult<Response> {
    let user_id = acting_user(&tok)?;
    let invite_id = path.into_inner();
    db.accept_invite(invite_id, user_id).await?;
    info!(%invite_id, %user_id, "invitation accepted");

    Ok(ApiResponse::Ok(Response {
        message: "Invitation accepted, you are now on the team.".to_string(),
    }))
}
