use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::acting_user;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[post("/{id}/decline")]
async fn decline(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    tok: BearerAuth,
) -> ApiResult<Response> {
    let user_id = acting_user(&tok)?;
    db.decline_invite(path.into_inner(), user_id).await?;

    Ok(ApiResponse::Ok(Response {
        message: "Invitation declined.".to_string(),
    }))
}
