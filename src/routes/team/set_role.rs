use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::RMemberRole;
use crate::utils::webutils::acting_user;
use actix_web::{patch, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

/// Promote a vendor to manager or demote a manager back to vendor.
#[patch("/member/{id}/role")]
async fn set_role(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    data: web::Json<RMemberRole>,
    tok: BearerAuth,
) -> ApiResult<entity::membership::Model> {
    let user_id = acting_user(&tok)?;
    let membership = db
        .set_member_role(path.into_inner(), user_id, data.role)
        .await?;

    Ok(ApiResponse::Ok(membership))
}
