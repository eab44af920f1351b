use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::MemberWithEmail;
use crate::utils::webutils::acting_user;
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

#[get("/{id}/team")]
async fn members(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    tok: BearerAuth,
) -> ApiResult<Vec<MemberWithEmail>> {
    let user_id = acting_user(&tok)?;
    let rows = db
        .list_members_with_email(path.into_inner(), user_id)
        .await?;

    Ok(ApiResponse::Ok(rows))
}
