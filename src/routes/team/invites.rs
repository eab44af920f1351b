use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::acting_user;
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

/// Invitations for a raffle, filtered by what the caller is allowed to
/// see: owners get all of them, managers only vendor invites.
#[get("/{id}/team/invites")]
async fn invites(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    tok: BearerAuth,
) -> ApiResult<Vec<entity::invitation::Model>> {
    let user_id = acting_user(&tok)?;
    let rows = db
        .list_invites_for_raffle(path.into_inner(), user_id)
        .await?;

    Ok(ApiResponse::Ok(rows))
}
