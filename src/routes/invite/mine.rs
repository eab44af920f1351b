use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::InviteSummary;
use crate::utils::webutils::acting_user;
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

/// Pending invitations addressed to the caller, for the dashboard.
#[get("")]
async fn mine(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    tok: BearerAuth,
) -> ApiResult<Vec<InviteSummary>> {
    let user_id = acting_user(&tok)?;
    let invites = db.list_my_pending_invites(user_id).await?;

    Ok(ApiResponse::Ok(invites))
}
