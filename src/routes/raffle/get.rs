use crate::db::postgres_service::PostgresService;
use crate::types::raffle::RaffleWithRole;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::acting_user;
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

/// Raffle detail for a signed-in user, with the role they hold on it so
/// the dashboard knows which controls to show.
#[get("/{id}")]
async fn get_raffle(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    tok: BearerAuth,
) -> ApiResult<RaffleWithRole> {
    let user_id = acting_user(&tok)?;
    let raffle = db.get_raffle(path.into_inner()).await?;
    let my_role = db.resolve_role(&raffle, user_id).await?;

    Ok(ApiResponse::Ok(RaffleWithRole { raffle, my_role }))
}
