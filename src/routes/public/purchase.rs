use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::ticket::RTicketPurchase;
use crate::utils::webutils::optional_identity;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Buy a number. Works without an account; when a team member's token
/// accompanies the request the sale is credited to them.
#[post("/raffle/{id}/ticket")]
async fn purchase(
    req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    data: web::Json<RTicketPurchase>,
) -> ApiResult<entity::ticket::Model> {
    let raffle_id = path.into_inner();
    let identity = optional_identity(&db, &req).await;

    let ticket = db
        .purchase_ticket(raffle_id, data.into_inner(), identity)
        .await?;
    info!(%raffle_id, number = ticket.number, "ticket sold");

    Ok(ApiResponse::Created(ticket))
}
