use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::ticket::SaleRow;
use crate::utils::webutils::acting_user;
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

/// Sales table for the admin panel. Vendors only get their own rows.
#[get("/{id}/sales")]
async fn sales(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    tok: BearerAuth,
) -> ApiResult<Vec<SaleRow>> {
    let user_id = acting_user(&tok)?;
    let rows = db.list_sales(path.into_inner(), user_id).await?;

    Ok(ApiResponse::Ok(rows))
}
