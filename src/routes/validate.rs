use actix_web::post;
use serde::{Deserialize, Serialize};

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {}

/// The bearer middleware already rejected anything invalid, so getting
/// here means the token is good.
#[post("")]
async fn validate(_req: actix_web::HttpRequest) -> ApiResult<Response> {
    Ok(ApiResponse::EmptyOk)
}
