use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized, http::header, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token;

/// Bearer middleware hook: the token must decode to a known user and the
/// secret half must match that user's stored hash.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(db) = req.app_data::<web::Data<Arc<PostgresService>>>() else {
        return Err((ErrorUnauthorized("Service unavailable"), req));
    };
    if token_valid(db, credentials.token()).await {
        Ok(req)
    } else {
        Err((ErrorUnauthorized("Invalid token"), req))
    }
}

pub async fn token_valid(db: &PostgresService, bearer: &str) -> bool {
    let Some((user_id, secret)) = token::extract_token_parts(bearer) else {
        return false;
    };
    let Ok(user) = db.get_user_by_id(&user_id).await else {
        return false;
    };
    token::verify(&secret, &user.auth_hash).unwrap_or(false)
}

/// Acting identity for handlers behind the bearer middleware. The
/// middleware already verified the secret, so only the id half matters.
pub fn acting_user(auth: &BearerAuth) -> Result<Uuid, AppError> {
    token::extract_token_parts(auth.token())
        .map(|(id, _)| id)
        .ok_or(AppError::Unauthorized)
}

/// Optional identity on public endpoints: a valid bearer token marks the
/// sale as made by that team member, anything else means anonymous.
pub async fn optional_identity(
    db: &PostgresService,
    req: &actix_web::HttpRequest,
) -> Option<Uuid> {
    let header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let bearer = header.strip_prefix("Bearer ")?;
    if token_valid(db, bearer).await {
        token::extract_token_parts(bearer).map(|(id, _)| id)
    } else {
        None
    }
}
