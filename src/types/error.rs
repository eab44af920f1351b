use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("already exists")]
    AlreadyExists,
    #[error("not found")]
    NotFound,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,

    // team lifecycle outcomes, one per user-displayable kind
    #[error("invalid target")]
    InvalidTarget,
    #[error("already a member")]
    AlreadyMember,
    #[error("a pending invitation already exists")]
    DuplicatePending,
    #[error("no account exists for that email")]
    UnknownUser,
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("nothing to change")]
    NoOp,

    // infra things
    #[error(transparent)]
    Db(sea_orm::DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::NotFound => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::InvalidTarget => "INVALID_TARGET",
            Self::AlreadyMember => "ALREADY_MEMBER",
            Self::DuplicatePending => "DUPLICATE_PENDING",
            Self::UnknownUser => "UNKNOWN_USER",
            Self::InvalidState(_) => "INVALID_STATE",
            Self::NoOp => "NO_OP",
            Self::Db(_) => "STORE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn from_db(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadyExists | Self::AlreadyMember | Self::DuplicatePending => {
                StatusCode::CONFLICT
            }
            Self::NotFound | Self::UnknownUser => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::BadRequest(_) | Self::InvalidTarget | Self::NoOp => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidState(_) => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Db(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Store errors get a generic "try again"; everything else is
        // specific enough to show the user as-is.
        let message = match self {
            Self::Db(_) => "temporarily unavailable, try again".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message,
        })
    }
}
