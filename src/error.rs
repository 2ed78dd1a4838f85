use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use jsonwebtoken::errors::Error as JsonWebTokenError;
use serde::Serialize;
use std::io;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("access denied, no token provided")]
    Unauthenticated,

    #[error("invalid token")]
    InvalidToken,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("access denied, admin privileges required")]
    Forbidden,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("io error: {0}")]
    IoError(#[from] io::Error),

    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("jwt error: {0}")]
    JWTError(#[from] JsonWebTokenError),

    #[error("config error: {0}")]
    ConfigError(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Unauthenticated | Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Error::InvalidToken | Error::Forbidden => StatusCode::FORBIDDEN,
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::IoError(_) | Error::JsonError(_) | Error::JWTError(_) | Error::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error = if status.is_server_error() {
            log::error!("request failed: {}", self);
            "internal server error".to_owned()
        } else {
            self.to_string()
        };
        HttpResponse::build(status).json(ErrorBody { error })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::NotFound("survey").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(Error::Unauthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(Error::InvalidToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(Error::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(Error::InvalidInput("title".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::Conflict("email".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(Error::ConfigError("port".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_server_errors_hide_details() {
        let resp = Error::ConfigError("JWT_SECRET leaked".into()).error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "internal server error");
    }

    #[actix_web::test]
    async fn test_client_errors_carry_message() {
        let resp = Error::NotFound("survey").error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "survey not found");
    }
}
