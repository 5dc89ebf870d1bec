use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::utils::helpers::service_name;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("Bad Request: {0}")]
    BadRequestError(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("Not Found: {0}")]
    NotFoundError(String),

    #[error("Storage Unavailable: {0}")]
    StorageUnavailableError(String),
}

impl CustomError {
    /// Short machine-readable code carried in the `error` field of the body.
    pub fn code(&self) -> &'static str {
        match *self {
            CustomError::BadRequestError(..) => "BAD_REQUEST_ERROR",
            CustomError::ValidationError(..) => "VALIDATION_ERROR",
            CustomError::NotFoundError(..) => "NOT_FOUND_ERROR",
            CustomError::StorageUnavailableError(..) => "STORAGE_UNAVAILABLE_ERROR",
        }
    }
}

/// Wrap a driver error as `StorageUnavailableError`, logging it with `context`.
pub fn storage_error(context: &'static str) -> impl FnOnce(mongodb::error::Error) -> CustomError {
    move |err| {
        log::error!("{}: {}", context, err);
        CustomError::StorageUnavailableError(format!("{}: {}", context, err))
    }
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::BadRequestError(..) => StatusCode::BAD_REQUEST,
            CustomError::ValidationError(..) => StatusCode::BAD_REQUEST,
            CustomError::NotFoundError(..) => StatusCode::NOT_FOUND,
            CustomError::StorageUnavailableError(..) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_message = json!({
            "success": false,
            "message": self.to_string(),
            "httpStatusCode": self.status_code().as_u16(),
            "error": self.code(),
            "service": service_name(),
        });

        HttpResponse::build(self.status_code()).json(error_message)
    }
}
