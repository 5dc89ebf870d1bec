use actix_web::error::JsonPayloadError;
use actix_web::{Error, HttpRequest, web};

use crate::utils::error::CustomError;

/// Turns JSON extractor failures into the usual error envelope.
pub fn handle_json_error(err: JsonPayloadError, req: &HttpRequest) -> Error {
    log::warn!("Rejected body for {} {}: {}", req.method(), req.path(), err);
    CustomError::BadRequestError(err.to_string()).into()
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_error)
}
