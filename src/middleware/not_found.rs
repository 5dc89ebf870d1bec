use crate::utils::error::CustomError;
use actix_web::{HttpRequest, HttpResponse};

/// Fallback for requests that match no route.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, CustomError> {
    Err(CustomError::NotFoundError(format!(
        "Route {} {} does not exist",
        req.method(),
        req.path()
    )))
}
