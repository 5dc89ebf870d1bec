use crate::middleware::error_handler::json_config;
use crate::middleware::not_found::not_found;
use crate::post::post_index::post_routes;
use crate::utils::helpers::service_name;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Welcome to the blog posts API",
        "httpStatusCode": StatusCode::OK.as_u16(),
        "service": service_name(),
    }))
}

/// Every route of the API. Expects a `web::Data<dyn PostStore>` in app data.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.service(index);
    cfg.configure(post_routes);
    cfg.default_service(web::route().to(not_found));
}
