use crate::{
    api::{attendance, health},
    config::Config,
};
use actix_web::{HttpResponse, web};
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::resource("/health")
                    .route(web::get().to(health::health_check))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(
                        web::resource("")
                            .route(web::get().to(attendance::list_attendance))
                            .route(web::post().to(attendance::create_attendance))
                            .default_service(web::route().to(method_not_allowed)),
                    )
                    // /attendance/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::delete().to(attendance::delete_attendance))
                            .default_service(web::route().to(method_not_allowed)),
                    ),
            )
            .default_service(web::route().to(route_not_found)),
    );
}

/// The path matched but the verb is not supported there.
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(json!({
        "error": "Method not allowed"
    }))
}

/// Nothing matched; list what the API does serve.
pub async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "error": "Route not found",
        "routes": [
            "GET /api/health",
            "GET /api/attendance",
            "POST /api/attendance",
            "DELETE /api/attendance/{id}"
        ]
    }))
}
