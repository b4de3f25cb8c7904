use actix_web::{get, web, HttpResponse};
use chrono::{SecondsFormat, Utc};
use storefront_core::models::HealthStatus;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[get("/health")]
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: "Server is running".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
