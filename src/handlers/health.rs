use actix_web::{HttpResponse, Result};
use chrono::Utc;
use serde_json::json;

pub async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "status": "OK",
        "message": "Chama notification API is running",
        "timestamp": Utc::now().to_rfc3339(),
    })))
}
