use crate::constants::QR_LINK_VERSION;
use actix_web::{HttpResponse, Responder};
use serde_json::json;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": QR_LINK_VERSION,
    }))
}
