use std::time::{SystemTime, UNIX_EPOCH};

use actix_web::{get, HttpResponse, Responder};
use serde::Serialize;

#[derive(Serialize)]
struct PingResponse {
    status: &'static str,
    message: &'static str,
    timestamp: f64,
}

#[get("/ping")]
async fn ping() -> impl Responder {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or(0.0);

    HttpResponse::Ok().json(PingResponse {
        status: "ok",
        message: "Le serveur relais est opérationnel",
        timestamp,
    })
}
