use actix_web::{get, HttpResponse, Responder};
use serde::Serialize;

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
}

#[get("/")]
async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "Relais de scraping - Serveur opérationnel",
    })
}
