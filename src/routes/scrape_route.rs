use actix_web::{http::StatusCode, post, web, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

use crate::services::{FetchError, PageFetcher};

#[derive(Deserialize)]
pub struct ScrapeRequest {
    url: String,
}

#[derive(Serialize)]
struct ScrapeResponse {
    html: String,
    title: Option<String>,
    status: u16,
    url: String,
    content_type: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

// Boundary translation: every fetch failure becomes a JSON error response,
// nothing propagates as an unhandled fault.
impl ResponseError for FetchError {
    fn status_code(&self) -> StatusCode {
        match self {
            FetchError::MissingUrl => StatusCode::BAD_REQUEST,
            FetchError::Request(_) | FetchError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.to_string(),
        })
    }
}

#[post("/scrape")]
async fn scrape(
    fetcher: web::Data<PageFetcher>,
    body: web::Json<ScrapeRequest>,
) -> Result<HttpResponse, FetchError> {
    let page = fetcher.fetch(&body.url).await.map_err(|e| {
        log::error!("Scrape of {:?} failed: {}", body.url, e);
        e
    })?;

    log::info!(
        "Scraped {} | status {} | {} bytes",
        page.url,
        page.status,
        page.html.len()
    );

    Ok(HttpResponse::Ok().json(ScrapeResponse {
        html: page.html,
        title: page.title,
        status: page.status,
        url: page.url,
        content_type: page.content_type,
    }))
}
