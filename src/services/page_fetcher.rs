use std::time::Duration;

use rand::Rng;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use scraper::{Html, Selector};
use thiserror::Error;

use crate::services::IdentityPool;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Static browser headers sent alongside the rotating User-Agent. The Referer
/// points at a search engine so the request looks like a click-through.
const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8"),
    ("accept-language", "fr-FR,fr;q=0.9,en-US;q=0.8,en;q=0.7"),
    ("accept-encoding", "gzip, deflate, br"),
    ("referer", "https://www.google.com/"),
    ("dnt", "1"),
    ("connection", "keep-alive"),
    ("upgrade-insecure-requests", "1"),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "cross-site"),
    ("sec-fetch-user", "?1"),
    ("cache-control", "max-age=0"),
];

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("URL manquante")]
    MissingUrl,
    #[error("Erreur de requête: {0}")]
    Request(String),
    #[error("Erreur: {0}")]
    Internal(String),
}

/// Everything the relay reports back about one fetched page.
#[derive(Debug)]
pub struct FetchedPage {
    pub html: String,
    pub title: Option<String>,
    pub status: u16,
    pub url: String,
    pub content_type: Option<String>,
}

pub struct PageFetcher {
    client: reqwest::Client,
    identities: IdentityPool,
    delay_min: Duration,
    delay_max: Duration,
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new(
            IdentityPool::default(),
            Duration::from_secs(1),
            Duration::from_secs(3),
        )
    }
}

impl PageFetcher {
    pub fn new(identities: IdentityPool, delay_min: Duration, delay_max: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build the outbound HTTP client.");

        PageFetcher {
            client,
            identities,
            delay_min,
            delay_max,
        }
    }

    /// Fetch `url` as a browser would: random pacing delay, spoofed headers,
    /// redirects followed. Upstream 4xx/5xx statuses count as failures and
    /// their code is not forwarded to the caller.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        if url.is_empty() {
            return Err(FetchError::MissingUrl);
        }

        tokio::time::sleep(self.pacing_delay()).await;

        let headers = self.build_headers()?;
        let response = self
            .client
            .get(url)
            .headers(headers)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(FetchedPage {
            title: extract_title(&html),
            html,
            status,
            url: final_url,
            content_type,
        })
    }

    // Drawn before the await so the thread-local rng is not held across it.
    fn pacing_delay(&self) -> Duration {
        let seconds = rand::thread_rng()
            .gen_range(self.delay_min.as_secs_f64()..=self.delay_max.as_secs_f64());
        Duration::from_secs_f64(seconds)
    }

    fn build_headers(&self) -> Result<HeaderMap, FetchError> {
        let mut headers = HeaderMap::new();
        for &(name, value) in BROWSER_HEADERS {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
        let user_agent = HeaderValue::from_str(self.identities.select())
            .map_err(|e| FetchError::Internal(e.to_string()))?;
        headers.insert(USER_AGENT, user_agent);
        Ok(headers)
    }
}

fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("title").unwrap();
    document
        .select(&title_selector)
        .next()
        .map(|tag| tag.text().collect())
}
