pub mod default_route;
pub mod ping_route;
pub mod scrape_route;
