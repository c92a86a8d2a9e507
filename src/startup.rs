use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{
    dev::Server,
    middleware::Logger,
    web::{self},
    App, HttpServer,
};

use crate::{
    routes::{default_route, ping_route, scrape_route},
    services::PageFetcher,
};

pub fn run(listener: TcpListener, fetcher: PageFetcher) -> Result<Server, std::io::Error> {
    let fetcher = web::Data::new(fetcher);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            // Callers are edge functions and browser clients on arbitrary
            // origins, so every endpoint is wide open.
            .wrap(Cors::permissive())
            .service(default_route::root)
            .service(ping_route::ping)
            .service(scrape_route::scrape)
            .app_data(fetcher.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
