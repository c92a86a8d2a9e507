use std::net::TcpListener;

use env_logger::Env;
use relay::{configuration::get_configuration, services::PageFetcher, startup::run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration()?;
    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    log::info!("Relay listening on {}", address);

    run(listener, PageFetcher::default())?.await?;

    Ok(())
}
