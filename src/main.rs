use anyhow::Result;

use marquee::config::AppConfig;
use marquee::logging;

#[tokio::main]
async fn main() -> Result<()> {
    logging::setup_logging()?;

    let config = AppConfig::load()?;
    log::info!("starting marquee against {}", config.base_url);

    marquee::run(config).await
}
