use anyhow::Context;

use pokedex::config::AppConfig;
use pokedex::server;
use pokedex::shared::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logger::init_logging();

    let config = AppConfig::from_env().context("configuration is incomplete")?;
    server::run(config).await
}
