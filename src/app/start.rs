use tokio::net::TcpListener;

use warbler_auth::signing_key;
use warbler_core::Core;
use warbler_server::State;

use crate::config::Config;

pub async fn migrate(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let core = Core::connect(&config.database_url).await?;
    core.migrate().await?;

    log::info!("migrations applied to {}", config.database_url);

    Ok(())
}

pub async fn start(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("starting");

    let core = Core::connect(&config.database_url).await?;
    core.migrate().await?;

    let state = State {
        core,
        key: signing_key(&config.secret_key),
    };

    let listener = TcpListener::bind(&config.bind).await?;

    warbler_server::start(listener, &config.static_dir, state).await
}
