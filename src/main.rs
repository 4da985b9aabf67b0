use anyhow::{Error, Result};
use tracing::info;
use video_processor::{api::run_api_server, config::Config, telemetry::init_tracing};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;
    init_tracing(&config);

    info!(
        service = %config.service_name,
        port = config.server_port,
        "Configuration validated. Intake handler is ready to start."
    );

    run_api_server(config).await
}
